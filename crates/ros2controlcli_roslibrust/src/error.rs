use ros2controlcli_core::error::{CoreError, Severity};

/// Emit `err` at the tracing level matching its severity.
pub fn log_core_error(err: &CoreError) {
    let (kind, domain, payload) = (&err.kind, &err.domain, &err.payload);
    match err.severity {
        Severity::Trace => tracing::trace!(?kind, ?domain, ?payload, "{err}"),
        Severity::Debug => tracing::debug!(?kind, ?domain, ?payload, "{err}"),
        Severity::Info => tracing::info!(?kind, ?domain, ?payload, "{err}"),
        Severity::Warn => tracing::warn!(?kind, ?domain, ?payload, "{err}"),
        Severity::Error | Severity::Fatal => {
            tracing::error!(?kind, ?domain, ?payload, "{err}")
        }
    }
}
