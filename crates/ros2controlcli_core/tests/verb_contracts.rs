use std::sync::Mutex;

use ros2controlcli_core::controller::ManagerFuture;
use ros2controlcli_core::error::{CoreError, ErrorKind};
use ros2controlcli_core::lifecycle::{State, ALL_STATES};
use ros2controlcli_core::verb::{list_controllers, load_controller, set_controller_state, ListFilter};
use ros2controlcli_core::{
    ControllerManager, ControllerSnapshot, LoadOperation, Outcome, Strictness, SwitchRequest,
    TargetState,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    List,
    Configure(String),
    Switch(SwitchRequest),
    Load(LoadOperation, String),
}

struct FakeManager {
    controllers: Result<Vec<ControllerSnapshot>, CoreError>,
    ok: bool,
    calls: Mutex<Vec<Call>>,
}

impl FakeManager {
    fn with(controllers: &[(&str, &str)], ok: bool) -> Self {
        Self {
            controllers: Ok(controllers
                .iter()
                .map(|(name, state)| ControllerSnapshot::new(*name, "test/Controller", *state))
                .collect()),
            ok,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn mutating_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| *c != Call::List)
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

impl ControllerManager for FakeManager {
    fn list_controllers(&self) -> ManagerFuture<'_, Vec<ControllerSnapshot>> {
        self.record(Call::List);
        let reply = self.controllers.clone();
        Box::pin(async move { reply })
    }

    fn configure_controller<'a>(&'a self, name: &'a str) -> ManagerFuture<'a, Outcome> {
        self.record(Call::Configure(name.to_string()));
        let ok = self.ok;
        Box::pin(async move { Ok(Outcome { ok }) })
    }

    fn switch_controllers(&self, request: SwitchRequest) -> ManagerFuture<'_, Outcome> {
        self.record(Call::Switch(request));
        let ok = self.ok;
        Box::pin(async move { Ok(Outcome { ok }) })
    }

    fn load_controller<'a>(
        &'a self,
        operation: LoadOperation,
        name: &'a str,
    ) -> ManagerFuture<'a, Outcome> {
        self.record(Call::Load(operation, name.to_string()));
        let ok = self.ok;
        Box::pin(async move { Ok(Outcome { ok }) })
    }
}

#[tokio::test]
async fn missing_controller_is_not_loaded_for_every_target() {
    for target in TargetState::ALL {
        let manager = FakeManager::with(&[("other", "active")], true);
        let err = set_controller_state(&manager, "arm", target)
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::NotLoaded);
        assert_eq!(err.message(), "controller arm does not seem to be loaded");
        assert_eq!(manager.calls(), vec![Call::List]);
    }
}

#[tokio::test]
async fn illegal_pairs_are_rejected_locally() {
    let mut labels: Vec<&str> = ALL_STATES.iter().map(|s| s.label()).collect();
    labels.push("configured");
    labels.push("something_else");

    for target in TargetState::ALL {
        for label in &labels {
            if State::from_label(label) == Some(target.required_state()) {
                continue;
            }
            let manager = FakeManager::with(&[("arm", label)], true);
            let err = set_controller_state(&manager, "arm", target)
                .await
                .unwrap_err();

            assert_eq!(err.kind, ErrorKind::InvalidTransition, "{label} -> {target}");
            assert!(err.message().contains(label), "{}", err.message());
            assert!(
                err.message().contains(target.required_state().label()),
                "{}",
                err.message()
            );
            assert!(manager.mutating_calls().is_empty());
        }
    }
}

#[tokio::test]
async fn near_miss_labels_do_not_satisfy_the_guard() {
    let cases = [
        (" ACTIVE ", TargetState::Stop),
        ("Active", TargetState::Stop),
        ("INACTIVE", TargetState::Start),
        ("unconfigured ", TargetState::Configure),
    ];
    for (label, target) in cases {
        let manager = FakeManager::with(&[("arm", label)], true);
        let err = set_controller_state(&manager, "arm", target)
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::InvalidTransition, "{label:?} -> {target}");
        assert!(err.message().contains(label), "{}", err.message());
        assert!(manager.mutating_calls().is_empty());
    }
}

#[tokio::test]
async fn configure_issues_exactly_one_configure_call() {
    let manager = FakeManager::with(&[("arm", "unconfigured")], true);
    let msg = set_controller_state(&manager, "arm", TargetState::Configure)
        .await
        .unwrap();

    assert_eq!(msg, "successfully configured arm");
    assert_eq!(
        manager.calls(),
        vec![Call::List, Call::Configure("arm".to_string())]
    );
}

#[tokio::test]
async fn configure_rejection_points_at_manager_logs() {
    let manager = FakeManager::with(&[("arm", "unconfigured")], false);
    let err = set_controller_state(&manager, "arm", TargetState::Configure)
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::OperationRejected);
    assert_eq!(
        err.message(),
        "Error configuring controller, check controller_manager logs"
    );
    assert_eq!(manager.mutating_calls().len(), 1);
}

#[tokio::test]
async fn start_switches_with_controller_in_activate_set() {
    let manager = FakeManager::with(&[("arm", "inactive")], true);
    let msg = set_controller_state(&manager, "arm", TargetState::Start)
        .await
        .unwrap();
    assert_eq!(msg, "successfully started arm");

    let calls = manager.mutating_calls();
    assert_eq!(calls.len(), 1);
    let Call::Switch(request) = &calls[0] else {
        panic!("expected a switch call, got {calls:?}");
    };
    assert_eq!(request.activate, vec!["arm".to_string()]);
    assert!(request.deactivate.is_empty());
    assert_eq!(request.strictness, Strictness::Strict);
    assert_eq!(request.timeout.as_secs_f64(), 5.0);
}

#[tokio::test]
async fn stop_switches_with_controller_in_deactivate_set() {
    let manager = FakeManager::with(&[("arm", "active")], true);
    let msg = set_controller_state(&manager, "arm", TargetState::Stop)
        .await
        .unwrap();
    assert_eq!(msg, "successfully stopped arm");

    let calls = manager.mutating_calls();
    let [Call::Switch(request)] = calls.as_slice() else {
        panic!("expected a single switch call, got {calls:?}");
    };
    assert!(request.activate.is_empty());
    assert_eq!(request.deactivate, vec!["arm".to_string()]);
    assert_eq!(request.strictness, Strictness::Strict);
    assert_eq!(request.timeout.as_secs_f64(), 5.0);
}

#[tokio::test]
async fn rejected_switch_reports_generic_diagnostic() {
    let manager = FakeManager::with(&[("arm", "active")], false);
    let err = set_controller_state(&manager, "arm", TargetState::Stop)
        .await
        .unwrap_err();
    assert_eq!(
        err.message(),
        "Error stopping controller, check controller_manager logs"
    );
}

#[tokio::test]
async fn list_failure_is_surfaced_unchanged() {
    let failure = CoreError::service_unavailable("/controller_manager/list_controllers");
    let manager = FakeManager {
        controllers: Err(failure.clone()),
        ok: true,
        calls: Mutex::new(Vec::new()),
    };

    let err = set_controller_state(&manager, "arm", TargetState::Start)
        .await
        .unwrap_err();
    assert_eq!(err, failure);
    assert_eq!(manager.calls(), vec![Call::List]);
}

#[tokio::test]
async fn load_verbs_map_ok_flag() {
    let manager = FakeManager::with(&[], true);
    let msg = load_controller(&manager, LoadOperation::LoadAndStart, "arm")
        .await
        .unwrap();
    assert_eq!(msg, "successfully loaded and started arm");
    assert_eq!(
        manager.calls(),
        vec![Call::Load(LoadOperation::LoadAndStart, "arm".to_string())]
    );

    let manager = FakeManager::with(&[], false);
    let err = load_controller(&manager, LoadOperation::ConfigureAndStart, "arm")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::OperationRejected);
    assert_eq!(
        err.message(),
        "Error configuring and starting controller, check controller_manager logs"
    );
}

#[tokio::test]
async fn list_renders_sorted_aligned_rows() {
    let manager = FakeManager::with(
        &[
            ("wheel_ctrl", "active"),
            ("arm", "inactive"),
            ("broken", "finalized"),
        ],
        true,
    );

    let all = list_controllers(&manager, ListFilter::All).await.unwrap();
    let lines: Vec<_> = all.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("arm         test/Controller  inactive"));
    assert!(lines[2].starts_with("wheel_ctrl"));

    let loaded = list_controllers(&manager, ListFilter::LoadedOnly)
        .await
        .unwrap();
    assert!(!loaded.contains("broken"));
    assert_eq!(loaded.lines().count(), 2);
}
