use std::ffi::OsString;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use ros2controlcli_core::error::{CoreError, Domain, ErrorKind, Payload, Result};
use ros2controlcli_core::TargetState;
use ros2controlcli_roslibrust::services::{normalize_manager, DEFAULT_CONTROLLER_MANAGER};

pub const DEFAULT_BRIDGE_URL: &str = "ws://localhost:9090";
pub const DEFAULT_SERVICE_TIMEOUT_SECS: f64 = 2.0;

/// Command line surface.
#[derive(Debug, Parser)]
#[command(
    name = "ros2controlcli",
    version,
    about = "Load, configure, start and stop ros2_control controllers"
)]
pub struct Cli {
    /// Name of the controller manager ROS node
    #[arg(
        short = 'c',
        long = "controller-manager",
        default_value = DEFAULT_CONTROLLER_MANAGER,
        global = true
    )]
    pub controller_manager: String,

    /// Consider hidden nodes as well
    #[arg(long, global = true)]
    pub include_hidden_nodes: bool,

    /// rosbridge websocket URL
    #[arg(
        long,
        env = "ROS2CONTROLCLI_BRIDGE_URL",
        default_value = DEFAULT_BRIDGE_URL,
        global = true
    )]
    pub bridge_url: String,

    /// Seconds to wait for a manager service to become available
    #[arg(
        long,
        env = "ROS2CONTROLCLI_SERVICE_TIMEOUT",
        default_value_t = DEFAULT_SERVICE_TIMEOUT_SECS,
        global = true
    )]
    pub service_timeout: f64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Adjust the state of the controller
    SetControllerState {
        /// Name of the controller to be changed
        controller_name: String,
        /// State in which the controller should be changed to
        #[arg(value_enum)]
        state: StateArg,
    },
    /// Output the list of loaded controllers, their type and status
    ListControllers {
        /// Only show controllers in a loaded state
        #[arg(long)]
        loaded_only: bool,
    },
    /// Load a controller and configure it
    LoadAndConfigure { controller_name: String },
    /// Load a controller and start it
    LoadAndStart { controller_name: String },
    /// Configure a loaded controller and start it
    ConfigureAndStart { controller_name: String },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StateArg {
    Configure,
    Start,
    Stop,
}

impl From<StateArg> for TargetState {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Configure => TargetState::Configure,
            StateArg::Start => TargetState::Start,
            StateArg::Stop => TargetState::Stop,
        }
    }
}

/// Validated, resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub controller_manager: String,
    pub include_hidden_nodes: bool,
    pub bridge_url: String,
    pub service_timeout: Duration,
    pub command: Command,
}

impl Config {
    /// Parse argv (first item is the program name) and validate it.
    ///
    /// Help/version/usage errors are returned as `clap::Error` so callers can `exit()` them.
    pub fn from_args_iter<I, S>(iter: I) -> std::result::Result<Result<Self>, clap::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone,
    {
        Cli::try_parse_from(iter).map(Self::from_cli)
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        let controller_manager = normalize_manager(&cli.controller_manager);
        if is_hidden_node(&controller_manager) && !cli.include_hidden_nodes {
            return Err(invalid_argument(
                "controller-manager",
                format!(
                    "controller manager {controller_manager} is a hidden node, pass --include-hidden-nodes to use it"
                ),
            ));
        }

        if !cli.service_timeout.is_finite() || cli.service_timeout <= 0.0 {
            return Err(invalid_argument(
                "service-timeout",
                format!(
                    "service timeout must be a positive number of seconds, got {}",
                    cli.service_timeout
                ),
            ));
        }

        let service_timeout = Duration::try_from_secs_f64(cli.service_timeout).map_err(|_| {
            invalid_argument(
                "service-timeout",
                format!(
                    "service timeout of {} seconds is out of range",
                    cli.service_timeout
                ),
            )
        })?;

        Ok(Self {
            controller_manager,
            include_hidden_nodes: cli.include_hidden_nodes,
            bridge_url: cli.bridge_url,
            service_timeout,
            command: cli.command,
        })
    }
}

/// ROS 2 hides nodes whose base name starts with an underscore.
pub fn is_hidden_node(name: &str) -> bool {
    name.rsplit('/')
        .find(|segment| !segment.is_empty())
        .is_some_and(|base| base.starts_with('_'))
}

fn invalid_argument(option: &'static str, message: String) -> CoreError {
    CoreError::warn()
        .domain(Domain::Config)
        .kind(ErrorKind::InvalidArgument)
        .msg(message)
        .payload(Payload::Context {
            key: "option",
            value: option.into(),
        })
        .build()
}
