use std::env;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use ros2controlcli::config::{Command, Config, StateArg, DEFAULT_BRIDGE_URL};
use ros2controlcli_core::error::ErrorKind;

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().expect("lock")
}

fn parse(args: &[&str]) -> Config {
    Config::from_args_iter(args.iter().copied())
        .expect("argv should parse")
        .expect("config should validate")
}

#[test]
fn set_state_defaults_to_root_manager() {
    let _guard = env_lock();
    env::remove_var("ROS2CONTROLCLI_BRIDGE_URL");
    env::remove_var("ROS2CONTROLCLI_SERVICE_TIMEOUT");

    let config = parse(&["bin", "set-controller-state", "arm", "start"]);
    assert_eq!(config.controller_manager, "/controller_manager");
    assert_eq!(config.bridge_url, DEFAULT_BRIDGE_URL);
    assert_eq!(config.service_timeout, Duration::from_secs(2));
    assert!(!config.include_hidden_nodes);
    assert_eq!(
        config.command,
        Command::SetControllerState {
            controller_name: "arm".to_string(),
            state: StateArg::Start,
        }
    );
}

#[test]
fn manager_option_is_normalized() {
    let _guard = env_lock();
    let config = parse(&["bin", "list-controllers", "-c", "robot/cm/", "--loaded-only"]);
    assert_eq!(config.controller_manager, "/robot/cm");
    assert_eq!(config.command, Command::ListControllers { loaded_only: true });
}

#[test]
fn state_is_restricted_to_known_targets() {
    let _guard = env_lock();
    let err = Config::from_args_iter(["bin", "set-controller-state", "arm", "activate"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
}

#[test]
fn hidden_manager_requires_flag() {
    let _guard = env_lock();
    let err = Config::from_args_iter(["bin", "load-and-start", "arm", "-c", "/_cm"])
        .expect("argv should parse")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
    assert!(err.message().contains("--include-hidden-nodes"));

    let config = parse(&["bin", "load-and-start", "arm", "-c", "/_cm", "--include-hidden-nodes"]);
    assert_eq!(config.controller_manager, "/_cm");
}

#[test]
fn env_overrides_bridge_and_timeout() {
    let _guard = env_lock();
    env::set_var("ROS2CONTROLCLI_BRIDGE_URL", "ws://robot:9090");
    env::set_var("ROS2CONTROLCLI_SERVICE_TIMEOUT", "0.5");

    let config = parse(&["bin", "configure-and-start", "arm"]);
    assert_eq!(config.bridge_url, "ws://robot:9090");
    assert_eq!(config.service_timeout, Duration::from_millis(500));

    env::remove_var("ROS2CONTROLCLI_BRIDGE_URL");
    env::remove_var("ROS2CONTROLCLI_SERVICE_TIMEOUT");
}

#[test]
fn non_positive_timeout_is_rejected() {
    let _guard = env_lock();
    env::remove_var("ROS2CONTROLCLI_SERVICE_TIMEOUT");
    let err = Config::from_args_iter(["bin", "list-controllers", "--service-timeout", "0"])
        .expect("argv should parse")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
}

#[test]
fn oversized_timeout_is_rejected() {
    let _guard = env_lock();
    env::remove_var("ROS2CONTROLCLI_SERVICE_TIMEOUT");
    let err = Config::from_args_iter(["bin", "list-controllers", "--service-timeout", "1e300"])
        .expect("argv should parse")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
    assert!(err.message().contains("out of range"));

    env::set_var("ROS2CONTROLCLI_SERVICE_TIMEOUT", "1e300");
    let err = Config::from_args_iter(["bin", "list-controllers"])
        .expect("argv should parse")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
    env::remove_var("ROS2CONTROLCLI_SERVICE_TIMEOUT");
}
