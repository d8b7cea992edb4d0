use clap::CommandFactory;

use super::*;

#[test]
fn every_flag_reads_its_env_var() {
    let command = Cli::command();
    let bindings: Vec<_> = command
        .get_arguments()
        .filter_map(|arg| Some((arg.get_id().as_str(), arg.get_env()?.to_str()?)))
        .collect();
    assert_eq!(
        bindings,
        vec![
            ("server_url", "PYCHAT_SERVER_URL"),
            ("session_cookie", "PYCHAT_SESSION_COOKIE"),
            ("recipient_id", "PYCHAT_RECIPIENT_ID"),
            ("typing_timeout_ms", "PYCHAT_TYPING_TIMEOUT_MS"),
            ("connect_timeout_secs", "PYCHAT_CONNECT_TIMEOUT_SECS"),
        ]
    );
}

#[test]
fn flags_override_config() {
    let cli = Cli::try_parse_from([
        "pychat",
        "--server-url",
        "https://chat.example",
        "--recipient-id",
        "7",
        "--typing-timeout-ms",
        "250",
        "--connect-timeout-secs",
        "3",
    ])
    .unwrap();
    let config = cli.apply(ClientConfig::default());
    assert_eq!(config.server_url, "https://chat.example");
    assert_eq!(config.recipient_id, "7");
    assert_eq!(config.typing_timeout, Duration::from_millis(250));
    assert_eq!(config.connect_timeout, Duration::from_secs(3));
}

#[test]
fn non_numeric_timeout_is_rejected() {
    assert!(Cli::try_parse_from(["pychat", "--typing-timeout-ms", "soon"]).is_err());
}
