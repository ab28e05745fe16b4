use std::time::Duration;

use satcheck_common::config::Config;
use satcheck_common::outcome::FailureCount;
use satcheck_common::verbosity::Verbosity;
use satcheck_core::runner;

use crate::fakes::{FakeTftp, closed_ports, listening_ports, sha256_hex, toolbox};

fn remote_config() -> Config {
    let mut cfg: Config = Config::remote();
    cfg.connect_timeout = Duration::from_millis(500);
    cfg.verbosity = Verbosity::new(3);
    cfg
}

/// Nothing answers on any required port, TFTP skipped: only the TCP category fails.
#[tokio::test]
async fn unreachable_server_fails_tcp_category() {
    let mut cfg: Config = remote_config();
    cfg.tcp_ports = closed_ports(8).await;
    cfg.skip_tftp = true;
    let tftp: FakeTftp = FakeTftp::default();

    let failures: FailureCount = runner::run_remote("127.0.0.1", &cfg, &toolbox(&tftp)).await.unwrap();

    assert_eq!(failures, FailureCount(1));
    assert!(tftp.destinations().is_empty());
}

/// Unreachable ports and an empty TFTP download fail both categories.
#[tokio::test]
async fn unreachable_server_and_failed_fetch_add_up() {
    let mut cfg: Config = remote_config();
    cfg.tcp_ports = closed_ports(8).await;
    let tftp: FakeTftp = FakeTftp::serving(b"");

    let failures: FailureCount = runner::run_remote("127.0.0.1", &cfg, &toolbox(&tftp)).await.unwrap();

    assert_eq!(failures, FailureCount(2));
    for dest in tftp.destinations() {
        assert!(!dest.exists());
    }
}

#[tokio::test]
async fn reachable_server_with_skip_tftp_passes() {
    let (_listeners, ports) = listening_ports(8).await;
    let mut cfg: Config = remote_config();
    cfg.tcp_ports = ports;
    cfg.skip_tftp = true;

    let failures: FailureCount =
        runner::run_remote("127.0.0.1", &cfg, &toolbox(&FakeTftp::default())).await.unwrap();

    assert_eq!(failures, FailureCount(0));
}

#[tokio::test]
async fn reachable_server_serving_reference_file_passes() {
    let content: &[u8] = b"set timeout=5\nmenuentry 'Install' {}\n";
    let (_listeners, ports) = listening_ports(8).await;
    let mut cfg: Config = remote_config();
    cfg.tcp_ports = ports;
    cfg.tftp.expected_hash = sha256_hex(content);
    let tftp: FakeTftp = FakeTftp::serving(content);

    let failures: FailureCount = runner::run_remote("127.0.0.1", &cfg, &toolbox(&tftp)).await.unwrap();

    assert_eq!(failures, FailureCount(0));
    assert_eq!(tftp.destinations().len(), 1);
    assert!(!tftp.destinations()[0].exists());
}

#[tokio::test]
async fn one_closed_port_fails_the_whole_category() {
    let (_listeners, open) = listening_ports(7).await;
    let closed = closed_ports(1).await;
    let mut cfg: Config = remote_config();
    cfg.tcp_ports = satcheck_common::ports::PortSet::new(open.iter().chain(closed.iter())).unwrap();
    cfg.skip_tftp = true;

    let failures: FailureCount =
        runner::run_remote("127.0.0.1", &cfg, &toolbox(&FakeTftp::default())).await.unwrap();

    assert_eq!(failures, FailureCount(1));
}
