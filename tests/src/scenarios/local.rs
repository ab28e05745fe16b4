use std::fs;
use std::path::Path;

use satcheck_common::config::Config;
use satcheck_common::outcome::FailureCount;
use satcheck_common::verbosity::Verbosity;
use satcheck_core::runner;
use tempfile::TempDir;

use crate::fakes::{FakeTftp, closed_ports, listening_ports, toolbox};

const GRUB_CFG: &[u8] = b"set default=0\nset timeout=5\n";

fn tftp_root_with(content: &[u8]) -> TempDir {
    let root: TempDir = tempfile::tempdir().unwrap();
    let grub_dir = root.path().join("grub2");
    fs::create_dir_all(&grub_dir).unwrap();
    fs::write(grub_dir.join("grub.cfg"), content).unwrap();
    root
}

fn local_config(root: &Path) -> Config {
    let mut cfg: Config = Config::local();
    cfg.verbosity = Verbosity::new(3);
    cfg.tftp.root_dir = root.to_path_buf();
    cfg
}

/// Every port is held by a listener and the TFTP service serves the live file.
#[tokio::test]
async fn healthy_server_passes() {
    let (_listeners, ports) = listening_ports(11).await;
    let root: TempDir = tftp_root_with(GRUB_CFG);
    let mut cfg: Config = local_config(root.path());
    cfg.tcp_ports = ports;
    let tftp: FakeTftp = FakeTftp::serving(GRUB_CFG);

    let failures: FailureCount = runner::run_local(&cfg, &toolbox(&tftp)).await.unwrap();

    assert_eq!(failures, FailureCount(0));
    assert!(!tftp.destinations()[0].exists());
}

/// The service hands out an outdated copy of the boot configuration.
#[tokio::test]
async fn stale_served_file_fails_tftp_category() {
    let (_listeners, ports) = listening_ports(11).await;
    let root: TempDir = tftp_root_with(GRUB_CFG);
    let mut cfg: Config = local_config(root.path());
    cfg.tcp_ports = ports;
    let tftp: FakeTftp = FakeTftp::serving(b"set default=1\nset timeout=5\n");

    let failures: FailureCount = runner::run_local(&cfg, &toolbox(&tftp)).await.unwrap();

    assert_eq!(failures, FailureCount(1));
}

#[tokio::test]
async fn missing_reference_file_never_contacts_tftp() {
    let (_listeners, ports) = listening_ports(11).await;
    let root: TempDir = tempfile::tempdir().unwrap();
    let mut cfg: Config = local_config(root.path());
    cfg.tcp_ports = ports;
    let tftp: FakeTftp = FakeTftp::serving(GRUB_CFG);

    let failures: FailureCount = runner::run_local(&cfg, &toolbox(&tftp)).await.unwrap();

    assert_eq!(failures, FailureCount(1));
    assert!(tftp.destinations().is_empty());
}

#[tokio::test]
async fn unallocated_ports_fail_tcp_category() {
    let root: TempDir = tftp_root_with(GRUB_CFG);
    let mut cfg: Config = local_config(root.path());
    cfg.tcp_ports = closed_ports(3).await;
    cfg.skip_tftp = true;

    let failures: FailureCount =
        runner::run_local(&cfg, &toolbox(&FakeTftp::default())).await.unwrap();

    assert_eq!(failures, FailureCount(1));
}
