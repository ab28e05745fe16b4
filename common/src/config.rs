use std::path::PathBuf;
use std::time::Duration;

use crate::ports::PortSet;
use crate::verbosity::Verbosity;

pub const DEFAULT_TFTP_PORT: u16 = 69;
pub const DEFAULT_REMOTE_FILE: &str = "/grub2/grub.cfg";
pub const DEFAULT_LOCAL_FILE: &str = "grub2/grub.cfg";
pub const DEFAULT_TFTP_ROOT: &str = "/var/lib/tftpboot";
pub const DEFAULT_EXPECTED_HASH: &str =
    "ec7f105c6d0ab850e56ddc0bac1c87bef4730cb52794145acba2192da1e97b70";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Settings for one run, built once by the CLI and passed to every check.
#[derive(Debug, Clone)]
pub struct Config {
    pub verbosity: Verbosity,
    /// Skips the TFTP category entirely; it then counts as passed.
    pub skip_tftp: bool,
    pub tcp_ports: PortSet,
    /// Upper bound for a single remote TCP connection attempt.
    pub connect_timeout: Duration,
    pub tftp: TftpSettings,
}

#[derive(Debug, Clone)]
pub struct TftpSettings {
    pub port: u16,
    /// File requested from the TFTP service.
    pub filename: String,
    /// Reference digest, only used in remote mode.
    pub expected_hash: String,
    /// Directory the local TFTP service serves from, only used in local mode.
    pub root_dir: PathBuf,
}

impl Config {
    pub fn remote() -> Self {
        Self {
            verbosity: Verbosity::silent(),
            skip_tftp: false,
            tcp_ports: PortSet::remote(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            tftp: TftpSettings {
                filename: DEFAULT_REMOTE_FILE.to_string(),
                ..TftpSettings::default()
            },
        }
    }

    pub fn local() -> Self {
        Self {
            verbosity: Verbosity::silent(),
            skip_tftp: false,
            tcp_ports: PortSet::local(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            tftp: TftpSettings {
                filename: DEFAULT_LOCAL_FILE.to_string(),
                ..TftpSettings::default()
            },
        }
    }
}

impl Default for TftpSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_TFTP_PORT,
            filename: DEFAULT_REMOTE_FILE.to_string(),
            expected_hash: DEFAULT_EXPECTED_HASH.to_string(),
            root_dir: PathBuf::from(DEFAULT_TFTP_ROOT),
        }
    }
}
