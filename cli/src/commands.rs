//! Command line surface shared by the `satcheck` and `satcheck-local` executables.

pub mod local;
pub mod remote;

use std::process::ExitCode;
use std::time::Duration;

use clap::{ArgAction, Args, Parser};
use satcheck_common::config::{Config, DEFAULT_TFTP_PORT};
use satcheck_common::outcome::FailureCount;
use satcheck_common::verbosity::Verbosity;
use tracing::error;

/// Flags both executables accept.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Skip TFTP test
    #[arg(long)]
    pub skip_tftp: bool,

    /// Increase output verbosity (e.g., -vv is more than -v)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbosity: u8,

    /// UDP port of the TFTP service
    #[arg(long, default_value_t = DEFAULT_TFTP_PORT)]
    pub tftp_port: u16,

    /// File to request from the TFTP service
    #[arg(long)]
    pub tftp_file: Option<String>,
}

/// Check that a Satellite server is reachable on its required ports.
#[derive(Parser, Debug)]
#[command(name = "satcheck", version)]
pub struct RemoteCommandLine {
    /// Hostname of Satellite server
    pub server: String,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Seconds to wait for each TCP connection
    #[arg(long, default_value_t = 2)]
    pub connect_timeout: u64,

    /// SHA-256 digest the fetched TFTP file must have
    #[arg(long)]
    pub expected_hash: Option<String>,
}

/// Check that this Satellite server is listening on its required ports.
#[derive(Parser, Debug)]
#[command(name = "satcheck-local", version)]
pub struct LocalCommandLine {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory served by the local TFTP service
    #[arg(long)]
    pub tftp_root: Option<std::path::PathBuf>,
}

impl CommonArgs {
    fn apply(self, cfg: &mut Config) {
        cfg.verbosity = Verbosity::new(self.verbosity);
        cfg.skip_tftp = self.skip_tftp;
        cfg.tftp.port = self.tftp_port;
        if let Some(filename) = self.tftp_file {
            cfg.tftp.filename = filename;
        }
    }
}

impl RemoteCommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> (String, Config) {
        let mut cfg: Config = Config::remote();
        cfg.connect_timeout = Duration::from_secs(self.connect_timeout);
        if let Some(hash) = self.expected_hash {
            cfg.tftp.expected_hash = hash;
        }
        self.common.apply(&mut cfg);
        (self.server, cfg)
    }
}

impl LocalCommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        let mut cfg: Config = Config::local();
        if let Some(root) = self.tftp_root {
            cfg.tftp.root_dir = root;
        }
        self.common.apply(&mut cfg);
        cfg
    }
}

/// Status of a run aborted by an unexpected condition; above any failure count.
pub const FATAL_EXIT: u8 = 3;

/// The number of failed categories (not a bitmask), or [`FATAL_EXIT`].
pub fn exit_status(outcome: &anyhow::Result<FailureCount>) -> u8 {
    match outcome {
        Ok(failures) => failures.0,
        Err(_) => FATAL_EXIT,
    }
}

pub fn finish(outcome: anyhow::Result<FailureCount>) -> ExitCode {
    if let Err(e) = &outcome {
        error!("{e:#}");
    }
    ExitCode::from(exit_status(&outcome))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
