//! # Run Orchestrator
//!
//! Runs the categories of one mode strictly in sequence (TCP, then TFTP) and
//! adds up the failed ones.

use satcheck_common::config::Config;
use satcheck_common::error::CheckError;
use satcheck_common::outcome::{CategoryResult, FailureCount};

use crate::network::{bind, tcp};
use crate::tftp::{self, FetchRequest};
use crate::tools::Toolbox;

/// Checks `server` from the outside: TCP reachability, then the reference TFTP file.
pub async fn run_remote(
    server: &str,
    cfg: &Config,
    tools: &Toolbox,
) -> Result<FailureCount, CheckError> {
    let tcp_result: CategoryResult =
        tcp::check_reachability(server, &cfg.tcp_ports, cfg.connect_timeout, &cfg.verbosity)
            .await;

    let tftp_result: CategoryResult = if cfg.skip_tftp {
        CategoryResult::Passed
    } else {
        let request: FetchRequest = FetchRequest {
            server,
            port: cfg.tftp.port,
            filename: &cfg.tftp.filename,
            expected_hash: &cfg.tftp.expected_hash,
        };
        tftp::fetch_and_verify(tools, &request, &cfg.verbosity).await?
    };

    Ok([tcp_result, tftp_result].into_iter().sum())
}

/// Checks the machine it runs on: loopback port allocation, then the TFTP
/// service against the file on disk.
pub async fn run_local(cfg: &Config, tools: &Toolbox) -> Result<FailureCount, CheckError> {
    let tcp_result: CategoryResult = bind::check_allocation(&cfg.tcp_ports, &cfg.verbosity);

    let tftp_result: CategoryResult = if cfg.skip_tftp {
        CategoryResult::Passed
    } else {
        tftp::verify_local_reference(
            tools,
            &cfg.tftp.root_dir,
            &cfg.tftp.filename,
            cfg.tftp.port,
            &cfg.verbosity,
        )
        .await?
    };

    Ok([tcp_result, tftp_result].into_iter().sum())
}
