use satcheck_common::config::Config;
use satcheck_common::outcome::FailureCount;
use satcheck_core::runner;
use satcheck_core::tools::Toolbox;
use tracing::debug;

pub async fn remote(server: &str, cfg: &Config) -> anyhow::Result<FailureCount> {
    debug!("Checking {server} on {} TCP ports", cfg.tcp_ports.len());
    let failures: FailureCount = runner::run_remote(server, cfg, &Toolbox::system()).await?;
    Ok(failures)
}
