use satcheck_common::config::Config;
use satcheck_common::outcome::FailureCount;
use satcheck_common::verbosity::Severity;
use satcheck_core::runner;
use satcheck_core::tools::Toolbox;

pub async fn local(cfg: &Config) -> anyhow::Result<FailureCount> {
    if !is_root::is_root() {
        cfg.verbosity.emit(
            Severity::Section,
            "Not running as root: privileged ports will report permission denied",
        );
    }

    let failures: FailureCount = runner::run_local(cfg, &Toolbox::system()).await?;
    Ok(failures)
}
