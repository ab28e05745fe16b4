use std::process::ExitCode;

use satcheck_cli::commands::{self, RemoteCommandLine, remote};
use satcheck_cli::terminal::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let (server, cfg) = RemoteCommandLine::parse_args().into_config();

    if let Err(e) = logging::init_logging() {
        eprintln!("Failed to initialize logging: {e:#}");
        return ExitCode::from(commands::FATAL_EXIT);
    }

    commands::finish(remote::remote(&server, &cfg).await)
}
