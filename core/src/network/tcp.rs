//! Remote reachability check: a TCP handshake against every required port.

use std::io;
use std::time::Duration;

use satcheck_common::outcome::{CategoryResult, PortResults};
use satcheck_common::ports::PortSet;
use satcheck_common::verbosity::{Severity, Verbosity};
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Connects to every port of `ports` on `server` in turn.
///
/// A failed port never stops the remaining probes; the category fails if any
/// port could not be reached.
pub async fn check_reachability(
    server: &str,
    ports: &PortSet,
    connect_timeout: Duration,
    verbosity: &Verbosity,
) -> CategoryResult {
    verbosity.emit(Severity::Section, "TCP Test");

    let mut results: PortResults = PortResults::new();
    for port in ports.iter() {
        match handshake_probe(server, port, connect_timeout).await {
            Ok(()) => {
                verbosity.emit(Severity::Info, format!("{server}:{port} OK"));
                results.record(port, true);
            }
            Err(e) => {
                verbosity.emit(Severity::Verdict, format!("{server}:{port} FAIL - {e}"));
                results.record(port, false);
            }
        }
    }

    let verdict: CategoryResult = results.verdict();
    if verdict.is_failed() {
        verbosity.emit(Severity::Verdict, "TCP Test failed");
        verbosity.emit(Severity::Section, "The following connections failed:");
        for port in results.failures() {
            verbosity.emit(Severity::Section, format!("  {server}:{port}"));
        }
    } else {
        verbosity.emit(Severity::Verdict, "TCP Test succeeded");
    }
    verdict
}

/// Opens and immediately drops a connection to `server:port`.
///
/// Name resolution happens inside the timeout, so a slow resolver counts
/// against the same budget as the handshake.
pub async fn handshake_probe(server: &str, port: u16, probe_timeout: Duration) -> io::Result<()> {
    match timeout(probe_timeout, TcpStream::connect((server, port))).await {
        Ok(Ok(_stream)) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(_elapsed) => Err(io::Error::new(io::ErrorKind::TimedOut, "timed out")),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
