//! Local allocation check: a bind attempt on `127.0.0.1` for every required port.
//!
//! A port some process already owns refuses the bind with "address in use",
//! which is what a healthy server looks like from the inside.

use std::io;
use std::net::{Ipv4Addr, SocketAddr};

use satcheck_common::outcome::{CategoryResult, PortResults};
use satcheck_common::ports::PortSet;
use satcheck_common::verbosity::{Severity, Verbosity};
use tokio::net::TcpSocket;

/// What a loopback bind attempt revealed about one port.
#[derive(Debug)]
pub enum BindProbe {
    /// The bind succeeded, so nothing is listening.
    Unallocated,
    /// Another socket owns the port.
    Allocated,
    /// Privileged port and insufficient rights to probe it.
    PermissionDenied,
    /// Anything else the OS reported; neither a pass nor a counted failure.
    Other(io::Error),
}

/// Probes every port of `ports` on the loopback interface.
pub fn check_allocation(ports: &PortSet, verbosity: &Verbosity) -> CategoryResult {
    let probes = ports.iter().map(|port| (port, probe_port(port)));
    let results: PortResults = tally_allocation(probes, verbosity);
    report_allocation(&results, verbosity)
}

/// Folds probe outcomes into a result map, one port at a time.
///
/// Ports whose probe ends in [`BindProbe::Other`] are printed as diagnostics
/// and left out of the map.
pub fn tally_allocation<I>(probes: I, verbosity: &Verbosity) -> PortResults
where
    I: IntoIterator<Item = (u16, BindProbe)>,
{
    let mut results: PortResults = PortResults::new();

    for (port, probe) in probes {
        match probe {
            BindProbe::Unallocated => {
                verbosity.emit(Severity::Verdict, format!("Port {port}: UNALLOCATED"));
                results.record(port, false);
            }
            BindProbe::Allocated => {
                verbosity.emit(Severity::Info, format!("Port {port}: allocated"));
                results.record(port, true);
            }
            BindProbe::PermissionDenied => {
                verbosity.emit(
                    Severity::Verdict,
                    format!("Port {port}: failed check - must be root"),
                );
                results.record(port, false);
            }
            BindProbe::Other(e) => verbosity.diagnostic(e),
        }
    }
    results
}

fn report_allocation(results: &PortResults, verbosity: &Verbosity) -> CategoryResult {
    let verdict: CategoryResult = results.verdict();
    if verdict.is_failed() {
        verbosity.emit(Severity::Verdict, "TCP Test failed");
        verbosity.emit(Severity::Section, "The following connections failed:");
        for port in results.failures() {
            verbosity.emit(Severity::Section, format!("  {port}"));
        }
    } else {
        verbosity.emit(Severity::Verdict, "Test succeeded");
    }
    verdict
}

/// Binds `127.0.0.1:port` without listening; the socket is dropped before returning.
pub fn probe_port(port: u16) -> BindProbe {
    let addr: SocketAddr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let attempt: io::Result<()> = TcpSocket::new_v4().and_then(|socket| socket.bind(addr));
    classify(attempt)
}

fn classify(attempt: io::Result<()>) -> BindProbe {
    match attempt {
        Ok(()) => BindProbe::Unallocated,
        Err(e) => match e.kind() {
            io::ErrorKind::AddrInUse => BindProbe::Allocated,
            io::ErrorKind::PermissionDenied => BindProbe::PermissionDenied,
            _ => BindProbe::Other(e),
        },
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
