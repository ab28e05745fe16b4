//! # Required Port Sets
//!
//! The fixed TCP ports a correctly provisioned server must expose (remote mode)
//! or have bound by a listening process (local mode).

use std::collections::BTreeSet;

use crate::error::CheckError;

/// Ports a server must answer on when probed from another machine.
pub const REMOTE_TCP_PORTS: [u16; 8] = [80, 443, 5000, 5647, 8000, 8140, 8443, 9090];

/// Ports that must already be bound on the loopback interface of the server itself.
pub const LOCAL_TCP_PORTS: [u16; 11] = [
    80, 443, 5000, 5646, 5647, 5671, 8000, 8008, 8140, 8443, 9090,
];

/// An immutable, non-empty set of ports in `1..=65535`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSet {
    ports: BTreeSet<u16>,
}

impl PortSet {
    pub fn new<I>(ports: I) -> Result<Self, CheckError>
    where
        I: IntoIterator<Item = u16>,
    {
        let ports: BTreeSet<u16> = ports.into_iter().collect();

        if ports.is_empty() {
            return Err(CheckError::EmptyPortSet);
        }
        if ports.contains(&0) {
            return Err(CheckError::InvalidPort);
        }

        Ok(Self { ports })
    }

    pub fn remote() -> Self {
        Self {
            ports: REMOTE_TCP_PORTS.into_iter().collect(),
        }
    }

    pub fn local() -> Self {
        Self {
            ports: LOCAL_TCP_PORTS.into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.ports.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
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
