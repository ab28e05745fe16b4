//! Port probes against a remote host ([`tcp`]) or the loopback interface ([`bind`]).

pub mod bind;
pub mod tcp;
