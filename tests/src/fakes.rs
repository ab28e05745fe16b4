//! Stand-ins for the external `tftp` and `sha256sum` programs, plus loopback port helpers.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use satcheck_common::error::CheckError;
use satcheck_common::ports::PortSet;
use satcheck_core::tools::{Digester, TftpClient, Toolbox};
use sha2::{Digest, Sha256};
use tokio::net::TcpListener;

/// Serves one fixed file for every request and records each destination path.
#[derive(Clone, Default)]
pub struct FakeTftp {
    content: Vec<u8>,
    pub destinations: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeTftp {
    pub fn serving(content: &[u8]) -> Self {
        Self {
            content: content.to_vec(),
            ..Self::default()
        }
    }

    pub fn destinations(&self) -> Vec<PathBuf> {
        self.destinations.lock().unwrap().clone()
    }
}

#[async_trait]
impl TftpClient for FakeTftp {
    async fn fetch(&self, _host: &str, _port: u16, _remote: &str, dest: &Path) {
        self.destinations.lock().unwrap().push(dest.to_path_buf());
        fs::write(dest, &self.content).unwrap();
    }
}

pub struct Sha256Digester;

#[async_trait]
impl Digester for Sha256Digester {
    async fn digest(&self, path: &Path) -> Result<String, CheckError> {
        Ok(sha256_hex(&fs::read(path)?))
    }
}

pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

pub fn toolbox(tftp: &FakeTftp) -> Toolbox {
    Toolbox::new(Box::new(tftp.clone()), Box::new(Sha256Digester))
}

/// Binds `count` loopback listeners; the ports stay taken while the listeners live.
pub async fn listening_ports(count: usize) -> (Vec<TcpListener>, PortSet) {
    let mut listeners: Vec<TcpListener> = Vec::with_capacity(count);
    for _ in 0..count {
        listeners.push(TcpListener::bind("127.0.0.1:0").await.unwrap());
    }
    let ports: PortSet = PortSet::new(
        listeners
            .iter()
            .map(|listener| listener.local_addr().unwrap().port()),
    )
    .unwrap();
    (listeners, ports)
}

/// Ports that were free a moment ago and are most likely still closed.
pub async fn closed_ports(count: usize) -> PortSet {
    let (listeners, ports) = listening_ports(count).await;
    drop(listeners);
    ports
}
