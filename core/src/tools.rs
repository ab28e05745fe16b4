//! # External Tools
//!
//! The TFTP transfer and the content digest are delegated to programs installed
//! on the host. Both sit behind traits so the checks can run against fakes.

use std::path::Path;
use std::process::Output;

use async_trait::async_trait;
use satcheck_common::error::CheckError;
use tokio::process::Command;
use tracing::debug;

/// Downloads a file from a TFTP service.
#[async_trait]
pub trait TftpClient: Send + Sync {
    /// Best effort: callers judge the transfer by the destination file alone.
    async fn fetch(&self, host: &str, port: u16, remote: &str, dest: &Path);
}

/// Computes the hex content digest of a file.
#[async_trait]
pub trait Digester: Send + Sync {
    async fn digest(&self, path: &Path) -> Result<String, CheckError>;
}

/// One implementation of each collaborator, handed to the run orchestrator.
pub struct Toolbox {
    pub tftp: Box<dyn TftpClient>,
    pub digester: Box<dyn Digester>,
}

impl Toolbox {
    pub fn new(tftp: Box<dyn TftpClient>, digester: Box<dyn Digester>) -> Self {
        Self { tftp, digester }
    }

    /// The `tftp` and `sha256sum` programs found on `PATH`.
    pub fn system() -> Self {
        Self::new(Box::new(SystemTftp::default()), Box::new(Sha256Sum::default()))
    }
}

pub struct SystemTftp {
    program: String,
}

impl Default for SystemTftp {
    fn default() -> Self {
        Self {
            program: "tftp".to_string(),
        }
    }
}

#[async_trait]
impl TftpClient for SystemTftp {
    async fn fetch(&self, host: &str, port: u16, remote: &str, dest: &Path) {
        // Exit status is ignored: some clients report success on unknown hosts.
        let status = Command::new(&self.program)
            .arg(host)
            .arg(port.to_string())
            .args(["-c", "get", remote])
            .arg(dest)
            .status()
            .await;

        match status {
            Ok(status) => debug!("{} exited with {status}", self.program),
            Err(e) => debug!("Failed to run {}: {e}", self.program),
        }
    }
}

pub struct Sha256Sum {
    program: String,
}

impl Default for Sha256Sum {
    fn default() -> Self {
        Self {
            program: "sha256sum".to_string(),
        }
    }
}

#[async_trait]
impl Digester for Sha256Sum {
    async fn digest(&self, path: &Path) -> Result<String, CheckError> {
        let output: Output = Command::new(&self.program)
            .arg(path)
            .output()
            .await
            .map_err(|source| CheckError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CheckError::ToolFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
            });
        }

        first_token(&output.stdout).ok_or_else(|| CheckError::MalformedDigest {
            program: self.program.clone(),
        })
    }
}

/// First whitespace-delimited token of a `<digest>  <filename>` line.
fn first_token(stdout: &[u8]) -> Option<String> {
    String::from_utf8_lossy(stdout)
        .split_whitespace()
        .next()
        .map(str::to_string)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
