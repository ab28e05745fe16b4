//! # TFTP Fetch-and-Verify
//!
//! Downloads a boot file into a private temporary file and compares its digest
//! with an expected one. In local mode the expected digest is taken from the
//! file the TFTP service is supposed to serve, which proves the service is not
//! handing out a stale copy.
//!
//! The temporary file never outlives the call, whatever the outcome.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use satcheck_common::error::CheckError;
use satcheck_common::outcome::CategoryResult;
use satcheck_common::verbosity::{Severity, Verbosity};
use tempfile::NamedTempFile;

use crate::tools::Toolbox;

/// Which file to fetch, from where, and what it must hash to.
#[derive(Debug, Clone)]
pub struct FetchRequest<'a> {
    pub server: &'a str,
    pub port: u16,
    pub filename: &'a str,
    pub expected_hash: &'a str,
}

pub async fn fetch_and_verify(
    tools: &Toolbox,
    request: &FetchRequest<'_>,
    verbosity: &Verbosity,
) -> Result<CategoryResult, CheckError> {
    verbosity.emit(Severity::Section, "TFTP Test");
    verbosity.emit(Severity::Info, "Getting file from TFTP server...");

    let download: NamedTempFile = NamedTempFile::new()?;
    let verdict = verify_download(tools, request, download.path(), verbosity).await;
    discard(download)?;
    verdict
}

async fn verify_download(
    tools: &Toolbox,
    request: &FetchRequest<'_>,
    dest: &Path,
    verbosity: &Verbosity,
) -> Result<CategoryResult, CheckError> {
    tools
        .tftp
        .fetch(request.server, request.port, request.filename, dest)
        .await;

    // An empty file is the only reliable failure signal from the client.
    if downloaded_size(dest) == 0 {
        verbosity.emit(Severity::Info, "TFTP Test failed");
        return Ok(CategoryResult::Failed);
    }

    verbosity.emit(Severity::Info, "Checking filehash...");
    let actual: String = tools.digester.digest(dest).await?;

    if actual == request.expected_hash {
        verbosity.emit(Severity::Verdict, "TFTP Test succeeded");
        Ok(CategoryResult::Passed)
    } else {
        verbosity.emit(Severity::Verdict, "TFTP Test failed - filehash doesn't match");
        Ok(CategoryResult::Failed)
    }
}

fn downloaded_size(path: &Path) -> u64 {
    fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
}

/// Removes the download; a client that already deleted it is not an error.
fn discard(download: NamedTempFile) -> Result<(), CheckError> {
    match download.close() {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Hashes `root_dir/filename` from disk and checks the local TFTP service serves
/// exactly that content.
///
/// A missing reference file fails the category without contacting TFTP.
pub async fn verify_local_reference(
    tools: &Toolbox,
    root_dir: &Path,
    filename: &str,
    port: u16,
    verbosity: &Verbosity,
) -> Result<CategoryResult, CheckError> {
    verbosity.emit(Severity::Section, "Local TFTP Test");

    let local_path: PathBuf = root_dir.join(filename.trim_start_matches('/'));
    if !local_path.is_file() {
        verbosity.emit(Severity::Verdict, "TFTP FAIL - local file doesn't exist");
        return Ok(CategoryResult::Failed);
    }

    verbosity.emit(Severity::Info, "Checking filehash...");
    let reference: String = tools.digester.digest(&local_path).await?;
    verbosity.emit(
        Severity::Section,
        format!("{reference}  {}", local_path.display()),
    );

    let request: FetchRequest = FetchRequest {
        server: "localhost",
        port,
        filename,
        expected_hash: &reference,
    };
    fetch_and_verify(tools, &request, verbosity).await
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
