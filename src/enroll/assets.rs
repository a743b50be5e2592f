/// Embedded enrollment payloads and temp-file staging.
///
/// The provisioning tools only take file paths, so embedded payloads are
/// written to a uniquely named file under the OS temp directory for the
/// duration of the call and removed afterwards.
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::EnrollError;

/// CA certificate installed into the trusted root store (PEM).
pub const CA_CERTIFICATE: &[u8] = include_bytes!("../../assets/eduroam-ca.pem");

/// Wireless profile for the PEAP/MSCHAPv2 variant.
pub const PROFILE_PEAP: &[u8] = include_bytes!("../../assets/eduroam-peap.xml");

/// Wireless profile for the EAP-TLS variant.
pub const PROFILE_TLS: &[u8] = include_bytes!("../../assets/eduroam-tls.xml");

/// A payload written to the temp directory, removed on drop.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
}

impl StagedFile {
    /// Location of the staged payload.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Write a payload to the temp directory under a process-unique name.
///
/// # Errors
///
/// [`EnrollError::Stage`] when the file cannot be written.
pub fn stage(name: &'static str, payload: &[u8]) -> Result<StagedFile, EnrollError> {
    let path = std::env::temp_dir().join(format!("educonfig-{}-{name}", std::process::id()));
    fs::write(&path, payload).map_err(|source| EnrollError::Stage { name, source })?;
    Ok(StagedFile { path })
}
