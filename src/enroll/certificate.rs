/// CA certificate installation into the trusted root store.
use std::path::Path;

use super::assets;
use super::errors::EnrollError;
use crate::os;

/// Install the CA certificate with `certutil -addstore Root`.
///
/// The embedded payload is staged to a temp file unless `override_path`
/// names a certificate file to install instead.
///
/// # Errors
///
/// Staging or `certutil` failure.
pub fn install(override_path: Option<&Path>) -> Result<(), EnrollError> {
    match override_path {
        Some(path) => add_to_root_store(path),
        None => {
            let staged = assets::stage("eduroam-ca.pem", assets::CA_CERTIFICATE)?;
            add_to_root_store(staged.path())
        }
    }
}

fn add_to_root_store(path: &Path) -> Result<(), EnrollError> {
    let target = path.display().to_string();
    os::run_tool("certutil", ["-addstore", "Root", target.as_str()])?;
    Ok(())
}
