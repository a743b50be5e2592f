/// Wireless profile registration through `netsh wlan`.
use std::path::Path;

use super::assets;
use super::errors::EnrollError;
use crate::os;

/// Which profile variant to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileType {
    /// PEAP with MSCHAPv2 inner authentication (username/password).
    #[default]
    Peap,
    /// EAP-TLS (client certificate).
    Tls,
}

impl ProfileType {
    /// Short name used in messages and the enrollment report.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Peap => "peap",
            Self::Tls => "tls",
        }
    }

    fn payload(self) -> &'static [u8] {
        match self {
            Self::Peap => assets::PROFILE_PEAP,
            Self::Tls => assets::PROFILE_TLS,
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            Self::Peap => "eduroam-peap.xml",
            Self::Tls => "eduroam-tls.xml",
        }
    }
}

/// Register the wireless profile for all users of the machine.
///
/// The embedded variant payload is staged to a temp file unless
/// `override_path` names a profile XML to register instead.
///
/// # Errors
///
/// Staging or `netsh` failure.
pub fn install(profile_type: ProfileType, override_path: Option<&Path>) -> Result<(), EnrollError> {
    match override_path {
        Some(path) => add_profile(path),
        None => {
            let staged = assets::stage(profile_type.file_name(), profile_type.payload())?;
            add_profile(staged.path())
        }
    }
}

fn add_profile(path: &Path) -> Result<(), EnrollError> {
    let filename = format!("filename={}", path.display());
    os::run_tool(
        "netsh",
        ["wlan", "add", "profile", filename.as_str(), "user=all"],
    )?;
    Ok(())
}
