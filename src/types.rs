/// Shared serializable output types.
///
/// These types are what `--json` consumers see: a structured error envelope
/// on stderr and a final enrollment report on stdout. They are decoupled
/// from the internal error enums.
use serde::{Deserialize, Serialize};

use crate::enroll::{EnrollError, ExitFlags, ProfileType};
use crate::os::OsError;

/// Outcome of one enrollment step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepReport {
    /// Whether the step completed.
    pub installed: bool,
    /// Failure message, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepReport {
    fn from_result(result: &Result<(), EnrollError>) -> Self {
        Self {
            installed: result.is_ok(),
            error: result.as_ref().err().map(ToString::to_string),
        }
    }
}

/// Final machine-readable enrollment report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollReport {
    /// Whether every step completed.
    pub ok: bool,
    /// Profile variant that was registered (`peap` / `tls`).
    pub profile_type: String,
    /// Certificate installation outcome.
    pub certificate: StepReport,
    /// Wireless profile registration outcome.
    pub profile: StepReport,
    /// The bit-flag code the process will exit with.
    pub exit_code: i32,
}

impl EnrollReport {
    /// Assemble the report from the two step results and the flag set.
    #[must_use]
    pub fn new(
        profile_type: ProfileType,
        certificate: &Result<(), EnrollError>,
        profile: &Result<(), EnrollError>,
        flags: ExitFlags,
    ) -> Self {
        Self {
            ok: flags.is_clean(),
            profile_type: profile_type.label().to_owned(),
            certificate: StepReport::from_result(certificate),
            profile: StepReport::from_result(profile),
            exit_code: flags.code(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from an `EnrollError`.
    #[must_use]
    pub fn from_enroll_error(err: &EnrollError) -> Self {
        let code = match err {
            EnrollError::NotElevated { .. } => "not_elevated",
            EnrollError::Stage { .. } => "stage_failed",
            EnrollError::Os(os) => match os {
                OsError::Launch { .. } => "tool_launch_failed",
                OsError::CommandFailed { .. } => "tool_failed",
                OsError::ElevationRefused => "elevation_refused",
                OsError::ElevationUnavailable => "elevation_unavailable",
            },
        };
        Self::with_code(code, err.to_string())
    }

    /// Construct for an error that escaped the command layer.
    #[must_use]
    pub fn unhandled(err: &anyhow::Error) -> Self {
        Self::with_code("unhandled", format!("{err:#}"))
    }

    fn with_code(code: &str, message: String) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_reflects_partial_failure() {
        let cert: Result<(), EnrollError> = Ok(());
        let profile: Result<(), EnrollError> = Err(EnrollError::Os(OsError::CommandFailed {
            tool: "netsh",
            code: 1,
            stderr: String::new(),
        }));
        let report = EnrollReport::new(
            ProfileType::Tls,
            &cert,
            &profile,
            ExitFlags::PROFILE_INSTALL,
        );
        assert!(!report.ok);
        assert_eq!(report.profile_type, "tls");
        assert!(report.certificate.installed);
        assert!(!report.profile.installed);
        assert_eq!(report.exit_code, 2);
    }

    #[test]
    fn step_error_is_omitted_on_success() {
        let report = EnrollReport::new(ProfileType::Peap, &Ok(()), &Ok(()), ExitFlags::NONE);
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("\"error\""));
        assert!(json.contains("\"exit_code\":0"));
    }

    #[test]
    fn error_codes_map_by_variant() {
        let err = EnrollError::Os(OsError::Launch {
            tool: "certutil",
            source: std::io::Error::other("nope"),
        });
        assert_eq!(ErrorOutput::from_enroll_error(&err).error.code, "tool_launch_failed");

        let err = EnrollError::NotElevated {
            source: OsError::ElevationRefused,
        };
        assert_eq!(ErrorOutput::from_enroll_error(&err).error.code, "not_elevated");
    }
}
