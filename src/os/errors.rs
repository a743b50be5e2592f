/// Errors from the OS integration layer.
use thiserror::Error;

/// Typed errors from process spawning and elevation.
#[derive(Debug, Error)]
#[allow(dead_code)]
pub enum OsError {
    /// The provisioning tool could not be started at all.
    #[error("could not launch {tool}: {source}")]
    Launch {
        /// Tool binary name (`certutil`, `netsh`).
        tool: &'static str,
        /// The underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// The provisioning tool ran but reported failure.
    #[error("{tool} exited with status {code}{}", fmt_stderr(.stderr))]
    CommandFailed {
        /// Tool binary name.
        tool: &'static str,
        /// Process exit code (-1 when terminated by a signal).
        code: i32,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The elevation prompt was dismissed or denied.
    #[error("elevation request was refused")]
    ElevationRefused,

    /// No elevation mechanism exists on this platform.
    #[error("automatic elevation is not available on this platform; re-run with sudo")]
    ElevationUnavailable,
}

fn fmt_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_display_includes_stderr_when_present() {
        let err = OsError::CommandFailed {
            tool: "netsh",
            code: 1,
            stderr: "profile is malformed".into(),
        };
        assert_eq!(
            err.to_string(),
            "netsh exited with status 1: profile is malformed"
        );
    }

    #[test]
    fn command_failed_display_omits_empty_stderr() {
        let err = OsError::CommandFailed {
            tool: "certutil",
            code: 2,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "certutil exited with status 2");
    }
}
