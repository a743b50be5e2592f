/// Child-process plumbing for the OS provisioning tools.
use std::ffi::OsStr;
use std::process::Command;

use super::errors::OsError;

/// Run a provisioning tool to completion with its console window hidden.
///
/// Standard error is captured and attached to the failure; standard output
/// is discarded (the tools narrate their success there).
///
/// # Errors
///
/// [`OsError::Launch`] when the tool cannot be started,
/// [`OsError::CommandFailed`] when it exits nonzero.
pub fn run_tool<I, S>(tool: &'static str, args: I) -> Result<(), OsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(tool);
    command.args(args);
    hide_console_window(&mut command);

    let output = command
        .output()
        .map_err(|source| OsError::Launch { tool, source })?;
    if output.status.success() {
        return Ok(());
    }

    Err(OsError::CommandFailed {
        tool,
        code: output.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
    })
}

#[cfg(windows)]
fn hide_console_window(command: &mut Command) {
    use std::os::windows::process::CommandExt;

    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    command.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(windows))]
fn hide_console_window(_command: &mut Command) {}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn successful_tool_run_is_ok() {
        assert!(run_tool("true", std::iter::empty::<&str>()).is_ok());
    }

    #[test]
    fn nonzero_exit_maps_to_command_failed() {
        let err = run_tool("sh", ["-c", "echo boom >&2; exit 3"]).unwrap_err();
        match err {
            OsError::CommandFailed { tool, code, stderr } => {
                assert_eq!(tool, "sh");
                assert_eq!(code, 3);
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_tool_maps_to_launch() {
        let err = run_tool("educonfig-no-such-tool", std::iter::empty::<&str>()).unwrap_err();
        assert!(matches!(err, OsError::Launch { .. }));
    }
}
