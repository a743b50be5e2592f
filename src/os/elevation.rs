/// Elevation: privilege check and elevated self-relaunch.
///
/// Writing to the machine trust store and registering an all-user wireless
/// profile both require administrator rights, so a non-elevated run hands
/// off to an elevated copy of itself instead of failing halfway through.
use super::errors::OsError;

/// Whether this process already runs with administrator privileges.
#[cfg(windows)]
#[must_use]
pub fn is_elevated() -> bool {
    use windows_sys::Win32::Foundation::{CloseHandle, HANDLE};
    use windows_sys::Win32::Security::{
        GetTokenInformation, TOKEN_ELEVATION, TOKEN_QUERY, TokenElevation,
    };
    use windows_sys::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

    // SAFETY: the token handle is closed on every path and the out-params
    // are sized to the structures they fill.
    unsafe {
        let mut token: HANDLE = std::ptr::null_mut();
        if OpenProcessToken(GetCurrentProcess(), TOKEN_QUERY, &mut token) == 0 {
            return false;
        }
        let mut elevation = TOKEN_ELEVATION { TokenIsElevated: 0 };
        let mut len = size_of::<TOKEN_ELEVATION>() as u32;
        let ok = GetTokenInformation(
            token,
            TokenElevation,
            (&raw mut elevation).cast(),
            len,
            &mut len,
        );
        CloseHandle(token);
        ok != 0 && elevation.TokenIsElevated != 0
    }
}

/// Whether this process already runs with administrator privileges.
#[cfg(unix)]
#[must_use]
pub fn is_elevated() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

/// Relaunch this executable elevated, forwarding the given switches.
///
/// On success the elevated copy owns the rest of the run and the caller
/// should exit cleanly.
///
/// # Errors
///
/// [`OsError::ElevationRefused`] when the elevation prompt is dismissed,
/// [`OsError::Launch`] when the executable path cannot be determined.
#[cfg(windows)]
pub fn relaunch_elevated(forward: &[&str]) -> Result<(), OsError> {
    use std::ffi::OsStr;
    use std::os::windows::ffi::OsStrExt;
    use windows_sys::Win32::UI::Shell::ShellExecuteW;
    use windows_sys::Win32::UI::WindowsAndMessaging::SW_HIDE;

    let exe = std::env::current_exe().map_err(|source| OsError::Launch {
        tool: "educonfig",
        source,
    })?;

    fn wide(s: &OsStr) -> Vec<u16> {
        s.encode_wide().chain(std::iter::once(0)).collect()
    }
    let verb = wide(OsStr::new("runas"));
    let file = wide(exe.as_os_str());
    let params = wide(OsStr::new(&forward.join(" ")));

    // SAFETY: every pointer references a NUL-terminated buffer that outlives
    // the call.
    let result = unsafe {
        ShellExecuteW(
            std::ptr::null_mut(),
            verb.as_ptr(),
            file.as_ptr(),
            params.as_ptr(),
            std::ptr::null(),
            SW_HIDE,
        )
    };

    // ShellExecuteW reports success with a value greater than 32.
    if result as usize > 32 {
        Ok(())
    } else {
        Err(OsError::ElevationRefused)
    }
}

/// Relaunch this executable elevated.
///
/// # Errors
///
/// Always [`OsError::ElevationUnavailable`]: there is no prompt-based
/// elevation to hand off to outside Windows.
#[cfg(not(windows))]
pub fn relaunch_elevated(_forward: &[&str]) -> Result<(), OsError> {
    Err(OsError::ElevationUnavailable)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn relaunch_is_unavailable_off_windows() {
        assert!(matches!(
            relaunch_elevated(&["--silent"]),
            Err(OsError::ElevationUnavailable)
        ));
    }
}
