/// Platform support gate.
///
/// Provisioning rides on `netsh wlan`, present since Windows Vista; every
/// Windows release the toolchain targets qualifies. Elsewhere the tools do
/// not exist, so the gate reports unsupported and the interactive flow asks
/// before continuing.
#[cfg(windows)]
#[must_use]
pub fn system_supported() -> bool {
    true
}

#[cfg(not(windows))]
#[must_use]
pub fn system_supported() -> bool {
    false
}
