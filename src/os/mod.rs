/// OS integration layer: child processes, elevation, platform support.
pub mod elevation;
pub mod errors;
pub mod platform;
pub mod process;

pub use elevation::{is_elevated, relaunch_elevated};
pub use errors::OsError;
pub use platform::system_supported;
pub use process::run_tool;
