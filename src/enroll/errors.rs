/// Errors from the enrollment domain layer, and the process exit contract.
use thiserror::Error;

use crate::os::OsError;

/// Errors that can occur while enrolling.
#[derive(Debug, Error)]
pub enum EnrollError {
    /// The process lacks administrator privileges and could not hand off.
    #[error("administrator privileges are required: {source}")]
    NotElevated {
        /// Why the elevated relaunch did not happen.
        #[source]
        source: OsError,
    },

    /// A payload could not be written to the temp directory.
    #[error("could not stage {name}: {source}")]
    Stage {
        /// File name of the payload being staged.
        name: &'static str,
        /// The underlying write failure.
        #[source]
        source: std::io::Error,
    },

    /// An underlying OS layer error.
    #[error(transparent)]
    Os(#[from] OsError),
}

/// Process exit status assembled from bit flags, one per failure class.
///
/// Certificate and profile failures combine: both failing exits with 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitFlags(i32);

impl ExitFlags {
    pub const NONE: Self = Self(0);
    pub const CERT_INSTALL: Self = Self(1);
    pub const PROFILE_INSTALL: Self = Self(2);
    pub const SYSTEM_NOT_SUPPORTED: Self = Self(4);
    pub const NO_ADMIN: Self = Self(8);
    pub const UNHANDLED: Self = Self(16);

    /// The numeric process exit code.
    #[must_use]
    pub fn code(self) -> i32 {
        self.0
    }

    /// True when no failure flag is set.
    #[must_use]
    pub fn is_clean(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for ExitFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ExitFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
