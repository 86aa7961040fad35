use std::fmt;

pub const SCAN_FAILED_ALREADY_STARTED: i32 = 1;
pub const SCAN_FAILED_APPLICATION_REGISTRATION_FAILED: i32 = 2;
pub const SCAN_FAILED_INTERNAL_ERROR: i32 = 3;
pub const SCAN_FAILED_FEATURE_UNSUPPORTED: i32 = 4;

/// Why the platform could not start a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    AlreadyStarted,
    RegistrationFailed,
    InternalError,
    FeatureUnsupported,
    /// A code outside the known set, kept as reported.
    Unknown(i32),
}
impl FailureKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            SCAN_FAILED_ALREADY_STARTED => Self::AlreadyStarted,
            SCAN_FAILED_APPLICATION_REGISTRATION_FAILED => Self::RegistrationFailed,
            SCAN_FAILED_INTERNAL_ERROR => Self::InternalError,
            SCAN_FAILED_FEATURE_UNSUPPORTED => Self::FeatureUnsupported,
            other => Self::Unknown(other),
        }
    }
    pub fn code(&self) -> i32 {
        match self {
            Self::AlreadyStarted => SCAN_FAILED_ALREADY_STARTED,
            Self::RegistrationFailed => SCAN_FAILED_APPLICATION_REGISTRATION_FAILED,
            Self::InternalError => SCAN_FAILED_INTERNAL_ERROR,
            Self::FeatureUnsupported => SCAN_FAILED_FEATURE_UNSUPPORTED,
            Self::Unknown(code) => *code,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::AlreadyStarted => "SCAN_FAILED_ALREADY_STARTED",
            Self::RegistrationFailed => "SCAN_FAILED_APPLICATION_REGISTRATION_FAILED",
            Self::InternalError => "SCAN_FAILED_INTERNAL_ERROR",
            Self::FeatureUnsupported => "SCAN_FAILED_FEATURE_UNSUPPORTED",
            Self::Unknown(_) => "UNKNOWN_FAILURE",
        }
    }
}
impl From<i32> for FailureKind {
    fn from(value: i32) -> Self {
        Self::from_code(value)
    }
}
impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
