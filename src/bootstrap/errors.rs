use std::fmt;

use crate::app::AppError;

pub type BootstrapResult<T> = Result<T, BootstrapError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// Required settings are absent in a context where no fallback is
    /// permitted (runtime phase).
    Configuration { missing: Vec<&'static str> },
    /// A placeholder bundle already exists and real configuration appeared
    /// afterwards; the bundle cannot be replaced in-process.
    InitializationConflict,
    App(AppError),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Configuration { missing } => {
                write!(
                    f,
                    "Missing required backend configuration: {}. Set these variables in the deployment environment.",
                    missing.join(", ")
                )
            }
            BootstrapError::InitializationConflict => {
                write!(
                    f,
                    "Backend was initialized with placeholder configuration during the build phase \
                     and real configuration only became available later. Fix the deployment \
                     pipeline so the FIREBASE_* variables are present at build time."
                )
            }
            BootstrapError::App(err) => write!(f, "Backend app error: {err}"),
        }
    }
}

impl std::error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootstrapError::App(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AppError> for BootstrapError {
    fn from(err: AppError) -> Self {
        BootstrapError::App(err)
    }
}
