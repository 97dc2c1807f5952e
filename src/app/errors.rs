use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    NoApp { app_name: String },
    BadAppName { app_name: String },
    DuplicateApp { app_name: String },
    NoOptions,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoApp { app_name } => {
                write!(
                    f,
                    "No backend app '{app_name}' has been created - call initialize_app() first"
                )
            }
            AppError::BadAppName { app_name } => {
                write!(f, "Illegal app name: '{app_name}'")
            }
            AppError::DuplicateApp { app_name } => write!(
                f,
                "Backend app named '{app_name}' already exists with different options"
            ),
            AppError::NoOptions => {
                write!(f, "Options must provide at least one configuration value")
            }
        }
    }
}

impl std::error::Error for AppError {}
