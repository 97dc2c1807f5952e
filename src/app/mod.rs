//! Process-wide registry of backend app handles.
//!
//! An app is the root object the database, auth and analytics handles derive
//! from. The registry guarantees at most one app per entry name; the default
//! entry name is [`DEFAULT_ENTRY_NAME`].

mod api;
mod constants;
mod errors;
pub(crate) mod registry;
mod types;

pub use api::{delete_app, get_app, get_apps, initialize_app, SDK_VERSION};
pub use constants::DEFAULT_ENTRY_NAME;
pub use errors::{AppError, AppResult};
pub use types::{FirebaseApp, FirebaseOptions};

#[cfg(test)]
pub(crate) use registry::clear_apps_for_tests;
