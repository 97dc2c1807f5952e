//! Backend bootstrap layer for the mini games web application.
//!
//! The crate does two things:
//!
//! - **Bootstrap** the one process-wide backend client handle bundle
//!   (app + document database + auth, optionally analytics) from
//!   environment-sourced configuration, with a placeholder fallback for
//!   offline build steps — see [`bootstrap::backend_handles`].
//! - **Declare** the static mini games catalog (banners, categories, games)
//!   and its presentation color-token helpers — see [`games`].
//!
//! ```no_run
//! use minigames_backend::bootstrap::{backend_handles, ExecutionPhase};
//!
//! let handles = backend_handles(ExecutionPhase::from_env())?;
//! let _db = handles.firestore();
//! let _auth = handles.auth();
//! # Ok::<(), minigames_backend::bootstrap::BootstrapError>(())
//! ```

pub mod analytics;
pub mod app;
pub mod auth;
pub mod bootstrap;
pub mod firestore;
pub mod games;
pub mod logger;

#[cfg(test)]
pub(crate) mod test_support;
