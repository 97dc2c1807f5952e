//! Test utilities shared across crate-level unit tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::app::{FirebaseApp, FirebaseOptions};

static PROCESS_STATE: Mutex<()> = Mutex::new(());

/// Serializes tests that touch process-wide state: the app registry, the
/// bootstrap bundle slot, and environment variables.
pub(crate) fn process_state_guard() -> MutexGuard<'static, ()> {
    PROCESS_STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Build an app with the given options for use in tests.
///
/// The app is constructed directly, bypassing the registry, so handle-level
/// tests stay isolated from registry state.
pub(crate) fn test_app_with_options(options: FirebaseOptions) -> FirebaseApp {
    FirebaseApp::new("test", options)
}
