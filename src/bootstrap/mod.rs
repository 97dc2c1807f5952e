//! Backend-client initializer.
//!
//! Owns the one process-wide handle bundle (app + firestore + auth) and the
//! decision logic selecting between real and placeholder configuration per
//! execution phase. See [`backend_handles`] for the decision table.

mod api;
mod config;
mod errors;

pub use api::{backend_handles, connect_emulators, BackendHandles, EmulatorReport, EmulatorStatus};
pub use config::{
    development_mode, emulation_requested, emulator_opt_in, BackendConfig, ConfigSource,
    ExecutionPhase, DEFAULT_AUTH_EMULATOR_URL, DEFAULT_FIRESTORE_EMULATOR_HOST, ENV_API_KEY,
    ENV_APP_ENV, ENV_APP_ID, ENV_AUTH_DOMAIN, ENV_AUTH_EMULATOR_HOST, ENV_EXECUTION_PHASE,
    ENV_FIRESTORE_EMULATOR_HOST, ENV_MEASUREMENT_ID, ENV_MESSAGING_SENDER_ID, ENV_PROJECT_ID,
    ENV_STORAGE_BUCKET, ENV_USE_EMULATOR, PLACEHOLDER_SENTINEL,
};
pub use errors::{BootstrapError, BootstrapResult};
