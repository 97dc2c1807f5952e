//! Document database handle.
//!
//! [`Firestore`] is an opaque capability object derived from a
//! [`FirebaseApp`]; data operations happen downstream of this crate. The only
//! behaviour owned here is emulator routing: [`Firestore::connect_emulator`]
//! is explicitly idempotent, reporting whether the call changed anything
//! instead of throwing on a duplicate connection.

use std::fmt;
use std::sync::{Arc, LazyLock, Mutex};

use crate::app::FirebaseApp;
use crate::logger::Logger;

pub(crate) static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("@minigames/firestore"));

pub static DEFAULT_HOST: &str = "firestore.googleapis.com";

pub type FirestoreResult<T> = Result<T, FirestoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirestoreError {
    InvalidEmulatorHost { host: String },
}

impl fmt::Display for FirestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FirestoreError::InvalidEmulatorHost { host } => {
                write!(f, "Invalid Firestore emulator host: '{host}'")
            }
        }
    }
}

impl std::error::Error for FirestoreError {}

#[derive(Clone)]
pub struct Firestore {
    app: FirebaseApp,
    state: Arc<Mutex<FirestoreState>>,
}

struct FirestoreState {
    host: String,
    is_using_emulator: bool,
}

impl Firestore {
    fn new(app: FirebaseApp) -> Self {
        Self {
            app,
            state: Arc::new(Mutex::new(FirestoreState {
                host: DEFAULT_HOST.to_string(),
                is_using_emulator: false,
            })),
        }
    }

    pub fn app(&self) -> &FirebaseApp {
        &self.app
    }

    pub fn host(&self) -> String {
        self.state.lock().unwrap().host.clone()
    }

    pub fn is_using_emulator(&self) -> bool {
        self.state.lock().unwrap().is_using_emulator
    }

    /// Route this handle at a local emulator.
    ///
    /// Returns `Ok(true)` when the handle was newly connected and `Ok(false)`
    /// when it was already pointing at an emulator; the second call leaves the
    /// existing routing untouched.
    pub fn connect_emulator(&self, host: &str, port: u16) -> FirestoreResult<bool> {
        if host.trim().is_empty() {
            return Err(FirestoreError::InvalidEmulatorHost {
                host: host.to_string(),
            });
        }

        let mut state = self.state.lock().unwrap();
        if state.is_using_emulator {
            return Ok(false);
        }
        state.host = format!("{host}:{port}");
        state.is_using_emulator = true;
        LOGGER.debug(format!("Firestore routed to emulator at {}", state.host));
        Ok(true)
    }
}

impl fmt::Debug for Firestore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Firestore")
            .field("app", &self.app.name())
            .field("host", &self.host())
            .field("is_using_emulator", &self.is_using_emulator())
            .finish()
    }
}

/// Derive the document database handle for `app`.
pub fn get_firestore(app: &FirebaseApp) -> Firestore {
    Firestore::new(app.clone())
}

pub fn connect_firestore_emulator(
    firestore: &Firestore,
    host: &str,
    port: u16,
) -> FirestoreResult<bool> {
    firestore.connect_emulator(host, port)
}
