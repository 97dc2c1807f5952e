//! Authentication handle.
//!
//! [`Auth`] mirrors [`Firestore`](crate::firestore::Firestore): an opaque
//! capability object plus an idempotent emulator connect. The auth emulator is
//! addressed by URL rather than host/port, so the endpoint is validated with
//! the `url` crate before any state changes.

use std::fmt;
use std::sync::{Arc, LazyLock, Mutex};

use url::Url;

use crate::app::FirebaseApp;
use crate::logger::Logger;

pub(crate) static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("@minigames/auth"));

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidEmulatorUrl { url: String, reason: String },
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidEmulatorUrl { url, reason } => {
                write!(f, "Invalid auth emulator URL '{url}': {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

#[derive(Clone)]
pub struct Auth {
    app: FirebaseApp,
    state: Arc<Mutex<AuthState>>,
}

struct AuthState {
    emulator_url: Option<Url>,
}

impl Auth {
    fn new(app: FirebaseApp) -> Self {
        Self {
            app,
            state: Arc::new(Mutex::new(AuthState { emulator_url: None })),
        }
    }

    pub fn app(&self) -> &FirebaseApp {
        &self.app
    }

    pub fn emulator_url(&self) -> Option<Url> {
        self.state.lock().unwrap().emulator_url.clone()
    }

    pub fn is_using_emulator(&self) -> bool {
        self.state.lock().unwrap().emulator_url.is_some()
    }

    /// Route this handle at a local emulator.
    ///
    /// Returns `Ok(true)` when newly connected, `Ok(false)` when an emulator
    /// endpoint was already recorded. The URL must parse and use http(s).
    pub fn connect_emulator(&self, url: &str) -> AuthResult<bool> {
        let mut state = self.state.lock().unwrap();
        if state.emulator_url.is_some() {
            return Ok(false);
        }

        let parsed = Url::parse(url).map_err(|err| AuthError::InvalidEmulatorUrl {
            url: url.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(AuthError::InvalidEmulatorUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        LOGGER.debug(format!("Auth routed to emulator at {parsed}"));
        state.emulator_url = Some(parsed);
        Ok(true)
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("app", &self.app.name())
            .field("emulator_url", &self.emulator_url())
            .finish()
    }
}

/// Derive the authentication handle for `app`.
pub fn get_auth(app: &FirebaseApp) -> Auth {
    Auth::new(app.clone())
}

pub fn connect_auth_emulator(auth: &Auth, url: &str) -> AuthResult<bool> {
    auth.connect_emulator(url)
}
