use std::sync::{Arc, LazyLock, Mutex};

use crate::analytics;
use crate::app::{get_app, initialize_app, FirebaseApp};
use crate::auth::{get_auth, Auth};
use crate::bootstrap::config::{
    emulation_requested, env_value, options_are_real, BackendConfig, ConfigSource, ExecutionPhase,
    DEFAULT_AUTH_EMULATOR_URL, DEFAULT_FIRESTORE_EMULATOR_HOST, ENV_AUTH_EMULATOR_HOST,
    ENV_FIRESTORE_EMULATOR_HOST,
};
use crate::bootstrap::errors::{BootstrapError, BootstrapResult};
use crate::firestore::{get_firestore, Firestore};
use crate::logger::Logger;

pub(crate) static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("@minigames/bootstrap"));

static HANDLES: LazyLock<Mutex<Option<Arc<BackendHandles>>>> =
    LazyLock::new(|| Mutex::new(None));

/// The one Client Handle Bundle for this process.
///
/// All three sub-handles derive from the same app instance; the bundle is
/// created at most once and shared thereafter.
pub struct BackendHandles {
    app: FirebaseApp,
    firestore: Firestore,
    auth: Auth,
    source: ConfigSource,
}

impl BackendHandles {
    pub fn app(&self) -> &FirebaseApp {
        &self.app
    }

    pub fn firestore(&self) -> &Firestore {
        &self.firestore
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn source(&self) -> ConfigSource {
        self.source
    }
}

impl std::fmt::Debug for BackendHandles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendHandles")
            .field("app", &self.app.name())
            .field("source", &self.source)
            .finish()
    }
}

/// Outcome of one emulator connection attempt. Never fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmulatorStatus {
    Connected,
    AlreadyConnected,
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmulatorReport {
    pub firestore: EmulatorStatus,
    pub auth: EmulatorStatus,
}

/// Return the process-wide handle bundle, creating it on first access.
///
/// Selection follows the phase/configuration decision table: a complete
/// environment configuration always initializes a real bundle; an incomplete
/// one is a fatal [`BootstrapError::Configuration`] at runtime and a
/// placeholder bundle during build. A placeholder bundle encountered at
/// runtime after real configuration has appeared is a
/// [`BootstrapError::InitializationConflict`] — the underlying client offers
/// no re-initialization, so the deployment pipeline has to be fixed instead.
pub fn backend_handles(phase: ExecutionPhase) -> BootstrapResult<Arc<BackendHandles>> {
    let mut slot = HANDLES.lock().unwrap();

    let config = BackendConfig::from_env();
    let complete = config.is_complete();

    if let Some(existing) = slot.as_ref() {
        if phase == ExecutionPhase::Runtime && existing.source == ConfigSource::Placeholder {
            if complete {
                return Err(BootstrapError::InitializationConflict);
            }
            return Err(BootstrapError::Configuration {
                missing: config.missing_keys(),
            });
        }
        return Ok(Arc::clone(existing));
    }

    let config = if complete {
        config
    } else {
        if phase == ExecutionPhase::Runtime {
            return Err(BootstrapError::Configuration {
                missing: config.missing_keys(),
            });
        }
        LOGGER.warn(
            "Backend initialized with placeholder configuration. Set the FIREBASE_* \
             environment variables for full functionality.",
        );
        BackendConfig::placeholder()
    };

    // A prior bootstrap cycle may have left an app registered; derive from it
    // instead of creating a second top-level handle.
    let app = match get_app(None) {
        Ok(existing_app) => existing_app,
        Err(_) => initialize_app(config.into_options(), None)?,
    };
    let source = if options_are_real(&app.options()) {
        ConfigSource::Real
    } else {
        ConfigSource::Placeholder
    };
    // A reused placeholder app is as final as a cached placeholder bundle:
    // real configuration appearing only at runtime cannot upgrade it in
    // place. Incomplete runtime configuration was already rejected above.
    if phase == ExecutionPhase::Runtime && source == ConfigSource::Placeholder {
        return Err(BootstrapError::InitializationConflict);
    }

    let handles = Arc::new(BackendHandles {
        firestore: get_firestore(&app),
        auth: get_auth(&app),
        app,
        source,
    });
    LOGGER.debug(format!(
        "Backend handles created from {:?} configuration during {} phase",
        handles.source,
        phase.as_str()
    ));

    if emulation_requested() {
        let report = connect_emulators(&handles);
        LOGGER.debug(format!(
            "Emulator wiring: firestore {:?}, auth {:?}",
            report.firestore, report.auth
        ));
    }

    if phase == ExecutionPhase::Runtime {
        spawn_analytics_check(handles.app.clone());
    }

    *slot = Some(Arc::clone(&handles));
    Ok(handles)
}

/// Attempt both emulator connections.
///
/// The attempts are independent: a failure or already-connected condition on
/// one endpoint never prevents the other attempt and never reaches the caller
/// as an error.
pub fn connect_emulators(handles: &BackendHandles) -> EmulatorReport {
    let firestore = match firestore_emulator_endpoint() {
        Some((host, port)) => match handles.firestore().connect_emulator(&host, port) {
            Ok(true) => EmulatorStatus::Connected,
            Ok(false) => EmulatorStatus::AlreadyConnected,
            Err(err) => {
                LOGGER.warn(format!("Firestore emulator unavailable: {err}"));
                EmulatorStatus::Unavailable
            }
        },
        None => {
            LOGGER.warn("Firestore emulator endpoint is malformed; expected host:port");
            EmulatorStatus::Unavailable
        }
    };

    let auth_url = env_value(ENV_AUTH_EMULATOR_HOST)
        .unwrap_or_else(|| DEFAULT_AUTH_EMULATOR_URL.to_string());
    let auth = match handles.auth().connect_emulator(&auth_url) {
        Ok(true) => EmulatorStatus::Connected,
        Ok(false) => EmulatorStatus::AlreadyConnected,
        Err(err) => {
            LOGGER.warn(format!("Auth emulator unavailable: {err}"));
            EmulatorStatus::Unavailable
        }
    };

    EmulatorReport { firestore, auth }
}

fn firestore_emulator_endpoint() -> Option<(String, u16)> {
    let endpoint = env_value(ENV_FIRESTORE_EMULATOR_HOST)
        .unwrap_or_else(|| DEFAULT_FIRESTORE_EMULATOR_HOST.to_string());
    let (host, port) = endpoint.rsplit_once(':')?;
    let port = port.parse().ok()?;
    if host.is_empty() {
        return None;
    }
    Some((host.to_string(), port))
}

/// Fire-and-forget analytics enablement: runs on the ambient async runtime
/// when one exists, otherwise the check is skipped. Callers never await it.
fn spawn_analytics_check(app: FirebaseApp) {
    match tokio::runtime::Handle::try_current() {
        Ok(runtime) => {
            runtime.spawn(run_analytics_check(app));
        }
        Err(_) => {
            LOGGER.debug("No async runtime available; skipping analytics capability check");
        }
    }
}

pub(crate) async fn run_analytics_check(app: FirebaseApp) -> bool {
    if analytics::is_supported(&app).await {
        let _ = analytics::get_analytics(&app);
        return true;
    }
    false
}

#[cfg(test)]
pub(crate) fn reset_backend_for_tests() {
    HANDLES.lock().unwrap().take();
    crate::app::clear_apps_for_tests();
    crate::analytics::clear_analytics_for_tests();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::analytics_instance;
    use crate::bootstrap::config::{
        ENV_API_KEY, ENV_APP_ENV, ENV_APP_ID, ENV_AUTH_DOMAIN, ENV_MEASUREMENT_ID,
        ENV_MESSAGING_SENDER_ID, ENV_PROJECT_ID, ENV_STORAGE_BUCKET, ENV_USE_EMULATOR,
        PLACEHOLDER_SENTINEL,
    };
    use crate::test_support::process_state_guard;
    use std::env;

    fn clear_backend_env() {
        for key in [
            ENV_API_KEY,
            ENV_AUTH_DOMAIN,
            ENV_PROJECT_ID,
            ENV_STORAGE_BUCKET,
            ENV_MESSAGING_SENDER_ID,
            ENV_APP_ID,
            ENV_MEASUREMENT_ID,
            ENV_APP_ENV,
            ENV_USE_EMULATOR,
            ENV_FIRESTORE_EMULATOR_HOST,
            ENV_AUTH_EMULATOR_HOST,
        ] {
            env::remove_var(key);
        }
    }

    fn set_real_env() {
        env::set_var(ENV_API_KEY, "real-key");
        env::set_var(ENV_AUTH_DOMAIN, "real.firebaseapp.com");
        env::set_var(ENV_PROJECT_ID, "real-project");
        env::set_var(ENV_STORAGE_BUCKET, "real.appspot.com");
        env::set_var(ENV_MESSAGING_SENDER_ID, "987654321");
        env::set_var(ENV_APP_ID, "1:987654321:web:real");
        env::set_var(ENV_MEASUREMENT_ID, "G-REAL");
    }

    #[test]
    fn build_phase_without_config_falls_back_to_placeholder() {
        let _guard = process_state_guard();
        clear_backend_env();
        reset_backend_for_tests();

        let handles = backend_handles(ExecutionPhase::Build).expect("placeholder bundle");
        assert_eq!(handles.source(), ConfigSource::Placeholder);
        let api_key = handles.app().options().api_key.expect("placeholder key");
        assert!(api_key.contains(PLACEHOLDER_SENTINEL));
    }

    #[test]
    fn sub_handles_derive_from_one_app_instance() {
        let _guard = process_state_guard();
        clear_backend_env();
        set_real_env();
        reset_backend_for_tests();

        let handles = backend_handles(ExecutionPhase::Build).expect("real bundle");
        assert_eq!(handles.source(), ConfigSource::Real);
        assert!(handles.firestore().app().ptr_eq(handles.app()));
        assert!(handles.auth().app().ptr_eq(handles.app()));
        clear_backend_env();
    }

    #[test]
    fn repeated_access_returns_the_identical_bundle() {
        let _guard = process_state_guard();
        clear_backend_env();
        set_real_env();
        reset_backend_for_tests();

        let first = backend_handles(ExecutionPhase::Runtime).expect("first access");
        let second = backend_handles(ExecutionPhase::Runtime).expect("second access");
        assert!(Arc::ptr_eq(&first, &second));
        clear_backend_env();
    }

    #[test]
    fn runtime_phase_with_missing_project_id_fails_before_creating_handles() {
        let _guard = process_state_guard();
        clear_backend_env();
        env::set_var(ENV_API_KEY, "real-key");
        env::set_var(ENV_AUTH_DOMAIN, "real.firebaseapp.com");
        reset_backend_for_tests();

        let result = backend_handles(ExecutionPhase::Runtime);
        match result {
            Err(BootstrapError::Configuration { missing }) => {
                assert_eq!(missing, vec![ENV_PROJECT_ID]);
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
        // No bundle and no app may exist after the failure.
        assert!(HANDLES.lock().unwrap().is_none());
        assert!(crate::app::get_app(None).is_err());
        clear_backend_env();
    }

    #[test]
    fn placeholder_bundle_then_runtime_with_real_config_conflicts() {
        let _guard = process_state_guard();
        clear_backend_env();
        reset_backend_for_tests();

        let handles = backend_handles(ExecutionPhase::Build).expect("placeholder bundle");
        assert_eq!(handles.source(), ConfigSource::Placeholder);

        set_real_env();
        let result = backend_handles(ExecutionPhase::Runtime);
        assert_eq!(result.unwrap_err(), BootstrapError::InitializationConflict);
        clear_backend_env();
    }

    #[test]
    fn placeholder_bundle_then_runtime_still_incomplete_is_configuration_error() {
        let _guard = process_state_guard();
        clear_backend_env();
        reset_backend_for_tests();

        let _ = backend_handles(ExecutionPhase::Build).expect("placeholder bundle");
        let result = backend_handles(ExecutionPhase::Runtime);
        assert!(matches!(
            result,
            Err(BootstrapError::Configuration { .. })
        ));
        clear_backend_env();
    }

    #[test]
    fn registered_placeholder_app_at_runtime_with_real_config_conflicts() {
        let _guard = process_state_guard();
        clear_backend_env();
        reset_backend_for_tests();

        // An earlier bootstrap cycle registered the placeholder app but the
        // bundle slot is empty again.
        let placeholder = BackendConfig::placeholder();
        let _ = crate::app::initialize_app(placeholder.into_options(), None)
            .expect("placeholder app");

        set_real_env();
        let result = backend_handles(ExecutionPhase::Runtime);
        assert_eq!(result.unwrap_err(), BootstrapError::InitializationConflict);
        assert!(HANDLES.lock().unwrap().is_none());
        clear_backend_env();
    }

    #[test]
    fn registered_real_app_is_reused_for_the_bundle() {
        let _guard = process_state_guard();
        clear_backend_env();
        set_real_env();
        reset_backend_for_tests();

        let config = BackendConfig::from_env();
        let app = crate::app::initialize_app(config.into_options(), None).expect("real app");

        let handles = backend_handles(ExecutionPhase::Build).expect("real bundle");
        assert!(handles.app().ptr_eq(&app));
        assert_eq!(handles.source(), ConfigSource::Real);
        clear_backend_env();
    }

    #[test]
    fn placeholder_bundle_survives_later_build_accesses() {
        let _guard = process_state_guard();
        clear_backend_env();
        reset_backend_for_tests();

        let first = backend_handles(ExecutionPhase::Build).expect("placeholder bundle");
        set_real_env();
        let second = backend_handles(ExecutionPhase::Build).expect("build reuse");
        assert!(Arc::ptr_eq(&first, &second));
        clear_backend_env();
    }

    #[test]
    fn emulator_attempts_are_independent_and_non_fatal() {
        let _guard = process_state_guard();
        clear_backend_env();
        reset_backend_for_tests();
        env::set_var(ENV_AUTH_EMULATOR_HOST, "not a url");

        let handles = backend_handles(ExecutionPhase::Build).expect("placeholder bundle");
        let report = connect_emulators(&handles);
        assert_eq!(report.firestore, EmulatorStatus::Connected);
        assert_eq!(report.auth, EmulatorStatus::Unavailable);
        assert_eq!(handles.firestore().host(), "localhost:8080");

        // The failed endpoint stays failed; the connected one reports as such.
        let report = connect_emulators(&handles);
        assert_eq!(report.firestore, EmulatorStatus::AlreadyConnected);
        assert_eq!(report.auth, EmulatorStatus::Unavailable);
        clear_backend_env();
    }

    #[test]
    fn emulators_wire_automatically_when_explicitly_requested() {
        let _guard = process_state_guard();
        clear_backend_env();
        reset_backend_for_tests();
        env::set_var(ENV_APP_ENV, "development");
        env::set_var(ENV_USE_EMULATOR, "true");

        let handles = backend_handles(ExecutionPhase::Build).expect("placeholder bundle");
        assert!(handles.firestore().is_using_emulator());
        assert!(handles.auth().is_using_emulator());
        assert_eq!(
            handles.auth().emulator_url().unwrap().as_str(),
            "http://localhost:9099/"
        );
        clear_backend_env();
    }

    #[test]
    fn emulators_stay_disconnected_without_the_opt_in() {
        let _guard = process_state_guard();
        clear_backend_env();
        reset_backend_for_tests();
        env::set_var(ENV_APP_ENV, "development");

        let handles = backend_handles(ExecutionPhase::Build).expect("placeholder bundle");
        assert!(!handles.firestore().is_using_emulator());
        assert!(!handles.auth().is_using_emulator());
        clear_backend_env();
    }

    #[tokio::test]
    async fn analytics_check_enables_analytics_when_supported() {
        let _guard = process_state_guard();
        reset_backend_for_tests();
        let app = crate::test_support::test_app_with_options(crate::app::FirebaseOptions {
            api_key: Some("real-key".to_string()),
            measurement_id: Some("G-REAL".to_string()),
            ..Default::default()
        });

        assert!(run_analytics_check(app).await);
        assert!(analytics_instance().is_some());
    }

    #[tokio::test]
    async fn analytics_check_is_a_no_op_without_measurement_id() {
        let _guard = process_state_guard();
        reset_backend_for_tests();
        let app = crate::test_support::test_app_with_options(crate::app::FirebaseOptions {
            api_key: Some("real-key".to_string()),
            ..Default::default()
        });

        assert!(!run_analytics_check(app).await);
        assert!(analytics_instance().is_none());
    }

    #[test]
    fn accessor_outside_a_runtime_never_blocks_on_analytics() {
        let _guard = process_state_guard();
        clear_backend_env();
        set_real_env();
        reset_backend_for_tests();

        // Runtime phase without an ambient tokio runtime: the capability
        // check is skipped, not awaited.
        let handles = backend_handles(ExecutionPhase::Runtime).expect("real bundle");
        assert_eq!(handles.source(), ConfigSource::Real);
        assert!(analytics_instance().is_none());
        clear_backend_env();
    }
}
