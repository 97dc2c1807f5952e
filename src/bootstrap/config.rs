use std::env;

use crate::app::FirebaseOptions;

// Configuration fields.
pub static ENV_API_KEY: &str = "FIREBASE_API_KEY";
pub static ENV_AUTH_DOMAIN: &str = "FIREBASE_AUTH_DOMAIN";
pub static ENV_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
pub static ENV_STORAGE_BUCKET: &str = "FIREBASE_STORAGE_BUCKET";
pub static ENV_MESSAGING_SENDER_ID: &str = "FIREBASE_MESSAGING_SENDER_ID";
pub static ENV_APP_ID: &str = "FIREBASE_APP_ID";
pub static ENV_MEASUREMENT_ID: &str = "FIREBASE_MEASUREMENT_ID";

// Control flags.
pub static ENV_APP_ENV: &str = "APP_ENV";
pub static ENV_USE_EMULATOR: &str = "FIREBASE_USE_EMULATOR";
pub static ENV_EXECUTION_PHASE: &str = "APP_EXECUTION_PHASE";

// Emulator endpoints, overridable per environment.
pub static ENV_FIRESTORE_EMULATOR_HOST: &str = "FIRESTORE_EMULATOR_HOST";
pub static ENV_AUTH_EMULATOR_HOST: &str = "FIREBASE_AUTH_EMULATOR_HOST";

pub static DEFAULT_FIRESTORE_EMULATOR_HOST: &str = "localhost:8080";
pub static DEFAULT_AUTH_EMULATOR_URL: &str = "http://localhost:9099";

/// Marker substring identifying a placeholder configuration value.
pub static PLACEHOLDER_SENTINEL: &str = "build-placeholder";

/// Where in the application lifecycle the accessor is being called from.
///
/// Injected explicitly by the bootstrap caller rather than sniffed from the
/// environment, so the initializer stays testable; [`ExecutionPhase::from_env`]
/// is a convenience for entry points that want the flag from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutionPhase {
    /// Serving live traffic; a working backend is mandatory.
    Runtime,
    /// Static build or server-side render; no network credentials required.
    Build,
}

impl ExecutionPhase {
    pub fn from_env() -> Self {
        match env_value(ENV_EXECUTION_PHASE).as_deref() {
            Some(value) if value.eq_ignore_ascii_case("runtime") => ExecutionPhase::Runtime,
            _ => ExecutionPhase::Build,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExecutionPhase::Runtime => "runtime",
            ExecutionPhase::Build => "build",
        }
    }
}

/// Which configuration a handle bundle was created from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigSource {
    Real,
    Placeholder,
}

/// Environment-sourced backend configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_value(ENV_API_KEY),
            auth_domain: env_value(ENV_AUTH_DOMAIN),
            project_id: env_value(ENV_PROJECT_ID),
            storage_bucket: env_value(ENV_STORAGE_BUCKET),
            messaging_sender_id: env_value(ENV_MESSAGING_SENDER_ID),
            app_id: env_value(ENV_APP_ID),
            measurement_id: env_value(ENV_MEASUREMENT_ID),
        }
    }

    /// Hardcoded configuration that the client library accepts structurally
    /// but that no network operation can succeed against. Lets offline build
    /// steps proceed without credentials.
    pub fn placeholder() -> Self {
        Self {
            api_key: Some("build-placeholder".to_string()),
            auth_domain: Some("build-placeholder.firebaseapp.com".to_string()),
            project_id: Some("build-placeholder".to_string()),
            storage_bucket: Some("build-placeholder.appspot.com".to_string()),
            messaging_sender_id: Some("123456789".to_string()),
            app_id: Some("1:123456789:web:placeholder".to_string()),
            measurement_id: Some("G-PLACEHOLDER".to_string()),
        }
    }

    /// REAL iff the API key, auth domain and project identifier are all
    /// present and none carries the placeholder sentinel.
    pub fn is_complete(&self) -> bool {
        field_is_real(&self.api_key)
            && field_is_real(&self.auth_domain)
            && field_is_real(&self.project_id)
    }

    /// Environment variable names for the required fields that are absent or
    /// placeholder-valued. Empty iff [`BackendConfig::is_complete`].
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !field_is_real(&self.api_key) {
            missing.push(ENV_API_KEY);
        }
        if !field_is_real(&self.auth_domain) {
            missing.push(ENV_AUTH_DOMAIN);
        }
        if !field_is_real(&self.project_id) {
            missing.push(ENV_PROJECT_ID);
        }
        missing
    }

    pub fn into_options(self) -> FirebaseOptions {
        FirebaseOptions {
            api_key: self.api_key,
            auth_domain: self.auth_domain,
            project_id: self.project_id,
            storage_bucket: self.storage_bucket,
            messaging_sender_id: self.messaging_sender_id,
            app_id: self.app_id,
            measurement_id: self.measurement_id,
        }
    }
}

fn field_is_real(value: &Option<String>) -> bool {
    matches!(value, Some(v) if !v.contains(PLACEHOLDER_SENTINEL))
}

/// Classify the options an already-registered app was created from.
pub(crate) fn options_are_real(options: &FirebaseOptions) -> bool {
    field_is_real(&options.api_key)
        && field_is_real(&options.auth_domain)
        && field_is_real(&options.project_id)
}

pub fn development_mode() -> bool {
    matches!(env_value(ENV_APP_ENV).as_deref(), Some("development"))
}

pub fn emulator_opt_in() -> bool {
    matches!(env_value(ENV_USE_EMULATOR).as_deref(), Some("true"))
}

/// Emulation runs only when development mode is active and the opt-in flag is
/// set; never implicitly.
pub fn emulation_requested() -> bool {
    development_mode() && emulator_opt_in()
}

pub(crate) fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::process_state_guard;
    use std::env;

    fn clear_config_env() {
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
            ENV_EXECUTION_PHASE,
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn from_env_treats_blank_values_as_absent() {
        let _guard = process_state_guard();
        clear_config_env();
        env::set_var(ENV_API_KEY, "   ");
        env::set_var(ENV_PROJECT_ID, "demo-project");
        let config = BackendConfig::from_env();
        assert_eq!(config.api_key, None);
        assert_eq!(config.project_id.as_deref(), Some("demo-project"));
        clear_config_env();
    }

    #[test]
    fn placeholder_is_structurally_defined_but_not_complete() {
        let placeholder = BackendConfig::placeholder();
        assert!(placeholder.clone().into_options().is_defined());
        assert!(!placeholder.is_complete());
        assert_eq!(
            placeholder.missing_keys(),
            vec![ENV_API_KEY, ENV_AUTH_DOMAIN, ENV_PROJECT_ID]
        );
    }

    #[test]
    fn missing_keys_names_only_absent_fields() {
        let config = BackendConfig {
            api_key: Some("key".to_string()),
            auth_domain: Some("app.firebaseapp.com".to_string()),
            ..Default::default()
        };
        assert!(!config.is_complete());
        assert_eq!(config.missing_keys(), vec![ENV_PROJECT_ID]);
    }

    #[test]
    fn complete_config_has_no_missing_keys() {
        let config = BackendConfig {
            api_key: Some("key".to_string()),
            auth_domain: Some("app.firebaseapp.com".to_string()),
            project_id: Some("project".to_string()),
            ..Default::default()
        };
        assert!(config.is_complete());
        assert!(config.missing_keys().is_empty());
    }

    #[test]
    fn execution_phase_defaults_to_build() {
        let _guard = process_state_guard();
        clear_config_env();
        assert_eq!(ExecutionPhase::from_env(), ExecutionPhase::Build);
        env::set_var(ENV_EXECUTION_PHASE, "Runtime");
        assert_eq!(ExecutionPhase::from_env(), ExecutionPhase::Runtime);
        clear_config_env();
    }

    #[test]
    fn emulation_requires_both_flags() {
        let _guard = process_state_guard();
        clear_config_env();
        assert!(!emulation_requested());
        env::set_var(ENV_USE_EMULATOR, "true");
        assert!(!emulation_requested());
        env::set_var(ENV_APP_ENV, "development");
        assert!(emulation_requested());
        env::remove_var(ENV_USE_EMULATOR);
        assert!(!emulation_requested());
        clear_config_env();
    }
}
