//! Usage analytics handle.
//!
//! Analytics is an optional side feature: the bootstrap layer kicks off an
//! asynchronous capability check and enables the handle only when the check
//! passes. Nothing in the crate ever waits on it.

use std::fmt;
use std::sync::{LazyLock, Mutex};

use crate::app::FirebaseApp;
use crate::logger::Logger;

pub(crate) static LOGGER: LazyLock<Logger> = LazyLock::new(|| Logger::new("@minigames/analytics"));

static ENABLED: LazyLock<Mutex<Option<Analytics>>> = LazyLock::new(|| Mutex::new(None));

#[derive(Clone)]
pub struct Analytics {
    app: FirebaseApp,
}

impl Analytics {
    pub fn app(&self) -> &FirebaseApp {
        &self.app
    }

    pub fn measurement_id(&self) -> Option<String> {
        self.app.options().measurement_id
    }
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analytics")
            .field("app", &self.app.name())
            .field("measurement_id", &self.measurement_id())
            .finish()
    }
}

/// Asynchronous capability check: analytics is supported only when the app
/// carries a measurement identifier. Never fails.
pub async fn is_supported(app: &FirebaseApp) -> bool {
    app.options()
        .measurement_id
        .is_some_and(|id| !id.trim().is_empty())
}

/// Derive (and record) the analytics handle for `app`.
///
/// The first enabled handle is remembered process-wide; later calls for the
/// same app return that instance.
pub fn get_analytics(app: &FirebaseApp) -> Analytics {
    let mut slot = ENABLED.lock().unwrap();
    if let Some(existing) = slot.as_ref() {
        if existing.app.ptr_eq(app) {
            return existing.clone();
        }
    }
    let analytics = Analytics { app: app.clone() };
    if slot.is_none() {
        LOGGER.debug(format!(
            "Analytics enabled for app '{}'",
            analytics.app.name()
        ));
        *slot = Some(analytics.clone());
    }
    analytics
}

/// The process-wide analytics handle, when the capability check has enabled
/// one.
pub fn analytics_instance() -> Option<Analytics> {
    ENABLED.lock().unwrap().clone()
}

#[cfg(test)]
pub(crate) fn clear_analytics_for_tests() {
    ENABLED.lock().unwrap().take();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FirebaseOptions;
    use crate::test_support::{process_state_guard, test_app_with_options};

    fn app_with_measurement_id(id: Option<&str>) -> FirebaseApp {
        test_app_with_options(FirebaseOptions {
            api_key: Some("test-key".to_string()),
            measurement_id: id.map(str::to_string),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn is_supported_requires_measurement_id() {
        assert!(is_supported(&app_with_measurement_id(Some("G-TEST"))).await);
        assert!(!is_supported(&app_with_measurement_id(None)).await);
        assert!(!is_supported(&app_with_measurement_id(Some("  "))).await);
    }

    #[test]
    fn get_analytics_records_the_first_instance() {
        let _guard = process_state_guard();
        clear_analytics_for_tests();
        let app = app_with_measurement_id(Some("G-TEST"));
        let first = get_analytics(&app);
        let second = get_analytics(&app);
        assert!(first.app().ptr_eq(second.app()));
        assert!(analytics_instance().is_some());
        assert_eq!(first.measurement_id().as_deref(), Some("G-TEST"));
    }

    #[test]
    fn analytics_instance_is_empty_until_enabled() {
        let _guard = process_state_guard();
        clear_analytics_for_tests();
        assert!(analytics_instance().is_none());
    }
}
