use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Configuration record handed to [`initialize_app`](crate::app::initialize_app).
///
/// Every field is optional so the record can be assembled straight from the
/// process environment; validation of which fields are required for a usable
/// client lives in the bootstrap layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FirebaseOptions {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
}

impl FirebaseOptions {
    /// True when at least one field carries a value. An all-empty record is
    /// rejected by `initialize_app`.
    pub fn is_defined(&self) -> bool {
        self.api_key.is_some()
            || self.auth_domain.is_some()
            || self.project_id.is_some()
            || self.storage_bucket.is_some()
            || self.messaging_sender_id.is_some()
            || self.app_id.is_some()
            || self.measurement_id.is_some()
    }
}

/// Cheap-to-clone handle for one registered backend app.
///
/// All clones share the same inner state; [`FirebaseApp::ptr_eq`] tests
/// whether two handles refer to the same underlying instance.
#[derive(Clone)]
pub struct FirebaseApp {
    inner: Arc<FirebaseAppInner>,
}

struct FirebaseAppInner {
    name: Arc<str>,
    options: FirebaseOptions,
    is_deleted: AtomicBool,
}

impl FirebaseApp {
    pub(crate) fn new(name: impl Into<String>, options: FirebaseOptions) -> Self {
        Self {
            inner: Arc::new(FirebaseAppInner {
                name: Arc::from(name.into().into_boxed_str()),
                options,
                is_deleted: AtomicBool::new(false),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn options(&self) -> FirebaseOptions {
        self.inner.options.clone()
    }

    pub fn project_id(&self) -> Option<String> {
        self.inner.options.project_id.clone()
    }

    /// True when `other` is a clone of the same underlying app instance.
    pub fn ptr_eq(&self, other: &FirebaseApp) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn is_deleted(&self) -> bool {
        self.inner.is_deleted.load(Ordering::SeqCst)
    }

    pub(crate) fn set_is_deleted(&self, value: bool) {
        self.inner.is_deleted.store(value, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for FirebaseApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseApp")
            .field("name", &self.name())
            .field("project_id", &self.project_id())
            .field("is_deleted", &self.is_deleted())
            .finish()
    }
}
