use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard};

use crate::app::types::FirebaseApp;

static APPS: LazyLock<Mutex<HashMap<String, FirebaseApp>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub(crate) fn apps() -> MutexGuard<'static, HashMap<String, FirebaseApp>> {
    APPS.lock().unwrap()
}

#[cfg(test)]
pub(crate) fn clear_apps_for_tests() {
    apps().clear();
}
