use crate::app::constants::DEFAULT_ENTRY_NAME;
use crate::app::errors::{AppError, AppResult};
use crate::app::registry;
use crate::app::types::{FirebaseApp, FirebaseOptions};

pub static SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

fn normalize_name(name: Option<&str>) -> AppResult<String> {
    let name = name.unwrap_or(DEFAULT_ENTRY_NAME);
    if name.trim().is_empty() {
        return Err(AppError::BadAppName {
            app_name: name.to_string(),
        });
    }
    Ok(name.to_string())
}

/// Register an app under `name` (the default entry name when `None`).
///
/// Initializing twice with identical options returns the existing instance;
/// asking for the same name with different options is an error, because the
/// process must never hold two top-level apps for one entry.
pub fn initialize_app(options: FirebaseOptions, name: Option<&str>) -> AppResult<FirebaseApp> {
    let name = normalize_name(name)?;

    if !options.is_defined() {
        return Err(AppError::NoOptions);
    }

    let mut apps = registry::apps();
    if let Some(existing) = apps.get(&name) {
        if existing.options() == options {
            return Ok(existing.clone());
        }
        return Err(AppError::DuplicateApp { app_name: name });
    }

    let app = FirebaseApp::new(name.clone(), options);
    apps.insert(name, app.clone());
    Ok(app)
}

pub fn get_app(name: Option<&str>) -> AppResult<FirebaseApp> {
    let lookup = name.unwrap_or(DEFAULT_ENTRY_NAME);
    if let Some(app) = registry::apps().get(lookup) {
        return Ok(app.clone());
    }
    Err(AppError::NoApp {
        app_name: lookup.to_string(),
    })
}

pub fn get_apps() -> Vec<FirebaseApp> {
    registry::apps().values().cloned().collect()
}

pub fn delete_app(app: &FirebaseApp) -> AppResult<()> {
    let removed = registry::apps().remove(app.name());
    if removed.is_some() {
        app.set_is_deleted(true);
    }
    Ok(())
}
