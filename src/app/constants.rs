/// Name an app registers under when the caller does not supply one.
pub static DEFAULT_ENTRY_NAME: &str = "[DEFAULT]";
