use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
///
/// # Panics
/// If called before [`init_config`].
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}

/// Non-panicking variant of [`get_config`]
pub fn try_get_config() -> Option<Arc<StaticConfig>> {
    CONFIG.get().map(|c| c.load_full())
}

/// Initialize the global configuration
///
/// Loads `path` (or `shortlink-console.toml` when absent) plus `SLC__*`
/// environment overrides. A second call keeps the first configuration.
pub fn init_config(path: Option<&str>) -> Result<Arc<StaticConfig>> {
    if let Some(existing) = CONFIG.get() {
        return Ok(existing.load_full());
    }
    let loaded = StaticConfig::load(path)?;
    Ok(CONFIG
        .get_or_init(|| ArcSwap::from_pointee(loaded))
        .load_full())
}

/// Replace the active configuration, e.g. after a CLI flag override
pub fn update_config(f: impl FnOnce(&mut StaticConfig)) -> Result<Arc<StaticConfig>> {
    let current = CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()));
    let mut next = StaticConfig::clone(&current.load());
    f(&mut next);
    next.validate()?;
    let next = Arc::new(next);
    current.store(Arc::clone(&next));
    Ok(next)
}
