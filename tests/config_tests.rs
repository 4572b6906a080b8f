//! Configuration loading: file, environment overrides, validation

use shortlink_console::client::UrlScope;
use shortlink_console::config::StaticConfig;
use shortlink_console::errors::ClientError;
use shortlink_console::models::{PerPage, SortField, SortOrder};
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("shortlink-console.toml");
    std::fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_file_values_and_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
base_url = "https://sho.rt"

[ui]
default_scope = "all"
default_per_page = 50
default_sort_by = "click_count"
default_order = "asc"
"#,
    );

    let config = StaticConfig::load(Some(&path)).unwrap();
    assert_eq!(config.api.base_url, "https://sho.rt");
    assert_eq!(config.ui.scope().unwrap(), UrlScope::All);
    assert_eq!(config.ui.per_page().unwrap(), PerPage::Fifty);
    let sort = config.ui.sort().unwrap();
    assert_eq!(sort.sort_by, SortField::ClickCount);
    assert_eq!(sort.order, SortOrder::Asc);
    // untouched sections keep their defaults
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.ui.tick_rate_ms, 200);
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[ui]\nshort_url_base = \"https://file.example\"\n");

    // SAFETY: no other test in this binary reads this variable
    unsafe { std::env::set_var("SLC__UI__SHORT_URL_BASE", "https://env.example") };
    let config = StaticConfig::load(Some(&path));
    unsafe { std::env::remove_var("SLC__UI__SHORT_URL_BASE") };

    assert_eq!(config.unwrap().short_url_base(), "https://env.example");
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();

    let path = write_config(&dir, "[ui]\ndefault_per_page = 30\n");
    let err = StaticConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
    assert!(err.message().contains("default_per_page"));

    let path = write_config(&dir, "[api]\nbase_url = \"ftp://sho.rt\"\n");
    let err = StaticConfig::load(Some(&path)).unwrap_err();
    assert!(err.message().contains("http or https"));

    let path = write_config(&dir, "[logging]\nformat = \"xml\"\n");
    assert!(StaticConfig::load(Some(&path)).is_err());
}

#[test]
fn test_missing_explicit_file_fails() {
    let err = StaticConfig::load(Some("/nonexistent/dir/shortlink-console.toml")).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn test_generated_sample_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("sample.toml");
    StaticConfig::save_sample_to_file(&path).unwrap();

    let loaded = StaticConfig::load(Some(&path.to_string_lossy())).unwrap();
    assert_eq!(loaded.api, StaticConfig::default().api);
    assert_eq!(loaded.ui.per_page().unwrap(), PerPage::Twenty);
}
