use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::UrlScope;
use crate::errors::{ClientError, Result};
use crate::models::{PerPage, SortField, SortOrder, SortSpec};

/// Config file looked up in the working directory when `-c` is not given
pub const DEFAULT_CONFIG_FILE: &str = "shortlink-console.toml";

/// Environment prefix; `SLC__API__BASE_URL` overrides `api.base_url`
pub const ENV_PREFIX: &str = "SLC";

/// 静态配置（从 TOML 和环境变量加载，启动时使用）
///
/// - api: 后端地址、超时、会话文件
/// - ui: 列表默认值和 TUI 刷新间隔
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_FILE, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ClientError::config(format!("Failed to build config: {}", e)))?;

        let config: StaticConfig = settings
            .try_deserialize()
            .map_err(|e| ClientError::config(format!("Failed to deserialize config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the client cannot work with
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.api.base_url).map_err(|e| {
            ClientError::config(format!("api.base_url '{}': {}", self.api.base_url, e))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ClientError::config(format!(
                "api.base_url '{}' must use http or https",
                self.api.base_url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ClientError::config("api.timeout_secs must be positive"));
        }
        self.ui.per_page()?;
        self.ui.scope()?;
        self.ui.sort()?;
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ClientError::config(format!(
                "logging.format '{}': expected text or json",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// Base used to build `<base>/<code>` short links in tables
    pub fn short_url_base(&self) -> &str {
        self.ui
            .short_url_base
            .as_deref()
            .filter(|b| !b.is_empty())
            .unwrap_or(&self.api.base_url)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let body = toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("# Error generating sample config: {}\n", e));
        format!(
            "# shortlink-console configuration\n\
             # Environment variables override this file, e.g. {}__API__BASE_URL=https://sho.rt\n\n{}",
            ENV_PREFIX, body
        )
    }

    /// 保存配置到 TOML 文件
    pub fn save_sample_to_file<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::generate_sample_config())
            .map_err(|e| ClientError::io(format!("{}: {}", path.display(), e)))
    }
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Where the session cookie is kept between runs; empty disables it
    #[serde(default = "default_session_file")]
    pub session_file: String,
}

impl ApiConfig {
    pub fn session_path(&self) -> Option<PathBuf> {
        let trimmed = self.session_file.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

/// 列表与界面默认值
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    #[serde(default = "default_scope")]
    pub default_scope: String,
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,
    #[serde(default = "default_sort_by")]
    pub default_sort_by: String,
    #[serde(default = "default_order")]
    pub default_order: String,
    /// Defaults to `api.base_url`
    #[serde(default)]
    pub short_url_base: Option<String>,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl UiConfig {
    pub fn scope(&self) -> Result<UrlScope> {
        self.default_scope
            .parse()
            .map_err(|e: String| ClientError::config(format!("ui.default_scope: {}", e)))
    }

    pub fn per_page(&self) -> Result<PerPage> {
        PerPage::try_from(self.default_per_page)
            .map_err(|e| ClientError::config(format!("ui.default_per_page: {}", e)))
    }

    pub fn sort(&self) -> Result<SortSpec> {
        let sort_by: SortField = self
            .default_sort_by
            .parse()
            .map_err(|e: String| ClientError::config(format!("ui.default_sort_by: {}", e)))?;
        let order: SortOrder = self
            .default_order
            .parse()
            .map_err(|e: String| ClientError::config(format!("ui.default_order: {}", e)))?;
        Ok(SortSpec::new(sort_by, order))
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_session_file() -> String {
    ".shortlink-session.json".to_string()
}

fn default_scope() -> String {
    "mine".to_string()
}

fn default_per_page() -> u32 {
    20
}

fn default_sort_by() -> String {
    "created_at".to_string()
}

fn default_order() -> String {
    "desc".to_string()
}

fn default_tick_rate_ms() -> u64 {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_enable_rotation() -> bool {
    true
}

fn default_max_backups() -> u32 {
    5
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            session_file: default_session_file(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_scope: default_scope(),
            default_per_page: default_per_page(),
            default_sort_by: default_sort_by(),
            default_order: default_order(),
            short_url_base: None,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            enable_rotation: default_enable_rotation(),
            max_backups: default_max_backups(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StaticConfig::default();
        config.validate().unwrap();
        assert_eq!(config.ui.scope().unwrap(), UrlScope::Mine);
        assert_eq!(config.ui.per_page().unwrap(), PerPage::Twenty);
        assert_eq!(config.ui.sort().unwrap(), SortSpec::default());
        assert_eq!(config.short_url_base(), "http://localhost:5000");
        assert_eq!(
            config.api.session_path(),
            Some(PathBuf::from(".shortlink-session.json"))
        );
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = StaticConfig::default();
        config.ui.default_per_page = 25;
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));

        let mut config = StaticConfig::default();
        config.api.base_url = "ftp://files.example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = StaticConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = StaticConfig::generate_sample_config();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }

    #[test]
    fn test_empty_session_file_disables_persistence() {
        let api = ApiConfig {
            session_file: "  ".to_string(),
            ..Default::default()
        };
        assert!(api.session_path().is_none());
    }
}
