//! Session cookie store
//!
//! Holds the cookies the backend sets and replays them on credentialed
//! requests. Optionally mirrored to a JSON file so separate CLI invocations
//! share one session.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use cookie::Cookie;
use cookie::time::{Duration, OffsetDateTime};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::errors::{ClientError, Result};

#[derive(Debug, Default)]
pub struct CookieStore {
    cookies: Mutex<BTreeMap<String, String>>,
    path: Option<PathBuf>,
}

impl CookieStore {
    /// In-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by `path`; existing cookies are loaded eagerly.
    ///
    /// A missing or unreadable file yields an empty store.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cookies = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(map) => {
                    debug!("Loaded {} session cookie(s) from {}", map.len(), path.display());
                    map
                }
                Err(e) => {
                    warn!("Ignoring malformed session file {}: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self {
            cookies: Mutex::new(cookies),
            path: Some(path),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.lock().is_empty()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.cookies.lock().get(name).cloned()
    }

    /// Value for the `Cookie` request header, `None` when nothing is stored
    pub fn header_value(&self) -> Option<String> {
        let cookies = self.cookies.lock();
        if cookies.is_empty() {
            return None;
        }
        Some(
            cookies
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Apply one `Set-Cookie` header. Returns whether the store changed.
    pub fn apply_set_cookie(&self, header: &str) -> bool {
        let cookie = match Cookie::parse(header) {
            Ok(cookie) => cookie,
            Err(e) => {
                debug!("Ignoring malformed Set-Cookie header: {}", e);
                return false;
            }
        };
        let (name, value) = (cookie.name(), cookie.value());
        let mut cookies = self.cookies.lock();
        if is_expired(&cookie) || value.is_empty() {
            cookies.remove(name).is_some()
        } else {
            cookies.insert(name.to_string(), value.to_string()).as_deref() != Some(value)
        }
    }

    pub fn clear(&self) {
        self.cookies.lock().clear();
    }

    /// Write the current cookies to the backing file, if any.
    ///
    /// An empty store removes the file.
    pub fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let snapshot = self.cookies.lock().clone();
        if snapshot.is_empty() {
            if path.exists() {
                fs::remove_file(path)
                    .map_err(|e| ClientError::io(format!("{}: {}", path.display(), e)))?;
            }
            return Ok(());
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&snapshot)?;
        fs::write(path, content)
            .map_err(|e| ClientError::io(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

/// `Max-Age` takes precedence over `Expires`
fn is_expired(cookie: &Cookie<'_>) -> bool {
    match cookie.max_age() {
        Some(max_age) => max_age <= Duration::ZERO,
        None => cookie
            .expires_datetime()
            .is_some_and(|at| at <= OffsetDateTime::now_utc()),
    }
}
