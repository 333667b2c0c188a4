//! Configuration constants and profile loading for stockline
//!
//! Settings are resolved in three layers: built-in defaults, a named section
//! of the INI profile file, then command line overrides.

use crate::cmd_args::CommandLineArgs;
use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default profile file path for stockline
pub const DEFAULT_PROFILE_PATH: &str = "~/.stockline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "STOCKLINE_PROFILE_PATH";

/// Catalog service used when no profile names one
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Rows requested on first load
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page sizes offered by the pager
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Connection and paging settings for one catalog profile
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProfile {
    base_url: String,
    page_size: usize,
    page_size_options: Vec<usize>,
    timeout: Option<Duration>,
}

impl Default for CatalogProfile {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            timeout: None,
        }
    }
}

impl CatalogProfile {
    /// Profile pointing at a specific service, otherwise default
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// Same profile with a request timeout
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Apply command line overrides on top of the profile values
    pub fn apply_args(&mut self, args: &CommandLineArgs) {
        if let Some(url) = args.base_url() {
            self.base_url = normalize_base_url(url);
        }
        if let Some(size) = args.page_size() {
            self.page_size = size;
        }
        self.settle_page_size();
    }

    /// Keep the default page size inside the offered options
    fn settle_page_size(&mut self) {
        if self.page_size_options.is_empty() {
            self.page_size_options = DEFAULT_PAGE_SIZE_OPTIONS.to_vec();
        }
        self.page_size_options.sort_unstable();
        self.page_size_options.dedup();

        if !self.page_size_options.contains(&self.page_size) {
            let fallback = self.page_size_options[0];
            tracing::warn!(
                "Page size {} is not one of {:?}, using {}",
                self.page_size,
                self.page_size_options,
                fallback
            );
            self.page_size = fallback;
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn parse_page_size_options(raw: &str) -> Result<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| format!("invalid page size option '{s}'"))
        })
        .collect()
}

/// Reads catalog profiles from an INI file
///
/// ```ini
/// [default]
/// base_url = https://dummyjson.com
/// page_size = 5
/// page_size_options = 5,10,20,50
/// timeout_ms = 10000
/// ```
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: shellexpand::tilde(path).into_owned(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Load a named profile. Returns `Ok(None)` when the file or the section is absent.
    pub fn get_profile(&self, name: &str) -> Result<Option<CatalogProfile>> {
        if !Path::new(&self.path).exists() {
            tracing::debug!("Profile file '{}' does not exist", self.path);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&self.path)
            .with_context(|| format!("failed to read profile file '{}'", self.path))?;

        let Some(section) = ini.section(Some(name)) else {
            return Ok(None);
        };

        let mut profile = CatalogProfile::default();

        if let Some(url) = section.get("base_url") {
            profile.base_url = normalize_base_url(url);
        }
        if let Some(size) = section.get("page_size") {
            profile.page_size = size
                .trim()
                .parse()
                .with_context(|| format!("invalid page_size '{size}' in profile '{name}'"))?;
        }
        if let Some(options) = section.get("page_size_options") {
            profile.page_size_options = parse_page_size_options(options)
                .with_context(|| format!("invalid page_size_options in profile '{name}'"))?;
        }
        if let Some(timeout) = section.get("timeout_ms") {
            let millis: u64 = timeout
                .trim()
                .parse()
                .with_context(|| format!("invalid timeout_ms '{timeout}' in profile '{name}'"))?;
            profile.timeout = Some(Duration::from_millis(millis));
        }

        profile.settle_page_size();
        Ok(Some(profile))
    }
}

/// Fully resolved runtime settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub profile_name: String,
    pub profile_path: String,
    pub catalog: CatalogProfile,
}

impl AppSettings {
    /// Resolve settings from the profile file and command line
    pub fn resolve(args: &CommandLineArgs) -> Result<Self> {
        let profile_path = get_profile_path();
        Self::resolve_from(args, &profile_path)
    }

    pub fn resolve_from(args: &CommandLineArgs, profile_path: &str) -> Result<Self> {
        let store = IniProfileStore::new(profile_path);
        let mut catalog = match store.get_profile(args.profile())? {
            Some(profile) => {
                tracing::debug!("Profile '{}' loaded from '{}'", args.profile(), store.path());
                profile
            }
            None => {
                tracing::debug!("Profile '{}' not found, using defaults", args.profile());
                CatalogProfile::default()
            }
        };
        catalog.apply_args(args);

        Ok(Self {
            profile_name: args.profile().to_string(),
            profile_path: profile_path.to_string(),
            catalog,
        })
    }
}
