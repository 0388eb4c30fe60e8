/// Environment variable holding the path prefix the site is deployed under.
pub const BASE_PATH_VAR: &str = "PAGES_BASE_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_path: Option<String>,
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_path = lookup(BASE_PATH_VAR).and_then(|raw| normalize_base_path(&raw));
        Self { base_path }
    }

    /// Apply the base path to a site-absolute path. Anchors and external URLs are returned
    /// unchanged.
    pub fn href(&self, path: &str) -> String {
        match &self.base_path {
            Some(base) if path.starts_with('/') && !path.starts_with("//") => {
                format!("{base}{path}")
            }
            _ => path.to_string(),
        }
    }
}

fn normalize_base_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{trimmed}"))
    }
}
