use askama::Template;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const CANDIDATE_DIRS: [&str; 4] = ["public", "../public", "excuse-gen/public", "/app/public"];

/// Finds the directory holding `index.html` and the other static assets.
///
/// An explicitly configured directory wins; otherwise the first existing
/// candidate relative to the working directory is used.
pub fn resolve_public_dir(configured: Option<&str>) -> Option<PathBuf> {
    if let Some(dir) = configured {
        let path = PathBuf::from(dir);
        if path.is_dir() {
            info!("Using configured public directory: {}", path.display());
            return Some(path);
        }
        warn!("Configured public directory does not exist: {}", dir);
        return None;
    }

    let found = CANDIDATE_DIRS
        .iter()
        .map(Path::new)
        .find(|p| p.is_dir())
        .map(Path::to_path_buf);

    match &found {
        Some(path) => info!("Found public directory at: {}", absolute(path).display()),
        None => warn!("Public directory not found in any expected location"),
    }
    found
}

pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Minimal page shown when the frontend cannot be served.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub message: String,
}

impl ErrorPage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_configured_dir_is_used() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().to_string_lossy().to_string();
        assert_eq!(
            resolve_public_dir(Some(&dir)),
            Some(temp_dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_missing_configured_dir() {
        assert_eq!(resolve_public_dir(Some("/definitely/not/here")), None);
    }

    #[test]
    fn test_error_page_escapes_message() {
        let page = ErrorPage::new("bad <path> & stuff").render().unwrap();
        assert!(page.contains("<h1>Application Error</h1>"));
        assert!(page.contains("bad &lt;path&gt; &amp; stuff"));
        assert!(!page.contains("<path>"));
    }
}
