//! Static file serving module
//!
//! Resolves a prefix-stripped request path against the static root, with
//! canonicalization-based protection against directory traversal.

use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a static asset; `rest` is the request path with the mount prefix
/// already stripped.
pub async fn serve(
    ctx: &RequestContext<'_>,
    cfg: &crate::config::Config,
    rest: &str,
) -> Response<Full<Bytes>> {
    match load(&cfg.ui.static_dir, rest).await {
        Some((content, content_type)) => {
            http::response::build_file_response(content, content_type, ctx.is_head)
        }
        None => http::build_404_response(),
    }
}

/// Load a file from the static root.
///
/// Returns `None` for anything that must be a 404: missing files,
/// directories without an index, and paths that escape the root. Traversal
/// attempts and escapes via symlink both fail the containment check, since
/// canonicalization resolves them before the comparison.
pub async fn load(static_dir: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    let root = match Path::new(static_dir).canonicalize() {
        Ok(root) => root,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    let relative = path.trim_start_matches('/');
    let mut file_path = root.join(relative);

    // Directories are answered by their index file, never a listing
    if file_path.is_dir() {
        file_path = file_path.join("index.html");
    }

    // Missing files are a plain 404, nothing to log
    let Ok(canonical) = file_path.canonicalize() else {
        return None;
    };
    if !canonical.starts_with(&root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            canonical.display()
        ));
        return None;
    }
    if canonical.is_dir() {
        return None;
    }

    let content = match fs::read(&canonical).await {
        Ok(content) => content,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    fn fixture() -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("static");
        std_fs::create_dir_all(root.join("css")).unwrap();
        std_fs::write(root.join("css/main.css"), "body { margin: 0 }").unwrap();
        std_fs::write(dir.path().join("secret.txt"), "outside the root").unwrap();
        (dir, root.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn serves_existing_file_with_content_type() {
        let (_dir, root) = fixture();
        let (content, content_type) = load(&root, "/css/main.css").await.unwrap();
        assert_eq!(content, b"body { margin: 0 }");
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn missing_file_is_none() {
        let (_dir, root) = fixture();
        assert!(load(&root, "/css/missing.css").await.is_none());
    }

    #[tokio::test]
    async fn traversal_outside_root_is_rejected() {
        let (_dir, root) = fixture();
        assert!(load(&root, "/../secret.txt").await.is_none());
        assert!(load(&root, "/css/../../secret.txt").await.is_none());
    }

    #[tokio::test]
    async fn directory_without_index_is_none() {
        let (_dir, root) = fixture();
        assert!(load(&root, "/css").await.is_none());
        assert!(load(&root, "/").await.is_none());
    }

    #[tokio::test]
    async fn directory_with_index_serves_it() {
        let (_dir, root) = fixture();
        std_fs::write(Path::new(&root).join("index.html"), "<p>index</p>").unwrap();
        let (content, content_type) = load(&root, "/").await.unwrap();
        assert_eq!(content, b"<p>index</p>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }
}
