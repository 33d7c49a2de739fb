//! Static file responder with clean-URL redirects
//!
//! Maps a request path onto the document root and produces a [`Reply`]:
//!
//! 1. Paths with a non-`.html` extension are served verbatim (or 404).
//! 2. Page paths get `.html` appended (no extension) or `index.html`
//!    (trailing `/`). A missing `/foo.html` redirects to `/foo`; an existing
//!    `/foo.html` also redirects to `/foo` unless it is the root document.
//! 3. Any other read failure becomes a 500 carrying the error code.

pub mod errors;
pub mod mime;
pub mod reply;

use std::path::{Path, PathBuf};

pub use errors::{ResponderError, ResponderResult, error_code};
pub use reply::Reply;

use crate::utils::{
    ROOT_DOCUMENT, decode_request_path, extname, join_under_root, single_leading_slash,
    strip_html_suffix,
};

/// Resolves request paths under a fixed document root.
///
/// Holds no mutable state; one instance is shared by every request.
#[derive(Debug, Clone)]
pub struct StaticResponder {
    root: PathBuf,
}

impl StaticResponder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve one request path (URL path only, no query string).
    pub async fn respond(&self, request_path: &str) -> Reply {
        let ext = extname(request_path).to_lowercase();

        if !ext.is_empty() && ext != ".html" {
            return self.respond_asset(request_path, &ext).await;
        }

        self.respond_page(request_path).await
    }

    /// Non-page asset: bytes or 404, never a redirect.
    async fn respond_asset(&self, request_path: &str, ext: &str) -> Reply {
        // A trailing slash names a directory, and directories are never assets.
        if request_path.ends_with('/') {
            return Reply::NotFound;
        }
        match self.load(request_path).await {
            Ok(body) => Reply::File {
                content_type: mime::content_type_for(ext),
                body,
            },
            Err(e) => {
                tracing::debug!(path = %request_path, error = %e, "Asset not served");
                Reply::NotFound
            }
        }
    }

    async fn respond_page(&self, request_path: &str) -> Reply {
        let candidate = page_candidate(request_path);
        let content_type = mime::content_type_for(&extname(&candidate).to_lowercase());

        match self.load(&candidate).await {
            Ok(body) => {
                if request_path.ends_with(".html") && request_path != ROOT_DOCUMENT {
                    return clean_redirect(request_path);
                }
                Reply::File { content_type, body }
            }
            Err(ResponderError::OutsideRoot(_)) => {
                tracing::warn!(path = %request_path, "Rejected path outside the document root");
                Reply::NotFound
            }
            Err(e) if e.is_not_found() => {
                let clean = strip_html_suffix(request_path);
                if clean != request_path {
                    clean_redirect(request_path)
                } else {
                    tracing::debug!(path = %request_path, "Page not found");
                    Reply::NotFound
                }
            }
            Err(e) => {
                tracing::warn!(path = %request_path, error = %e, "Failed to read page");
                Reply::ServerError { code: e.code() }
            }
        }
    }

    /// Read the file a URL path maps to
    async fn load(&self, url_path: &str) -> ResponderResult<Vec<u8>> {
        let decoded = decode_request_path(url_path);
        let file = join_under_root(&self.root, &decoded)
            .ok_or_else(|| ResponderError::OutsideRoot(url_path.to_string()))?;

        tokio::fs::read(&file)
            .await
            .map_err(|source| ResponderError::from_io(file, source))
    }
}

/// URL path of the file a page request is served from
fn page_candidate(request_path: &str) -> String {
    if request_path.ends_with('/') {
        format!("{request_path}index.html")
    } else if !request_path.ends_with(".html") && extname(request_path).is_empty() {
        format!("{request_path}.html")
    } else {
        request_path.to_string()
    }
}

fn clean_redirect(request_path: &str) -> Reply {
    let location = single_leading_slash(strip_html_suffix(request_path));
    tracing::debug!(from = %request_path, to = %location, "Clean URL redirect");
    Reply::Redirect { location }
}
