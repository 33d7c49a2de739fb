//! URL and path manipulation utilities.
//!
//! Pure helpers for mapping request paths onto the document root and for
//! resolving page-relative links. Nothing here touches the filesystem.

use std::path::{Component, Path, PathBuf};
use url::Url;

/// Extension of the last path segment, Node `path.extname` style.
///
/// Trailing slashes are ignored, a dot that starts the segment is not an
/// extension, and a trailing dot yields `"."`.
///
/// ```
/// # use sitewright::utils::extname;
/// assert_eq!(extname("/css/site.min.css"), ".css");
/// assert_eq!(extname("/about"), "");
/// assert_eq!(extname("/.well-known"), "");
/// assert_eq!(extname("/assets.v2/"), ".v2");
/// assert_eq!(extname("/index."), ".");
/// ```
#[must_use]
pub fn extname(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or("");
    if segment == ".." {
        return "";
    }
    match segment.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &segment[idx..],
    }
}

/// Remove one trailing `.html` (case-sensitive) from a request path.
#[must_use]
pub fn strip_html_suffix(path: &str) -> &str {
    path.strip_suffix(".html").unwrap_or(path)
}

/// Collapse a leading run of `/` and `\` into a single `/`.
///
/// `//host/x` and `/\host/x` are protocol-relative in a `Location` header.
#[must_use]
pub fn single_leading_slash(path: &str) -> String {
    format!("/{}", path.trim_start_matches(['/', '\\']))
}

/// Percent-decode a request path, leaving it untouched if it is not valid UTF-8
/// once decoded.
#[must_use]
pub fn decode_request_path(path: &str) -> String {
    urlencoding::decode(path).map_or_else(|_| path.to_string(), |p| p.into_owned())
}

/// Join a URL path onto `root`, normalizing `.` and `..` lexically.
///
/// Returns `None` when the path would climb above `root`.
#[must_use]
pub fn join_under_root(root: &Path, url_path: &str) -> Option<PathBuf> {
    let mut parts: Vec<&str> = Vec::new();
    for component in Path::new(url_path).components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?),
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }

    let mut resolved = root.to_path_buf();
    resolved.extend(parts);
    Some(resolved)
}

/// Resolve an attribute value (`href`, `src`) against the page URL.
///
/// An empty value resolves to the page URL itself.
#[must_use]
pub fn resolve_against(base: &Url, reference: &str) -> Option<String> {
    base.join(reference).ok().map(|u| u.to_string())
}
