//! Test utilities and helper functions for the sitewright test suite

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Markup of the header search box every site page carries
#[allow(dead_code)]
pub const SEARCH_BOX: &str = r#"<div id="elSearch"><div id="elSearchWrapper"><form action="/search"><input type="search" id="elSearchField" name="q"></form></div></div>"#;

/// PNG signature plus a few bytes, enough to check binary passthrough
#[allow(dead_code)]
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];

/// Creates a test HTML document with the search box and `body`
#[allow(dead_code)]
pub fn create_test_html(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{}</title>
</head>
<body>
    <header>{SEARCH_BOX}</header>
    {}
</body>
</html>"#,
        html_escape::encode_text(title),
        body
    )
}

fn write(root: &Path, rel: &str, contents: impl AsRef<[u8]>) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Creates a small static site in a temporary directory.
///
/// Layout:
/// * `index.html`, `about.html`, `my page.html`
/// * `docs/index.html`, `docs/setup.html`
/// * `css/site.css`, `img/logo.png`, `data/info.json`, `fonts/site.woff2`,
///   `files/notes.xyz`
/// * `broken.html/` - a directory where a page is expected
#[allow(dead_code)]
pub fn create_site() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let root = dir.path();

    write(root, "index.html", create_test_html("Home", "<h1>Home</h1>"))?;
    write(root, "about.html", create_test_html("About", "<h1>About us</h1>"))?;
    write(root, "my page.html", create_test_html("Spaced", "<h1>Spaced</h1>"))?;
    write(root, "docs/index.html", create_test_html("Docs", "<h1>Docs</h1>"))?;
    write(root, "docs/setup.html", create_test_html("Setup", "<h1>Setup</h1>"))?;
    write(root, "css/site.css", "body { color: #111; }")?;
    write(root, "img/logo.png", PNG_BYTES)?;
    write(root, "data/info.json", r#"{"ok":true}"#)?;
    write(root, "fonts/site.woff2", [0u8, 1, 2, 3])?;
    write(root, "files/notes.xyz", "opaque")?;
    fs::create_dir_all(root.join("broken.html"))?;

    Ok(dir)
}
