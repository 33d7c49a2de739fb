//! Fixed extension → content type table

/// Fallback for any extension not in the table
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Look up the content type for a lowercased extension (with its dot).
///
/// ```
/// # use sitewright::responder::mime::content_type_for;
/// assert_eq!(content_type_for(".css"), "text/css");
/// assert_eq!(content_type_for(".exe"), "application/octet-stream");
/// ```
#[must_use]
pub fn content_type_for(ext: &str) -> &'static str {
    match ext {
        ".html" => "text/html",
        ".js" => "text/javascript",
        ".css" => "text/css",
        ".json" => "application/json",
        ".png" => "image/png",
        ".jpg" => "image/jpg",
        ".gif" => "image/gif",
        ".svg" => "image/svg+xml",
        ".wav" => "audio/wav",
        ".mp4" => "video/mp4",
        ".woff" => "application/font-woff",
        ".woff2" => "application/font-woff2",
        ".ttf" => "application/font-ttf",
        ".eot" => "application/vnd.ms-fontobject",
        ".otf" => "application/font-otf",
        ".wasm" => "application/wasm",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_exact_match_on_lowercase() {
        assert_eq!(content_type_for(".html"), "text/html");
        assert_eq!(content_type_for(".wasm"), "application/wasm");
        assert_eq!(content_type_for(".jpg"), "image/jpg");
        // Callers lowercase first; the table itself does not.
        assert_eq!(content_type_for(".PNG"), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for("."), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(""), DEFAULT_CONTENT_TYPE);
    }
}
