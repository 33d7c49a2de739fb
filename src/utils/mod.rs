pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{
    decode_request_path, extname, join_under_root, resolve_against, single_leading_slash,
    strip_html_suffix,
};
