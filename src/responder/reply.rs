//! Outcome of resolving a single request

use crate::utils::NOT_FOUND_BODY;

/// Exactly one of these is produced per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 200 with the file contents
    File {
        content_type: &'static str,
        body: Vec<u8>,
    },
    /// 301 to a clean URL
    Redirect { location: String },
    /// 404 with the fixed HTML body
    NotFound,
    /// 500 with the error code in the body
    ServerError { code: &'static str },
}

impl Reply {
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::File { .. } => 200,
            Self::Redirect { .. } => 301,
            Self::NotFound => 404,
            Self::ServerError { .. } => 500,
        }
    }

    /// `Content-Type` header value, if the reply carries one
    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::File { content_type, .. } => Some(*content_type),
            Self::NotFound => Some("text/html"),
            Self::Redirect { .. } | Self::ServerError { .. } => None,
        }
    }

    /// Response body bytes
    #[must_use]
    pub fn into_body(self) -> Vec<u8> {
        match self {
            Self::File { body, .. } => body,
            Self::Redirect { .. } => Vec::new(),
            Self::NotFound => NOT_FOUND_BODY.as_bytes().to_vec(),
            Self::ServerError { code } => format!("Server Error: {code}").into_bytes(),
        }
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Redirect { location } => Some(location),
            _ => None,
        }
    }
}
