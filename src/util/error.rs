// PicSeek - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every variant keeps its source so the
// full causal chain is available for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all PicSeek operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum PicSeekError {
    /// Backend upload or response handling failed.
    Transport(TransportError),

    /// I/O error with path context (reading the selected upload file).
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for PicSeekError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Search error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for PicSeekError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<TransportError> for PicSeekError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

// ---------------------------------------------------------------------------
// Transport errors
// ---------------------------------------------------------------------------

/// Errors produced by the single backend round trip: the HTTP request itself,
/// the backend's verdict, or a payload that cannot be turned into images.
///
/// Payload problems fail the whole search (fail-closed): partially decoded
/// result sets are never surfaced.
#[derive(Debug)]
pub enum TransportError {
    /// The HTTP client could not be constructed (TLS backend init failure).
    ClientBuild { source: reqwest::Error },

    /// The HTTP request could not be completed (connection refused, DNS,
    /// broken pipe, ...).
    Request {
        url: String,
        source: reqwest::Error,
    },

    /// The backend answered with a non-success HTTP status.
    BackendStatus { code: u16 },

    /// The backend answered 2xx but its response envelope carried
    /// `status: false`.
    BackendRejected,

    /// The response body was not a recognised search payload.
    MalformedResponse { detail: String },

    /// A payload entry was not valid base64.
    Base64 {
        index: usize,
        source: base64::DecodeError,
    },

    /// A payload entry decoded to bytes that are not a decodable image.
    ImageDecode {
        index: usize,
        source: image::ImageError,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClientBuild { source } => {
                write!(f, "could not construct HTTP client: {source}")
            }
            Self::Request { url, source } => {
                write!(f, "request to '{url}' failed: {source}")
            }
            Self::BackendStatus { code } => {
                write!(f, "backend returned HTTP {code}")
            }
            Self::BackendRejected => {
                write!(f, "backend reported failure (status=false)")
            }
            Self::MalformedResponse { detail } => {
                write!(f, "malformed search response: {detail}")
            }
            Self::Base64 { index, source } => {
                write!(f, "result {index} is not valid base64: {source}")
            }
            Self::ImageDecode { index, source } => {
                write!(f, "result {index} is not a decodable image: {source}")
            }
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ClientBuild { source } => Some(source),
            Self::Request { source, .. } => Some(source),
            Self::Base64 { source, .. } => Some(source),
            Self::ImageDecode { source, .. } => Some(source),
            Self::BackendStatus { .. } | Self::BackendRejected | Self::MalformedResponse { .. } => {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_includes_http_code() {
        let e = TransportError::BackendStatus { code: 503 };
        assert!(e.to_string().contains("503"));
    }

    #[test]
    fn display_includes_offending_index() {
        let source = base64::Engine::decode(
            &base64::engine::general_purpose::STANDARD,
            "not base64!!!",
        )
        .unwrap_err();
        let e = TransportError::Base64 { index: 3, source };
        assert!(e.to_string().contains("result 3"));
    }

    #[test]
    fn io_error_preserves_source_chain() {
        let e = PicSeekError::Io {
            path: PathBuf::from("/tmp/query.jpg"),
            operation: "read",
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("query.jpg"));
    }
}
