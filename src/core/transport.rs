// PicSeek - core/transport.rs
//
// The single backend round trip: POST the selected file's bytes to the
// image-search route and normalise the response into an ordered list of
// encoded-image strings.
//
// One network call per invocation. No retry, no caching, no cancellation,
// no timeout; request coordination (sequence numbers) lives in the app
// layer, not here.

use crate::util::constants::SEARCH_ROUTE;
use crate::util::error::TransportError;
use serde::Deserialize;

/// Client for the image-search backend.
///
/// Cheap to clone; the inner `reqwest` client shares its connection pool
/// across clones, so each upload thread can take its own copy.
#[derive(Debug, Clone)]
pub struct SearchClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

/// Shapes the backend response body may take.
///
/// The deployed backend returns a bare JSON array of base64 strings; the
/// documented contract wraps the payload in `{status, data}`. Both are
/// accepted; anything else is a malformed response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResponseBody {
    Envelope {
        status: bool,
        #[serde(default)]
        data: Option<Vec<String>>,
    },
    Images(Vec<String>),
}

impl SearchClient {
    /// Create a client for the given endpoint, e.g. `http://127.0.0.1:8085`.
    ///
    /// The client is built without a request deadline: reqwest's blocking
    /// default would abort after 30 seconds, but this contract has no
    /// timeout — a hung backend leaves the search pending indefinitely.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        let http = reqwest::blocking::ClientBuilder::new()
            .timeout(None)
            .build()
            .map_err(|source| TransportError::ClientBuild { source })?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    /// Full URL of the search route.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), SEARCH_ROUTE)
    }

    /// Upload one file's bytes and return the backend's encoded-image
    /// payload in relevance order.
    ///
    /// The bytes go out as the raw request body — no multipart wrapper, no
    /// client-side size or type validation; rejection is the backend's call.
    pub fn upload(&self, bytes: Vec<u8>) -> Result<Vec<String>, TransportError> {
        let url = self.search_url();
        tracing::debug!(url = %url, bytes = bytes.len(), "Uploading query image");

        let response = self
            .http
            .post(&url)
            .body(bytes)
            .send()
            .map_err(|source| TransportError::Request {
                url: url.clone(),
                source,
            })?;

        let code = response.status();
        if !code.is_success() {
            return Err(TransportError::BackendStatus {
                code: code.as_u16(),
            });
        }

        let body = response.bytes().map_err(|source| TransportError::Request {
            url: url.clone(),
            source,
        })?;

        parse_response(&body)
    }
}

/// Parse a 2xx response body into the ordered encoded-image payload.
///
/// Blank entries are dropped: the backend fills a fixed 16-slot array and
/// pads with empty strings when fewer matches exist. Order of the remaining
/// entries is preserved.
pub fn parse_response(body: &[u8]) -> Result<Vec<String>, TransportError> {
    let parsed: ResponseBody =
        serde_json::from_slice(body).map_err(|e| TransportError::MalformedResponse {
            detail: e.to_string(),
        })?;

    let images = match parsed {
        ResponseBody::Envelope { status: false, .. } => {
            return Err(TransportError::BackendRejected);
        }
        ResponseBody::Envelope {
            status: true,
            data: Some(images),
        } => images,
        ResponseBody::Envelope {
            status: true,
            data: None,
        } => {
            return Err(TransportError::MalformedResponse {
                detail: "success envelope without a data field".to_string(),
            });
        }
        ResponseBody::Images(images) => images,
    };

    Ok(images.into_iter().filter(|s| !s.is_empty()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array_in_order() {
        let body = br#"["aaa","bbb","ccc"]"#;
        let images = parse_response(body).unwrap();
        assert_eq!(images, vec!["aaa", "bbb", "ccc"]);
    }

    #[test]
    fn parses_success_envelope() {
        let body = br#"{"status": true, "data": ["one", "two"]}"#;
        let images = parse_response(body).unwrap();
        assert_eq!(images, vec!["one", "two"]);
    }

    #[test]
    fn drops_blank_padding_entries() {
        // The backend pads its fixed-size result array with "".
        let body = br#"["hit1","hit2","","","",""]"#;
        let images = parse_response(body).unwrap();
        assert_eq!(images, vec!["hit1", "hit2"]);
    }

    #[test]
    fn failure_envelope_is_rejected() {
        let body = br#"{"status": false}"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, TransportError::BackendRejected));
    }

    #[test]
    fn success_envelope_without_data_fails_closed() {
        let body = br#"{"status": true}"#;
        let err = parse_response(body).unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse { .. }));
    }

    #[test]
    fn non_json_body_fails_closed() {
        let err = parse_response(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse { .. }));
    }

    #[test]
    fn unexpected_json_shape_fails_closed() {
        let err = parse_response(br#"{"results": [1, 2, 3]}"#).unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse { .. }));
    }

    #[test]
    fn search_url_tolerates_trailing_slash() {
        let client = SearchClient::new("http://localhost:8085/").unwrap();
        assert_eq!(client.search_url(), "http://localhost:8085/search/image");
    }
}
