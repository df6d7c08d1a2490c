// PicSeek - core/model.rs
//
// Data model: decoded search results, the layout mode, and the derived
// view state that drives the slide transition.

use crate::util::error::TransportError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// One decoded search hit: RGBA pixels ready for texture upload.
///
/// Produced from a single base64-encoded JPEG string in the backend payload.
/// Construction is all-or-nothing; a `ResultImage` never holds partially
/// decoded data.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultImage {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Unmultiplied RGBA bytes, row-major, `width * height * 4` long.
    pub rgba: Vec<u8>,
}

/// Decode a payload of base64-encoded images into render-ready results,
/// preserving the backend's relevance order.
///
/// Fail-closed: any entry that is not valid base64 or not a decodable image
/// fails the whole call, carrying the offending index. Callers must treat a
/// failure as "no new results", never as a partial set.
///
/// The contract declares JPEG; `image` format sniffing also tolerates PNG,
/// which keeps a mixed-content backend from failing the search outright.
pub fn decode_results(encoded: &[String]) -> Result<Vec<ResultImage>, TransportError> {
    let mut results = Vec::with_capacity(encoded.len());
    for (index, entry) in encoded.iter().enumerate() {
        let bytes = STANDARD
            .decode(entry.as_bytes())
            .map_err(|source| TransportError::Base64 { index, source })?;
        let decoded = image::load_from_memory(&bytes)
            .map_err(|source| TransportError::ImageDecode { index, source })?;
        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        results.push(ResultImage {
            width: width as usize,
            height: height as usize,
            rgba: rgba.into_raw(),
        });
    }
    Ok(results)
}

// =============================================================================
// Layout mode
// =============================================================================

/// Results-pane arrangement: a wrapped thumbnail grid, or one large
/// horizontally scrollable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Thumbnails wrap into a centered, width-constrained grid.
    #[default]
    Compact,
    /// Single scrollable row, each image at a large fixed height.
    Expanded,
}

impl LayoutMode {
    /// The other mode. Toggling twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Self::Compact => Self::Expanded,
            Self::Expanded => Self::Compact,
        }
    }
}

// =============================================================================
// View state
// =============================================================================

/// The two states of the interaction machine, derived solely from whether
/// the result set is empty. Never stored; always recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No results: the query pane is focused.
    Idle,
    /// Results present: the results pane is focused.
    Showing,
}

impl ViewState {
    /// Derive the view state from the current result set.
    pub fn from_results(results: &[ResultImage]) -> Self {
        if results.is_empty() {
            Self::Idle
        } else {
            Self::Showing
        }
    }

    /// Horizontal translation of the sliding viewport for this state:
    /// 0 when Idle, one full viewport width to the left when Showing.
    pub fn view_offset(self, viewport_width: f32) -> f32 {
        match self {
            Self::Idle => 0.0,
            Self::Showing => -viewport_width,
        }
    }
}

// =============================================================================
// Search progress messages (worker thread -> UI thread)
// =============================================================================

/// Progress of one upload, tagged with its sequence number so the UI can
/// discard completions from superseded requests.
#[derive(Debug)]
pub enum SearchProgress {
    /// The worker thread has started reading and uploading the file.
    Started { seq: u64 },
    /// The upload completed and every result decoded.
    Completed { seq: u64, results: Vec<ResultImage> },
    /// The upload failed; `error` is already rendered for the status bar.
    Failed { seq: u64, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(r: u8, g: u8, b: u8) -> String {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([r, g, b, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        STANDARD.encode(&bytes)
    }

    #[test]
    fn decode_preserves_payload_order() {
        let payload = vec![encode_png(255, 0, 0), encode_png(0, 0, 255)];
        let results = decode_results(&payload).unwrap();
        assert_eq!(results.len(), 2);
        // First result is the red image, second the blue one.
        assert_eq!(&results[0].rgba[..4], &[255, 0, 0, 255]);
        assert_eq!(&results[1].rgba[..4], &[0, 0, 255, 255]);
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        let payload = vec![encode_png(1, 2, 3), "!!not-base64!!".to_string()];
        let err = decode_results(&payload).unwrap_err();
        assert!(
            matches!(err, TransportError::Base64 { index: 1, .. }),
            "expected Base64 at index 1, got {err:?}"
        );
    }

    #[test]
    fn decode_rejects_non_image_bytes() {
        let payload = vec![STANDARD.encode(b"plain text, not an image")];
        let err = decode_results(&payload).unwrap_err();
        assert!(
            matches!(err, TransportError::ImageDecode { index: 0, .. }),
            "expected ImageDecode at index 0, got {err:?}"
        );
    }

    #[test]
    fn decode_empty_payload_is_empty() {
        assert!(decode_results(&[]).unwrap().is_empty());
    }

    #[test]
    fn layout_mode_double_toggle_is_identity() {
        assert_eq!(LayoutMode::Compact.toggled(), LayoutMode::Expanded);
        assert_eq!(LayoutMode::Compact.toggled().toggled(), LayoutMode::Compact);
    }

    #[test]
    fn view_state_derivation_and_offset() {
        assert_eq!(ViewState::from_results(&[]), ViewState::Idle);
        assert_eq!(ViewState::Idle.view_offset(1200.0), 0.0);

        let one = ResultImage {
            width: 1,
            height: 1,
            rgba: vec![0; 4],
        };
        assert_eq!(ViewState::from_results(&[one]), ViewState::Showing);
        assert_eq!(ViewState::Showing.view_offset(1200.0), -1200.0);
    }
}
