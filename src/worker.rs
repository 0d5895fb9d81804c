//! Conversion request processing.
//!
//! Requests arrive as JSON envelopes tagged by `type` with the payload
//! under `data`; results and progress stream back as `type`-tagged
//! events. A `dither` request reduces an RGBA image to a binary bitmap,
//! a `generate` request turns a binary bitmap into a footprint document.
//! The two stages are independent so a host can re-generate geometry
//! with new options without re-dithering.

use halftone::{Bitmap, DitherAlgorithm, Ditherer};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::WorkerError;
use crate::footprint::{self, FootprintOptions, Progress};
use crate::ident::UuidSource;

/// Dithering stage request: raw RGBA pixels plus tuning knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DitherRequest {
    pub image_data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    /// Algorithm name; unknown names fall back to plain thresholding.
    pub algorithm: String,
    pub threshold: f32,
    pub gamma_correct: bool,
    pub invert: bool,
}

/// Generation stage request: a binary bitmap plus geometry options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub dithered_data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub options: FootprintOptions,
}

/// Envelope for the two request kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum WorkerRequest {
    Dither(DitherRequest),
    Generate(GenerateRequest),
}

/// Events emitted while a request is processed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkerEvent {
    Status {
        stage: String,
        message: String,
    },
    Progress {
        stage: String,
        current: usize,
        total: usize,
        percent: u8,
    },
    #[serde(rename_all = "camelCase")]
    Dithered {
        dithered_data: Vec<u8>,
        black_count: usize,
        width: usize,
        height: usize,
    },
    Generated {
        footprint: String,
    },
}

/// Decodes one JSON request line.
pub fn decode_request(line: &str) -> Result<WorkerRequest, WorkerError> {
    Ok(serde_json::from_str(line)?)
}

/// Runs the dithering stage.
pub fn dither(request: DitherRequest) -> Result<Bitmap, WorkerError> {
    let expected = request.width * request.height * 4;
    if request.image_data.len() != expected {
        return Err(WorkerError::PixelBufferMismatch {
            width: request.width,
            height: request.height,
            expected,
            actual: request.image_data.len(),
        });
    }

    let bitmap = Ditherer::new(DitherAlgorithm::from_name(&request.algorithm))
        .threshold(request.threshold)
        .gamma_correct(request.gamma_correct)
        .invert(request.invert)
        .dither(&request.image_data, request.width, request.height);
    Ok(bitmap)
}

/// Runs the generation stage, forwarding progress to `on_progress`.
pub fn generate(
    request: GenerateRequest,
    on_progress: impl FnMut(&Progress),
) -> Result<String, WorkerError> {
    let expected = request.width * request.height;
    if request.dithered_data.len() != expected {
        return Err(WorkerError::BitmapMismatch {
            width: request.width,
            height: request.height,
            expected,
            actual: request.dithered_data.len(),
        });
    }

    let bitmap = Bitmap::new(request.dithered_data, request.width, request.height);
    let mut ids = UuidSource::new();
    let document = footprint::generate(&bitmap, &request.options, &mut ids, on_progress)?;
    Ok(document)
}

/// Processes one request to completion, emitting status, progress, and
/// result events in order.
pub fn process(
    request: WorkerRequest,
    emit: &mut impl FnMut(WorkerEvent),
) -> Result<(), WorkerError> {
    match request {
        WorkerRequest::Dither(request) => {
            info!(
                algorithm = %request.algorithm,
                width = request.width,
                height = request.height,
                "dithering image"
            );
            emit(WorkerEvent::Status {
                stage: "dithering".to_string(),
                message: "Applying dithering...".to_string(),
            });

            let bitmap = dither(request)?;
            let black_count = bitmap.ink_count();
            let (width, height) = (bitmap.width(), bitmap.height());
            emit(WorkerEvent::Dithered {
                dithered_data: bitmap.into_data(),
                black_count,
                width,
                height,
            });
        }
        WorkerRequest::Generate(request) => {
            info!(
                width = request.width,
                height = request.height,
                layer = %request.options.layer,
                "generating footprint"
            );
            emit(WorkerEvent::Status {
                stage: "generating".to_string(),
                message: "Generating footprint...".to_string(),
            });

            let document = generate(request, |progress| {
                emit(WorkerEvent::Progress {
                    stage: progress.stage.to_string(),
                    current: progress.current,
                    total: progress.total,
                    percent: progress.percent,
                });
            })?;
            emit(WorkerEvent::Generated {
                footprint: document,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rgba(pixels: &[[u8; 4]]) -> Vec<u8> {
        pixels.iter().flatten().copied().collect()
    }

    fn dither_request(image_data: Vec<u8>, width: usize, height: usize) -> DitherRequest {
        DitherRequest {
            image_data,
            width,
            height,
            algorithm: "threshold".to_string(),
            threshold: 0.5,
            gamma_correct: false,
            invert: false,
        }
    }

    #[test]
    fn test_dither_request_envelope_decodes() {
        let json = r#"{
            "type": "dither",
            "data": {
                "imageData": [0, 0, 0, 255],
                "width": 1,
                "height": 1,
                "algorithm": "atkinson",
                "threshold": 0.4,
                "gammaCorrect": true,
                "invert": false
            }
        }"#;
        let request = decode_request(json).unwrap();
        match request {
            WorkerRequest::Dither(inner) => {
                assert_eq!(inner.image_data, vec![0, 0, 0, 255]);
                assert_eq!(inner.algorithm, "atkinson");
                assert_eq!(inner.threshold, 0.4);
                assert!(inner.gamma_correct);
                assert!(!inner.invert);
            }
            other => panic!("Expected dither request, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_request_envelope_decodes() {
        let json = r#"{
            "type": "generate",
            "data": {
                "ditheredData": [0, 255, 255, 0],
                "width": 2,
                "height": 2,
                "options": {
                    "pixelSize": 0.5,
                    "footprintName": "LOGO",
                    "libraryName": "Art",
                    "layer": "B.SilkS"
                }
            }
        }"#;
        let request = decode_request(json).unwrap();
        match request {
            WorkerRequest::Generate(inner) => {
                assert_eq!(inner.dithered_data, vec![0, 255, 255, 0]);
                assert_eq!(inner.options.pixel_size, 0.5);
                assert_eq!(inner.options.footprint_name, "LOGO");
                assert_eq!(inner.options.library_name, "Art");
                assert_eq!(inner.options.layer, "B.SilkS");
            }
            other => panic!("Expected generate request, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_malformed_line() {
        let error = decode_request("{\"type\": \"dither\"").unwrap_err();
        assert!(matches!(error, WorkerError::Decode(_)));
    }

    #[test]
    fn test_event_envelope_encodes_tagged_camel_case() {
        let event = WorkerEvent::Dithered {
            dithered_data: vec![0, 255],
            black_count: 1,
            width: 2,
            height: 1,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"dithered","ditheredData":[0,255],"blackCount":1,"width":2,"height":1}"#
        );

        let event = WorkerEvent::Progress {
            stage: "generating".to_string(),
            current: 1000,
            total: 2500,
            percent: 40,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"progress","stage":"generating","current":1000,"total":2500,"percent":40}"#
        );
    }

    #[test]
    fn test_dither_rejects_short_pixel_buffer() {
        let request = dither_request(vec![0, 0, 0], 1, 1);
        let error = dither(request).unwrap_err();
        match error {
            WorkerError::PixelBufferMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("Expected pixel buffer mismatch, got {other}"),
        }
    }

    #[test]
    fn test_generate_rejects_short_bitmap() {
        let request = GenerateRequest {
            dithered_data: vec![0; 3],
            width: 2,
            height: 2,
            options: FootprintOptions::default(),
        };
        let error = generate(request, |_| {}).unwrap_err();
        assert!(matches!(
            error,
            WorkerError::BitmapMismatch {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_dither_black_image_is_all_ink() {
        let request = dither_request(rgba(&[[0, 0, 0, 255]; 4]), 2, 2);
        let bitmap = dither(request).unwrap();
        assert_eq!(bitmap.ink_count(), 4);
        assert_eq!(bitmap.data(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_unknown_algorithm_matches_threshold() {
        let gradient = rgba(&[[10, 10, 10, 255], [120, 120, 120, 255], [200, 200, 200, 255]]);
        let mut unknown = dither_request(gradient.clone(), 3, 1);
        unknown.algorithm = "definitely-not-real".to_string();
        let baseline = dither_request(gradient, 3, 1);

        assert_eq!(dither(unknown).unwrap(), dither(baseline).unwrap());
    }
}
