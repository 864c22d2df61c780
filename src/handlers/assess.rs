//! Assessment handlers
//!
//! All degraded inputs (empty text, undecodable or silent audio) fall back
//! to the neutral default score with a warning in the response body; only
//! requests with no usable input at all are rejected.

use axum::extract::{Multipart, State};
use axum::Json;
use validator::Validate;

use crate::logic::text::{TextAnalyzer, TextDetail};
use crate::logic::voice::{VoiceAnalyzer, VoiceFeatures};
use crate::logic::{predictor, NEUTRAL_SCORE};
use crate::models::{AssessmentResponse, TextAssessRequest};
use crate::{AppError, AppResult, AppState};

/// Text-only assessment
pub async fn text(
    State(state): State<AppState>,
    Json(req): Json<TextAssessRequest>,
) -> AppResult<Json<AssessmentResponse>> {
    req.validate()?;

    let mut warnings = Vec::new();
    let (text_score, detail) = run_text(&state, &req.text, &mut warnings);

    let assessment = predictor::predict(text_score, None);
    Ok(Json(AssessmentResponse::build(
        assessment, text_score, None, detail, None, warnings,
    )))
}

/// Voice-only assessment (multipart upload, `audio` field)
pub async fn voice(
    State(_state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<AssessmentResponse>> {
    let mut audio = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("audio") {
            let filename = field.file_name().map(|s| s.to_string());
            let bytes = field.bytes().await?.to_vec();
            audio = Some((bytes, filename));
        }
    }

    let (bytes, filename) =
        audio.ok_or_else(|| AppError::MissingInput("no audio field in upload".to_string()))?;

    let mut warnings = Vec::new();
    let (voice_score, features) = run_voice(bytes, filename, &mut warnings).await?;

    let assessment = predictor::predict(None, voice_score);
    Ok(Json(AssessmentResponse::build(
        assessment, None, voice_score, None, features, warnings,
    )))
}

/// Combined assessment (multipart with optional `text` and `audio` fields)
pub async fn combined(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<AssessmentResponse>> {
    let mut text_input: Option<String> = None;
    let mut audio: Option<(Vec<u8>, Option<String>)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("text") => {
                // A blank text field counts as not provided
                let value = field.text().await?;
                if !value.trim().is_empty() {
                    text_input = Some(value);
                }
            }
            Some("audio") => {
                let filename = field.file_name().map(|s| s.to_string());
                let bytes = field.bytes().await?.to_vec();
                audio = Some((bytes, filename));
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    if text_input.is_none() && audio.is_none() {
        return Err(AppError::MissingInput(
            "provide a text field, an audio field, or both".to_string(),
        ));
    }

    let mut warnings = Vec::new();

    let (text_score, detail) = match text_input {
        Some(t) => run_text(&state, &t, &mut warnings),
        None => (None, None),
    };

    let (voice_score, features) = match audio {
        Some((bytes, filename)) => run_voice(bytes, filename, &mut warnings).await?,
        None => (None, None),
    };

    let assessment = predictor::predict(text_score, voice_score);

    tracing::info!(
        text_score = ?text_score,
        voice_score = ?voice_score,
        combined = assessment.combined_score,
        tier = %assessment.tier,
        "assessment complete"
    );

    Ok(Json(AssessmentResponse::build(
        assessment, text_score, voice_score, detail, features, warnings,
    )))
}

/// Run the text analyzer, degrading failures to the neutral default
fn run_text(
    state: &AppState,
    text: &str,
    warnings: &mut Vec<String>,
) -> (Option<f64>, Option<TextDetail>) {
    let analyzer = TextAnalyzer::new(state.config.min_text_chars);
    match analyzer.analyze(text) {
        Ok(analysis) => (Some(analysis.score), Some(analysis.detail)),
        Err(err) => {
            tracing::warn!(error = %err, "text analysis degraded to neutral");
            warnings.push(format!("Text analysis used the neutral default: {}", err));
            (Some(NEUTRAL_SCORE), None)
        }
    }
}

/// Decode and analyze audio off the async runtime, degrading failures to
/// the neutral default
async fn run_voice(
    bytes: Vec<u8>,
    filename: Option<String>,
    warnings: &mut Vec<String>,
) -> Result<(Option<f64>, Option<VoiceFeatures>), AppError> {
    let result = tokio::task::spawn_blocking(move || {
        VoiceAnalyzer::new().analyze_bytes(bytes, filename.as_deref())
    })
    .await
    .map_err(|e| AppError::InternalError(format!("voice analysis task failed: {}", e)))?;

    match result {
        Ok(analysis) => Ok((Some(analysis.score), Some(analysis.features))),
        Err(err) => {
            tracing::warn!(error = %err, "voice analysis degraded to neutral");
            warnings.push(format!("Voice analysis used the neutral default: {}", err));
            Ok((Some(NEUTRAL_SCORE), None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState { config: Config::from_env() }
    }

    fn app() -> axum::Router {
        crate::create_router(state())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_text_endpoint_scores_negative_text() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assess/text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"text":"I feel hopeless and worthless, nothing ever gets better for me."}"#,
            ))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let score = json["combined_score"].as_f64().unwrap();
        assert!(score > 5.0, "score was {}", score);
        assert!(json["warnings"].as_array().unwrap().is_empty());
        assert!(json["text_detail"]["matched_keywords"]
            .as_array()
            .unwrap()
            .iter()
            .any(|k| k == "hopeless"));
    }

    #[tokio::test]
    async fn test_text_endpoint_degrades_short_text_to_neutral() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assess/text")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"text":"tired"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["combined_score"].as_f64().unwrap(), 5.0);
        assert!(!json["warnings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_combined_endpoint_with_text_field_only() {
        let boundary = "mindgauge-test-boundary";
        let body = format!(
            "--{b}\r\ncontent-disposition: form-data; name=\"text\"\r\n\r\n\
             I had a wonderful week and feel really happy and grateful.\r\n--{b}--\r\n",
            b = boundary
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assess")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json["text_score"].as_f64().unwrap() < 5.0);
        assert!(json["voice_score"].is_null());
        assert_eq!(json["completeness"].as_f64().unwrap(), 0.6);
    }

    #[tokio::test]
    async fn test_combined_endpoint_degrades_bad_audio() {
        let boundary = "mindgauge-test-boundary";
        let body = format!(
            "--{b}\r\ncontent-disposition: form-data; name=\"audio\"; filename=\"clip.wav\"\r\n\
             content-type: audio/wav\r\n\r\nnot really audio\r\n--{b}--\r\n",
            b = boundary
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assess")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        // Decode failure degrades to the neutral default with a warning
        assert_eq!(json["voice_score"].as_f64().unwrap(), 5.0);
        assert!(!json["warnings"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_combined_endpoint_rejects_empty_form() {
        let boundary = "mindgauge-test-boundary";
        let body = format!("--{b}--\r\n", b = boundary);

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assess")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_combined_endpoint_rejects_blank_text_only() {
        let boundary = "mindgauge-test-boundary";
        let body = format!(
            "--{b}\r\ncontent-disposition: form-data; name=\"text\"\r\n\r\n   \r\n--{b}--\r\n",
            b = boundary
        );

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assess")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        // A blank text field alone is treated the same as an empty form
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_voice_endpoint_with_real_wav() {
        use crate::logic::voice::decode::wav_bytes;

        let sample_rate = 16_000u32;
        let tone: Vec<f32> = (0..sample_rate * 2)
            .map(|i| {
                (2.0 * std::f32::consts::PI * 160.0 * i as f32 / sample_rate as f32).sin() * 0.6
            })
            .collect();
        let wav = wav_bytes(&tone, sample_rate);

        let boundary = "mindgauge-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{b}\r\ncontent-disposition: form-data; name=\"audio\"; \
                 filename=\"tone.wav\"\r\ncontent-type: audio/wav\r\n\r\n",
                b = boundary
            )
            .as_bytes(),
        );
        body.extend_from_slice(&wav);
        body.extend_from_slice(format!("\r\n--{b}--\r\n", b = boundary).as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/assess/voice")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let score = json["voice_score"].as_f64().unwrap();
        assert!((0.0..=10.0).contains(&score));
        assert!(json["warnings"].as_array().unwrap().is_empty());
        assert!(json["voice_features"]["mean_pitch_hz"].as_f64().unwrap() > 0.0);
    }
}
