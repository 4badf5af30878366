//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;

use crate::domain::instructions::{self, ENHANCE_SETTINGS, GenerationSettings, OPTIMIZE_SETTINGS};
use crate::domain::optimizer::parse_optimizer_response;
use crate::domain::template::strip_code_fences;
use crate::domain::{
    AppError, GeminiApiConfig, ImageModel, OptimizeStyle, OptimizerOutput, Parameter, PromptPatch,
    ReferenceImage, TargetAi,
};
use crate::ports::{GenerationClient, VideoOperation};

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";
const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// HTTP transport for the Gemini, Imagen and Veo endpoints.
///
/// Every call is a single request; there is no retry layer.
#[derive(Clone)]
pub struct HttpGeminiClient {
    api_key: String,
    config: GeminiApiConfig,
    client: Client,
}

impl std::fmt::Debug for HttpGeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGeminiClient")
            .field("api_url", &self.config.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGeminiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GeminiApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::GeminiApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, config: config.clone(), client })
    }

    /// Create from `GEMINI_API_KEY` (or `API_KEY`) with custom configuration.
    pub fn from_env_with_config(config: &GeminiApiConfig) -> Result<Self, AppError> {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|value| !value.trim().is_empty()))
            .ok_or_else(|| AppError::EnvironmentVariableMissing(API_KEY_VARS[0].into()))?;

        Self::new(api_key, config)
    }

    fn base(&self) -> &str {
        self.config.api_url.as_str().trim_end_matches('/')
    }

    fn model_url(&self, model: &str, method: &str) -> Result<Url, AppError> {
        let model = model.trim().trim_start_matches("models/");
        parse_url(&format!("{}/models/{}:{}", self.base(), model, method))
    }

    fn send(&self, request: RequestBuilder) -> Result<reqwest::blocking::Response, AppError> {
        let response = request.header(X_GOOG_API_KEY, &self.api_key).send().map_err(|e| {
            AppError::GeminiApiError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().unwrap_or_default();
        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::GeminiApiError { message, status: Some(status.as_u16()) })
    }

    fn parse_json<T: for<'de> Deserialize<'de>>(
        response: reqwest::blocking::Response,
    ) -> Result<T, AppError> {
        let status = response.status().as_u16();
        let body_text = response.text().unwrap_or_default();
        serde_json::from_str(&body_text).map_err(|e| AppError::GeminiApiError {
            message: format!("Failed to parse response: {}", e),
            status: Some(status),
        })
    }

    fn post<B: Serialize, T: for<'de> Deserialize<'de>>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, AppError> {
        tracing::debug!(url = %url, "POST");
        let request = self.client.post(url).header(CONTENT_TYPE, "application/json").json(body);
        Self::parse_json(self.send(request)?)
    }

    fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AppError> {
        self.post(self.model_url(model, "generateContent")?, request)
    }

    /// Single-turn request against the configured text model.
    fn complete(
        &self,
        text: String,
        images: &[ReferenceImage],
        config: Option<GenerationConfig>,
    ) -> Result<String, AppError> {
        let request = GenerateContentRequest::new(text, images, config);
        let response = self.generate_content(&self.config.text_model, &request)?;
        Ok(response.text())
    }
}

fn parse_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|e| AppError::GeminiApiError {
        message: format!("Invalid endpoint URL '{}': {}", raw, e),
        status: None,
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// One user turn: the text part first, then any images.
    fn new(
        text: String,
        images: &[ReferenceImage],
        generation_config: Option<GenerationConfig>,
    ) -> Self {
        let mut parts = vec![Part::Text { text }];
        parts.extend(images.iter().map(|image| Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            },
        }));
        Self { contents: vec![Content { role: "user", parts }], generation_config }
    }
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<&'static str>>,
}

impl From<GenerationSettings> for GenerationConfig {
    fn from(settings: GenerationSettings) -> Self {
        Self {
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
            thinking_config: settings
                .thinking_budget
                .map(|thinking_budget| ThinkingConfig { thinking_budget }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<ResponseInlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseInlineData {
    #[serde(default)]
    mime_type: Option<String>,
    #[serde(default)]
    data: String,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[ResponsePart] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text parts of the first candidate, trimmed.
    fn text(&self) -> String {
        let text: String =
            self.first_parts().iter().filter_map(|part| part.text.as_deref()).collect();
        text.trim().to_string()
    }

    fn inline_images(&self) -> Vec<String> {
        self.first_parts()
            .iter()
            .filter_map(|part| part.inline_data.as_ref())
            .filter(|inline| !inline.data.is_empty())
            .map(|inline| {
                let mime = inline.mime_type.as_deref().unwrap_or("image/png");
                format!("data:{};base64,{}", mime, inline.data)
            })
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperationResponse {
    name: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<OperationError>,
    #[serde(default)]
    response: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct OperationError {
    #[serde(default)]
    message: String,
}

impl OperationResponse {
    fn into_operation(self) -> Result<VideoOperation, AppError> {
        if let Some(error) = self.error {
            return Err(AppError::GeminiApiError { message: error.message, status: None });
        }

        let video_uri = self
            .response
            .as_ref()
            .and_then(|response| {
                response.pointer("/generateVideoResponse/generatedSamples/0/video/uri")
            })
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(VideoOperation { name: self.name, done: self.done, video_uri })
    }
}

fn suggestion_schema() -> Value {
    let properties: serde_json::Map<String, Value> = Parameter::ALL
        .iter()
        .map(|parameter| (parameter.field_name().to_string(), json!({ "type": "STRING" })))
        .collect();
    json!({ "type": "OBJECT", "properties": properties })
}

impl GenerationClient for HttpGeminiClient {
    fn enhance_subject(
        &self,
        subject: &str,
        images: &[ReferenceImage],
    ) -> Result<String, AppError> {
        let prompt = instructions::enhance(subject, !images.is_empty())?;
        let enhanced = self.complete(prompt, images, Some(ENHANCE_SETTINGS.into()))?;
        if enhanced.is_empty() {
            return Err(AppError::InvalidAiResponse("AI failed to generate an enhancement.".into()));
        }
        Ok(enhanced)
    }

    fn suggest_parameters(
        &self,
        subject: &str,
        images: &[ReferenceImage],
    ) -> Result<PromptPatch, AppError> {
        let prompt = instructions::suggest(subject, !images.is_empty())?;
        let config = GenerationConfig {
            response_mime_type: Some("application/json"),
            response_schema: Some(suggestion_schema()),
            ..Default::default()
        };
        let text = self.complete(prompt, images, Some(config))?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(error = %e, "failed to parse parameter suggestions");
            AppError::InvalidAiResponse("AI returned an invalid response format.".into())
        })
    }

    fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
        model: ImageModel,
    ) -> Result<Vec<String>, AppError> {
        match model {
            ImageModel::Imagen4 => {
                let body = json!({
                    "instances": [{ "prompt": prompt }],
                    "parameters": {
                        "sampleCount": 1,
                        "aspectRatio": aspect_ratio,
                        "outputMimeType": "image/png",
                    },
                });
                let response: PredictResponse =
                    self.post(self.model_url(model.id(), "predict")?, &body)?;
                Ok(response
                    .predictions
                    .into_iter()
                    .filter_map(|prediction| {
                        let data = prediction.bytes_base64_encoded.filter(|data| !data.is_empty())?;
                        let mime = prediction.mime_type.unwrap_or_else(|| "image/png".to_string());
                        Some(format!("data:{};base64,{}", mime, data))
                    })
                    .collect())
            }
            ImageModel::FlashImagePreview => {
                let config = GenerationConfig {
                    response_modalities: Some(vec!["IMAGE", "TEXT"]),
                    ..Default::default()
                };
                let request = GenerateContentRequest::new(prompt.to_string(), &[], Some(config));
                Ok(self.generate_content(model.id(), &request)?.inline_images())
            }
        }
    }

    fn start_video(
        &self,
        prompt: &str,
        image: Option<&ReferenceImage>,
    ) -> Result<VideoOperation, AppError> {
        let mut instance = json!({ "prompt": prompt });
        if let Some(image) = image {
            instance["image"] =
                json!({ "bytesBase64Encoded": image.data, "mimeType": image.mime_type });
        }
        let body = json!({ "instances": [instance], "parameters": { "sampleCount": 1 } });

        let url = self.model_url(&self.config.video_model, "predictLongRunning")?;
        let response: OperationResponse = self.post(url, &body)?;
        tracing::info!(operation = %response.name, "video generation started");
        response.into_operation()
    }

    fn poll_video(&self, operation: &VideoOperation) -> Result<VideoOperation, AppError> {
        let url = parse_url(&format!("{}/{}", self.base(), operation.name))?;
        tracing::debug!(url = %url, "GET");
        let response: OperationResponse = Self::parse_json(self.send(self.client.get(url))?)?;
        response.into_operation()
    }

    fn download_video(&self, uri: &str) -> Result<Vec<u8>, AppError> {
        let url = parse_url(uri)?;
        tracing::debug!(url = %url, "downloading video");
        let response = self.send(self.client.get(url))?;
        let bytes = response.bytes().map_err(|e| AppError::GeminiApiError {
            message: format!("Failed to read video body: {}", e),
            status: None,
        })?;
        Ok(bytes.to_vec())
    }

    fn optimize_prompt(
        &self,
        prompt: &str,
        target: TargetAi,
        style: OptimizeStyle,
    ) -> Result<OptimizerOutput, AppError> {
        let request = instructions::optimize(prompt, target.as_str(), style.as_str())?;
        let text = self.complete(request, &[], Some(OPTIMIZE_SETTINGS.into()))?;
        Ok(parse_optimizer_response(&text))
    }

    fn fill_template(
        &self,
        subject: &str,
        template: &str,
        images: &[ReferenceImage],
    ) -> Result<String, AppError> {
        let prompt = instructions::fill_template(subject, template, !images.is_empty())?;
        let text = self.complete(prompt, images, None)?;
        Ok(strip_code_fences(&text))
    }

    fn generate_text(&self, prompt: &str) -> Result<String, AppError> {
        self.complete(prompt.to_string(), &[], None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

    fn client_for(server: &mockito::Server) -> HttpGeminiClient {
        let config = GeminiApiConfig {
            api_url: Url::parse(&server.url()).unwrap(),
            timeout_secs: 1,
            ..Default::default()
        };
        HttpGeminiClient::new("fake-key".to_string(), &config).unwrap()
    }

    fn text_reply(text: &str) -> String {
        json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] }).to_string()
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let server = mockito::Server::new();
        let rendered = format!("{:?}", client_for(&server));
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("fake-key"));
    }

    #[test]
    fn enhance_sends_key_settings_and_images() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", GENERATE_PATH)
            .match_header("x-goog-api-key", "fake-key")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(json!({
                    "generationConfig": {
                        "temperature": 0.8,
                        "maxOutputTokens": 100,
                        "thinkingConfig": { "thinkingBudget": 50 }
                    }
                })),
                Matcher::Regex("inlineData".into()),
            ]))
            .with_status(200)
            .with_body(text_reply("  A rusted robot cradles a cherry-red skateboard at dusk.  "))
            .create();

        let image = ReferenceImage { mime_type: "image/png".into(), data: "AAAA".into() };
        let enhanced = client_for(&server).enhance_subject("robot", &[image]).unwrap();

        assert_eq!(enhanced, "A rusted robot cradles a cherry-red skateboard at dusk.");
        mock.assert();
    }

    #[test]
    fn enhance_rejects_empty_reply() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .with_status(200)
            .with_body(text_reply("   "))
            .create();

        let err = client_for(&server).enhance_subject("robot", &[]).unwrap_err();
        assert_eq!(err.to_string(), "AI failed to generate an enhancement.");
    }

    #[test]
    fn suggest_parses_partial_json() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .with_status(200)
            .with_body(text_reply(r#"{"weather": "dense fog", "shotType": "dramatic reveal"}"#))
            .create();

        let patch = client_for(&server).suggest_parameters("a lighthouse", &[]).unwrap();
        assert_eq!(patch.get(Parameter::Weather), Some("dense fog"));
        assert_eq!(patch.get(Parameter::ShotType), Some("dramatic reveal"));
        assert_eq!(patch.get(Parameter::FilmStock), None);
    }

    #[test]
    fn suggest_reports_invalid_format() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .with_status(200)
            .with_body(text_reply("not json"))
            .create();

        let err = client_for(&server).suggest_parameters("a lighthouse", &[]).unwrap_err();
        assert_eq!(err.to_string(), "AI returned an invalid response format.");
    }

    #[test]
    fn imagen_returns_png_data_urls() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/imagen-4.0-generate-001:predict")
            .match_body(Matcher::PartialJson(json!({ "parameters": { "aspectRatio": "16:9" } })))
            .with_status(200)
            .with_body(r#"{"predictions": [{"bytesBase64Encoded": "iVBOR", "mimeType": "image/png"}]}"#)
            .create();

        let images =
            client_for(&server).generate_image("a fox", "16:9", ImageModel::Imagen4).unwrap();
        assert_eq!(images, vec!["data:image/png;base64,iVBOR".to_string()]);
    }

    #[test]
    fn flash_image_reads_inline_data_parts() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/models/gemini-2.5-flash-image-preview:generateContent")
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": { "responseModalities": ["IMAGE", "TEXT"] }
            })))
            .with_status(200)
            .with_body(
                json!({ "candidates": [{ "content": { "parts": [
                    { "text": "Here you go" },
                    { "inlineData": { "mimeType": "image/png", "data": "QUJD" } }
                ] } }] })
                .to_string(),
            )
            .create();

        let images = client_for(&server)
            .generate_image("a fox", "1:1", ImageModel::FlashImagePreview)
            .unwrap();
        assert_eq!(images, vec!["data:image/png;base64,QUJD".to_string()]);
    }

    #[test]
    fn api_error_message_is_extracted() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .with_status(400)
            .with_body(r#"{"error": {"code": 400, "message": "API key not valid."}}"#)
            .create();

        let err = client_for(&server).generate_text("hello").unwrap_err();
        match err {
            AppError::GeminiApiError { message, status } => {
                assert_eq!(message, "API key not valid.");
                assert_eq!(status, Some(400));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn server_error_without_body_has_generic_message() {
        let mut server = mockito::Server::new();
        let _m = server.mock("POST", GENERATE_PATH).with_status(503).create();

        let err = client_for(&server).generate_text("hello").unwrap_err();
        assert!(matches!(
            err,
            AppError::GeminiApiError { ref message, status: Some(503) } if message == "Server error"
        ));
    }

    #[test]
    fn video_start_poll_and_download() {
        let mut server = mockito::Server::new();
        let _start = server
            .mock("POST", "/models/veo-2.0-generate-001:predictLongRunning")
            .match_body(Matcher::PartialJson(json!({ "instances": [{ "prompt": "waves" }] })))
            .with_status(200)
            .with_body(r#"{"name": "models/veo-2.0-generate-001/operations/op1"}"#)
            .create();
        let video_uri = format!("{}/files/video.mp4", server.url());
        let _poll = server
            .mock("GET", "/models/veo-2.0-generate-001/operations/op1")
            .with_status(200)
            .with_body(
                json!({
                    "name": "models/veo-2.0-generate-001/operations/op1",
                    "done": true,
                    "response": {
                        "generateVideoResponse": {
                            "generatedSamples": [{ "video": { "uri": video_uri.clone() } }]
                        }
                    }
                })
                .to_string(),
            )
            .create();
        let _download = server
            .mock("GET", "/files/video.mp4")
            .match_header("x-goog-api-key", "fake-key")
            .with_status(200)
            .with_body(b"MP4DATA")
            .create();

        let client = client_for(&server);
        let started = client.start_video("waves", None).unwrap();
        assert!(!started.done);

        let finished = client.poll_video(&started).unwrap();
        assert!(finished.done);
        assert_eq!(finished.video_uri.as_deref(), Some(video_uri.as_str()));

        let bytes = client.download_video(&video_uri).unwrap();
        assert_eq!(bytes, b"MP4DATA");
    }

    #[test]
    fn failed_operation_surfaces_error() {
        let response = OperationResponse {
            name: "op".into(),
            done: true,
            error: Some(OperationError { message: "quota".into() }),
            response: None,
        };
        assert!(matches!(response.into_operation(), Err(AppError::GeminiApiError { .. })));
    }

    #[test]
    fn fill_template_strips_fences() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .match_body(Matcher::Regex("User Subject".into()))
            .with_status(200)
            .with_body(text_reply("```json\n{\"scene\": \"a moonlit pier\"}\n```"))
            .create();

        let filled =
            client_for(&server).fill_template("pier", "{\"scene\": \"[SCENE]\"}", &[]).unwrap();
        assert_eq!(filled, "{\"scene\": \"a moonlit pier\"}");
    }

    #[test]
    fn optimize_parses_sections() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", GENERATE_PATH)
            .match_body(Matcher::PartialJson(json!({ "generationConfig": { "temperature": 0.5 } })))
            .with_status(200)
            .with_body(text_reply(
                "<h4>Your Optimized Prompt:</h4><pre><code>Act as an editor.</code></pre><h4>Pro Tip:</h4>Be concise.",
            ))
            .create();

        let output = client_for(&server)
            .optimize_prompt("edit this", TargetAi::Claude, OptimizeStyle::Basic)
            .unwrap();
        assert_eq!(output.optimized_prompt, "Act as an editor.");
        assert_eq!(output.pro_tip.as_deref(), Some("Be concise."));
    }
}
