use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentResponse, Part};
use crate::ai::ItineraryService;
use crate::models::Itinerary;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

/// Structured-output schema Gemini is constrained to emit.
///
/// Mirrors [`Itinerary`], with `required` lists at every object level.
/// The model may still return data inconsistent with this schema, so the
/// payload goes through `Itinerary::from_payload` regardless.
fn itinerary_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING", "description": "여행 일정의 제목" },
            "days": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "NUMBER" },
                        "activity": { "type": "STRING", "description": "주요 활동 제목" },
                        "description": { "type": "STRING", "description": "활동 상세 설명" }
                    },
                    "required": ["day", "activity", "description"]
                }
            },
            "tips": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "여행 꿀팁 리스트"
            }
        },
        "required": ["title", "days", "tips"]
    })
}

pub struct GeminiItineraryClient {
    http: GeminiHttpClient,
}

impl GeminiItineraryClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response.candidates.first().and_then(|c| {
            c.content
                .parts
                .iter()
                .find(|part| !part.text.trim().is_empty())
                .map(|part| part.text.clone())
        })
    }
}

#[async_trait]
impl ItineraryService for GeminiItineraryClient {
    async fn generate_itinerary(&self, query: &str) -> Result<Itinerary> {
        tracing::debug!(
            "Requesting itinerary from Gemini (model: {}) for query: {}",
            self.http.model(),
            query
        );

        let request = GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: prompts::ITINERARY_SYSTEM.to_string(),
                }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompts::render(prompts::ITINERARY_USER, &[("query", query)]),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(itinerary_response_schema()),
            }),
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        let text = Self::extract_text(&response).ok_or(Error::EmptyResponse)?;

        let itinerary = Itinerary::from_payload(&text)?;
        tracing::info!(
            "Generated itinerary '{}' ({} days, {} tips)",
            itinerary.title,
            itinerary.days.len(),
            itinerary.tips.len()
        );

        Ok(itinerary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path, path_regex};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
    const GENERATE_CONTENT_PATH_REGEX: &str = r"/v1beta/models/.+:generateContent";

    fn make_client(server: &MockServer, api_key: &str, model: &str) -> GeminiItineraryClient {
        GeminiItineraryClient::new(api_key.to_string(), model.to_string())
            .with_base_url(server.uri())
    }

    fn candidate_with_text(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": text }]
                }
            }]
        })
    }

    #[tokio::test]
    async fn test_generate_itinerary_parses_valid_payload() {
        let server = MockServer::start().await;

        let payload = r#"{"title":"파리 3일 여행","days":[{"day":1,"activity":"에펠탑","description":"해질녘 샹드마르스 공원 산책"}],"tips":["편한 신발을 준비하세요"]}"#;

        Mock::given(method("POST"))
            .and(path_regex(GENERATE_CONTENT_PATH_REGEX))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text(payload)))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let itinerary = client.generate_itinerary("파리 3일").await.unwrap();
        assert_eq!(itinerary.title, "파리 3일 여행");
        assert_eq!(itinerary.days.len(), 1);
        assert_eq!(itinerary.days[0].day, 1);
        assert_eq!(itinerary.days[0].activity, "에펠탑");
        assert_eq!(itinerary.tips, vec!["편한 신발을 준비하세요"]);
    }

    #[tokio::test]
    async fn test_request_declares_structured_output_schema() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/v1beta/models/gemini-3-flash-preview:generateContent",
            ))
            .and(body_string_contains("\"responseMimeType\":\"application/json\""))
            .and(body_string_contains("\"responseSchema\""))
            .and(body_string_contains("\"required\":[\"title\",\"days\",\"tips\"]"))
            .and(body_string_contains(
                "\"required\":[\"day\",\"activity\",\"description\"]",
            ))
            .and(body_string_contains("파리 3일"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text(
                r#"{"title":"파리","days":[],"tips":[]}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        client.generate_itinerary("파리 3일").await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_payload_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(GENERATE_CONTENT_PATH_REGEX))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text("not json")))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let err = client.generate_itinerary("로마 주말").await.unwrap_err();
        assert!(matches!(err, Error::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn test_empty_title_is_a_schema_violation() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(GENERATE_CONTENT_PATH_REGEX))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text(
                r#"{"title":"","days":[],"tips":[]}"#,
            )))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let err = client.generate_itinerary("런던 2일").await.unwrap_err();
        assert!(matches!(err, Error::SchemaViolation(_)));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(GENERATE_CONTENT_PATH_REGEX))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let err = client.generate_itinerary("프라하 2일").await.unwrap_err();
        assert!(matches!(err, Error::EmptyResponse));
    }

    #[tokio::test]
    async fn test_whitespace_only_text_is_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(GENERATE_CONTENT_PATH_REGEX))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text("  \n")))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let err = client.generate_itinerary("프라하 2일").await.unwrap_err();
        assert!(matches!(err, Error::EmptyResponse));
    }

    #[tokio::test]
    async fn test_api_error_returns_ai_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_regex(GENERATE_CONTENT_PATH_REGEX))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = make_client(&server, "bad-key", DEFAULT_MODEL);

        let err = client.generate_itinerary("파리 3일").await.unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_strips_models_prefix_from_model_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/v1beta/models/gemini-3-flash-preview:generateContent",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text(
                r#"{"title":"파리","days":[],"tips":[]}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", "models/gemini-3-flash-preview");

        client.generate_itinerary("파리 3일").await.unwrap();
    }
}
