//! Google Gemini provider 어댑터(`generateContent` API).

use std::time::Duration;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::application::config::LlmConfig;
use crate::application::ports::{CompletionRequest, LlmClient};

use super::api_runner::{build_api_client, post_json};

const PROVIDER_NAME: &str = "Gemini";

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    credential: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// 첫 번째 후보의 텍스트 part를 순서대로 이어 붙인다.
    /// 후보/본문/텍스트 part가 아예 없으면 None. 공백 텍스트는 그대로 돌려준다.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let texts: Vec<&str> = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if texts.is_empty() {
            return None;
        }
        Some(texts.concat())
    }

    fn empty_reason(&self) -> &str {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .or_else(|| {
                self.prompt_feedback
                    .as_ref()
                    .and_then(|f| f.block_reason.as_deref())
            })
            .unwrap_or("unknown")
    }
}

impl GeminiClient {
    /// 모델/API key가 모두 있어야 클라이언트를 만들 수 있다.
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let model = config.require_model()?.to_string();
        let credential = config
            .api_key
            .clone()
            .context("Gemini API key is not set. Configure GEMINI_API_KEY or GOOGLE_API_KEY")?;
        let client = build_api_client(
            Duration::from_secs(config.timeout_secs),
            config.ca_cert_path.as_deref(),
        )?;

        Ok(Self {
            client,
            base_url: config.api_base.clone(),
            model,
            credential,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn uses_api_key(&self) -> bool {
        self.credential.starts_with("AIza")
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let payload = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        let mut url = Url::parse(&self.endpoint())
            .with_context(|| format!("{PROVIDER_NAME}: invalid API base '{}'", self.base_url))?;

        // API key는 query, 그 외(OAuth access token)는 Bearer 헤더로 보낸다.
        let builder = if self.uses_api_key() {
            url.query_pairs_mut().append_pair("key", &self.credential);
            self.client.post(url)
        } else {
            self.client.post(url).bearer_auth(&self.credential)
        };

        let response: GenerateContentResponse =
            post_json(PROVIDER_NAME, builder.json(&payload)).await?;

        match response.text() {
            Some(content) => Ok(content),
            None => bail!(
                "{PROVIDER_NAME}: response has no candidate content (reason: {})",
                response.empty_reason()
            ),
        }
    }
}
