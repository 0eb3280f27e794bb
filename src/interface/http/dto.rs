//! HTTP 요청/응답 JSON 스키마.

use serde::{Deserialize, Serialize};

use crate::domain::review::ReviewInput;

/// `POST /revisor` 요청 본문.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequestBody {
    pub diff: String,
    #[serde(default)]
    pub pr_title: Option<String>,
    /// 참고용(LLM에는 전달하지 않음)
    #[serde(default)]
    pub pr_description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub repo_rules: Option<String>,
    #[serde(default)]
    pub security_level: Option<String>,
    #[serde(default)]
    pub review_focus: Option<String>,
}

impl ReviewRequestBody {
    pub fn to_input(&self) -> ReviewInput {
        ReviewInput {
            diff: self.diff.clone(),
            language: self.language.clone(),
            repo_rules: self.repo_rules.clone(),
            security_level: self.security_level.clone(),
            review_focus: self.review_focus.clone(),
        }
    }
}

/// `POST /revisor` 성공 응답.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewResponseBody {
    pub status: String,
    pub message: String,
    pub diff_received: bool,
    /// 입력 diff의 문자 수
    pub diff_size: usize,
    pub review: Option<String>,
    pub pr_title: Option<String>,
    pub language: Option<String>,
    pub prompt_version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Endpoints {
    pub revisor: String,
    pub health: String,
}

/// `GET /` 서비스 안내.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub prompt_version: String,
    pub endpoints: Endpoints,
}

/// `GET /health` 상태 응답.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub prompt_version: String,
    pub llm_model: String,
}

/// 오류 응답 본문.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}
