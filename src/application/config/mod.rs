//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 환경변수/파일 접근은 `infrastructure::config`에서만 수행한다.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

pub const DEFAULT_PROMPT_VERSION: &str = "v1.0.0";
pub const DEFAULT_PROMPTS_ROOT: &str = "prompts";
pub const DEFAULT_PROMPT_NAMESPACE: &str = "agent-code-reviewer";
pub const PROMPT_FILE_NAME: &str = "prompt.yaml";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// 시작 시 한 번 조립되어 하위 계층으로 전달되는 전체 설정.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub prompts: PromptConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct LlmConfig {
    /// `LLM_MODEL`(LLM 클라이언트 생성 시 필수)
    pub model: Option<String>,
    /// API key(민감정보: 직렬화하지 않음)
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// API key를 읽어온 출처(env:NAME)
    pub api_key_source: Option<String>,
    pub api_base: String,
    pub timeout_secs: u64,
    /// LLM 호출에만 추가로 신뢰할 PEM 루트 인증서
    pub ca_cert_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptConfig {
    pub root: PathBuf,
    pub namespace: String,
    /// `PROMPT_VERSION`(미지정이면 기본 버전 사용)
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl LlmConfig {
    /// 클라이언트 생성에 필요한 모델 식별자. 미설정이면 오류.
    pub fn require_model(&self) -> Result<&str> {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .context("LLM_MODEL is not set. Configure the model identifier in the environment or .env")
    }
}

impl PromptConfig {
    /// 설정된 버전, 없으면 기본 버전.
    pub fn effective_version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_PROMPT_VERSION)
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_PROMPTS_ROOT),
            namespace: DEFAULT_PROMPT_NAMESPACE.to_string(),
            version: None,
        }
    }
}
