//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{AppConfig, LlmConfig};
use crate::domain::error::Result as ReviewResult;
use crate::domain::prompt::PromptDefinition;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<AppConfig>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 버전별 프롬프트 정의를 읽어오는 저장소 포트.
pub trait PromptStore: Send + Sync {
    /// 버전에 해당하는 정의 파일 위치(오류 메시지용).
    fn locate(&self, version: &str) -> PathBuf;
    /// 주어진 버전의 정의를 로딩한다.
    /// 파일이 없으면 `PromptNotFound`, 형식 오류는 `PromptParse`.
    fn load(&self, version: &str) -> ReviewResult<PromptDefinition>;
}

/// LLM에 전달할 단일 완성 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f32,
}

/// 외부 LLM 호출 포트.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// 사용자 표시 이름
    fn name(&self) -> &'static str;
    /// 호출 대상 모델 식별자
    fn model(&self) -> &str;
    /// 프롬프트를 전송하고 응답 텍스트를 그대로 반환한다.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// 설정에 맞는 LLM 클라이언트를 구성하는 팩토리 포트.
pub trait ProviderFactory: Send + Sync {
    fn build(&self, config: &LlmConfig) -> Result<Arc<dyn LlmClient>>;
}
