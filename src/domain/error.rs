//! 리뷰 파이프라인 전 구간에서 구분 가능한 오류 종류.
//!
//! 경계(HTTP/CLI)는 variant 별로 상태 코드/종료 코드를 결정한다.

use std::error::Error as StdError;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReviewError>;

#[derive(Debug, Error)]
pub enum ReviewError {
    /// 요청 버전의 프롬프트 파일이 없음
    #[error(
        "prompt file not found: {}\nrequested version: {version}\ncheck that PROMPT_VERSION is set correctly",
        .path.display()
    )]
    PromptNotFound { path: PathBuf, version: String },

    /// 파일은 있으나 읽기/YAML 파싱/필수 키/템플릿 검증에 실패
    #[error("failed to parse prompt file {}: {reason}", .path.display())]
    PromptParse { path: PathBuf, reason: String },

    /// 템플릿이 선언한 변수를 호출 시점에 채울 수 없음(템플릿/코드 불일치)
    #[error("prompt variable '{name}' has no value to substitute")]
    MissingPlaceholder { name: String },

    /// LLM 호출 실패(네트워크/인증/쿼터/응답 형식)
    #[error("LLM invocation failed (model {model}): {detail}")]
    LlmInvocation {
        model: String,
        detail: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// 공백뿐인 diff
    #[error("diff must not be empty")]
    EmptyDiff,

    /// 닫힌 열거형 필드에 허용되지 않은 값
    #[error("invalid {field} '{value}' (expected one of: {expected})")]
    InvalidOption {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ReviewError {
    /// 클라이언트 입력 문제인지 여부(LLM 호출 전에 거절된 요청).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyDiff | Self::InvalidOption { .. })
    }

    /// 설정/템플릿 문제로 서비스 자체가 요청을 처리할 수 없는 경우.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::PromptNotFound { .. } | Self::PromptParse { .. } | Self::MissingPlaceholder { .. }
        )
    }

    pub(crate) fn llm(model: &str, err: anyhow::Error) -> Self {
        Self::LlmInvocation {
            model: model.to_string(),
            detail: format!("{err:#}"),
            source: err.into(),
        }
    }
}
