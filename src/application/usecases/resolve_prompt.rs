//! 프롬프트 버전 선택 + 로딩 + 템플릿 검증 유스케이스.

use crate::application::config::DEFAULT_PROMPT_VERSION;
use crate::application::ports::PromptStore;
use crate::domain::error::{Result, ReviewError};
use crate::domain::prompt::ResolvedPrompt;

/// 버전 우선순위: 명시 인자 > 설정(`PROMPT_VERSION`) > 기본값.
pub struct ResolvePromptUseCase<'a> {
    pub store: &'a dyn PromptStore,
    pub configured_version: Option<&'a str>,
}

impl<'a> ResolvePromptUseCase<'a> {
    /// 실제로 로딩할 버전 문자열을 결정한다.
    pub fn select_version(&self, explicit: Option<&'a str>) -> &'a str {
        explicit
            .or(self.configured_version)
            .unwrap_or(DEFAULT_PROMPT_VERSION)
    }

    /// 정의를 로딩하고 재사용 가능한 템플릿으로 변환한다.
    pub fn execute(&self, explicit: Option<&'a str>) -> Result<ResolvedPrompt> {
        let version = self.select_version(explicit);
        let definition = self.store.load(version)?;

        let resolved = ResolvedPrompt::new(definition).map_err(|err| ReviewError::PromptParse {
            path: self.store.locate(version),
            reason: err.to_string(),
        })?;

        let definition = resolved.definition();
        tracing::info!(
            version = %definition.version,
            id = definition.id.as_deref().unwrap_or("N/A"),
            variables = ?definition.input_variables,
            "prompt loaded"
        );

        Ok(resolved)
    }
}
