//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::config::AppConfig;
use crate::application::ports::{ConfigRepository, ProviderFactory};
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::resolve_prompt::ResolvePromptUseCase;
use crate::application::usecases::review_diff::ReviewDiffUseCase;
use crate::domain::prompt::ResolvedPrompt;
use crate::infrastructure::adapters::{
    EnvConfigRepository, FileSystemPromptStore, ProviderFactoryAdapter,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: EnvConfigRepository,
    provider_factory: ProviderFactoryAdapter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: EnvConfigRepository,
            provider_factory: ProviderFactoryAdapter,
        }
    }
}

impl AppComposition {
    /// 설정은 시작 시 한 번만 읽어 하위 계층에 전달한다.
    pub fn load_config(&self) -> Result<AppConfig> {
        self.config_repo
            .load()
            .context("failed to load prreviewer configuration")
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 프롬프트 버전을 해석해 템플릿을 준비한다.
    pub fn resolve_prompt(
        &self,
        config: &AppConfig,
        explicit_version: Option<&str>,
    ) -> Result<ResolvedPrompt> {
        let store = FileSystemPromptStore::from_config(&config.prompts);
        let usecase = ResolvePromptUseCase {
            store: &store,
            configured_version: config.prompts.version.as_deref(),
        };
        usecase
            .execute(explicit_version)
            .context("failed to resolve review prompt")
    }

    /// 프롬프트 + LLM 클라이언트를 묶어 리뷰 유스케이스를 생성한다.
    pub fn review_usecase(
        &self,
        config: &AppConfig,
        explicit_version: Option<&str>,
    ) -> Result<ReviewDiffUseCase> {
        let prompt = self.resolve_prompt(config, explicit_version)?;
        let llm = self.provider_factory.build(&config.llm)?;
        Ok(ReviewDiffUseCase::new(Arc::new(prompt), llm))
    }
}
