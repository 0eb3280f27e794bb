//! Provider 포트 구현 어댑터.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::config::LlmConfig;
use crate::application::ports::{LlmClient, ProviderFactory};
use crate::infrastructure::providers::GeminiClient;

/// 설정으로부터 단일 LLM 클라이언트를 구성하는 팩토리 어댑터.
pub struct ProviderFactoryAdapter;

impl ProviderFactory for ProviderFactoryAdapter {
    fn build(&self, config: &LlmConfig) -> Result<Arc<dyn LlmClient>> {
        let client = GeminiClient::from_config(config)
            .context("failed to initialise Gemini client")?;
        Ok(Arc::new(client))
    }
}
