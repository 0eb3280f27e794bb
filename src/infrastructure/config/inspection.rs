//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use crate::application::config::{AppConfig, DEFAULT_PROMPT_VERSION, PROMPT_FILE_NAME};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub env_file: Option<String>,
    pub llm: LlmInspection,
    pub prompts: PromptInspection,
    pub bind_addr: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LlmInspection {
    pub provider: String,
    pub model: Option<String>,
    pub runnable: bool,
    pub api_base: String,
    pub api_key_source: Option<String>,
    pub api_key_resolved: bool,
    pub timeout_secs: u64,
    pub ca_cert_path: Option<String>,
    pub ca_cert_exists: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptInspection {
    pub root: String,
    pub namespace: String,
    pub configured_version: Option<String>,
    pub default_version: String,
    pub effective_version: String,
    pub prompt_file: String,
    pub prompt_file_exists: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: &LoadedConfig) -> Self {
        let mut inspection = Self::from_config(&loaded.config);
        inspection.env_file = loaded.env_file.as_ref().map(|p| p.display().to_string());
        inspection
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let llm = &config.llm;
        let prompts = &config.prompts;
        let api_key_resolved = llm.api_key.is_some();
        let prompt_file = prompts
            .root
            .join(&prompts.namespace)
            .join(prompts.effective_version())
            .join(PROMPT_FILE_NAME);

        Self {
            env_file: None,
            llm: LlmInspection {
                provider: "gemini".to_string(),
                model: llm.model.clone(),
                runnable: llm.require_model().is_ok() && api_key_resolved,
                api_base: llm.api_base.clone(),
                api_key_source: llm.api_key_source.clone(),
                api_key_resolved,
                timeout_secs: llm.timeout_secs,
                ca_cert_path: llm.ca_cert_path.as_ref().map(|p| p.display().to_string()),
                ca_cert_exists: llm.ca_cert_path.as_ref().map(|p| p.is_file()),
            },
            prompts: PromptInspection {
                root: prompts.root.display().to_string(),
                namespace: prompts.namespace.clone(),
                configured_version: prompts.version.clone(),
                default_version: DEFAULT_PROMPT_VERSION.to_string(),
                effective_version: prompts.effective_version().to_string(),
                prompt_file_exists: prompt_file.is_file(),
                prompt_file: prompt_file.display().to_string(),
            },
            bind_addr: config.server.bind_addr.clone(),
        }
    }
}
