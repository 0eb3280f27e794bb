//! 실행 설정(환경변수 + `.env`) 로딩 모듈.
//! 모든 외부 설정 입력을 한 번에 읽어 `AppConfig`로 조립하고, 진단용 정보를 함께 제공한다.

mod inspection;
mod loader;
mod resolve;

use anyhow::Result;

pub use inspection::{ConfigInspection, LlmInspection, PromptInspection};
pub use loader::{config_from_lookup, env_keys};
pub use resolve::{ProviderCredentialResolution, resolve_api_key};

use crate::application::config::AppConfig;

impl AppConfig {
    /// 프로세스 환경(및 `.env`)에서 최종 설정을 로딩한다.
    pub fn load() -> Result<Self> {
        Ok(loader::load_from_env()?.config)
    }

    /// 디버깅/진단용 설정 정보를 구성한다.
    pub fn inspect() -> Result<ConfigInspection> {
        let loaded = loader::load_from_env()?;
        Ok(ConfigInspection::from_loaded(&loaded))
    }

    /// 설정 진단 결과를 사람이 읽기 쉬운 JSON으로 반환한다.
    pub fn inspect_pretty_json() -> Result<String> {
        Ok(serde_json::to_string_pretty(&Self::inspect()?)?)
    }
}
