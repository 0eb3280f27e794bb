//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::AppConfig;
use crate::application::ports::ConfigRepository;

/// 환경변수(+ `.env`) 기반 설정 저장소 어댑터.
pub struct EnvConfigRepository;

impl ConfigRepository for EnvConfigRepository {
    fn load(&self) -> Result<AppConfig> {
        AppConfig::load()
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        AppConfig::inspect_pretty_json()
    }
}
