//! 환경변수 기반 설정 로더.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::config::{
    AppConfig, DEFAULT_BIND_ADDR, DEFAULT_GEMINI_API_BASE, DEFAULT_LLM_TIMEOUT_SECS,
    DEFAULT_PROMPT_NAMESPACE, DEFAULT_PROMPTS_ROOT, LlmConfig, PromptConfig, ServerConfig,
};

use super::resolve::resolve_api_key;

/// 설정에 사용하는 환경변수 이름.
pub mod env_keys {
    pub const LLM_MODEL: &str = "LLM_MODEL";
    pub const PROMPT_VERSION: &str = "PROMPT_VERSION";
    pub const PROMPTS_DIR: &str = "PROMPTS_DIR";
    pub const PROMPT_NAMESPACE: &str = "PROMPT_NAMESPACE";
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
    pub const GEMINI_API_BASE: &str = "GEMINI_API_BASE";
    pub const LLM_TIMEOUT_SECS: &str = "LLM_TIMEOUT_SECS";
    pub const LLM_CA_CERT: &str = "LLM_CA_CERT";
    pub const BIND_ADDR: &str = "BIND_ADDR";
}

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: AppConfig,
    /// 실제로 읽은 `.env` 파일(없으면 None)
    pub env_file: Option<PathBuf>,
}

/// `.env`를 먼저 반영한 뒤 프로세스 환경에서 설정을 조립한다.
/// 이미 설정된 환경변수는 `.env`가 덮어쓰지 않는다.
pub(crate) fn load_from_env() -> Result<LoadedConfig> {
    let env_file = accept_env_file(dotenvy::dotenv());
    let config = config_from_lookup(|key| env::var(key).ok())?;
    Ok(LoadedConfig { config, env_file })
}

/// `.env`가 없으면 조용히 넘어가고, 있는데 읽지 못하면 경고만 남긴다.
fn accept_env_file(result: dotenvy::Result<PathBuf>) -> Option<PathBuf> {
    match result {
        Ok(path) => Some(path),
        Err(err) if err.not_found() => None,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable .env file");
            None
        }
    }
}

/// 키 조회 함수로부터 설정을 조립한다. 빈 값은 미설정으로 취급한다.
pub fn config_from_lookup<F>(lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let timeout_secs = match get(env_keys::LLM_TIMEOUT_SECS) {
        Some(raw) => raw.parse::<u64>().with_context(|| {
            format!(
                "{} must be a whole number of seconds, got '{raw}'",
                env_keys::LLM_TIMEOUT_SECS
            )
        })?,
        None => DEFAULT_LLM_TIMEOUT_SECS,
    };

    let credential = resolve_api_key(&get);

    Ok(AppConfig {
        llm: LlmConfig {
            model: get(env_keys::LLM_MODEL),
            api_key: credential.credential,
            api_key_source: credential.source,
            api_base: get(env_keys::GEMINI_API_BASE)
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            timeout_secs,
            ca_cert_path: get(env_keys::LLM_CA_CERT).map(PathBuf::from),
        },
        prompts: PromptConfig {
            root: PathBuf::from(
                get(env_keys::PROMPTS_DIR).unwrap_or_else(|| DEFAULT_PROMPTS_ROOT.to_string()),
            ),
            namespace: get(env_keys::PROMPT_NAMESPACE)
                .unwrap_or_else(|| DEFAULT_PROMPT_NAMESPACE.to_string()),
            version: get(env_keys::PROMPT_VERSION),
        },
        server: ServerConfig {
            bind_addr: get(env_keys::BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        },
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.llm.model, None);
        assert!(config.llm.require_model().is_err());
        assert_eq!(config.llm.api_base, DEFAULT_GEMINI_API_BASE);
        assert_eq!(config.llm.timeout_secs, 120);
        assert_eq!(config.prompts.root, PathBuf::from("prompts"));
        assert_eq!(config.prompts.namespace, "agent-code-reviewer");
        assert_eq!(config.prompts.version, None);
        assert_eq!(config.prompts.effective_version(), "v1.0.0");
        assert_eq!(config.server.bind_addr, "0.0.0.0:8000");
    }

    #[test]
    fn reads_all_keys() {
        let config = config_from_lookup(lookup(&[
            ("LLM_MODEL", "gemini-2.0-flash"),
            ("PROMPT_VERSION", "v2.1.0"),
            ("PROMPTS_DIR", "/srv/prompts"),
            ("PROMPT_NAMESPACE", "agent-security-reviewer"),
            ("GEMINI_API_KEY", "AIzaTest"),
            ("GEMINI_API_BASE", "http://127.0.0.1:9999"),
            ("LLM_TIMEOUT_SECS", "30"),
            ("LLM_CA_CERT", "/etc/ssl/corp.pem"),
            ("BIND_ADDR", "127.0.0.1:9000"),
        ]))
        .unwrap();

        assert_eq!(config.llm.require_model().unwrap(), "gemini-2.0-flash");
        assert_eq!(config.llm.api_key.as_deref(), Some("AIzaTest"));
        assert_eq!(config.llm.api_key_source.as_deref(), Some("env:GEMINI_API_KEY"));
        assert_eq!(config.llm.api_base, "http://127.0.0.1:9999");
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.llm.ca_cert_path, Some(PathBuf::from("/etc/ssl/corp.pem")));
        assert_eq!(config.prompts.effective_version(), "v2.1.0");
        assert_eq!(config.prompts.root, PathBuf::from("/srv/prompts"));
        assert_eq!(config.prompts.namespace, "agent-security-reviewer");
        assert_eq!(config.server.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            config_from_lookup(lookup(&[("PROMPT_VERSION", "  "), ("LLM_MODEL", "")])).unwrap();
        assert_eq!(config.prompts.version, None);
        assert_eq!(config.llm.model, None);
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let err = config_from_lookup(lookup(&[("LLM_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(format!("{err:#}").contains("LLM_TIMEOUT_SECS"));
    }

    #[test]
    fn env_file_errors_other_than_not_found_are_tolerated() {
        let found = PathBuf::from("/srv/app/.env");
        assert_eq!(accept_env_file(Ok(found.clone())), Some(found));

        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(missing.not_found());
        assert_eq!(accept_env_file(Err(missing)), None);

        let malformed = dotenvy::Error::LineParse("NOT A VALID LINE".to_string(), 4);
        assert!(!malformed.not_found());
        assert_eq!(accept_env_file(Err(malformed)), None);
    }
}
