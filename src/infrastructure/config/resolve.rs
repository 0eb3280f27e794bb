//! 설정 값(API key 등)을 실제 런타임 값으로 해석하는 유틸리티.

use super::loader::env_keys;

/// Provider(API key) 해석 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCredentialResolution {
    pub credential: Option<String>,
    pub source: Option<String>,
}

/// Gemini API key를 해석한다. `GEMINI_API_KEY` 우선, 없으면 `GOOGLE_API_KEY`.
pub fn resolve_api_key<F>(get: &F) -> ProviderCredentialResolution
where
    F: Fn(&str) -> Option<String>,
{
    for env_name in [env_keys::GEMINI_API_KEY, env_keys::GOOGLE_API_KEY] {
        let value = get(env_name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        if let Some(v) = value {
            return ProviderCredentialResolution {
                credential: Some(v),
                source: Some(format!("env:{env_name}")),
            };
        }
    }

    ProviderCredentialResolution {
        credential: None,
        source: Some(format!("env:{} (missing)", env_keys::GEMINI_API_KEY)),
    }
}
