//! 프롬프트 저장소 포트 구현(버전별 YAML 파일).
//!
//! 레이아웃: `<root>/<namespace>/<version>/prompt.yaml`

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::application::config::{PROMPT_FILE_NAME, PromptConfig};
use crate::application::ports::PromptStore;
use crate::domain::error::{Result, ReviewError};
use crate::domain::prompt::PromptDefinition;

#[derive(Debug, Deserialize)]
struct PromptFile {
    #[serde(default)]
    id: Option<serde_yaml::Value>,
    template: String,
    input_variables: Vec<String>,
}

/// 파일시스템의 버전 디렉터리에서 정의를 읽는 저장소.
#[derive(Debug, Clone)]
pub struct FileSystemPromptStore {
    root: PathBuf,
    namespace: String,
}

impl FileSystemPromptStore {
    pub fn new(root: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            namespace: namespace.into(),
        }
    }

    pub fn from_config(config: &PromptConfig) -> Self {
        Self::new(config.root.clone(), config.namespace.clone())
    }
}

impl PromptStore for FileSystemPromptStore {
    fn locate(&self, version: &str) -> PathBuf {
        self.root
            .join(&self.namespace)
            .join(version)
            .join(PROMPT_FILE_NAME)
    }

    fn load(&self, version: &str) -> Result<PromptDefinition> {
        let path = self.locate(version);

        // 버전 문자열이 디렉터리 한 단계가 아니면 루트 밖을 가리킬 수 있다.
        if !is_single_segment(version) || !path.is_file() {
            return Err(ReviewError::PromptNotFound {
                path,
                version: version.to_string(),
            });
        }

        let raw = fs::read_to_string(&path).map_err(|err| ReviewError::PromptParse {
            path: path.clone(),
            reason: format!("failed to read file: {err}"),
        })?;
        let parsed: PromptFile =
            serde_yaml::from_str(&raw).map_err(|err| ReviewError::PromptParse {
                path: path.clone(),
                reason: err.to_string(),
            })?;

        Ok(PromptDefinition {
            id: parsed.id.as_ref().and_then(scalar_to_string),
            version: version.to_string(),
            template: parsed.template,
            input_variables: parsed.input_variables,
        })
    }
}

fn is_single_segment(version: &str) -> bool {
    if version.contains('\\') {
        return false;
    }
    let components: Vec<Component<'_>> = Path::new(version).components().collect();
    matches!(components.as_slice(), [Component::Normal(_)])
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
