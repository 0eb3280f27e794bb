//! 버전이 지정된 프롬프트 정의와 placeholder 치환 규칙.
//!
//! 템플릿 문법: `{name}`은 placeholder, `{{`/`}}`는 리터럴 중괄호.

use std::collections::BTreeMap;

use thiserror::Error;

use super::error::{Result, ReviewError};

/// 저장소에서 읽어온 프롬프트 정의(로딩 후 불변).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDefinition {
    pub id: Option<String>,
    pub version: String,
    pub template: String,
    /// 파일에 선언된 순서를 그대로 유지한다.
    pub input_variables: Vec<String>,
}

/// 템플릿 구문/선언 검증 실패 사유.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unclosed '{{' at byte {offset}")]
    UnclosedPlaceholder { offset: usize },
    #[error("unmatched '}}' at byte {offset} (use '}}}}' for a literal brace)")]
    UnmatchedClose { offset: usize },
    #[error("invalid placeholder name '{name}'")]
    InvalidName { name: String },
    #[error("template references '{name}' which is not listed in input_variables")]
    Undeclared { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// 검증이 끝난 정의 + 미리 분해한 템플릿 조각.
/// 프로세스 시작 시 한 번 만들고 이후에는 읽기 전용으로 공유한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrompt {
    definition: PromptDefinition,
    segments: Vec<Segment>,
}

impl ResolvedPrompt {
    /// 템플릿을 분해하고, 참조된 모든 placeholder가 선언되어 있는지 검증한다.
    pub fn new(definition: PromptDefinition) -> std::result::Result<Self, TemplateError> {
        let segments = parse_segments(&definition.template)?;

        for segment in &segments {
            if let Segment::Placeholder(name) = segment
                && !definition.input_variables.iter().any(|v| v == name)
            {
                return Err(TemplateError::Undeclared { name: name.clone() });
            }
        }

        Ok(Self {
            definition,
            segments,
        })
    }

    pub fn definition(&self) -> &PromptDefinition {
        &self.definition
    }

    pub fn version(&self) -> &str {
        &self.definition.version
    }

    /// 템플릿 본문에 실제로 등장하는 placeholder 이름(등장 순서, 중복 포함).
    pub fn referenced_variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// 선언된 모든 변수를 채워 최종 프롬프트 문자열을 만든다.
    /// 선언되지 않은 추가 값은 무시한다.
    pub fn format(&self, values: &PromptValues) -> Result<String> {
        if let Some(missing) = self
            .definition
            .input_variables
            .iter()
            .find(|name| values.get(name).is_none())
        {
            return Err(ReviewError::MissingPlaceholder {
                name: missing.clone(),
            });
        }

        let mut out = String::with_capacity(self.definition.template.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = values
                        .get(name)
                        .ok_or_else(|| ReviewError::MissingPlaceholder { name: name.clone() })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

/// placeholder 이름 -> 치환 값.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptValues {
    values: BTreeMap<String, String>,
}

impl PromptValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

fn parse_segments(template: &str) -> std::result::Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        match ch {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                literal.push('{');
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnclosedPlaceholder { offset }),
                    }
                }
                if !is_valid_name(&name) {
                    return Err(TemplateError::InvalidName { name });
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(name));
            }
            '}' => return Err(TemplateError::UnmatchedClose { offset }),
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
