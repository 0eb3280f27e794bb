//! 리뷰 요청 도메인 값 객체와 기본값 정책.

use std::fmt;
use std::str::FromStr;

use super::error::{Result, ReviewError};
use super::prompt::PromptValues;

pub const DEFAULT_LANGUAGE: &str = "Python";
pub const DEFAULT_REPO_RULES: &str = "Follow clean code best practices";

/// 리뷰 시 요구하는 보안 검토 강도.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecurityLevel {
    #[default]
    High,
    Medium,
    Low,
}

impl SecurityLevel {
    const EXPECTED: &'static str = "high, medium, low";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl FromStr for SecurityLevel {
    type Err = ReviewError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ReviewError::InvalidOption {
                field: "security_level",
                value: raw.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 리뷰가 집중할 관점.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewFocus {
    #[default]
    All,
    Security,
    Performance,
    Quality,
}

impl ReviewFocus {
    const EXPECTED: &'static str = "all, security, performance, quality";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Quality => "quality",
        }
    }
}

impl FromStr for ReviewFocus {
    type Err = ReviewError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "all" => Ok(Self::All),
            "security" => Ok(Self::Security),
            "performance" => Ok(Self::Performance),
            "quality" => Ok(Self::Quality),
            _ => Err(ReviewError::InvalidOption {
                field: "review_focus",
                value: raw.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

impl fmt::Display for ReviewFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 경계에서 받은 원시 입력. 선택 필드는 미지정(None)일 수 있다.
#[derive(Debug, Clone, Default)]
pub struct ReviewInput {
    pub diff: String,
    pub language: Option<String>,
    pub repo_rules: Option<String>,
    pub security_level: Option<String>,
    pub review_focus: Option<String>,
}

impl ReviewInput {
    pub fn new(diff: impl Into<String>) -> Self {
        Self {
            diff: diff.into(),
            ..Self::default()
        }
    }
}

/// 기본값 적용과 검증이 끝난 리뷰 요청.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub diff: String,
    pub language: String,
    pub repo_rules: String,
    pub security_level: SecurityLevel,
    pub review_focus: ReviewFocus,
}

impl ReviewRequest {
    /// 빈 diff와 알 수 없는 열거 값은 여기서 거절한다(LLM 호출 전).
    pub fn from_input(input: ReviewInput) -> Result<Self> {
        if input.diff.trim().is_empty() {
            return Err(ReviewError::EmptyDiff);
        }

        let security_level = input
            .security_level
            .as_deref()
            .map(str::parse::<SecurityLevel>)
            .transpose()?
            .unwrap_or_default();
        let review_focus = input
            .review_focus
            .as_deref()
            .map(str::parse::<ReviewFocus>)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            diff: input.diff,
            language: input.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            repo_rules: input.repo_rules.unwrap_or_else(|| DEFAULT_REPO_RULES.to_string()),
            security_level,
            review_focus,
        })
    }

    /// 템플릿 치환 값 집합. `diff`는 `code_diff`의 별칭이다.
    pub fn prompt_values(&self) -> PromptValues {
        PromptValues::new()
            .with("code_diff", self.diff.as_str())
            .with("diff", self.diff.as_str())
            .with("language", self.language.as_str())
            .with("repo_rules", self.repo_rules.as_str())
            .with("security_level", self.security_level.as_str())
            .with("review_focus", self.review_focus.as_str())
    }
}
