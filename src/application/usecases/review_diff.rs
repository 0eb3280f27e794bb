//! diff 한 건을 프롬프트로 렌더링하고 LLM 리뷰를 받아오는 유스케이스.

use std::sync::Arc;

use crate::application::ports::{CompletionRequest, LlmClient};
use crate::domain::error::{Result, ReviewError};
use crate::domain::prompt::ResolvedPrompt;
use crate::domain::review::{ReviewInput, ReviewRequest};

/// 리뷰는 항상 결정적으로 생성한다.
pub const REVIEW_TEMPERATURE: f32 = 0.0;

/// 시작 시 해석된 프롬프트와 LLM 클라이언트를 소유한다.
/// 요청 간 공유 상태는 모두 읽기 전용이다.
pub struct ReviewDiffUseCase {
    prompt: Arc<ResolvedPrompt>,
    llm: Arc<dyn LlmClient>,
}

impl ReviewDiffUseCase {
    pub fn new(prompt: Arc<ResolvedPrompt>, llm: Arc<dyn LlmClient>) -> Self {
        Self { prompt, llm }
    }

    pub fn prompt_version(&self) -> &str {
        self.prompt.version()
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }

    /// 검증된 요청을 최종 프롬프트 문자열로 변환한다.
    pub fn render(&self, request: &ReviewRequest) -> Result<String> {
        self.prompt.format(&request.prompt_values())
    }

    /// 입력 검증 -> 렌더링 -> LLM 1회 호출. 재시도/캐시 없음.
    pub async fn execute(&self, input: ReviewInput) -> Result<String> {
        let request = ReviewRequest::from_input(input)?;

        tracing::info!(
            diff_chars = request.diff.chars().count(),
            language = %request.language,
            security_level = %request.security_level,
            review_focus = %request.review_focus,
            prompt_version = self.prompt_version(),
            "review requested"
        );

        let prompt = self.render(&request)?;
        let completion = CompletionRequest {
            prompt,
            temperature: REVIEW_TEMPERATURE,
        };

        let review = self
            .llm
            .complete(&completion)
            .await
            .map_err(|err| ReviewError::llm(self.llm.model(), err))?;

        tracing::info!(
            provider = self.llm.name(),
            review_chars = review.chars().count(),
            "review completed"
        );
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::anyhow;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::prompt::PromptDefinition;

    /// 호출을 기록하고 고정 응답(또는 실패)을 돌려주는 대역.
    struct RecordingLlm {
        reply: std::result::Result<String, String>,
        calls: Mutex<Vec<CompletionRequest>>,
    }

    impl RecordingLlm {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<CompletionRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmClient for RecordingLlm {
        fn name(&self) -> &'static str {
            "Recording"
        }

        fn model(&self) -> &str {
            "test-model"
        }

        async fn complete(&self, request: &CompletionRequest) -> anyhow::Result<String> {
            self.calls.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(anyhow!("{message}").context("Gemini: request failed")),
            }
        }
    }

    fn prompt(template: &str, vars: &[&str]) -> Arc<ResolvedPrompt> {
        Arc::new(
            ResolvedPrompt::new(PromptDefinition {
                id: None,
                version: "v1.0.0".to_string(),
                template: template.to_string(),
                input_variables: vars.iter().map(|v| v.to_string()).collect(),
            })
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn sends_rendered_prompt_at_zero_temperature_and_returns_reply_verbatim() {
        let llm = RecordingLlm::replying("  LGTM\n");
        let usecase = ReviewDiffUseCase::new(prompt("Review: {diff}", &["diff"]), llm.clone());

        let review = usecase.execute(ReviewInput::new("x=1")).await.unwrap();

        assert_eq!(review, "  LGTM\n");
        assert_eq!(
            llm.calls(),
            vec![CompletionRequest {
                prompt: "Review: x=1".to_string(),
                temperature: 0.0,
            }]
        );
    }

    #[tokio::test]
    async fn blank_diff_never_reaches_llm() {
        let llm = RecordingLlm::replying("unused");
        let usecase = ReviewDiffUseCase::new(prompt("Review: {diff}", &["diff"]), llm.clone());

        for diff in ["", "   "] {
            let err = usecase.execute(ReviewInput::new(diff)).await.unwrap_err();
            assert!(matches!(err, ReviewError::EmptyDiff));
        }
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn invalid_enum_value_never_reaches_llm() {
        let llm = RecordingLlm::replying("unused");
        let usecase = ReviewDiffUseCase::new(prompt("{code_diff}", &["code_diff"]), llm.clone());

        let input = ReviewInput {
            review_focus: Some("vibes".to_string()),
            ..ReviewInput::new("+ a")
        };
        let err = usecase.execute(input).await.unwrap_err();
        assert!(matches!(err, ReviewError::InvalidOption { .. }));
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn omitted_options_render_like_explicit_defaults() {
        let llm = RecordingLlm::replying("ok");
        let usecase = ReviewDiffUseCase::new(
            prompt(
                "{language}|{repo_rules}|{security_level}|{review_focus}|{code_diff}",
                &["code_diff", "language", "repo_rules", "security_level", "review_focus"],
            ),
            llm.clone(),
        );

        usecase.execute(ReviewInput::new("+ a")).await.unwrap();
        usecase
            .execute(ReviewInput {
                diff: "+ a".to_string(),
                language: Some("Python".to_string()),
                repo_rules: Some(crate::domain::review::DEFAULT_REPO_RULES.to_string()),
                security_level: Some("high".to_string()),
                review_focus: Some("all".to_string()),
            })
            .await
            .unwrap();

        let calls = llm.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].prompt, calls[1].prompt);
        assert!(calls[0].prompt.starts_with("Python|"));
    }

    #[tokio::test]
    async fn unknown_declared_variable_is_missing_placeholder() {
        let llm = RecordingLlm::replying("unused");
        let usecase = ReviewDiffUseCase::new(
            prompt("{code_diff} {ticket}", &["code_diff", "ticket"]),
            llm.clone(),
        );

        let err = usecase.execute(ReviewInput::new("+ a")).await.unwrap_err();
        assert!(matches!(err, ReviewError::MissingPlaceholder { ref name } if name == "ticket"));
        assert!(llm.calls().is_empty());
    }

    #[tokio::test]
    async fn llm_failure_is_wrapped_without_retry() {
        let llm = RecordingLlm::failing("quota exceeded");
        let usecase = ReviewDiffUseCase::new(prompt("{diff}", &["diff"]), llm.clone());

        let err = usecase.execute(ReviewInput::new("+ a")).await.unwrap_err();
        match &err {
            ReviewError::LlmInvocation { model, detail, .. } => {
                assert_eq!(model, "test-model");
                assert_eq!(detail, "Gemini: request failed: quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(llm.calls().len(), 1);
    }
}
