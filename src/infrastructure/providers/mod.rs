//! 외부 LLM provider 어댑터 모듈.
//! 설정된 단일 provider(Gemini API)를 `LlmClient` 포트 구현으로 제공한다.

mod api_runner;
pub mod gemini;

pub use gemini::GeminiClient;
