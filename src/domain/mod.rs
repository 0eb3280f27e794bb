//! Domain layer
//! 프롬프트 정의/리뷰 요청 규칙을 외부 시스템과 무관하게 표현한다.

pub mod error;
pub mod prompt;
pub mod review;
