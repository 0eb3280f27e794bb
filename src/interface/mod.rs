//! Interface layer
//! 외부 진입점(CLI/HTTP)과 의존성 조립을 담당한다.

pub mod cli;
pub mod composition;
pub mod http;
