//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod prompt_store;
mod provider_factory;

pub use config_repository::EnvConfigRepository;
pub use prompt_store::FileSystemPromptStore;
pub use provider_factory::ProviderFactoryAdapter;
