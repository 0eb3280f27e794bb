//! prreviewer library root.
//! 버전이 지정된 프롬프트로 diff를 렌더링해 LLM 리뷰를 받아오는 서비스.
//! Clean Architecture + DDD 계층을 외부에 노출한다.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use domain::review::ReviewInput;
use interface::cli::{ReviewOptions, ServeOptions};
use interface::composition::AppComposition;
use interface::http::AppState;

/// 설정/프롬프트를 한 번 로딩한 뒤 HTTP API를 실행한다.
pub async fn serve(options: ServeOptions) -> Result<()> {
    let composition = AppComposition::default();
    let config = composition.load_config()?;
    let review = composition.review_usecase(&config, options.prompt_version.as_deref())?;

    let bind_addr = options
        .bind
        .unwrap_or_else(|| config.server.bind_addr.clone());
    interface::http::serve(&bind_addr, Arc::new(AppState { review })).await
}

/// diff 한 건을 리뷰하고 모델 출력을 반환한다.
pub async fn review_once(options: ReviewOptions) -> Result<String> {
    let diff = read_diff(options.diff_file.as_deref(), tokio::io::stdin()).await?;

    let composition = AppComposition::default();
    let config = composition.load_config()?;
    let review = composition.review_usecase(&config, options.prompt_version.as_deref())?;

    let input = ReviewInput {
        diff,
        language: options.language,
        repo_rules: options.repo_rules,
        security_level: options.security_level,
        review_focus: options.review_focus,
    };
    Ok(review.execute(input).await?)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    let composition = AppComposition::default();
    composition.inspect_config_usecase().execute()
}

/// 경로가 없거나 "-"이면 `stdin`에서 읽는다.
async fn read_diff<R>(path: Option<&Path>, mut stdin: R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    match path {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read diff file {}", path.display())),
        _ => {
            let mut diff = String::new();
            stdin
                .read_to_string(&mut diff)
                .await
                .context("failed to read diff from stdin")?;
            Ok(diff)
        }
    }
}
