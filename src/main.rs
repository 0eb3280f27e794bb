//! `prreviewer` 바이너리 진입점.

use prreviewer::domain::error::ReviewError;
use prreviewer::interface::cli::{Cli, CliAction};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse_action() {
        CliAction::InspectConfig => match prreviewer::inspect_config_pretty_json() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Review(options) => match prreviewer::review_once(options).await {
            Ok(review) => println!("{review}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(exit_code(&err));
            }
        },
        CliAction::Serve(options) => {
            if let Err(err) = prreviewer::serve(options).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}

/// 입력 오류는 2, 그 외 실패는 1.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ReviewError>() {
        Some(review) if review.is_client_error() => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use anyhow::{Context, anyhow};

    use super::*;

    #[test]
    fn input_errors_exit_with_two() {
        assert_eq!(exit_code(&ReviewError::EmptyDiff.into()), 2);

        let wrapped = Err::<(), _>(ReviewError::InvalidOption {
            field: "review_focus",
            value: "style".to_string(),
            expected: "all, security, performance, quality",
        })
        .context("review failed")
        .unwrap_err();
        assert_eq!(exit_code(&wrapped), 2);
    }

    #[test]
    fn other_failures_exit_with_one() {
        assert_eq!(exit_code(&anyhow!("LLM_MODEL is not set")), 1);

        let missing = ReviewError::MissingPlaceholder {
            name: "ticket".to_string(),
        };
        assert_eq!(exit_code(&missing.into()), 1);
    }
}
