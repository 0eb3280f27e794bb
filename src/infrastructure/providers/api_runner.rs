//! Provider HTTP API 호출 공용 유틸리티.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::{Certificate, Client, RequestBuilder};
use serde::de::DeserializeOwned;

/// 오류 메시지에 포함할 응답 본문 최대 길이(문자).
const MAX_ERROR_BODY_CHARS: usize = 2_000;

/// Provider API 호출용 HTTP 클라이언트를 생성한다.
/// 인증서 검증은 항상 켜져 있으며, `extra_root_ca`는 신뢰 루트를 하나 추가할 뿐이다.
pub fn build_api_client(timeout: Duration, extra_root_ca: Option<&Path>) -> Result<Client> {
    let mut builder = Client::builder().timeout(timeout);

    if let Some(path) = extra_root_ca {
        let pem = fs::read(path)
            .with_context(|| format!("failed to read CA certificate at {}", path.display()))?;
        let cert = Certificate::from_pem(&pem)
            .with_context(|| format!("invalid PEM certificate at {}", path.display()))?;
        builder = builder.add_root_certificate(cert);
    }

    builder.build().context("failed to build HTTP client")
}

/// 요청을 보내고 2xx 본문을 `T`로 역직렬화한다.
/// 실패 시 상태 코드와 (잘린) 응답 본문을 메시지에 남긴다.
pub async fn post_json<T: DeserializeOwned>(
    provider_name: &str,
    request: RequestBuilder,
) -> Result<T> {
    let response = request
        .send()
        .await
        .with_context(|| format!("{provider_name}: request failed"))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .with_context(|| format!("{provider_name}: failed to read response body"))?;

    if !status.is_success() {
        bail!(
            "{provider_name}: API returned {status}: {}",
            truncate_chars(body.trim(), MAX_ERROR_BODY_CHARS)
        );
    }

    serde_json::from_str(&body).with_context(|| format!("{provider_name}: invalid JSON response"))
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
