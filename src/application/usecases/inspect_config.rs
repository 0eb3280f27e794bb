//! 적용 중인 실행 설정(환경변수/.env)을 확인하는 유스케이스.

use anyhow::Result;

use crate::application::ports::ConfigRepository;

/// 현재 설정과 프롬프트 파일 위치를 사람이 읽기 쉬운 JSON으로 반환한다.
/// API key 값은 포함하지 않고 출처만 표시한다.
pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl InspectConfigUseCase<'_> {
    pub fn execute(&self) -> Result<String> {
        self.config_repo.inspect_pretty_json()
    }
}
