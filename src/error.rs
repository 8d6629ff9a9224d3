use thiserror::Error;

/// 습공기 계산 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PsychroError {
    /// 입력이 물리적 유효 범위를 벗어남
    #[error("범위를 벗어남: {0}")]
    Domain(&'static str),
    /// 반복 계산이 최대 반복 횟수 안에 수렴하지 않음
    #[error("수렴 실패: {solver} ({iterations}회 반복)")]
    Convergence {
        solver: &'static str,
        iterations: u32,
    },
    /// 단위 시스템을 설정하기 전에 계산을 요청함
    #[error("단위 시스템(IP/SI)이 설정되지 않았습니다.")]
    UnitSystemNotSet,
}

pub type Result<T> = std::result::Result<T, PsychroError>;
