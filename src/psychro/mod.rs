//! ASHRAE Handbook - Fundamentals (2017) ch. 1 기반 습공기 물성 계산.
//!
//! 모든 계산은 [`Psychrometrics`] 값에 묶인 단위 시스템(IP/SI)을 따른다.
//! 단위 시스템이 설정되기 전에는 어떤 계산도 수행하지 않고
//! [`PsychroError::UnitSystemNotSet`]을 반환한다.
//!
//! 단위 규약:
//! - IP: 온도 °F, 압력 psi, 엔탈피 Btu/lb, 비체적 ft³/lb
//! - SI: 온도 °C, 압력 Pa, 엔탈피 J/kg, 비체적 m³/kg
//! - 습도비는 건공기 단위 질량당 수증기 질량, 상대습도는 [0, 1]

pub mod aggregate;
pub mod atmosphere;
pub mod bulk;
pub mod conversions;
pub mod saturation;
pub mod solvers;

pub use aggregate::MoistAirState;

use crate::config::{Config, UnitSystem, DEFAULT_MAX_ITER_COUNT};
use crate::error::{PsychroError, Result};

/// 모든 함수가 사용/반환하는 최소 습도비. 0으로 인한 특이점을 피한다.
pub const MIN_HUM_RATIO: f64 = 1e-7;

/// 수증기/건공기 분자량비
const MOLAR_MASS_RATIO: f64 = 0.621945;

/// 물의 어는점 [°F]
const FREEZING_POINT_WATER_IP: f64 = 32.0;
/// 물의 어는점 [°C]
const FREEZING_POINT_WATER_SI: f64 = 0.0;
/// 물의 삼중점 [°F]
const TRIPLE_POINT_WATER_IP: f64 = 32.018;
/// 물의 삼중점 [°C]
const TRIPLE_POINT_WATER_SI: f64 = 0.01;

/// 포화수증기압 회귀식의 유효 온도 범위 [°F]
const T_BOUNDS_IP: (f64, f64) = (-148.0, 392.0);
/// 포화수증기압 회귀식의 유효 온도 범위 [°C]
const T_BOUNDS_SI: (f64, f64) = (-100.0, 200.0);

/// 단위 시스템과 반복 계산 설정을 보관하는 습공기 계산기.
#[derive(Debug, Clone, PartialEq)]
pub struct Psychrometrics {
    unit_system: Option<UnitSystem>,
    max_iter_count: u32,
}

impl Default for Psychrometrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Psychrometrics {
    /// 단위 시스템이 정해지지 않은 계산기를 만든다. 사용 전 [`Self::set_unit_system`]이 필요하다.
    pub fn new() -> Self {
        Self {
            unit_system: None,
            max_iter_count: DEFAULT_MAX_ITER_COUNT,
        }
    }

    pub fn with_unit_system(unit_system: UnitSystem) -> Self {
        Self {
            unit_system: Some(unit_system),
            max_iter_count: DEFAULT_MAX_ITER_COUNT,
        }
    }

    /// 설정 파일 값으로 계산기를 구성한다.
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            unit_system: Some(cfg.unit_system),
            max_iter_count: cfg.max_iter_count.max(1),
        }
    }

    /// 단위 시스템을 설정한다. 수렴 허용오차도 함께 바뀐다.
    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.unit_system = Some(unit_system);
    }

    /// 현재 단위 시스템. 설정 전이면 오류.
    pub fn unit_system(&self) -> Result<UnitSystem> {
        self.unit_system.ok_or(PsychroError::UnitSystemNotSet)
    }

    /// IP 단위 사용 여부. 설정 전이면 오류.
    pub fn is_ip(&self) -> Result<bool> {
        Ok(self.unit_system()? == UnitSystem::IP)
    }

    /// 반복 계산 수렴 허용오차 [°F 또는 °C]. 설정 전이면 오류.
    pub fn tolerance(&self) -> Result<f64> {
        Ok(self.unit_system()?.tolerance())
    }

    pub fn max_iter_count(&self) -> u32 {
        self.max_iter_count
    }

    /// 반복 계산의 최대 반복 횟수를 바꾼다. 0은 1로 취급한다.
    pub fn set_max_iter_count(&mut self, max_iter_count: u32) {
        self.max_iter_count = max_iter_count.max(1);
    }

    /// 건구온도 유효 범위 (하한, 상한).
    fn t_bounds(&self) -> Result<(f64, f64)> {
        Ok(if self.is_ip()? { T_BOUNDS_IP } else { T_BOUNDS_SI })
    }
}

/// 습도비가 음수이거나 NaN이면 오류를, 최소값보다 작으면 최소값을 반환한다.
fn bound_hum_ratio(hum_ratio: f64) -> Result<f64> {
    if !(hum_ratio >= 0.0) {
        return Err(PsychroError::Domain("습도비는 0 이상이어야 합니다."));
    }
    Ok(hum_ratio.max(MIN_HUM_RATIO))
}

/// 계산된 습도비를 최소값 이상으로 제한한다.
fn floor_hum_ratio(hum_ratio: f64) -> f64 {
    hum_ratio.max(MIN_HUM_RATIO)
}

fn check_rel_hum(rel_hum: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&rel_hum) {
        return Err(PsychroError::Domain("상대습도는 [0, 1] 범위여야 합니다."));
    }
    Ok(())
}

fn check_vap_pres(vap_pres: f64) -> Result<()> {
    if !(vap_pres >= 0.0) {
        return Err(PsychroError::Domain("수증기 분압은 0 이상이어야 합니다."));
    }
    Ok(())
}
