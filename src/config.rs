use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::units::{PressureUnit, TemperatureUnit};

/// 반복 계산의 기본 최대 반복 횟수.
pub const DEFAULT_MAX_ITER_COUNT: u32 = 100;

/// 사용 가능한 단위 시스템.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// 영국식: °F, psi, lb, ft, Btu
    IP,
    /// 국제단위계: °C, Pa, kg, m, J
    SI,
}

impl UnitSystem {
    /// 수렴 판정 허용오차. 온도 눈금 차이를 보정해 IP/SI가 같은 상대 정밀도를 갖도록 한다.
    pub fn tolerance(self) -> f64 {
        match self {
            UnitSystem::IP => 0.001 * 9.0 / 5.0,
            UnitSystem::SI => 0.001,
        }
    }

    pub fn temperature_unit(self) -> TemperatureUnit {
        match self {
            UnitSystem::IP => TemperatureUnit::Fahrenheit,
            UnitSystem::SI => TemperatureUnit::Celsius,
        }
    }

    pub fn pressure_unit(self) -> PressureUnit {
        match self {
            UnitSystem::IP => PressureUnit::Psi,
            UnitSystem::SI => PressureUnit::Pascal,
        }
    }

    /// 반대 단위 시스템을 반환한다.
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::IP => UnitSystem::SI,
            UnitSystem::SI => UnitSystem::IP,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::IP => write!(f, "IP"),
            UnitSystem::SI => write!(f, "SI"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ip" => Ok(UnitSystem::IP),
            "si" => Ok(UnitSystem::SI),
            other => Err(ConfigError::UnknownUnitSystem(other.to_string())),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// 이슬점/습구온도 반복 계산의 최대 반복 횟수
    #[serde(default = "default_max_iter_count")]
    pub max_iter_count: u32,
}

fn default_max_iter_count() -> u32 {
    DEFAULT_MAX_ITER_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::SI,
            max_iter_count: DEFAULT_MAX_ITER_COUNT,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("알 수 없는 단위 시스템: {0} (IP 또는 SI)")]
    UnknownUnitSystem(String),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("psychro.toml");
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn saved_config_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("psychro.toml");
        let cfg = Config {
            unit_system: UnitSystem::IP,
            max_iter_count: 250,
        };
        cfg.save(&path).unwrap();
        assert_eq!(load_or_default(&path).unwrap(), cfg);
    }

    #[test]
    fn max_iter_defaults_when_omitted() {
        let cfg: Config = toml::from_str("unit_system = \"IP\"\n").unwrap();
        assert_eq!(cfg.unit_system, UnitSystem::IP);
        assert_eq!(cfg.max_iter_count, DEFAULT_MAX_ITER_COUNT);
    }

    #[test]
    fn unit_system_parses_case_insensitively() {
        assert_eq!("si".parse::<UnitSystem>().unwrap(), UnitSystem::SI);
        assert_eq!(" Ip ".parse::<UnitSystem>().unwrap(), UnitSystem::IP);
        assert!("metric".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn ip_tolerance_scaled_to_rankine() {
        assert!((UnitSystem::IP.tolerance() - 0.0018).abs() < 1e-12);
        assert!((UnitSystem::SI.tolerance() - 0.001).abs() < 1e-12);
    }
}
