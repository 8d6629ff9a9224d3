//! 표준 대기와 해면기압 환산.

use super::Psychrometrics;
use crate::error::Result;
use crate::units::{t_kelvin_from_t_celsius, t_rankine_from_t_fahrenheit};

impl Psychrometrics {
    /// 고도 [ft 또는 m]에서의 표준 대기압 [psi 또는 Pa] (eqn 3).
    pub fn standard_atm_pressure(&self, altitude: f64) -> Result<f64> {
        Ok(if self.is_ip()? {
            14.696 * (1.0 - 6.8754e-6 * altitude).powf(5.2559)
        } else {
            101_325.0 * (1.0 - 2.25577e-5 * altitude).powf(5.2559)
        })
    }

    /// 고도 [ft 또는 m]에서의 표준 대기 온도 [°F 또는 °C] (eqn 4).
    pub fn standard_atm_temperature(&self, altitude: f64) -> Result<f64> {
        Ok(if self.is_ip()? {
            59.0 - 0.003_566_20 * altitude
        } else {
            15.0 - 0.0065 * altitude
        })
    }

    /// 관측소 기압을 해면기압으로 환산한다.
    ///
    /// 기둥 평균 온도(관측 온도에 감률 보정 절반)로 척도고도를 구한 지수 모형이다.
    /// 미국 관행은 현재와 12시간 전 관측 온도의 평균을 `t_dry_bulb`로 쓴다.
    /// Hess (1959) ch. 6.5, Stull (2000) ch. 1.
    pub fn sea_level_pressure(
        &self,
        station_pressure: f64,
        altitude: f64,
        t_dry_bulb: f64,
    ) -> Result<f64> {
        let scale_height = if self.is_ip()? {
            let t_column = t_dry_bulb + 0.0036 * altitude / 2.0;
            53.351 * t_rankine_from_t_fahrenheit(t_column)
        } else {
            let t_column = t_dry_bulb + 0.0065 * altitude / 2.0;
            287.055 * t_kelvin_from_t_celsius(t_column) / 9.807
        };
        Ok(station_pressure * (altitude / scale_height).exp())
    }

    /// 해면기압을 관측소 기압으로 환산한다. [`Self::sea_level_pressure`]의 역변환.
    pub fn station_pressure(
        &self,
        sea_level_pressure: f64,
        altitude: f64,
        t_dry_bulb: f64,
    ) -> Result<f64> {
        Ok(sea_level_pressure / self.sea_level_pressure(1.0, altitude, t_dry_bulb)?)
    }
}
