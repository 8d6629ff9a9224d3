//! 건공기/습공기 엔탈피, 밀도, 비체적과 그 역변환.
//!
//! IP 식의 144는 psi(lb/in²)를 lb/ft²로 바꾸는 계수다.

use super::{bound_hum_ratio, floor_hum_ratio, Psychrometrics};
use crate::error::Result;
use crate::units::{
    t_celsius_from_t_kelvin, t_fahrenheit_from_t_rankine, t_kelvin_from_t_celsius,
    t_rankine_from_t_fahrenheit,
};

/// 건공기 기체상수 [ft·lbf/(lb·°R)]
const R_DA_IP: f64 = 53.350;
/// 건공기 기체상수 [J/(kg·K)]
const R_DA_SI: f64 = 287.042;

/// 수증기/건공기 기체상수비 (비체적 식 eqn 26)
const GAS_CONSTANT_RATIO: f64 = 1.607858;

impl Psychrometrics {
    /// 건공기 엔탈피 [Btu/lb 또는 J/kg] (eqn 28).
    pub fn dry_air_enthalpy(&self, t_dry_bulb: f64) -> Result<f64> {
        Ok(if self.is_ip()? {
            0.240 * t_dry_bulb
        } else {
            1006.0 * t_dry_bulb
        })
    }

    /// 건공기 밀도 [lb/ft³ 또는 kg/m³] (eqn 14 이상기체).
    pub fn dry_air_density(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        Ok(if self.is_ip()? {
            144.0 * pressure / R_DA_IP / t_rankine_from_t_fahrenheit(t_dry_bulb)
        } else {
            pressure / R_DA_SI / t_kelvin_from_t_celsius(t_dry_bulb)
        })
    }

    /// 건공기 비체적 [ft³/lb 또는 m³/kg] (eqn 14 이상기체).
    pub fn dry_air_volume(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        Ok(if self.is_ip()? {
            R_DA_IP * t_rankine_from_t_fahrenheit(t_dry_bulb) / (144.0 * pressure)
        } else {
            R_DA_SI * t_kelvin_from_t_celsius(t_dry_bulb) / pressure
        })
    }

    /// 습공기 엔탈피 [Btu/lb 또는 J/kg] (eqn 30).
    pub fn moist_air_enthalpy(&self, t_dry_bulb: f64, hum_ratio: f64) -> Result<f64> {
        let is_ip = self.is_ip()?;
        let w = bound_hum_ratio(hum_ratio)?;
        Ok(if is_ip {
            0.240 * t_dry_bulb + w * (1061.0 + 0.444 * t_dry_bulb)
        } else {
            (1.006 * t_dry_bulb + w * (2501.0 + 1.86 * t_dry_bulb)) * 1000.0
        })
    }

    /// 습공기 엔탈피와 습도비로 건구온도를 구한다. eqn 30의 역변환.
    pub fn t_dry_bulb_from_enthalpy_and_hum_ratio(
        &self,
        moist_air_enthalpy: f64,
        hum_ratio: f64,
    ) -> Result<f64> {
        let is_ip = self.is_ip()?;
        let w = bound_hum_ratio(hum_ratio)?;
        Ok(if is_ip {
            (moist_air_enthalpy - 1061.0 * w) / (0.240 + 0.444 * w)
        } else {
            (moist_air_enthalpy / 1000.0 - 2501.0 * w) / (1.006 + 1.86 * w)
        })
    }

    /// 습공기 엔탈피와 건구온도로 습도비를 구한다. eqn 30의 역변환.
    pub fn hum_ratio_from_enthalpy_and_t_dry_bulb(
        &self,
        moist_air_enthalpy: f64,
        t_dry_bulb: f64,
    ) -> Result<f64> {
        let hum_ratio = if self.is_ip()? {
            (moist_air_enthalpy - 0.240 * t_dry_bulb) / (1061.0 + 0.444 * t_dry_bulb)
        } else {
            (moist_air_enthalpy / 1000.0 - 1.006 * t_dry_bulb) / (2501.0 + 1.86 * t_dry_bulb)
        };
        Ok(floor_hum_ratio(hum_ratio))
    }

    /// 습공기 비체적 [건공기 기준 ft³/lb 또는 m³/kg] (eqn 26).
    ///
    /// IP에서 R_DA_IP / 144 = 0.370486 으로 eqn 26의 계수와 같다.
    pub fn moist_air_volume(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        let is_ip = self.is_ip()?;
        let w = bound_hum_ratio(hum_ratio)?;
        Ok(if is_ip {
            R_DA_IP * t_rankine_from_t_fahrenheit(t_dry_bulb) * (1.0 + GAS_CONSTANT_RATIO * w)
                / (144.0 * pressure)
        } else {
            R_DA_SI * t_kelvin_from_t_celsius(t_dry_bulb) * (1.0 + GAS_CONSTANT_RATIO * w)
                / pressure
        })
    }

    /// 습공기 비체적, 습도비, 압력으로 건구온도를 구한다. eqn 26의 역변환.
    pub fn t_dry_bulb_from_moist_air_volume_and_hum_ratio(
        &self,
        moist_air_volume: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        let is_ip = self.is_ip()?;
        let w = bound_hum_ratio(hum_ratio)?;
        Ok(if is_ip {
            t_fahrenheit_from_t_rankine(
                moist_air_volume * (144.0 * pressure) / (R_DA_IP * (1.0 + GAS_CONSTANT_RATIO * w)),
            )
        } else {
            t_celsius_from_t_kelvin(
                moist_air_volume * pressure / (R_DA_SI * (1.0 + GAS_CONSTANT_RATIO * w)),
            )
        })
    }

    /// 습공기 밀도 [lb/ft³ 또는 kg/m³] (eqn 11).
    pub fn moist_air_density(&self, t_dry_bulb: f64, hum_ratio: f64, pressure: f64) -> Result<f64> {
        let w = bound_hum_ratio(hum_ratio)?;
        let moist_air_volume = self.moist_air_volume(t_dry_bulb, w, pressure)?;
        Ok((1.0 + w) / moist_air_volume)
    }

    /// 수증기압 부족량(VPD) [psi 또는 Pa]. Oke (1987) eqn 2.13a.
    pub fn vapor_pressure_deficit(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        let rel_hum = self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        Ok(self.sat_vap_pres(t_dry_bulb)? * (1.0 - rel_hum))
    }

    /// 포화도: 같은 온도/압력의 포화 습도비에 대한 습도비의 비.
    ///
    /// 2017 핸드북에는 정의가 없어 2009년판 정의를 따른다.
    pub fn degree_of_saturation(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        let w = bound_hum_ratio(hum_ratio)?;
        let sat_hum_ratio = self.sat_hum_ratio(t_dry_bulb, pressure)?;
        Ok(w / sat_hum_ratio)
    }
}
