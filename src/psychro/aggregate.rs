//! 건구온도 + 독립 변수 하나 + 압력으로 습공기 상태 전체를 계산한다.

use serde::Serialize;

use super::conversions::check_dew_point;
use super::Psychrometrics;
use crate::config::UnitSystem;
use crate::error::Result;

/// 습공기 상태 계산 결과. 모든 값은 `unit_system` 단위다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoistAirState {
    pub unit_system: UnitSystem,
    /// 대기압 [psi 또는 Pa]
    pub pressure: f64,
    /// 건구온도 [°F 또는 °C]
    pub t_dry_bulb: f64,
    /// 습구온도 [°F 또는 °C]
    pub t_wet_bulb: f64,
    /// 이슬점 온도 [°F 또는 °C]
    pub t_dew_point: f64,
    /// 상대습도 [0, 1]
    pub rel_hum: f64,
    /// 습도비 [lb/lb 또는 kg/kg]
    pub hum_ratio: f64,
    /// 수증기 분압 [psi 또는 Pa]
    pub vap_pres: f64,
    /// 습공기 엔탈피 [Btu/lb 또는 J/kg]
    pub moist_air_enthalpy: f64,
    /// 습공기 비체적 [ft³/lb 또는 m³/kg]
    pub moist_air_volume: f64,
    pub degree_of_saturation: f64,
}

struct KnownState {
    t_dry_bulb: f64,
    t_wet_bulb: f64,
    t_dew_point: f64,
    rel_hum: f64,
    hum_ratio: f64,
    pressure: f64,
}

impl Psychrometrics {
    /// 건구온도, 습구온도, 압력으로 습공기 상태를 계산한다.
    pub fn calc_psychrometrics_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<MoistAirState> {
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        let rel_hum = self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        self.complete_state(KnownState {
            t_dry_bulb,
            t_wet_bulb,
            t_dew_point,
            rel_hum,
            hum_ratio,
            pressure,
        })
    }

    /// 건구온도, 이슬점, 압력으로 습공기 상태를 계산한다.
    pub fn calc_psychrometrics_from_t_dew_point(
        &self,
        t_dry_bulb: f64,
        t_dew_point: f64,
        pressure: f64,
    ) -> Result<MoistAirState> {
        check_dew_point(t_dry_bulb, t_dew_point)?;
        let hum_ratio = self.hum_ratio_from_t_dew_point(t_dew_point, pressure)?;
        let t_wet_bulb = self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        let rel_hum = self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        self.complete_state(KnownState {
            t_dry_bulb,
            t_wet_bulb,
            t_dew_point,
            rel_hum,
            hum_ratio,
            pressure,
        })
    }

    /// 건구온도, 상대습도, 압력으로 습공기 상태를 계산한다.
    pub fn calc_psychrometrics_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
        pressure: f64,
    ) -> Result<MoistAirState> {
        let hum_ratio = self.hum_ratio_from_rel_hum(t_dry_bulb, rel_hum, pressure)?;
        let t_wet_bulb = self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        self.complete_state(KnownState {
            t_dry_bulb,
            t_wet_bulb,
            t_dew_point,
            rel_hum,
            hum_ratio,
            pressure,
        })
    }

    fn complete_state(&self, known: KnownState) -> Result<MoistAirState> {
        let KnownState {
            t_dry_bulb,
            t_wet_bulb,
            t_dew_point,
            rel_hum,
            hum_ratio,
            pressure,
        } = known;
        Ok(MoistAirState {
            unit_system: self.unit_system()?,
            pressure,
            t_dry_bulb,
            t_wet_bulb,
            t_dew_point,
            rel_hum,
            hum_ratio,
            vap_pres: self.vap_pres_from_hum_ratio(hum_ratio, pressure)?,
            moist_air_enthalpy: self.moist_air_enthalpy(t_dry_bulb, hum_ratio)?,
            moist_air_volume: self.moist_air_volume(t_dry_bulb, hum_ratio, pressure)?,
            degree_of_saturation: self.degree_of_saturation(t_dry_bulb, hum_ratio, pressure)?,
        })
    }
}
