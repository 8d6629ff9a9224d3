//! 습구온도, 이슬점, 상대습도, 수증기 분압, 습도비 사이의 변환.
//!
//! 닫힌 식은 수증기 분압/습도비 변환 몇 개뿐이며 나머지는 이들을 조합한다.

use super::{
    bound_hum_ratio, check_rel_hum, check_vap_pres, floor_hum_ratio, Psychrometrics,
    FREEZING_POINT_WATER_IP, FREEZING_POINT_WATER_SI, MOLAR_MASS_RATIO,
};
use crate::error::{PsychroError, Result};

pub(super) fn check_dew_point(t_dry_bulb: f64, t_dew_point: f64) -> Result<()> {
    if t_dew_point > t_dry_bulb {
        return Err(PsychroError::Domain("이슬점 온도가 건구온도보다 높습니다."));
    }
    Ok(())
}

fn check_wet_bulb(t_dry_bulb: f64, t_wet_bulb: f64) -> Result<()> {
    if t_wet_bulb > t_dry_bulb {
        return Err(PsychroError::Domain("습구온도가 건구온도보다 높습니다."));
    }
    Ok(())
}

impl Psychrometrics {
    // ---------------- 닫힌 식 ----------------

    /// 상대습도로 수증기 분압을 구한다 (eqn 12, 22).
    pub fn vap_pres_from_rel_hum(&self, t_dry_bulb: f64, rel_hum: f64) -> Result<f64> {
        check_rel_hum(rel_hum)?;
        Ok(rel_hum * self.sat_vap_pres(t_dry_bulb)?)
    }

    /// 수증기 분압으로 상대습도를 구한다 (eqn 12, 22).
    pub fn rel_hum_from_vap_pres(&self, t_dry_bulb: f64, vap_pres: f64) -> Result<f64> {
        check_vap_pres(vap_pres)?;
        Ok(vap_pres / self.sat_vap_pres(t_dry_bulb)?)
    }

    /// 이슬점에서의 수증기 분압 (eqn 36). 포화 수증기압과 같다.
    pub fn vap_pres_from_t_dew_point(&self, t_dew_point: f64) -> Result<f64> {
        self.sat_vap_pres(t_dew_point)
    }

    /// 수증기 분압과 대기압으로 습도비를 구한다 (eqn 20).
    pub fn hum_ratio_from_vap_pres(&self, vap_pres: f64, pressure: f64) -> Result<f64> {
        self.is_ip()?;
        check_vap_pres(vap_pres)?;
        let hum_ratio = MOLAR_MASS_RATIO * vap_pres / (pressure - vap_pres);
        Ok(floor_hum_ratio(hum_ratio))
    }

    /// 습도비와 대기압으로 수증기 분압을 구한다 (eqn 20을 pw에 대해 정리).
    pub fn vap_pres_from_hum_ratio(&self, hum_ratio: f64, pressure: f64) -> Result<f64> {
        self.is_ip()?;
        let bounded_hum_ratio = bound_hum_ratio(hum_ratio)?;
        Ok(pressure * bounded_hum_ratio / (MOLAR_MASS_RATIO + bounded_hum_ratio))
    }

    /// 습도비(혼합비)로 비습을 구한다 (eqn 9b).
    pub fn specific_hum_from_hum_ratio(&self, hum_ratio: f64) -> Result<f64> {
        self.is_ip()?;
        let bounded_hum_ratio = bound_hum_ratio(hum_ratio)?;
        Ok(bounded_hum_ratio / (1.0 + bounded_hum_ratio))
    }

    /// 비습으로 습도비를 구한다 (eqn 9b를 습도비에 대해 정리).
    pub fn hum_ratio_from_specific_hum(&self, specific_hum: f64) -> Result<f64> {
        self.is_ip()?;
        if !(0.0..1.0).contains(&specific_hum) {
            return Err(PsychroError::Domain("비습은 [0, 1) 범위여야 합니다."));
        }
        Ok(floor_hum_ratio(specific_hum / (1.0 - specific_hum)))
    }

    /// 건구온도, 습구온도, 압력으로 습도비를 구한다 (eqn 33, 35).
    ///
    /// 습구온도가 어는점 이상이면 물, 미만이면 얼음 표면 식을 쓴다.
    pub fn hum_ratio_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<f64> {
        check_wet_bulb(t_dry_bulb, t_wet_bulb)?;
        let ws_star = self.sat_hum_ratio(t_wet_bulb, pressure)?;
        let hum_ratio = if self.is_ip()? {
            if t_wet_bulb >= FREEZING_POINT_WATER_IP {
                ((1093.0 - 0.556 * t_wet_bulb) * ws_star - 0.240 * (t_dry_bulb - t_wet_bulb))
                    / (1093.0 + 0.444 * t_dry_bulb - t_wet_bulb)
            } else {
                ((1220.0 - 0.04 * t_wet_bulb) * ws_star - 0.240 * (t_dry_bulb - t_wet_bulb))
                    / (1220.0 + 0.444 * t_dry_bulb - 0.48 * t_wet_bulb)
            }
        } else if t_wet_bulb >= FREEZING_POINT_WATER_SI {
            ((2501.0 - 2.326 * t_wet_bulb) * ws_star - 1.006 * (t_dry_bulb - t_wet_bulb))
                / (2501.0 + 1.86 * t_dry_bulb - 4.186 * t_wet_bulb)
        } else {
            ((2830.0 - 0.24 * t_wet_bulb) * ws_star - 1.006 * (t_dry_bulb - t_wet_bulb))
                / (2830.0 + 1.86 * t_dry_bulb - 2.1 * t_wet_bulb)
        };
        Ok(floor_hum_ratio(hum_ratio))
    }

    // ---------------- 조합 ----------------

    pub fn hum_ratio_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
        pressure: f64,
    ) -> Result<f64> {
        check_rel_hum(rel_hum)?;
        let vap_pres = self.vap_pres_from_rel_hum(t_dry_bulb, rel_hum)?;
        self.hum_ratio_from_vap_pres(vap_pres, pressure)
    }

    pub fn rel_hum_from_hum_ratio(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        let vap_pres = self.vap_pres_from_hum_ratio(hum_ratio, pressure)?;
        self.rel_hum_from_vap_pres(t_dry_bulb, vap_pres)
    }

    /// 이슬점과 압력으로 습도비를 구한다 (eqn 13).
    pub fn hum_ratio_from_t_dew_point(&self, t_dew_point: f64, pressure: f64) -> Result<f64> {
        let vap_pres = self.vap_pres_from_t_dew_point(t_dew_point)?;
        self.hum_ratio_from_vap_pres(vap_pres, pressure)
    }

    pub fn t_dew_point_from_hum_ratio(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        let vap_pres = self.vap_pres_from_hum_ratio(hum_ratio, pressure)?;
        self.t_dew_point_from_vap_pres(t_dry_bulb, vap_pres)
    }

    pub fn t_dew_point_from_rel_hum(&self, t_dry_bulb: f64, rel_hum: f64) -> Result<f64> {
        let vap_pres = self.vap_pres_from_rel_hum(t_dry_bulb, rel_hum)?;
        self.t_dew_point_from_vap_pres(t_dry_bulb, vap_pres)
    }

    /// 이슬점과 건구온도로 상대습도를 구한다 (eqn 22).
    pub fn rel_hum_from_t_dew_point(&self, t_dry_bulb: f64, t_dew_point: f64) -> Result<f64> {
        check_dew_point(t_dry_bulb, t_dew_point)?;
        let vap_pres = self.vap_pres_from_t_dew_point(t_dew_point)?;
        self.rel_hum_from_vap_pres(t_dry_bulb, vap_pres)
    }

    pub fn t_wet_bulb_from_t_dew_point(
        &self,
        t_dry_bulb: f64,
        t_dew_point: f64,
        pressure: f64,
    ) -> Result<f64> {
        check_dew_point(t_dry_bulb, t_dew_point)?;
        let hum_ratio = self.hum_ratio_from_t_dew_point(t_dew_point, pressure)?;
        self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    pub fn t_wet_bulb_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
        pressure: f64,
    ) -> Result<f64> {
        let hum_ratio = self.hum_ratio_from_rel_hum(t_dry_bulb, rel_hum, pressure)?;
        self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    pub fn rel_hum_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<f64> {
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    pub fn t_dew_point_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<f64> {
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::UnitSystem;
    use crate::error::PsychroError;
    use crate::psychro::{Psychrometrics, MIN_HUM_RATIO};

    #[test]
    fn rel_hum_outside_unit_interval_is_rejected() {
        let psy = Psychrometrics::with_unit_system(UnitSystem::SI);
        assert!(matches!(
            psy.hum_ratio_from_rel_hum(25.0, 1.5, 101_325.0),
            Err(PsychroError::Domain(_))
        ));
        assert!(matches!(
            psy.vap_pres_from_rel_hum(25.0, -0.1),
            Err(PsychroError::Domain(_))
        ));
    }

    #[test]
    fn dew_or_wet_bulb_above_dry_bulb_is_rejected() {
        let psy = Psychrometrics::with_unit_system(UnitSystem::SI);
        assert!(psy.rel_hum_from_t_dew_point(20.0, 21.0).is_err());
        assert!(psy.t_wet_bulb_from_t_dew_point(20.0, 21.0, 101_325.0).is_err());
        assert!(psy.hum_ratio_from_t_wet_bulb(20.0, 21.0, 101_325.0).is_err());
        assert!(psy.t_dew_point_from_t_wet_bulb(20.0, 21.0, 101_325.0).is_err());
    }

    #[test]
    fn specific_hum_range() {
        let psy = Psychrometrics::with_unit_system(UnitSystem::SI);
        assert!(psy.hum_ratio_from_specific_hum(1.0).is_err());
        assert!(psy.hum_ratio_from_specific_hum(-0.1).is_err());
        assert_eq!(psy.hum_ratio_from_specific_hum(0.0), Ok(MIN_HUM_RATIO));
    }

    #[test]
    fn saturated_air_has_unit_rel_hum() {
        let psy = Psychrometrics::with_unit_system(UnitSystem::SI);
        let rel_hum = psy.rel_hum_from_t_dew_point(25.0, 25.0).unwrap();
        assert!((rel_hum - 1.0).abs() < 1e-12);
    }
}
