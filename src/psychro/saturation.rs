//! 포화 수증기압, 포화 습도비, 포화 공기 엔탈피.
//!
//! ASHRAE 회귀식(eqn 5, 6)은 어는점을 경계로 정의되어 있지만 그 지점에서 불연속이다.
//! 삼중점을 경계로 쓰면 불연속이 사라지므로 여기서는 삼중점에서 분기한다.
//! 그렇지 않으면 이 식을 뒤집는 이슬점 계산이 0°C 부근에서 수렴하지 않는다.

use super::{
    floor_hum_ratio, Psychrometrics, MOLAR_MASS_RATIO, TRIPLE_POINT_WATER_IP,
    TRIPLE_POINT_WATER_SI,
};
use crate::error::{PsychroError, Result};
use crate::units::{t_kelvin_from_t_celsius, t_rankine_from_t_fahrenheit};

impl Psychrometrics {
    /// 건구온도에서의 포화 수증기압 [psi 또는 Pa].
    ///
    /// 유효 범위는 [-148, 392]°F, [-100, 200]°C 이며 벗어나면 오류를 반환한다.
    pub fn sat_vap_pres(&self, t_dry_bulb: f64) -> Result<f64> {
        let ln_pws = if self.is_ip()? {
            if !(-148.0..=392.0).contains(&t_dry_bulb) {
                return Err(PsychroError::Domain(
                    "건구온도는 [-148, 392]°F 범위여야 합니다.",
                ));
            }
            let t = t_rankine_from_t_fahrenheit(t_dry_bulb);
            if t_dry_bulb <= TRIPLE_POINT_WATER_IP {
                -1.0214165e4 / t - 4.8932428 - 5.3765794e-3 * t + 1.9202377e-7 * t.powi(2)
                    + 3.5575832e-10 * t.powi(3)
                    - 9.0344688e-14 * t.powi(4)
                    + 4.1635019 * t.ln()
            } else {
                -1.0440397e4 / t - 1.1294650e1 - 2.7022355e-2 * t + 1.2890360e-5 * t.powi(2)
                    - 2.4780681e-9 * t.powi(3)
                    + 6.5459673 * t.ln()
            }
        } else {
            if !(-100.0..=200.0).contains(&t_dry_bulb) {
                return Err(PsychroError::Domain(
                    "건구온도는 [-100, 200]°C 범위여야 합니다.",
                ));
            }
            let t = t_kelvin_from_t_celsius(t_dry_bulb);
            if t_dry_bulb <= TRIPLE_POINT_WATER_SI {
                -5.6745359e3 / t + 6.3925247 - 9.677843e-3 * t + 6.2215701e-7 * t.powi(2)
                    + 2.0747825e-9 * t.powi(3)
                    - 9.484024e-13 * t.powi(4)
                    + 4.1635019 * t.ln()
            } else {
                -5.8002206e3 / t + 1.3914993 - 4.8640239e-2 * t + 4.1764768e-5 * t.powi(2)
                    - 1.4452093e-8 * t.powi(3)
                    + 6.5459673 * t.ln()
            }
        };
        Ok(ln_pws.exp())
    }

    /// 포화 수증기압 자연로그의 온도 미분 d(ln Pws)/dT. 이슬점 뉴턴-랩슨 계산에 쓴다.
    pub(crate) fn d_ln_pws(&self, t_dry_bulb: f64) -> Result<f64> {
        let d = if self.is_ip()? {
            let t = t_rankine_from_t_fahrenheit(t_dry_bulb);
            if t_dry_bulb <= TRIPLE_POINT_WATER_IP {
                1.0214165e4 / t.powi(2) - 5.3765794e-3 + 2.0 * 1.9202377e-7 * t
                    + 3.0 * 3.5575832e-10 * t.powi(2)
                    - 4.0 * 9.0344688e-14 * t.powi(3)
                    + 4.1635019 / t
            } else {
                1.0440397e4 / t.powi(2) - 2.7022355e-2 + 2.0 * 1.2890360e-5 * t
                    - 3.0 * 2.4780681e-9 * t.powi(2)
                    + 6.5459673 / t
            }
        } else {
            let t = t_kelvin_from_t_celsius(t_dry_bulb);
            if t_dry_bulb <= TRIPLE_POINT_WATER_SI {
                5.6745359e3 / t.powi(2) - 9.677843e-3 + 2.0 * 6.2215701e-7 * t
                    + 3.0 * 2.0747825e-9 * t.powi(2)
                    - 4.0 * 9.484024e-13 * t.powi(3)
                    + 4.1635019 / t
            } else {
                5.8002206e3 / t.powi(2) - 4.8640239e-2 + 2.0 * 4.1764768e-5 * t
                    - 3.0 * 1.4452093e-8 * t.powi(2)
                    + 6.5459673 / t
            }
        };
        Ok(d)
    }

    /// 포화 공기의 습도비. 최소 습도비 이상으로 제한된다.
    pub fn sat_hum_ratio(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        let sat_vap_pres = self.sat_vap_pres(t_dry_bulb)?;
        let sat_hum_ratio = MOLAR_MASS_RATIO * sat_vap_pres / (pressure - sat_vap_pres);
        Ok(floor_hum_ratio(sat_hum_ratio))
    }

    /// 포화 공기 엔탈피 [Btu/lb 또는 J/kg].
    pub fn sat_air_enthalpy(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64> {
        let sat_hum_ratio = self.sat_hum_ratio(t_dry_bulb, pressure)?;
        self.moist_air_enthalpy(t_dry_bulb, sat_hum_ratio)
    }
}
