//! 반복 계산이 필요한 두 역변환: 이슬점(뉴턴-랩슨)과 습구온도(이분법).

use tracing::{debug, trace};

use super::{bound_hum_ratio, check_vap_pres, Psychrometrics};
use crate::error::{PsychroError, Result};

impl Psychrometrics {
    /// 건구온도와 수증기 분압으로 이슬점 온도를 구한다.
    ///
    /// 포화 수증기압 식(eqn 5, 6)을 직접 뒤집는다. ASHRAE의 이슬점 회귀식(eqn 37, 38)은
    /// 정확도와 유효 범위가 모두 떨어진다. 온도의 함수로 매우 매끄러운 ln(Pws)에
    /// 뉴턴-랩슨을 적용하며 보통 3~5회 안에 수렴한다. 건구온도는 초기값으로만 쓰이고
    /// 결과는 건구온도를 넘지 않는다.
    pub fn t_dew_point_from_vap_pres(&self, t_dry_bulb: f64, vap_pres: f64) -> Result<f64> {
        check_vap_pres(vap_pres)?;
        let (t_min, t_max) = self.t_bounds()?;
        if vap_pres < self.sat_vap_pres(t_min)? || vap_pres > self.sat_vap_pres(t_max)? {
            return Err(PsychroError::Domain(
                "수증기 분압이 회귀식 유효 범위를 벗어났습니다.",
            ));
        }

        let tolerance = self.tolerance()?;
        let ln_vp = vap_pres.ln();
        let mut t_dew_point = t_dry_bulb;
        let mut iterations = 1;
        loop {
            let t_iter = t_dew_point;
            let ln_vp_iter = self.sat_vap_pres(t_iter)?.ln();
            let d_ln_vp = self.d_ln_pws(t_iter)?;
            t_dew_point = (t_iter - (ln_vp_iter - ln_vp) / d_ln_vp).clamp(t_min, t_max);
            trace!(iterations, t_dew_point, "이슬점 뉴턴-랩슨 단계");

            if (t_dew_point - t_iter).abs() <= tolerance {
                break;
            }
            if iterations > self.max_iter_count() {
                return Err(PsychroError::Convergence {
                    solver: "t_dew_point_from_vap_pres",
                    iterations,
                });
            }
            iterations += 1;
        }
        debug!(iterations, t_dew_point, "이슬점 수렴");
        Ok(t_dew_point.min(t_dry_bulb))
    }

    /// 건구온도, 습도비, 압력으로 습구온도를 구한다.
    ///
    /// eqn 33, 35를 습구온도에 대해 이분법으로 푼다. 탐색 구간은 이슬점과 건구온도 사이다.
    pub fn t_wet_bulb_from_hum_ratio(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64> {
        let bounded_hum_ratio = bound_hum_ratio(hum_ratio)?;
        let tolerance = self.tolerance()?;

        let mut t_wet_bulb_sup = t_dry_bulb;
        let mut t_wet_bulb_inf =
            self.t_dew_point_from_hum_ratio(t_dry_bulb, bounded_hum_ratio, pressure)?;
        let mut t_wet_bulb = (t_wet_bulb_inf + t_wet_bulb_sup) / 2.0;

        let mut iterations = 1;
        while t_wet_bulb_sup - t_wet_bulb_inf > tolerance {
            let w_star = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
            if w_star > bounded_hum_ratio {
                t_wet_bulb_sup = t_wet_bulb;
            } else {
                t_wet_bulb_inf = t_wet_bulb;
            }
            t_wet_bulb = (t_wet_bulb_sup + t_wet_bulb_inf) / 2.0;
            trace!(iterations, t_wet_bulb, "습구온도 이분법 단계");

            if iterations >= self.max_iter_count() {
                return Err(PsychroError::Convergence {
                    solver: "t_wet_bulb_from_hum_ratio",
                    iterations,
                });
            }
            iterations += 1;
        }
        debug!(iterations, t_wet_bulb, "습구온도 수렴");
        Ok(t_wet_bulb)
    }
}
