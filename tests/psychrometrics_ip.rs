//! IP 단위 회귀 테스트. 기준값은 2017 ASHRAE Handbook - Fundamentals ch. 1 표와 예제를 활용한다.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use psychro_toolbox::units::{convert_pressure, convert_temperature, PressureUnit, TemperatureUnit};
use psychro_toolbox::{Psychrometrics, UnitSystem};

fn ip() -> Psychrometrics {
    Psychrometrics::with_unit_system(UnitSystem::IP)
}

#[test]
fn sat_vap_pres_matches_handbook_table() {
    let psy = ip();
    assert_abs_diff_eq!(psy.sat_vap_pres(-76.0).unwrap(), 0.000157, epsilon = 1e-5);
    for (t, expected) in [
        (-4.0, 0.014974),
        (23.0, 0.058268),
        (41.0, 0.12656),
        (77.0, 0.45973),
        (122.0, 1.79140),
        (212.0, 14.7094),
        (300.0, 67.0206),
    ] {
        assert_relative_eq!(psy.sat_vap_pres(t).unwrap(), expected, max_relative = 3e-4);
    }
}

// 삼중점에서 얼음 쪽 식을 쓴다.
#[test]
fn sat_vap_pres_at_triple_point() {
    assert_relative_eq!(ip().sat_vap_pres(32.018).unwrap(), 0.088_713_283, max_relative = 1e-6);
}

#[test]
fn dew_point_recovered_from_vapor_pressure() {
    let psy = ip();
    for (t_dry_bulb, t_dew_point) in [(59.0, -4.0), (59.0, 41.0), (140.0, 122.0)] {
        let vap_pres = psy.vap_pres_from_t_dew_point(t_dew_point).unwrap();
        assert_abs_diff_eq!(
            psy.t_dew_point_from_vap_pres(t_dry_bulb, vap_pres).unwrap(),
            t_dew_point,
            epsilon = 0.001
        );
    }
}

#[test]
fn wet_bulb_solver_converges_over_full_grid() {
    let psy = ip();
    for t in -148..392 {
        for i in 0..10 {
            let rel_hum = f64::from(i) * 0.1;
            for j in 0..9 {
                let p = 8.6 + f64::from(j);
                let res = psy.t_wet_bulb_from_rel_hum(f64::from(t), rel_hum, p);
                assert!(res.is_ok(), "t={t} rh={rel_hum} p={p}: {res:?}");
            }
        }
    }
}

#[test]
fn hum_ratio_and_wet_bulb_both_sides_of_freezing() {
    let psy = ip();
    let hum_ratio = psy.hum_ratio_from_t_wet_bulb(86.0, 77.0, 14.175).unwrap();
    assert_relative_eq!(hum_ratio, 0.018_719_328_841_889_2, max_relative = 3e-4);
    let t_wet_bulb = psy.t_wet_bulb_from_hum_ratio(86.0, hum_ratio, 14.175).unwrap();
    assert_abs_diff_eq!(t_wet_bulb, 77.0, epsilon = 0.001);

    let hum_ratio = psy.hum_ratio_from_t_wet_bulb(30.2, 23.0, 14.175).unwrap();
    assert_relative_eq!(hum_ratio, 0.001_146_574_810_901_84, max_relative = 3e-4);
    let t_wet_bulb = psy.t_wet_bulb_from_hum_ratio(30.2, hum_ratio, 14.175).unwrap();
    assert_abs_diff_eq!(t_wet_bulb, 23.0, epsilon = 0.001);
}

#[test]
fn tiny_hum_ratio_clamped_before_wet_bulb_solve() {
    let psy = ip();
    assert_eq!(
        psy.t_wet_bulb_from_hum_ratio(25.0, 1e-9, 95461.0).unwrap(),
        psy.t_wet_bulb_from_hum_ratio(25.0, 1e-7, 95461.0).unwrap()
    );
}

#[test]
fn dry_and_moist_air_properties() {
    let psy = ip();
    assert_relative_eq!(psy.dry_air_enthalpy(77.0).unwrap(), 18.498, max_relative = 2e-3);
    assert_relative_eq!(psy.dry_air_volume(77.0, 14.696).unwrap(), 13.5251, max_relative = 1e-3);
    assert_relative_eq!(
        psy.moist_air_volume(86.0, 0.02, 14.175).unwrap(),
        14.720_574_900_291_8,
        max_relative = 3e-4
    );
    assert_relative_eq!(
        psy.moist_air_density(86.0, 0.02, 14.175).unwrap(),
        0.069_290_772_059_437_8,
        max_relative = 3e-4
    );
    assert_relative_eq!(
        psy.t_dry_bulb_from_moist_air_volume_and_hum_ratio(14.720_574_900_291_8, 0.02, 14.175)
            .unwrap(),
        86.0,
        max_relative = 3e-4
    );
}

#[test]
fn standard_atmosphere_and_sea_level() {
    let psy = ip();
    assert_abs_diff_eq!(psy.standard_atm_temperature(1000.0).unwrap(), 55.4, epsilon = 0.1);
    assert_abs_diff_eq!(psy.standard_atm_pressure(1000.0).unwrap(), 14.175, epsilon = 0.01);
    let sea_level = psy.sea_level_pressure(14.681_662_559, 344.488, 62.942).unwrap();
    assert_abs_diff_eq!(sea_level, 14.864_047_5, epsilon = 2e-4);
    assert_abs_diff_eq!(
        psy.station_pressure(sea_level, 344.488, 62.942).unwrap(),
        14.681_662_559,
        epsilon = 1e-9
    );
}

// 2017 핸드북 ch. 1 예제 1 (IP).
#[test]
fn handbook_example_one() {
    let psy = ip();
    let state = psy.calc_psychrometrics_from_t_wet_bulb(100.0, 65.0, 14.696).unwrap();
    assert_abs_diff_eq!(state.hum_ratio, 0.00523, epsilon = 1e-3);
    assert_abs_diff_eq!(state.t_dew_point, 40.0, epsilon = 1.0);
    assert_abs_diff_eq!(state.rel_hum, 0.13, epsilon = 0.01);
    assert_abs_diff_eq!(state.moist_air_enthalpy, 29.80, epsilon = 0.1);
    assert_relative_eq!(state.moist_air_volume, 14.22, max_relative = 0.01);

    let from_dew_point = psy
        .calc_psychrometrics_from_t_dew_point(100.0, state.t_dew_point, 14.696)
        .unwrap();
    assert_abs_diff_eq!(from_dew_point.t_wet_bulb, 65.0, epsilon = 0.1);

    let from_rel_hum = psy
        .calc_psychrometrics_from_rel_hum(100.0, state.rel_hum, 14.696)
        .unwrap();
    assert_abs_diff_eq!(from_rel_hum.t_wet_bulb, 65.0, epsilon = 0.1);
}

#[test]
fn same_state_in_both_unit_systems() {
    let ip_state = ip().calc_psychrometrics_from_rel_hum(77.0, 0.5, 14.696).unwrap();
    let si_state = Psychrometrics::with_unit_system(UnitSystem::SI)
        .calc_psychrometrics_from_rel_hum(
            convert_temperature(77.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
            0.5,
            convert_pressure(14.696, PressureUnit::Psi, PressureUnit::Pascal),
        )
        .unwrap();
    // 습도비는 단위가 없는 질량비다.
    assert_relative_eq!(ip_state.hum_ratio, si_state.hum_ratio, max_relative = 2e-3);
    assert_abs_diff_eq!(
        convert_temperature(ip_state.t_dew_point, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
        si_state.t_dew_point,
        epsilon = 0.05
    );
    assert_relative_eq!(
        convert_pressure(ip_state.vap_pres, PressureUnit::Psi, PressureUnit::Pascal),
        si_state.vap_pres,
        max_relative = 2e-3
    );
}
