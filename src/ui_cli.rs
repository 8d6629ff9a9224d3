use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::psychro::{MoistAirState, Psychrometrics};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FromDewPoint,
    FromWetBulb,
    FromRelHum,
    ToggleUnits,
    Exit,
}

/// 단위 시스템별 출력 단위 표기.
#[derive(Debug, Clone, Copy)]
pub struct UnitLabels {
    pub temperature: &'static str,
    pub pressure: &'static str,
    pub hum_ratio: &'static str,
    pub enthalpy: &'static str,
    pub volume: &'static str,
}

impl UnitLabels {
    pub fn for_system(unit_system: UnitSystem) -> Self {
        let temperature = unit_system.temperature_unit().symbol();
        let pressure = unit_system.pressure_unit().symbol();
        match unit_system {
            UnitSystem::IP => Self {
                temperature,
                pressure,
                hum_ratio: "lb_H2O/lb_Air",
                enthalpy: "Btu/lb",
                volume: "ft3/lb",
            },
            UnitSystem::SI => Self {
                temperature,
                pressure,
                hum_ratio: "kg_H2O/kg_Air",
                enthalpy: "J/kg",
                volume: "m3/kg",
            },
        }
    }
}

/// 입력/출력 스트림을 묶은 콘솔. 테스트에서는 메모리 버퍼를 쓴다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 한 줄을 읽는다. 입력이 끝났으면 `None`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf))
    }

    fn read_f64(&mut self, prompt: &str) -> Result<f64, AppError> {
        loop {
            let Some(s) = self.read_line(prompt)? else {
                return Err(AppError::InputClosed);
            };
            match s.trim().parse::<f64>() {
                Ok(v) => return Ok(v),
                Err(_) => self.say("숫자를 입력하세요.")?,
            }
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 취급한다.
pub fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    unit_system: UnitSystem,
) -> Result<MenuChoice, AppError> {
    console.say("\n=== 습공기 선도 계산기 ===")?;
    console.say("1) 건구온도 + 이슬점")?;
    console.say("2) 건구온도 + 습구온도")?;
    console.say("3) 건구온도 + 상대습도")?;
    console.say(&format!("9) 단위 시스템 전환 (현재: {unit_system})"))?;
    console.say("0) 종료")?;
    loop {
        let Some(sel) = console.read_line("> ")? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::FromDewPoint),
            "2" => return Ok(MenuChoice::FromWetBulb),
            "3" => return Ok(MenuChoice::FromRelHum),
            "9" => return Ok(MenuChoice::ToggleUnits),
            "0" => return Ok(MenuChoice::Exit),
            _ => console.say("잘못된 입력입니다. 다시 선택하세요.")?,
        }
    }
}

/// 대화형 메뉴 루프. 단위 시스템 전환은 `cfg`에 반영된다.
pub fn run_interactive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &mut Config,
) -> Result<(), AppError> {
    let mut psy = Psychrometrics::from_config(cfg);
    loop {
        match main_menu(console, cfg.unit_system)? {
            MenuChoice::FromDewPoint => handle_from_dew_point(console, &psy)?,
            MenuChoice::FromWetBulb => handle_from_wet_bulb(console, &psy)?,
            MenuChoice::FromRelHum => handle_from_rel_hum(console, &psy)?,
            MenuChoice::ToggleUnits => {
                cfg.unit_system = cfg.unit_system.toggled();
                psy.set_unit_system(cfg.unit_system);
                console.say(&format!("단위 시스템이 {} 로 설정되었습니다.", cfg.unit_system))?;
            }
            MenuChoice::Exit => break,
        }
    }
    Ok(())
}

fn handle_from_dew_point<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    psy: &Psychrometrics,
) -> Result<(), AppError> {
    let labels = UnitLabels::for_system(psy.unit_system()?);
    let t_dry_bulb = console.read_f64(&format!("건구온도 [{}]: ", labels.temperature))?;
    let t_dew_point = console.read_f64(&format!("이슬점 온도 [{}]: ", labels.temperature))?;
    let pressure = console.read_f64(&format!("압력 [{}]: ", labels.pressure))?;
    let result = psy.calc_psychrometrics_from_t_dew_point(t_dry_bulb, t_dew_point, pressure);
    report(console, result)
}

fn handle_from_wet_bulb<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    psy: &Psychrometrics,
) -> Result<(), AppError> {
    let labels = UnitLabels::for_system(psy.unit_system()?);
    let t_dry_bulb = console.read_f64(&format!("건구온도 [{}]: ", labels.temperature))?;
    let t_wet_bulb = console.read_f64(&format!("습구온도 [{}]: ", labels.temperature))?;
    let pressure = console.read_f64(&format!("압력 [{}]: ", labels.pressure))?;
    let result = psy.calc_psychrometrics_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure);
    report(console, result)
}

fn handle_from_rel_hum<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    psy: &Psychrometrics,
) -> Result<(), AppError> {
    let labels = UnitLabels::for_system(psy.unit_system()?);
    let t_dry_bulb = console.read_f64(&format!("건구온도 [{}]: ", labels.temperature))?;
    let rel_hum = console.read_f64("상대습도 [0-1]: ")?;
    let pressure = console.read_f64(&format!("압력 [{}]: ", labels.pressure))?;
    let result = psy.calc_psychrometrics_from_rel_hum(t_dry_bulb, rel_hum, pressure);
    report(console, result)
}

/// 계산 오류는 메뉴를 끝내지 않고 메시지로만 보여준다.
fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: crate::error::Result<MoistAirState>,
) -> Result<(), AppError> {
    match result {
        Ok(state) => {
            write_state(&mut console.output, &state)?;
            Ok(())
        }
        Err(e) => console.say(&format!("오류: {e}")),
    }
}

/// 습공기 상태를 사람이 읽기 쉬운 표 형태로 출력한다.
pub fn write_state<W: Write>(out: &mut W, state: &MoistAirState) -> std::io::Result<()> {
    let l = UnitLabels::for_system(state.unit_system);
    writeln!(out)?;
    writeln!(out, "압력 [{}]: {:.3}", l.pressure, state.pressure)?;
    writeln!(out, "건구온도 [{}]: {:.4}", l.temperature, state.t_dry_bulb)?;
    writeln!(out, "습구온도 [{}]: {:.4}", l.temperature, state.t_wet_bulb)?;
    writeln!(out, "이슬점 온도 [{}]: {:.4}", l.temperature, state.t_dew_point)?;
    writeln!(out, "상대습도 [0-1]: {:.4}", state.rel_hum)?;
    writeln!(out, "습도비 [{}]: {:.6}", l.hum_ratio, state.hum_ratio)?;
    writeln!(out, "수증기 분압 [{}]: {:.4}", l.pressure, state.vap_pres)?;
    writeln!(out, "습공기 엔탈피 [{}]: {:.3}", l.enthalpy, state.moist_air_enthalpy)?;
    writeln!(out, "습공기 비체적 [{}]: {:.4}", l.volume, state.moist_air_volume)?;
    writeln!(out, "포화도 []: {:.4}", state.degree_of_saturation)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, unit_system: UnitSystem) -> (String, Config) {
        let mut cfg = Config {
            unit_system,
            ..Config::default()
        };
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run_interactive(&mut console, &mut cfg).unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();
        (out, cfg)
    }

    #[test]
    fn rel_hum_menu_prints_state() {
        let (out, _) = run_script("3\n25\n0.5\n101325\n0\n", UnitSystem::SI);
        assert!(out.contains("습도비 [kg_H2O/kg_Air]: 0.009881"), "{out}");
        assert!(out.contains("이슬점 온도 [°C]: 13.86"), "{out}");
    }

    #[test]
    fn invalid_number_reprompts() {
        let (out, _) = run_script("2\nabc\n40\n20\n101325\n0\n", UnitSystem::SI);
        assert!(out.contains("숫자를 입력하세요."));
        assert!(out.contains("상대습도 [0-1]: 0.1398"), "{out}");
    }

    #[test]
    fn dew_point_above_dry_bulb_keeps_menu_running() {
        let (out, _) = run_script("1\n20\n25\n101325\n3\n25\n0.5\n101325\n0\n", UnitSystem::SI);
        assert!(out.contains("오류: 범위를 벗어남: 이슬점 온도가 건구온도보다 높습니다."), "{out}");
        assert!(out.contains("습도비 [kg_H2O/kg_Air]: 0.009881"), "{out}");
    }

    #[test]
    fn wet_bulb_and_rel_hum_range_errors_come_from_library() {
        let (out, _) = run_script("2\n20\n25\n101325\n3\n25\n1.5\n101325\n0\n", UnitSystem::SI);
        assert!(out.contains("오류: 범위를 벗어남: 습구온도가 건구온도보다 높습니다."), "{out}");
        assert!(out.contains("오류: 범위를 벗어남: 상대습도는 [0, 1] 범위여야 합니다."), "{out}");
    }

    #[test]
    fn out_of_range_input_reported_as_error() {
        let (out, _) = run_script("3\n250\n0.5\n101325\n0\n", UnitSystem::SI);
        assert!(out.contains("오류: 범위를 벗어남"), "{out}");
    }

    #[test]
    fn toggle_switches_units_and_labels() {
        let (out, cfg) = run_script("9\n3\n77\n0.5\n14.696\n", UnitSystem::SI);
        assert_eq!(cfg.unit_system, UnitSystem::IP);
        assert!(out.contains("건구온도 [°F]"), "{out}");
        assert!(out.contains("lb_H2O/lb_Air"), "{out}");
    }

    #[test]
    fn closed_input_mid_entry_is_an_error() {
        let mut cfg = Config::default();
        let mut console = Console::new(Cursor::new(b"3\n25\n".to_vec()), Vec::new());
        let err = run_interactive(&mut console, &mut cfg).unwrap_err();
        assert!(matches!(err, AppError::InputClosed));
    }
}
