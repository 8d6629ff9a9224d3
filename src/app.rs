use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{self, Config, ConfigError, UnitSystem};
use crate::error::PsychroError;
use crate::psychro::{MoistAirState, Psychrometrics};
use crate::ui_cli::{self, Console, UnitLabels};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("습공기 계산 오류: {0}")]
    Psychro(#[from] PsychroError),
    #[error("결과 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값을 입력받는 도중 입력 스트림이 닫힘
    #[error("입력이 종료되었습니다.")]
    InputClosed,
}

/// 습공기 선도 계산기 명령줄 인자.
#[derive(Debug, Parser)]
#[command(name = "psychro_cli", version, about = "ASHRAE 습공기 물성 계산기 (IP/SI)")]
pub struct Cli {
    /// 설정 파일 경로. 없으면 기본 설정으로 생성한다.
    #[arg(long, default_value = "psychro.toml")]
    pub config: PathBuf,
    /// 설정 파일의 단위 시스템을 이번 실행에만 덮어쓴다 (ip 또는 si).
    #[arg(long)]
    pub units: Option<UnitSystem>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 건구온도, 습구온도, 압력으로 계산
    WetBulb(StateArgs),
    /// 건구온도, 이슬점 온도, 압력으로 계산
    DewPoint(StateArgs),
    /// 건구온도, 상대습도[0-1], 압력으로 계산
    RelHum(StateArgs),
    /// 고도의 표준 대기압/온도
    Atmosphere {
        /// 고도 [ft 또는 m]
        #[arg(allow_negative_numbers = true)]
        altitude: f64,
    },
    /// 대화형 메뉴
    Interactive,
}

#[derive(Debug, Args)]
pub struct StateArgs {
    /// 건구온도 [°F 또는 °C]
    #[arg(allow_negative_numbers = true)]
    pub t_dry_bulb: f64,
    /// 두 번째 독립 변수 (습구온도, 이슬점 또는 상대습도)
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
    /// 대기압 [psi 또는 Pa]
    pub pressure: f64,
    /// 결과를 TOML로 출력
    #[arg(long)]
    pub toml: bool,
}

/// 설정을 로드한 뒤 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    if let Some(units) = cli.units {
        cfg.unit_system = units;
    }
    info!(unit_system = %cfg.unit_system, max_iter_count = cfg.max_iter_count, "설정 로드");

    match cli.command {
        Command::Interactive => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout().lock());
            ui_cli::run_interactive(&mut console, &mut cfg)?;
            cfg.save(&cli.config)?;
            debug!(path = %cli.config.display(), "설정 저장");
            Ok(())
        }
        command => {
            let psy = Psychrometrics::from_config(&cfg);
            execute(&command, &psy, &mut io::stdout().lock())
        }
    }
}

/// 대화형이 아닌 단일 계산 명령을 실행하고 결과를 `out`에 쓴다.
pub fn execute<W: Write>(
    command: &Command,
    psy: &Psychrometrics,
    out: &mut W,
) -> Result<(), AppError> {
    let (state, as_toml) = match command {
        Command::WetBulb(a) => (
            psy.calc_psychrometrics_from_t_wet_bulb(a.t_dry_bulb, a.value, a.pressure)?,
            a.toml,
        ),
        Command::DewPoint(a) => (
            psy.calc_psychrometrics_from_t_dew_point(a.t_dry_bulb, a.value, a.pressure)?,
            a.toml,
        ),
        Command::RelHum(a) => (
            psy.calc_psychrometrics_from_rel_hum(a.t_dry_bulb, a.value, a.pressure)?,
            a.toml,
        ),
        Command::Atmosphere { altitude } => {
            let labels = UnitLabels::for_system(psy.unit_system()?);
            let pressure = psy.standard_atm_pressure(*altitude)?;
            let temperature = psy.standard_atm_temperature(*altitude)?;
            writeln!(out, "표준 대기압 [{}]: {:.3}", labels.pressure, pressure)?;
            writeln!(out, "표준 대기 온도 [{}]: {:.2}", labels.temperature, temperature)?;
            return Ok(());
        }
        Command::Interactive => return Ok(()),
    };
    write_result(out, &state, as_toml)
}

fn write_result<W: Write>(out: &mut W, state: &MoistAirState, as_toml: bool) -> Result<(), AppError> {
    if as_toml {
        write!(out, "{}", toml::to_string_pretty(state)?)?;
    } else {
        ui_cli::write_state(out, state)?;
    }
    Ok(())
}
