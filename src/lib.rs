//! 습공기 물성 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod error;
pub mod psychro;
pub mod ui_cli;
pub mod units;

pub use config::UnitSystem;
pub use error::{PsychroError, Result};
pub use psychro::{MoistAirState, Psychrometrics, MIN_HUM_RATIO};
