//! 온도/압력 단위 정의 및 변환 모듈 모음.

pub mod pressure;
pub mod temperature;

pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{
    convert_temperature, t_celsius_from_t_kelvin, t_fahrenheit_from_t_rankine,
    t_kelvin_from_t_celsius, t_rankine_from_t_fahrenheit, TemperatureUnit,
};
