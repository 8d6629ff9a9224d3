use serde::{Deserialize, Serialize};

/// 0°F를 랭킨으로 표현한 값 [°R]
pub const ZERO_FAHRENHEIT_AS_RANKINE: f64 = 459.67;
/// 0°C를 켈빈으로 표현한 값 [K]
pub const ZERO_CELSIUS_AS_KELVIN: f64 = 273.15;

/// 온도 단위를 정의한다. IP는 °F/°R, SI는 °C/K 쌍을 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl TemperatureUnit {
    /// 출력용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Rankine => "°R",
        }
    }
}

/// 화씨 온도를 랭킨 온도로 변환한다. 정확한 변환.
pub fn t_rankine_from_t_fahrenheit(t_fahrenheit: f64) -> f64 {
    t_fahrenheit + ZERO_FAHRENHEIT_AS_RANKINE
}

/// 랭킨 온도를 화씨 온도로 변환한다. 정확한 변환.
pub fn t_fahrenheit_from_t_rankine(t_rankine: f64) -> f64 {
    t_rankine - ZERO_FAHRENHEIT_AS_RANKINE
}

/// 섭씨 온도를 켈빈 온도로 변환한다. 정확한 변환.
pub fn t_kelvin_from_t_celsius(t_celsius: f64) -> f64 {
    t_celsius + ZERO_CELSIUS_AS_KELVIN
}

/// 켈빈 온도를 섭씨 온도로 변환한다. 정확한 변환.
pub fn t_celsius_from_t_kelvin(t_kelvin: f64) -> f64 {
    t_kelvin - ZERO_CELSIUS_AS_KELVIN
}

fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => t_kelvin_from_t_celsius(value),
        TemperatureUnit::Fahrenheit => t_rankine_from_t_fahrenheit(value) * 5.0 / 9.0,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => t_celsius_from_t_kelvin(value_k),
        TemperatureUnit::Fahrenheit => t_fahrenheit_from_t_rankine(value_k * 9.0 / 5.0),
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_kelvin(to_kelvin(value, from), to)
}
