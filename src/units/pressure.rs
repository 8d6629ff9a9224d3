use serde::{Deserialize, Serialize};

/// 1 psi를 Pa로 표현한 값.
const PA_PER_PSI: f64 = 6_894.757;

/// 압력 단위. IP는 psi, SI는 Pa만 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    Psi,
}

impl PressureUnit {
    /// 출력용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::Psi => "psi",
        }
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    match (from, to) {
        (PressureUnit::Psi, PressureUnit::Pascal) => value * PA_PER_PSI,
        (PressureUnit::Pascal, PressureUnit::Psi) => value / PA_PER_PSI,
        _ => value,
    }
}
