//! 입력값 단위 정의 및 변환 모듈 모음. 쾌적 모델은 °C, m/s 기준으로만 계산한다.

pub mod temperature;
pub mod velocity;

pub use temperature::{convert_temperature, to_celsius, TemperatureUnit};
pub use velocity::{convert_velocity, to_meters_per_second, VelocityUnit};

/// 알 수 없는 단위 문자열을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitParseError(pub String);

impl std::fmt::Display for UnitParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "알 수 없는 단위: {}", self.0)
    }
}

impl std::error::Error for UnitParseError {}
