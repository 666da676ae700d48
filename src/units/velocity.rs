use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::UnitParseError;

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    FootPerSecond,
    KilometerPerHour,
    /// 공조 분야에서 흔히 쓰는 ft/min
    FootPerMinute,
}

impl VelocityUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            VelocityUnit::MeterPerSecond => "m/s",
            VelocityUnit::FootPerSecond => "ft/s",
            VelocityUnit::KilometerPerHour => "km/h",
            VelocityUnit::FootPerMinute => "fpm",
        }
    }
}

impl FromStr for VelocityUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mps" | "m/s" => Ok(VelocityUnit::MeterPerSecond),
            "fps" | "ft/s" => Ok(VelocityUnit::FootPerSecond),
            "kmh" | "km/h" => Ok(VelocityUnit::KilometerPerHour),
            "fpm" | "ft/min" => Ok(VelocityUnit::FootPerMinute),
            other => Err(UnitParseError(other.to_string())),
        }
    }
}

fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::FootPerSecond => value * 0.3048,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::FootPerMinute => value * 0.00508,
    }
}

fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value,
        VelocityUnit::FootPerSecond => value / 0.3048,
        VelocityUnit::KilometerPerHour => value * 3.6,
        VelocityUnit::FootPerMinute => value / 0.00508,
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    if from == to {
        return value;
    }
    let base = to_mps(value, from);
    from_mps(base, to)
}

/// 임의 단위의 풍속을 m/s로 환산한다.
pub fn to_meters_per_second(value: f64, unit: VelocityUnit) -> f64 {
    convert_velocity(value, unit, VelocityUnit::MeterPerSecond)
}
