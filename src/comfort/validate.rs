//! 모델 호출 전 경계에서 수행하는 입력 검증.
//! 하나의 필드라도 잘못되면 계산 전체를 거부한다.

use super::adaptive::AdaptiveInputs;
use super::ComfortInputs;

/// 건물 환경으로 볼 수 있는 온도 범위(°C)
pub const TEMPERATURE_RANGE_C: (f64, f64) = (-50.0, 80.0);
/// 대사량 상한(met). 격한 운동(약 8 met)을 넘는 값은 인체 값으로 보지 않는다.
pub const METABOLIC_RATE_MAX: f64 = 10.0;
/// 착의량 상한(clo). 극지용 방한복 수준.
pub const CLOTHING_MAX_CLO: f64 = 4.0;

/// 위반된 제약 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// NaN 또는 무한대
    NotFinite,
    /// 닫힌 구간 [min, max] 밖의 값
    OutOfRange { min: f64, max: f64 },
    /// 0 이상이어야 함
    Negative,
    /// 0보다 커야 함
    NotPositive,
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::NotFinite => write!(f, "유한한 값이어야 합니다"),
            Constraint::OutOfRange { min, max } => {
                write!(f, "[{min}, {max}] 범위 안이어야 합니다")
            }
            Constraint::Negative => write!(f, "0 이상이어야 합니다"),
            Constraint::NotPositive => write!(f, "0보다 커야 합니다"),
        }
    }
}

/// 입력 검증 오류. 문제가 된 필드와 제약을 담는다.
///
/// 검증을 통과했는데 열평형 해가 유한하지 않으면 `field`는 `"pmv"`가 된다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f64,
    pub constraint: Constraint,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}: {}", self.field, self.value, self.constraint)
    }
}

impl std::error::Error for ValidationError {}

fn finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError {
            field,
            value,
            constraint: Constraint::NotFinite,
        })
    }
}

fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value < min || value > max {
        return Err(ValidationError {
            field,
            value,
            constraint: Constraint::OutOfRange { min, max },
        });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if finite(field, value)? < 0.0 {
        return Err(ValidationError {
            field,
            value,
            constraint: Constraint::Negative,
        });
    }
    Ok(())
}

fn positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if finite(field, value)? <= 0.0 {
        return Err(ValidationError {
            field,
            value,
            constraint: Constraint::NotPositive,
        });
    }
    Ok(())
}

fn at_most(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if value > max {
        return Err(ValidationError {
            field,
            value,
            constraint: Constraint::OutOfRange { min, max },
        });
    }
    Ok(())
}

fn temperature(field: &'static str, value: f64) -> Result<(), ValidationError> {
    within(field, value, TEMPERATURE_RANGE_C.0, TEMPERATURE_RANGE_C.1)
}

/// PMV 입력을 검증한다.
pub fn validate_inputs(inputs: &ComfortInputs) -> Result<(), ValidationError> {
    temperature("air_temperature", inputs.air_temp_c)?;
    temperature("mean_radiant_temperature", inputs.mean_radiant_temp_c)?;
    non_negative("air_velocity", inputs.air_velocity_m_per_s)?;
    within("relative_humidity", inputs.relative_humidity_pct, 0.0, 100.0)?;
    positive("metabolic_rate", inputs.metabolic_rate_met)?;
    at_most("metabolic_rate", inputs.metabolic_rate_met, 0.0, METABOLIC_RATE_MAX)?;
    non_negative("clothing_insulation", inputs.clothing_clo)?;
    at_most("clothing_insulation", inputs.clothing_clo, 0.0, CLOTHING_MAX_CLO)?;
    Ok(())
}

/// 적응형 모델 입력을 검증한다.
pub fn validate_adaptive(inputs: &AdaptiveInputs) -> Result<(), ValidationError> {
    temperature("indoor_temperature", inputs.indoor_temp_c)?;
    temperature("mean_radiant_temperature", inputs.mean_radiant_temp_c)?;
    temperature(
        "outdoor_running_mean_temperature",
        inputs.outdoor_running_mean_c,
    )?;
    non_negative("air_velocity", inputs.air_velocity_m_per_s)?;
    Ok(())
}
