//! ASHRAE 55 적응형 쾌적 모델.
//!
//! 자연환기 공간에서 쾌적 온도를 외기 이동평균 온도의 1차식으로 정하고,
//! 80 %/90 % 수용 구간을 그 주위의 허용폭으로 표현한다.

use serde::{Deserialize, Serialize};

use super::validate::{self, ValidationError};
use super::round_to;

/// T_comf = INTERCEPT + SLOPE · T_rm
pub const COMFORT_INTERCEPT_C: f64 = 17.8;
pub const COMFORT_SLOPE: f64 = 0.31;
/// 80 % 수용 구간 허용폭(°C)
pub const TOLERANCE_80_C: f64 = 3.5;
/// 90 % 수용 구간 허용폭(°C)
pub const TOLERANCE_90_C: f64 = 2.5;
/// 모델 적용 가능한 외기 이동평균 온도 범위(°C)
pub const RUNNING_MEAN_RANGE_C: (f64, f64) = (10.0, 33.5);
/// 풍속 입력을 생략했을 때의 기본값(m/s)
pub const DEFAULT_AIR_VELOCITY: f64 = 0.1;

/// 적응형 모델 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveInputs {
    /// 실내 건구온도(°C)
    pub indoor_temp_c: f64,
    /// 평균 복사온도(°C)
    pub mean_radiant_temp_c: f64,
    /// 외기 이동평균 온도(°C)
    pub outdoor_running_mean_c: f64,
    /// 실내 풍속(m/s)
    pub air_velocity_m_per_s: f64,
}

impl AdaptiveInputs {
    /// 풍속을 기본값(0.1 m/s)으로 두고 입력을 만든다.
    pub fn new(indoor_temp_c: f64, mean_radiant_temp_c: f64, outdoor_running_mean_c: f64) -> Self {
        Self {
            indoor_temp_c,
            mean_radiant_temp_c,
            outdoor_running_mean_c,
            air_velocity_m_per_s: DEFAULT_AIR_VELOCITY,
        }
    }
}

/// 허용 작용온도 구간(°C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcceptableRange {
    pub low_c: f64,
    pub high_c: f64,
}

impl AcceptableRange {
    pub fn contains(&self, t_c: f64) -> bool {
        self.low_c <= t_c && t_c <= self.high_c
    }
}

/// 수용 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Acceptability {
    /// 90 % 구간 안
    Within90,
    /// 80 % 구간 안, 90 % 구간 밖
    Within80,
    Unacceptable,
}

/// 적응형 모델 결과. 온도는 소수 첫째 자리로 반올림한다.
///
/// `acceptable_80`, `acceptable_90`, `acceptability`는 반올림 전 값으로 판정한다.
/// 구간 경계 근처에서는 `band_90.contains(operative_temp_c)`와 `acceptable_90`이
/// 다를 수 있으므로 판정에는 플래그를 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveResult {
    pub operative_temp_c: f64,
    pub comfort_temp_c: f64,
    pub band_80: AcceptableRange,
    pub band_90: AcceptableRange,
    /// 고풍속에 의한 상한 완화량(°C)
    pub cooling_effect_c: f64,
    pub acceptable_80: bool,
    pub acceptable_90: bool,
    pub acceptability: Acceptability,
    /// 외기 이동평균 온도가 적용 범위 안인지
    pub applicable: bool,
    pub warnings: Vec<String>,
}

/// ASHRAE 55 가중치로 작용온도를 계산한다. 풍속이 클수록 공기온도 비중이 커진다.
pub fn operative_temperature(air_temp_c: f64, mean_radiant_temp_c: f64, air_velocity: f64) -> f64 {
    let a = if air_velocity < 0.2 {
        0.5
    } else if air_velocity < 0.6 {
        0.6
    } else {
        0.7
    };
    a * air_temp_c + (1.0 - a) * mean_radiant_temp_c
}

/// 외기 이동평균 온도로부터 쾌적 온도를 구한다.
pub fn comfort_temperature(outdoor_running_mean_c: f64) -> f64 {
    COMFORT_INTERCEPT_C + COMFORT_SLOPE * outdoor_running_mean_c
}

/// 풍속 0.6 m/s 이상, 작용온도 25 °C 이상에서 상한에 더하는 냉각 효과.
pub fn cooling_effect(operative_temp_c: f64, air_velocity: f64) -> f64 {
    if air_velocity < 0.6 || operative_temp_c < 25.0 {
        0.0
    } else if air_velocity < 0.9 {
        1.2
    } else if air_velocity < 1.2 {
        1.8
    } else {
        2.2
    }
}

/// 적응형 수용 구간과 판정을 계산한다.
pub fn compute_adaptive(inputs: &AdaptiveInputs) -> Result<AdaptiveResult, ValidationError> {
    validate::validate_adaptive(inputs)?;

    let v = inputs.air_velocity_m_per_s;
    let t_o = operative_temperature(inputs.indoor_temp_c, inputs.mean_radiant_temp_c, v);
    let t_cmf = comfort_temperature(inputs.outdoor_running_mean_c);
    let ce = cooling_effect(t_o, v);

    let low_80 = t_cmf - TOLERANCE_80_C;
    let high_80 = t_cmf + TOLERANCE_80_C + ce;
    let low_90 = t_cmf - TOLERANCE_90_C;
    let high_90 = t_cmf + TOLERANCE_90_C + ce;

    let acceptable_80 = low_80 <= t_o && t_o <= high_80;
    let acceptable_90 = low_90 <= t_o && t_o <= high_90;
    let acceptability = if acceptable_90 {
        Acceptability::Within90
    } else if acceptable_80 {
        Acceptability::Within80
    } else {
        Acceptability::Unacceptable
    };

    let (min, max) = RUNNING_MEAN_RANGE_C;
    let t_rm = inputs.outdoor_running_mean_c;
    let applicable = (min..=max).contains(&t_rm);
    let mut warnings = Vec::new();
    if !applicable {
        let msg = format!(
            "외기 이동평균 온도 {t_rm:.1}°C가 적응형 모델 적용 범위 [{min}, {max}] 를 벗어났습니다."
        );
        tracing::warn!("{msg}");
        warnings.push(msg);
    }

    tracing::debug!(t_o, t_cmf, ce, "적응형 쾌적 계산 완료");

    Ok(AdaptiveResult {
        operative_temp_c: round_to(t_o, 1),
        comfort_temp_c: round_to(t_cmf, 1),
        band_80: AcceptableRange {
            low_c: round_to(low_80, 1),
            high_c: round_to(high_80, 1),
        },
        band_90: AcceptableRange {
            low_c: round_to(low_90, 1),
            high_c: round_to(high_90, 1),
        },
        cooling_effect_c: ce,
        acceptable_80,
        acceptable_90,
        acceptability,
        applicable,
        warnings,
    })
}
