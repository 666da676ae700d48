//! 열쾌적 계산 모듈 모음.
//! PMV/PPD(간이 Fanger식, ISO 7730 반복해법), ASHRAE 55 적응형 모델, 판정/권고 매핑으로 구성한다.

pub mod adaptive;
pub mod classify;
pub mod fanger;
pub mod iso7730;
pub mod presets;
pub mod validate;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use classify::{ComfortClass, Iso7730Category, Remedy, Severity};
pub use validate::{Constraint, ValidationError};

/// 1 met에 해당하는 대사량 [W/m²]
pub const MET_TO_W_PER_M2: f64 = 58.15;
/// 1 clo에 해당하는 열저항 [m²·K/W]
pub const CLO_TO_M2K_PER_W: f64 = 0.155;

/// PMV 계산 입력값. 모든 온도는 °C, 풍속은 m/s 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortInputs {
    /// 건구 공기온도(°C)
    pub air_temp_c: f64,
    /// 평균 복사온도(°C)
    pub mean_radiant_temp_c: f64,
    /// 상대 풍속(m/s)
    pub air_velocity_m_per_s: f64,
    /// 상대습도(%)
    pub relative_humidity_pct: f64,
    /// 대사량(met)
    pub metabolic_rate_met: f64,
    /// 착의량(clo)
    pub clothing_clo: f64,
}

/// PMV/PPD 계산 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ComfortMethod {
    /// 의복 표면온도를 선형 추정하는 비반복 간이식
    SimplifiedFanger,
    /// ISO 7730 부속서 D의 반복 해법
    #[default]
    Iso7730,
}

impl ComfortMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComfortMethod::SimplifiedFanger => "simplified",
            ComfortMethod::Iso7730 => "iso7730",
        }
    }
}

impl std::fmt::Display for ComfortMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComfortMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simplified" | "fanger" | "simple" => Ok(ComfortMethod::SimplifiedFanger),
            "iso7730" | "iso" | "iso-7730" => Ok(ComfortMethod::Iso7730),
            other => Err(format!("알 수 없는 계산 방식: {other} (simplified, iso7730)")),
        }
    }
}

/// 열평형 중간값. 두 계산 방식이 공통으로 채운다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatBalance {
    /// 대사량 M [W/m²]
    pub metabolic_w_per_m2: f64,
    /// 의복 면적계수 f_cl
    pub clothing_area_factor: f64,
    /// 수증기 분압 [Pa]
    pub vapour_pressure_pa: f64,
    /// 대류 열전달계수 [W/m²K]
    pub convective_coeff: f64,
    /// 복사 열전달계수 [W/m²K]
    pub radiative_coeff: f64,
    /// 의복 표면온도(°C)
    pub clothing_surface_temp_c: f64,
    /// 복사 열손실 [W/m²]
    pub radiative_loss_w_per_m2: f64,
    /// 대류 열손실 [W/m²]
    pub convective_loss_w_per_m2: f64,
    /// 인체 열부하 L [W/m²]
    pub thermal_load_w_per_m2: f64,
    /// 반올림 전 PMV
    pub raw_pmv: f64,
    /// 반복 횟수 (간이식은 0)
    pub iterations: u32,
    pub converged: bool,
}

/// PMV/PPD 결과. 두 값 모두 소수 둘째 자리로 반올림되어 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComfortResult {
    pub pmv: f64,
    pub ppd: f64,
}

impl ComfortResult {
    /// 반올림 전 PMV로부터 결과를 만든다. PMV를 먼저 반올림하고 PPD는 반올림된 PMV로 계산한다.
    pub fn from_raw_pmv(raw_pmv: f64) -> Self {
        let pmv = round_to(raw_pmv, 2);
        let ppd = round_to(ppd_from_pmv(pmv), 2);
        Self { pmv, ppd }
    }

    /// PMV가 NaN이면 None.
    pub fn class(&self) -> Option<ComfortClass> {
        ComfortClass::from_pmv(self.pmv)
    }

    pub fn severity(&self) -> Severity {
        Severity::from_pmv(self.pmv)
    }

    pub fn category(&self) -> Iso7730Category {
        Iso7730Category::from_pmv(self.pmv)
    }

    /// PPD가 10%를 넘으면 다수의 재실자가 불쾌감을 느낄 수 있다.
    pub fn many_dissatisfied(&self) -> bool {
        self.ppd > 10.0
    }
}

/// 적용 범위/수렴 관련 주의 사항.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ComfortWarning {
    /// ISO 7730 권장 범위를 벗어난 입력
    OutOfRange {
        quantity: String,
        value: f64,
        min: f64,
        max: f64,
    },
    /// 반복 해법이 허용 횟수 내에 수렴하지 않음
    NotConverged { iterations: u32 },
    /// 간이식은 ISO 7730 기준값과 차이가 남
    SimplifiedDeviation,
}

impl std::fmt::Display for ComfortWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComfortWarning::OutOfRange {
                quantity,
                value,
                min,
                max,
            } => write!(
                f,
                "{quantity} = {value:.2} 가 ISO 7730 적용 범위 [{min}, {max}] 를 벗어났습니다."
            ),
            ComfortWarning::NotConverged { iterations } => {
                write!(f, "의복 표면온도 반복 계산이 {iterations}회 내에 수렴하지 않았습니다.")
            }
            ComfortWarning::SimplifiedDeviation => {
                write!(f, "간이식은 ISO 7730 반복 해법과 수치가 다를 수 있습니다.")
            }
        }
    }
}

/// 한 번의 PMV 평가 결과 전체.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortReport {
    pub method: ComfortMethod,
    pub inputs: ComfortInputs,
    pub result: ComfortResult,
    pub class: ComfortClass,
    pub severity: Severity,
    pub category: Iso7730Category,
    pub heat_balance: HeatBalance,
    pub warnings: Vec<ComfortWarning>,
}

/// 입력을 검증한 뒤 PMV/PPD만 계산한다.
pub fn compute(inputs: &ComfortInputs, method: ComfortMethod) -> Result<ComfortResult, ValidationError> {
    assess(inputs, method).map(|report| report.result)
}

/// 입력을 검증하고 PMV/PPD, 판정, 열평형 중간값, 주의 사항을 모두 계산한다.
pub fn assess(inputs: &ComfortInputs, method: ComfortMethod) -> Result<ComfortReport, ValidationError> {
    validate::validate_inputs(inputs)?;

    let heat_balance = match method {
        ComfortMethod::SimplifiedFanger => fanger::heat_balance(inputs),
        ComfortMethod::Iso7730 => iso7730::heat_balance(inputs),
    };
    let result = ComfortResult::from_raw_pmv(heat_balance.raw_pmv);
    let class = match result.class() {
        Some(class) if result.pmv.is_finite() => class,
        _ => {
            tracing::warn!(method = %method, raw_pmv = heat_balance.raw_pmv, "열평형 해가 유한하지 않음");
            return Err(ValidationError {
                field: "pmv",
                value: heat_balance.raw_pmv,
                constraint: Constraint::NotFinite,
            });
        }
    };

    let mut warnings = iso7730::applicability_warnings(inputs);
    if !heat_balance.converged {
        warnings.push(ComfortWarning::NotConverged {
            iterations: heat_balance.iterations,
        });
    }
    if method == ComfortMethod::SimplifiedFanger {
        warnings.push(ComfortWarning::SimplifiedDeviation);
    }
    for w in &warnings {
        tracing::warn!(method = %method, "{w}");
    }
    tracing::debug!(
        method = %method,
        pmv = result.pmv,
        ppd = result.ppd,
        t_cl = heat_balance.clothing_surface_temp_c,
        load = heat_balance.thermal_load_w_per_m2,
        "PMV 계산 완료"
    );

    Ok(ComfortReport {
        method,
        inputs: *inputs,
        class,
        severity: result.severity(),
        category: result.category(),
        result,
        heat_balance,
        warnings,
    })
}

/// PPD = 100 - 95·exp(-0.03353·PMV⁴ - 0.2179·PMV²). PMV의 짝수 차수만 사용하므로 부호에 대해 대칭이다.
pub fn ppd_from_pmv(pmv: f64) -> f64 {
    let pmv2 = pmv * pmv;
    100.0 - 95.0 * (-0.03353 * pmv2 * pmv2 - 0.2179 * pmv2).exp()
}

/// `ppd_curve`가 만드는 구간 수 상한
pub const MAX_CURVE_POINTS: usize = 10_000;

/// PMV 구간을 일정 간격으로 나누어 (PMV, PPD) 표를 만든다. 양 끝을 포함한다.
/// 인자가 잘못되었거나 구간 수가 `MAX_CURVE_POINTS`를 넘으면 빈 표를 돌려준다.
pub fn ppd_curve(from: f64, to: f64, step: f64) -> Vec<(f64, f64)> {
    if step.is_nan() || step <= 0.0 || !from.is_finite() || !to.is_finite() || to < from {
        return Vec::new();
    }
    let span = ((to - from) / step + 1e-9).floor();
    if !span.is_finite() || span > MAX_CURVE_POINTS as f64 {
        tracing::warn!(from, to, step, "PPD 표 구간 수가 너무 많음");
        return Vec::new();
    }
    let n = span as usize;
    (0..=n)
        .map(|i| {
            let pmv = round_to(from + step * i as f64, 2);
            (pmv, round_to(ppd_from_pmv(pmv), 2))
        })
        .collect()
}

/// 소수점 `decimals` 자리로 반올림한다. 0.5는 0에서 먼 쪽으로 올린다.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
