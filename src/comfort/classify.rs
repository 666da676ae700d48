//! PMV 값으로부터 쾌적 판정과 권고 사항을 매핑한다.
//! 판정은 항상 반올림된 PMV로 수행한다.

use serde::{Deserialize, Serialize};

use crate::i18n::keys;

/// 쾌적 구간 상한 (포함)
pub const COMFORT_LIMIT: f64 = 0.5;
/// 경미한 불쾌 구간 상한 (포함)
pub const MINOR_LIMIT: f64 = 1.0;

/// 세 단계 쾌적 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComfortClass {
    Comfortable,
    TooCold,
    TooWarm,
}

impl ComfortClass {
    /// -0.5 ≤ PMV ≤ 0.5 이면 쾌적. NaN은 판정하지 않는다.
    pub fn from_pmv(pmv: f64) -> Option<Self> {
        if pmv.is_nan() {
            None
        } else if (-COMFORT_LIMIT..=COMFORT_LIMIT).contains(&pmv) {
            Some(ComfortClass::Comfortable)
        } else if pmv < -COMFORT_LIMIT {
            Some(ComfortClass::TooCold)
        } else {
            Some(ComfortClass::TooWarm)
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComfortClass::Comfortable => "comfortable",
            ComfortClass::TooCold => "too cold",
            ComfortClass::TooWarm => "too warm",
        }
    }

    /// 판정별 권고 사항. 쾌적하면 비어 있다.
    pub fn remedies(&self) -> &'static [Remedy] {
        match self {
            ComfortClass::Comfortable => &[],
            ComfortClass::TooCold => &[
                Remedy::RaiseAirTemperature,
                Remedy::ReduceAirSpeed,
                Remedy::AddClothing,
            ],
            ComfortClass::TooWarm => &[
                Remedy::LowerAirTemperature,
                Remedy::IncreaseAirSpeed,
                Remedy::ReduceClothing,
            ],
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            ComfortClass::Comfortable => keys::CLASS_COMFORTABLE,
            ComfortClass::TooCold => keys::CLASS_TOO_COLD,
            ComfortClass::TooWarm => keys::CLASS_TOO_WARM,
        }
    }
}

/// 불쾌 정도. |PMV| ≤ 1 이면 경미, 그 이상은 심각.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    None,
    Minor,
    Significant,
}

impl Severity {
    pub fn from_pmv(pmv: f64) -> Self {
        let a = pmv.abs();
        if a <= COMFORT_LIMIT {
            Severity::None
        } else if a <= MINOR_LIMIT {
            Severity::Minor
        } else {
            Severity::Significant
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::None => "no discomfort",
            Severity::Minor => "minor discomfort",
            Severity::Significant => "significant discomfort",
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            Severity::None => keys::SEVERITY_NONE,
            Severity::Minor => keys::SEVERITY_MINOR,
            Severity::Significant => keys::SEVERITY_SIGNIFICANT,
        }
    }
}

/// 불쾌 해소를 위한 조치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Remedy {
    RaiseAirTemperature,
    ReduceAirSpeed,
    AddClothing,
    LowerAirTemperature,
    IncreaseAirSpeed,
    ReduceClothing,
}

impl Remedy {
    pub fn label(&self) -> &'static str {
        match self {
            Remedy::RaiseAirTemperature => "increase air temperature",
            Remedy::ReduceAirSpeed => "reduce air speed",
            Remedy::AddClothing => "wear more clothing",
            Remedy::LowerAirTemperature => "lower air temperature",
            Remedy::IncreaseAirSpeed => "increase air speed",
            Remedy::ReduceClothing => "wear lighter clothing",
        }
    }

    pub fn message_key(&self) -> &'static str {
        match self {
            Remedy::RaiseAirTemperature => keys::REMEDY_RAISE_TEMP,
            Remedy::ReduceAirSpeed => keys::REMEDY_REDUCE_SPEED,
            Remedy::AddClothing => keys::REMEDY_ADD_CLOTHING,
            Remedy::LowerAirTemperature => keys::REMEDY_LOWER_TEMP,
            Remedy::IncreaseAirSpeed => keys::REMEDY_INCREASE_SPEED,
            Remedy::ReduceClothing => keys::REMEDY_REDUCE_CLOTHING,
        }
    }
}

/// ISO 7730 열환경 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Iso7730Category {
    /// |PMV| < 0.2, PPD < 6 %
    A,
    /// |PMV| < 0.5, PPD < 10 %
    B,
    /// |PMV| < 0.7, PPD < 15 %
    C,
    OutOfRange,
}

impl Iso7730Category {
    pub fn from_pmv(pmv: f64) -> Self {
        let a = pmv.abs();
        if a < 0.2 {
            Iso7730Category::A
        } else if a < 0.5 {
            Iso7730Category::B
        } else if a < 0.7 {
            Iso7730Category::C
        } else {
            Iso7730Category::OutOfRange
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Iso7730Category::A => "A",
            Iso7730Category::B => "B",
            Iso7730Category::C => "C",
            Iso7730Category::OutOfRange => "-",
        }
    }
}
