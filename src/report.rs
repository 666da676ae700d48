//! 계산 결과를 사람이 읽는 텍스트(현지화) 또는 TOML로 출력한다.

use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::comfort::adaptive::{Acceptability, AdaptiveResult};
use crate::comfort::presets::{CLOTHING_ENSEMBLES, METABOLIC_TASKS};
use crate::comfort::{ComfortClass, ComfortReport};
use crate::hvac::HvacResult;
use crate::i18n::{keys, Translator};

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Toml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(format!("지원하지 않는 출력 형식: {other} (text, toml)")),
        }
    }
}

/// 직렬화 가능한 결과를 TOML 문자열로 만든다.
pub fn to_toml<T: Serialize>(value: &T) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(value)
}

/// 판정 문구와 권고 사항을 한 줄로 만든다.
pub fn comfort_tip(class: ComfortClass, tr: &Translator) -> String {
    let mut line = tr.t(class.message_key()).to_string();
    let remedies: Vec<&str> = class
        .remedies()
        .iter()
        .map(|r| tr.t(r.message_key()))
        .collect();
    if !remedies.is_empty() {
        let _ = write!(line, " {}.", remedies.join(", "));
    }
    line
}

/// PMV 평가 결과를 텍스트로 만든다.
pub fn render_pmv(report: &ComfortReport, tr: &Translator) -> String {
    let r = &report.result;
    let hb = &report.heat_balance;
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::RESULT_HEADING));
    let _ = writeln!(out, "{} {}", tr.t(keys::RESULT_METHOD), report.method);
    let _ = writeln!(out, "{} {:.2}", tr.t(keys::RESULT_PMV), r.pmv);
    let _ = writeln!(out, "{} {:.2}", tr.t(keys::RESULT_PPD), r.ppd);
    let _ = writeln!(out, "{} {}", tr.t(keys::RESULT_CATEGORY), report.category.label());
    let _ = writeln!(
        out,
        "{} {}",
        tr.t(keys::RESULT_SEVERITY),
        tr.t(report.severity.message_key())
    );
    let _ = writeln!(
        out,
        "{} {:.2}",
        tr.t(keys::RESULT_CLOTHING_SURFACE),
        hb.clothing_surface_temp_c
    );
    let _ = writeln!(
        out,
        "{} {:.2}",
        tr.t(keys::RESULT_THERMAL_LOAD),
        hb.thermal_load_w_per_m2
    );
    let _ = writeln!(out, "\n{}", comfort_tip(report.class, tr));

    let _ = writeln!(out, "\n{}", tr.t(keys::INSIGHT_HEADING));
    let _ = writeln!(out, "- {}", tr.t(keys::INSIGHT_PMV_SCALE));
    let _ = writeln!(out, "- {}", tr.t(keys::INSIGHT_PPD_MEANING));
    let _ = writeln!(out, "- {}", tr.t(keys::INSIGHT_COMFORT_BAND));
    if r.many_dissatisfied() {
        let _ = writeln!(out, "- {}", tr.t(keys::INSIGHT_PPD_HIGH));
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "\n{}", tr.t(keys::RESULT_WARNINGS));
        for w in &report.warnings {
            let _ = writeln!(out, "- {w}");
        }
    }
    out
}

/// 적응형 모델 결과를 텍스트로 만든다.
pub fn render_adaptive(res: &AdaptiveResult, tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {:.1}", tr.t(keys::RESULT_OPERATIVE_TEMP), res.operative_temp_c);
    let _ = writeln!(out, "{} {:.1}", tr.t(keys::RESULT_COMFORT_TEMP), res.comfort_temp_c);
    let _ = writeln!(
        out,
        "{} {:.1} ~ {:.1}",
        tr.t(keys::RESULT_BAND_80),
        res.band_80.low_c,
        res.band_80.high_c
    );
    let _ = writeln!(
        out,
        "{} {:.1} ~ {:.1}",
        tr.t(keys::RESULT_BAND_90),
        res.band_90.low_c,
        res.band_90.high_c
    );
    if res.cooling_effect_c > 0.0 {
        let _ = writeln!(
            out,
            "{} {:.1}",
            tr.t(keys::RESULT_COOLING_EFFECT),
            res.cooling_effect_c
        );
    }
    let key = match res.acceptability {
        Acceptability::Within90 => keys::ACCEPT_WITHIN_90,
        Acceptability::Within80 => keys::ACCEPT_WITHIN_80,
        Acceptability::Unacceptable => keys::ACCEPT_UNACCEPTABLE,
    };
    let _ = writeln!(out, "{}", tr.t(key));
    if !res.warnings.is_empty() {
        let _ = writeln!(out, "{}", tr.t(keys::RESULT_WARNINGS));
        for w in &res.warnings {
            let _ = writeln!(out, "- {w}");
        }
    }
    out
}

/// 냉동사이클 결과를 텍스트로 만든다.
pub fn render_hvac(res: &HvacResult, tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {:.2} °C, {:.1} Pa, W = {:.3} kW",
        tr.t(keys::HVAC_COMPRESSOR),
        res.compressor.temp_c,
        res.compressor.pressure_pa,
        res.compressor.work_kw
    );
    let _ = writeln!(
        out,
        "{} {:.2} °C, Q = {:.3} kW",
        tr.t(keys::HVAC_EVAPORATOR),
        res.evaporator.temp_c,
        res.evaporator.heat_kw
    );
    let _ = writeln!(
        out,
        "{} {:.2} °C, Q = {:.3} kW",
        tr.t(keys::HVAC_CONDENSER),
        res.condenser.temp_c,
        res.condenser.heat_kw
    );
    let _ = writeln!(
        out,
        "{} {:.2} °C, {:.1} Pa",
        tr.t(keys::HVAC_VALVE),
        res.expansion_valve.temp_c,
        res.expansion_valve.pressure_pa
    );
    if let Some(cop) = res.cop {
        let _ = writeln!(out, "{} {:.3}", tr.t(keys::HVAC_COP), cop);
    }
    out
}

/// PPD-PMV 표와 간단한 막대를 텍스트로 만든다.
pub fn render_curve(points: &[(f64, f64)], tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::CURVE_HEADING));
    let _ = writeln!(out, "{:>6}  {:>7}", "PMV", "PPD %");
    for &(pmv, ppd) in points {
        let bar = "#".repeat((ppd / 5.0).round() as usize);
        let _ = writeln!(out, "{pmv:>6.2}  {ppd:>7.2}  {bar}");
    }
    out
}

/// 대사량/착의량 대표값 목록을 텍스트로 만든다.
pub fn render_presets(tr: &Translator) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::PRESETS_MET_HEADING));
    for p in METABOLIC_TASKS {
        let _ = writeln!(out, "{:>5.2}  {}", p.value, p.name);
    }
    let _ = writeln!(out, "{}", tr.t(keys::PRESETS_CLO_HEADING));
    for p in CLOTHING_ENSEMBLES {
        let _ = writeln!(out, "{:>5.2}  {}", p.value, p.name);
    }
    out
}
