//! ISO 7730 부속서 D의 PMV 계산 절차.
//!
//! 의복 표면온도와 대류 열전달계수가 서로 의존하므로 x = T_cl/100 에 대해
//! 평균값 완화 고정점 반복을 수행한다.

use super::{ComfortInputs, ComfortWarning, HeatBalance, CLO_TO_M2K_PER_W, MET_TO_W_PER_M2};

/// 반복 종료 허용오차 (x = T_cl/100 기준)
pub const TOLERANCE: f64 = 0.00015;
/// 최대 반복 횟수
pub const MAX_ITERATIONS: u32 = 150;

/// ISO 7730이 PMV 적용을 권장하는 입력 범위.
pub const AIR_TEMP_RANGE_C: (f64, f64) = (10.0, 30.0);
pub const RADIANT_TEMP_RANGE_C: (f64, f64) = (10.0, 40.0);
pub const AIR_VELOCITY_RANGE: (f64, f64) = (0.0, 1.0);
pub const MET_RANGE: (f64, f64) = (0.8, 4.0);
pub const CLO_RANGE: (f64, f64) = (0.0, 2.0);
pub const VAPOUR_PRESSURE_RANGE_PA: (f64, f64) = (0.0, 2700.0);

/// 수증기 분압 [Pa]
pub fn vapour_pressure_pa(relative_humidity_pct: f64, air_temp_c: f64) -> f64 {
    relative_humidity_pct * 10.0 * (16.6536 - 4030.183 / (air_temp_c + 235.0)).exp()
}

/// 의복 면적계수. I_cl ≤ 0.078 m²K/W 구간은 1 + 1.29·I_cl.
pub fn clothing_area_factor(i_cl: f64) -> f64 {
    if i_cl <= 0.078 {
        1.0 + 1.29 * i_cl
    } else {
        1.05 + 0.645 * i_cl
    }
}

/// ISO 7730 절차로 열평형과 PMV(반올림 전)를 계산한다.
///
/// 반복이 수렴하지 않으면 마지막 추정값을 쓰고 `converged = false` 로 표시한다.
pub fn heat_balance(inputs: &ComfortInputs) -> HeatBalance {
    let t_a = inputs.air_temp_c;
    let t_r = inputs.mean_radiant_temp_c;
    let p_a = vapour_pressure_pa(inputs.relative_humidity_pct, t_a);
    let i_cl = CLO_TO_M2K_PER_W * inputs.clothing_clo;
    let m = inputs.metabolic_rate_met * MET_TO_W_PER_M2;
    let w = 0.0;
    let mw = m - w;
    let f_cl = clothing_area_factor(i_cl);
    let h_cf = 12.1 * inputs.air_velocity_m_per_s.sqrt();

    let t_aa = t_a + 273.0;
    let t_ra = t_r + 273.0;
    let t_cla = t_aa + (35.5 - t_a) / (3.5 * i_cl + 0.1);

    let p1 = i_cl * f_cl;
    let p2 = p1 * 3.96;
    let p3 = p1 * 100.0;
    let p4 = p1 * t_aa;
    let p5 = 308.7 - 0.028 * mw + p2 * (t_ra / 100.0).powi(4);

    let mut xn = t_cla / 100.0;
    let mut xf = t_cla / 50.0;
    let mut h_c = h_cf;
    let mut iterations = 0;
    let mut converged = true;
    while (xn - xf).abs() > TOLERANCE {
        if iterations >= MAX_ITERATIONS {
            converged = false;
            break;
        }
        xf = (xf + xn) / 2.0;
        let h_cn = 2.38 * (100.0 * xf - t_aa).abs().powf(0.25);
        h_c = h_cf.max(h_cn);
        xn = (p5 + p4 * h_c - p2 * xf.powi(4)) / (100.0 + p3 * h_c);
        iterations += 1;
    }
    let t_cl = 100.0 * xn - 273.0;

    // 피부 확산
    let hl1 = 3.05e-3 * (5733.0 - 6.99 * mw - p_a);
    // 발한
    let hl2 = if mw > MET_TO_W_PER_M2 {
        0.42 * (mw - MET_TO_W_PER_M2)
    } else {
        0.0
    };
    // 호흡 잠열
    let hl3 = 1.7e-5 * m * (5867.0 - p_a);
    // 호흡 현열
    let hl4 = 0.0014 * m * (34.0 - t_a);
    let hl5 = 3.96 * f_cl * (xn.powi(4) - (t_ra / 100.0).powi(4));
    let hl6 = f_cl * h_c * (t_cl - t_a);

    let load = mw - hl1 - hl2 - hl3 - hl4 - hl5 - hl6;
    let ts = 0.303 * (-0.036 * m).exp() + 0.028;
    let pmv = ts * load;

    let dt_r = t_cl - t_r;
    let h_r = if dt_r.abs() > f64::EPSILON {
        hl5 / (f_cl * dt_r)
    } else {
        0.0
    };

    HeatBalance {
        metabolic_w_per_m2: m,
        clothing_area_factor: f_cl,
        vapour_pressure_pa: p_a,
        convective_coeff: h_c,
        radiative_coeff: h_r,
        clothing_surface_temp_c: t_cl,
        radiative_loss_w_per_m2: hl5,
        convective_loss_w_per_m2: hl6,
        thermal_load_w_per_m2: load,
        raw_pmv: pmv,
        iterations,
        converged,
    }
}

fn check(
    out: &mut Vec<ComfortWarning>,
    quantity: &str,
    value: f64,
    (min, max): (f64, f64),
) {
    if value < min || value > max {
        out.push(ComfortWarning::OutOfRange {
            quantity: quantity.to_string(),
            value,
            min,
            max,
        });
    }
}

/// ISO 7730 권장 범위를 벗어난 입력마다 주의 사항을 만든다. 계산 자체는 막지 않는다.
pub fn applicability_warnings(inputs: &ComfortInputs) -> Vec<ComfortWarning> {
    let mut out = Vec::new();
    check(&mut out, "air_temperature", inputs.air_temp_c, AIR_TEMP_RANGE_C);
    check(
        &mut out,
        "mean_radiant_temperature",
        inputs.mean_radiant_temp_c,
        RADIANT_TEMP_RANGE_C,
    );
    check(
        &mut out,
        "air_velocity",
        inputs.air_velocity_m_per_s,
        AIR_VELOCITY_RANGE,
    );
    check(&mut out, "metabolic_rate", inputs.metabolic_rate_met, MET_RANGE);
    check(&mut out, "clothing_insulation", inputs.clothing_clo, CLO_RANGE);
    check(
        &mut out,
        "vapour_pressure",
        vapour_pressure_pa(inputs.relative_humidity_pct, inputs.air_temp_c),
        VAPOUR_PRESSURE_RANGE_PA,
    );
    out
}
