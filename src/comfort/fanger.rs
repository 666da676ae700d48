//! 간이 Fanger PMV 모델.
//!
//! 의복 표면온도를 열평형 반복 대신 선형식 한 번으로 추정한다. 가벼운 도구용 근사이며
//! 착의량이나 풍속이 클수록 ISO 7730 기준값과 차이가 커진다.

use super::{ComfortInputs, HeatBalance, CLO_TO_M2K_PER_W, MET_TO_W_PER_M2};

/// 정지 공기에서의 대류 열전달계수 [W/m²K]
const STILL_AIR_HC: f64 = 3.0;
/// 유효 복사율과 Stefan-Boltzmann 상수, 유효 복사면적비를 합친 계수
const RADIATION_COEFF: f64 = 3.96e-8;

/// 의복 면적계수. I_cl < 0.078 m²K/W 이면 1.05 고정.
pub fn clothing_area_factor(i_cl: f64) -> f64 {
    if i_cl < 0.078 {
        1.05
    } else {
        1.05 + 0.645 * (i_cl - 0.078)
    }
}

/// Magnus 근사 수증기 분압 [hPa].
pub fn vapour_pressure_hpa(relative_humidity_pct: f64, air_temp_c: f64) -> f64 {
    relative_humidity_pct * 0.01 * 6.105 * (17.27 * air_temp_c / (237.7 + air_temp_c)).exp()
}

/// 선형화한 열평형으로 의복 표면온도(°C)를 추정한다.
pub fn clothing_surface_temp_c(air_temp_c: f64, i_cl: f64) -> f64 {
    air_temp_c + (35.5 - air_temp_c) / (3.5 * (i_cl + 0.1))
}

/// 간이식 열평형과 PMV(반올림 전)를 계산한다. 검증된 입력에 대해 항상 값을 돌려준다.
pub fn heat_balance(inputs: &ComfortInputs) -> HeatBalance {
    let m = inputs.metabolic_rate_met * MET_TO_W_PER_M2;
    let w = 0.0;
    let i_cl = inputs.clothing_clo * CLO_TO_M2K_PER_W;
    let f_cl = clothing_area_factor(i_cl);

    let t_a = inputs.air_temp_c;
    let t_r = inputs.mean_radiant_temp_c;
    let t_r_k = t_r + 273.15;
    let p_a = vapour_pressure_hpa(inputs.relative_humidity_pct, t_a) * 100.0;

    let v = inputs.air_velocity_m_per_s;
    let h_c_forced = if v > 0.0 {
        12.1 * v.sqrt()
    } else {
        STILL_AIR_HC
    };

    let t_cl = clothing_surface_temp_c(t_a, i_cl);
    let t_cl_k = t_cl + 273.15;

    // (T_cl⁴ - T_r⁴) = (T_cl² + T_r²)(T_cl + T_r)(T_cl - T_r)
    let h_r = RADIATION_COEFF * (t_cl_k * t_cl_k + t_r_k * t_r_k) * (t_cl_k + t_r_k);
    let h_c = h_c_forced.max(2.38 * (t_cl - t_a).abs().powf(0.25));

    let radiative = f_cl * h_r * (t_cl - t_r);
    let convective = f_cl * h_c * (t_cl - t_a);
    let load = (m - w) - radiative - convective;
    let pmv = (0.303 * (-0.036 * m).exp() + 0.028) * load;

    HeatBalance {
        metabolic_w_per_m2: m,
        clothing_area_factor: f_cl,
        vapour_pressure_pa: p_a,
        convective_coeff: h_c,
        radiative_coeff: h_r,
        clothing_surface_temp_c: t_cl,
        radiative_loss_w_per_m2: radiative,
        convective_loss_w_per_m2: convective,
        thermal_load_w_per_m2: load,
        raw_pmv: pmv,
        iterations: 0,
        converged: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_factor_is_continuous_at_threshold() {
        assert_eq!(clothing_area_factor(0.0), 1.05);
        assert!((clothing_area_factor(0.078) - 1.05).abs() < 1e-12);
        assert!(clothing_area_factor(0.155) > 1.05);
    }

    #[test]
    fn still_air_uses_default_convection() {
        let hb = heat_balance(&ComfortInputs {
            air_temp_c: 35.5,
            mean_radiant_temp_c: 35.5,
            air_velocity_m_per_s: 0.0,
            relative_humidity_pct: 50.0,
            metabolic_rate_met: 1.0,
            clothing_clo: 0.5,
        });
        // t_cl == t_a 이므로 자연대류 항은 0이고 정지공기 기본값이 남는다.
        assert_eq!(hb.convective_coeff, STILL_AIR_HC);
        assert_eq!(hb.convective_loss_w_per_m2, 0.0);
    }
}
