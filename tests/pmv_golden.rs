//! PMV/PPD 기준값 회귀 테스트. 두 계산 방식을 각자의 기준값에 고정하고 서로 맞추지 않는다.
use thermal_comfort_toolbox::comfort::{
    self, ComfortClass, ComfortInputs, ComfortMethod, ComfortWarning, Constraint,
    Iso7730Category, Severity,
};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn inputs(ta: f64, tr: f64, v: f64, rh: f64, met: f64, clo: f64) -> ComfortInputs {
    ComfortInputs {
        air_temp_c: ta,
        mean_radiant_temp_c: tr,
        air_velocity_m_per_s: v,
        relative_humidity_pct: rh,
        metabolic_rate_met: met,
        clothing_clo: clo,
    }
}

fn office() -> ComfortInputs {
    inputs(24.0, 24.0, 0.1, 50.0, 1.2, 0.5)
}

#[test]
fn simplified_office_golden() {
    let r = comfort::compute(&office(), ComfortMethod::SimplifiedFanger).expect("simplified");
    assert_eq!(r.pmv, -6.04);
    assert_eq!(r.ppd, 100.0);
}

#[test]
fn iso7730_office_golden() {
    let r = comfort::compute(&office(), ComfortMethod::Iso7730).expect("iso7730");
    assert_eq!(r.pmv, -0.21);
    assert_eq!(r.ppd, 5.91);
}

#[test]
fn iso7730_reference_table_points() {
    // ISO 7730 부속서 D 표: 22 °C, 60 %, 1.2 met, 0.5 clo → PMV -0.75
    let r = comfort::compute(&inputs(22.0, 22.0, 0.1, 60.0, 1.2, 0.5), ComfortMethod::Iso7730)
        .expect("iso row 1");
    assert_eq!(r.pmv, -0.75);
    assert_eq!(r.ppd, 16.85);

    // 19.6 °C, 86 %, 1.1 met, 1.0 clo → PMV -0.47
    let r = comfort::compute(&inputs(19.6, 19.6, 0.1, 86.0, 1.1, 1.0), ComfortMethod::Iso7730)
        .expect("iso row 2");
    assert_eq!(r.pmv, -0.47);
    assert_eq!(r.ppd, 9.61);
}

#[test]
fn dashboard_defaults_iso7730() {
    // 23 °C / 21.4 °C, 0.1 m/s, 50 %, Reading seated(1.0 met), 0.54 clo
    let r = comfort::compute(&inputs(23.0, 21.4, 0.1, 50.0, 1.0, 0.54), ComfortMethod::Iso7730)
        .expect("defaults");
    assert_eq!(r.pmv, -1.29);
    assert_eq!(r.ppd, 39.76);
    assert_eq!(r.class(), Some(ComfortClass::TooCold));
    assert_eq!(r.severity(), Severity::Significant);
}

#[test]
fn iso7730_heat_balance_converges() {
    let report = comfort::assess(&office(), ComfortMethod::Iso7730).expect("assess");
    let hb = report.heat_balance;
    assert!(hb.converged);
    assert!(hb.iterations > 0 && hb.iterations < 150);
    // 의복 표면온도는 공기온도와 피부온도 사이에 있어야 한다.
    assert!(hb.clothing_surface_temp_c > 24.0 && hb.clothing_surface_temp_c < 35.5);
    assert_close("raw pmv", hb.raw_pmv, -0.2132, 1e-3);
}

#[test]
fn simplified_reports_vapour_pressure_and_zero_iterations() {
    let report = comfort::assess(&office(), ComfortMethod::SimplifiedFanger).expect("assess");
    let hb = report.heat_balance;
    assert_eq!(hb.iterations, 0);
    assert!(hb.converged);
    // 24 °C, 50 % 에서 수증기 분압은 약 1.488 kPa
    assert_close("p_a", hb.vapour_pressure_pa, 1487.6, 0.1);
    assert_close("f_cl", hb.clothing_area_factor, 1.05, 1e-12);
    assert!(report.warnings.contains(&ComfortWarning::SimplifiedDeviation));
}

#[test]
fn methods_disagree_and_are_not_reconciled() {
    let a = comfort::compute(&office(), ComfortMethod::SimplifiedFanger).unwrap();
    let b = comfort::compute(&office(), ComfortMethod::Iso7730).unwrap();
    assert_ne!(a.pmv, b.pmv);
}

#[test]
fn humidity_above_hundred_is_rejected() {
    let mut x = office();
    x.relative_humidity_pct = 150.0;
    let err = comfort::compute(&x, ComfortMethod::Iso7730).expect_err("rh=150 must fail");
    assert_eq!(err.field, "relative_humidity");
    assert_eq!(err.constraint, Constraint::OutOfRange { min: 0.0, max: 100.0 });

    let err = comfort::assess(&x, ComfortMethod::SimplifiedFanger).expect_err("both methods");
    assert_eq!(err.field, "relative_humidity");
}

#[test]
fn invalid_fields_are_named() {
    let mut x = office();
    x.air_velocity_m_per_s = -0.1;
    let err = comfort::compute(&x, ComfortMethod::Iso7730).unwrap_err();
    assert_eq!(err.field, "air_velocity");
    assert_eq!(err.constraint, Constraint::Negative);

    let mut x = office();
    x.metabolic_rate_met = 0.0;
    let err = comfort::compute(&x, ComfortMethod::Iso7730).unwrap_err();
    assert_eq!(err.field, "metabolic_rate");
    assert_eq!(err.constraint, Constraint::NotPositive);

    let mut x = office();
    x.clothing_clo = -0.5;
    assert_eq!(
        comfort::compute(&x, ComfortMethod::Iso7730).unwrap_err().field,
        "clothing_insulation"
    );

    let mut x = office();
    x.mean_radiant_temp_c = f64::NAN;
    let err = comfort::compute(&x, ComfortMethod::Iso7730).unwrap_err();
    assert_eq!(err.field, "mean_radiant_temperature");
    assert_eq!(err.constraint, Constraint::NotFinite);

    let mut x = office();
    x.air_temp_c = 95.0;
    assert_eq!(
        comfort::compute(&x, ComfortMethod::Iso7730).unwrap_err().field,
        "air_temperature"
    );
}

#[test]
fn implausible_metabolic_rate_and_clothing_are_rejected() {
    let mut x = office();
    x.metabolic_rate_met = 1e306;
    for method in [ComfortMethod::SimplifiedFanger, ComfortMethod::Iso7730] {
        let err = comfort::assess(&x, method).expect_err("met=1e306 must fail");
        assert_eq!(err.field, "metabolic_rate");
        assert_eq!(err.constraint, Constraint::OutOfRange { min: 0.0, max: 10.0 });
    }

    let mut x = office();
    x.clothing_clo = 4.5;
    let err = comfort::compute(&x, ComfortMethod::Iso7730).unwrap_err();
    assert_eq!(err.field, "clothing_insulation");
    assert_eq!(err.constraint, Constraint::OutOfRange { min: 0.0, max: 4.0 });
}

#[test]
fn extreme_valid_inputs_stay_finite() {
    for (ta, v, met, clo) in [
        (-50.0, 0.0, 10.0, 4.0),
        (80.0, 100.0, 10.0, 0.0),
        (24.0, 0.1, 10.0, 4.0),
        (-50.0, 5.0, 0.1, 0.0),
    ] {
        let x = inputs(ta, ta, v, 100.0, met, clo);
        for method in [ComfortMethod::SimplifiedFanger, ComfortMethod::Iso7730] {
            let r = comfort::compute(&x, method).expect("finite within validated domain");
            assert!(r.pmv.is_finite(), "{method} {ta} {v} {met} {clo}");
            assert!((0.0..=100.0).contains(&r.ppd));
        }
    }
}

#[test]
fn ten_percent_dissatisfied_is_the_threshold() {
    let at = comfort::ComfortResult { pmv: 0.5, ppd: 10.0 };
    let above = comfort::ComfortResult { pmv: 0.5, ppd: 10.01 };
    assert!(!at.many_dissatisfied());
    assert!(above.many_dissatisfied());
    assert!(comfort::ComfortResult::from_raw_pmv(1.0).many_dissatisfied());
    assert!(!comfort::ComfortResult::from_raw_pmv(0.2).many_dissatisfied());
}

#[test]
fn out_of_iso_range_inputs_warn_but_compute() {
    let report = comfort::assess(&inputs(35.0, 35.0, 0.1, 50.0, 1.2, 0.5), ComfortMethod::Iso7730)
        .expect("computed despite range");
    assert!(report.result.pmv > 0.5);
    assert_eq!(report.class, ComfortClass::TooWarm);
    assert!(report.warnings.iter().any(|w| matches!(
        w,
        ComfortWarning::OutOfRange { quantity, .. } if quantity == "air_temperature"
    )));
}

#[test]
fn report_labels_match_rounded_pmv() {
    for method in [ComfortMethod::SimplifiedFanger, ComfortMethod::Iso7730] {
        let report = comfort::assess(&office(), method).unwrap();
        assert_eq!(Some(report.class), ComfortClass::from_pmv(report.result.pmv));
        assert_eq!(report.category, Iso7730Category::from_pmv(report.result.pmv));
        assert_eq!(
            report.result.ppd,
            comfort::round_to(comfort::ppd_from_pmv(report.result.pmv), 2)
        );
    }
}

#[test]
fn ppd_minimum_at_neutral() {
    assert_eq!(comfort::ppd_from_pmv(0.0), 5.0);
    assert_eq!(comfort::ComfortResult::from_raw_pmv(0.001).ppd, 5.0);
}

#[test]
fn ppd_curve_is_symmetric_with_minimum_at_zero() {
    let pts = comfort::ppd_curve(-3.0, 3.0, 1.0);
    assert_eq!(pts.len(), 7);
    assert_eq!(pts[3], (0.0, 5.0));
    for i in 0..3 {
        assert_eq!(pts[i].1, pts[6 - i].1);
    }
    assert_eq!(pts[4].1, 26.12);
    assert!(comfort::ppd_curve(1.0, 0.0, 0.5).is_empty());
    assert!(comfort::ppd_curve(0.0, 1.0, 0.0).is_empty());
}

#[test]
fn ppd_curve_with_tiny_step_is_empty() {
    assert!(comfort::ppd_curve(-3.0, 3.0, 1e-300).is_empty());
    assert!(comfort::ppd_curve(-3.0, 3.0, 1e-5).is_empty());
    let max = comfort::ppd_curve(0.0, 1.0, 1.0 / comfort::MAX_CURVE_POINTS as f64);
    assert!(!max.is_empty() && max.len() <= comfort::MAX_CURVE_POINTS + 1);
}

#[test]
fn iso_categories() {
    assert_eq!(Iso7730Category::from_pmv(0.19), Iso7730Category::A);
    assert_eq!(Iso7730Category::from_pmv(-0.2), Iso7730Category::B);
    assert_eq!(Iso7730Category::from_pmv(0.5), Iso7730Category::C);
    assert_eq!(Iso7730Category::from_pmv(-0.7), Iso7730Category::OutOfRange);
}

#[test]
fn method_names_parse() {
    assert_eq!("iso".parse::<ComfortMethod>(), Ok(ComfortMethod::Iso7730));
    assert_eq!(
        "Simplified".parse::<ComfortMethod>(),
        Ok(ComfortMethod::SimplifiedFanger)
    );
    assert!("adaptive".parse::<ComfortMethod>().is_err());
}
