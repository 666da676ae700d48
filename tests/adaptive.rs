use approx::assert_relative_eq;
use thermal_comfort_toolbox::comfort::adaptive::{
    self, Acceptability, AdaptiveInputs,
};

#[test]
fn mild_running_mean_sits_in_ninety_percent_band() {
    let res = adaptive::compute_adaptive(&AdaptiveInputs::new(25.0, 25.0, 20.0)).expect("adaptive");
    assert_relative_eq!(res.operative_temp_c, 25.0);
    assert_relative_eq!(res.comfort_temp_c, 24.0);
    assert_relative_eq!(res.band_80.low_c, 20.5);
    assert_relative_eq!(res.band_80.high_c, 27.5);
    assert_relative_eq!(res.band_90.low_c, 21.5);
    assert_relative_eq!(res.band_90.high_c, 26.5);
    assert_eq!(res.cooling_effect_c, 0.0);
    assert!(res.acceptable_80 && res.acceptable_90);
    assert_eq!(res.acceptability, Acceptability::Within90);
    assert!(res.applicable);
    assert!(res.warnings.is_empty());
}

#[test]
fn elevated_air_speed_widens_upper_limit() {
    let mut inputs = AdaptiveInputs::new(29.0, 29.0, 25.0);
    inputs.air_velocity_m_per_s = 0.8;
    let fast = adaptive::compute_adaptive(&inputs).expect("fast air");
    assert_relative_eq!(fast.cooling_effect_c, 1.2);
    assert_eq!(fast.acceptability, Acceptability::Within90);

    let still = adaptive::compute_adaptive(&AdaptiveInputs::new(29.0, 29.0, 25.0)).expect("still air");
    assert_eq!(still.cooling_effect_c, 0.0);
    assert!(!still.acceptable_90);
    assert_eq!(still.acceptability, Acceptability::Within80);
}

#[test]
fn cold_running_mean_is_flagged_not_applicable() {
    let res = adaptive::compute_adaptive(&AdaptiveInputs::new(22.0, 22.0, 5.0)).expect("computed");
    assert!(!res.applicable);
    assert_eq!(res.warnings.len(), 1);
}

#[test]
fn far_outside_band_is_unacceptable() {
    let res = adaptive::compute_adaptive(&AdaptiveInputs::new(35.0, 35.0, 15.0)).expect("computed");
    assert_eq!(res.acceptability, Acceptability::Unacceptable);
    assert!(!res.acceptable_80);
}

#[test]
fn operative_temperature_weights_by_air_speed() {
    assert_relative_eq!(adaptive::operative_temperature(30.0, 20.0, 0.1), 25.0);
    assert_relative_eq!(adaptive::operative_temperature(30.0, 20.0, 0.3), 26.0);
    assert_relative_eq!(adaptive::operative_temperature(30.0, 20.0, 1.0), 27.0, epsilon = 1e-12);
}

#[test]
fn cooling_effect_steps() {
    assert_eq!(adaptive::cooling_effect(24.0, 1.5), 0.0);
    assert_eq!(adaptive::cooling_effect(26.0, 0.5), 0.0);
    assert_eq!(adaptive::cooling_effect(26.0, 1.0), 1.8);
    assert_eq!(adaptive::cooling_effect(26.0, 1.2), 2.2);
}

#[test]
fn invalid_adaptive_inputs_are_rejected() {
    let mut inputs = AdaptiveInputs::new(25.0, 25.0, 20.0);
    inputs.air_velocity_m_per_s = -1.0;
    let err = adaptive::compute_adaptive(&inputs).unwrap_err();
    assert_eq!(err.field, "air_velocity");

    let err = adaptive::compute_adaptive(&AdaptiveInputs::new(f64::NAN, 25.0, 20.0)).unwrap_err();
    assert_eq!(err.field, "indoor_temperature");
}

#[test]
fn acceptability_uses_unrounded_operative_temperature() {
    // 작용온도 26.54는 26.5로 표시되지만 90 % 상한 26.5를 넘는다.
    let res = adaptive::compute_adaptive(&AdaptiveInputs::new(26.54, 26.54, 20.0)).expect("adaptive");
    assert_relative_eq!(res.operative_temp_c, 26.5);
    assert_relative_eq!(res.band_90.high_c, 26.5);
    assert!(res.band_90.contains(res.operative_temp_c));
    assert!(!res.acceptable_90);
    assert!(res.acceptable_80);
    assert_eq!(res.acceptability, Acceptability::Within80);
}
