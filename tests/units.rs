use approx::assert_abs_diff_eq;
use thermal_comfort_toolbox::units::{
    convert_temperature, convert_velocity, to_celsius, to_meters_per_second, TemperatureUnit,
    VelocityUnit,
};

#[test]
fn kelvin_and_rankine_to_celsius() {
    assert_abs_diff_eq!(to_celsius(297.15, TemperatureUnit::Kelvin), 24.0, epsilon = 1e-9);
    assert_abs_diff_eq!(to_celsius(491.67, TemperatureUnit::Rankine), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(to_celsius(212.0, TemperatureUnit::Fahrenheit), 100.0, epsilon = 1e-9);
    assert_eq!(to_celsius(21.4, TemperatureUnit::Celsius), 21.4);
}

#[test]
fn temperature_round_trips() {
    for unit in [
        TemperatureUnit::Kelvin,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Rankine,
    ] {
        let there = convert_temperature(23.0, TemperatureUnit::Celsius, unit);
        let back = convert_temperature(there, unit, TemperatureUnit::Celsius);
        assert_abs_diff_eq!(back, 23.0, epsilon = 1e-9);
    }
}

#[test]
fn air_speed_units() {
    // 20 fpm ≈ 0.1 m/s, 공조 설계에서 흔한 정온 기류
    assert_abs_diff_eq!(to_meters_per_second(20.0, VelocityUnit::FootPerMinute), 0.1016, epsilon = 1e-12);
    assert_abs_diff_eq!(to_meters_per_second(3.6, VelocityUnit::KilometerPerHour), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(to_meters_per_second(1.0, VelocityUnit::FootPerSecond), 0.3048, epsilon = 1e-12);

    let fpm = convert_velocity(0.8, VelocityUnit::MeterPerSecond, VelocityUnit::FootPerMinute);
    let kmh = convert_velocity(fpm, VelocityUnit::FootPerMinute, VelocityUnit::KilometerPerHour);
    assert_abs_diff_eq!(kmh, 2.88, epsilon = 1e-9);
    assert_abs_diff_eq!(
        convert_velocity(kmh, VelocityUnit::KilometerPerHour, VelocityUnit::MeterPerSecond),
        0.8,
        epsilon = 1e-12
    );
}

#[test]
fn unit_names_parse() {
    assert_eq!("K".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Kelvin));
    assert_eq!("r".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Rankine));
    assert_eq!("fpm".parse::<VelocityUnit>(), Ok(VelocityUnit::FootPerMinute));
    assert!("knots".parse::<VelocityUnit>().is_err());
}
