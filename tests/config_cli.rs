use clap::Parser;
use std::fs;
use std::io::{self, Cursor};
use std::path::PathBuf;
use std::process;

use thermal_comfort_toolbox::app::{self, AppError};
use thermal_comfort_toolbox::cli::{Cli, Command};
use thermal_comfort_toolbox::comfort::{
    self, ComfortClass, ComfortInputs, ComfortMethod, ComfortReport,
};
use thermal_comfort_toolbox::config::{self, Config};
use thermal_comfort_toolbox::i18n::{self, keys, Translator};
use thermal_comfort_toolbox::report::{self, OutputFormat};
use thermal_comfort_toolbox::ui_cli::{
    parse_menu_choice, read_line_from, read_menu_choice, MenuChoice,
};
use thermal_comfort_toolbox::units::TemperatureUnit;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tct_{name}_{}", process::id()));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = scratch_dir("create");
    let path = dir.join("config.toml");
    let _ = fs::remove_file(&path);

    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let mut changed = cfg.clone();
    changed.method = ComfortMethod::SimplifiedFanger;
    changed.temperature_unit = TemperatureUnit::Fahrenheit;
    changed.pmv_defaults.relative_humidity_pct = 40.0;
    changed.save(&path).expect("save");
    assert_eq!(config::load_or_default(&path).expect("reload"), changed);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn partial_config_keeps_other_defaults() {
    let dir = scratch_dir("partial");
    let path = dir.join("config.toml");
    fs::write(
        &path,
        "method = \"SimplifiedFanger\"\n[pmv_defaults]\nair_temp_c = 26.0\n",
    )
    .expect("write");

    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg.method, ComfortMethod::SimplifiedFanger);
    assert_eq!(cfg.pmv_defaults.air_temp_c, 26.0);
    assert_eq!(cfg.pmv_defaults.mean_radiant_temp_c, 21.4);
    assert_eq!(cfg.adaptive_defaults, Config::default().adaptive_defaults);
    assert_eq!(cfg.language, "auto");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn broken_config_is_reported() {
    let dir = scratch_dir("broken");
    let path = dir.join("config.toml");
    fs::write(&path, "method = [").expect("write");
    assert!(matches!(
        config::load_or_default(&path),
        Err(config::ConfigError::Serde(_))
    ));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn pmv_arguments_convert_units_and_resolve_presets() {
    let cli = Cli::try_parse_from([
        "thermal_comfort_toolbox",
        "pmv",
        "--tdb",
        "75.2",
        "--temp-unit",
        "f",
        "--met-preset",
        "typing",
    ])
    .expect("parse");
    let Some(Command::Pmv(args)) = cli.command else {
        panic!("expected pmv command");
    };
    let inputs = app::pmv_inputs(&args, &Config::default()).expect("inputs");
    assert_close("tdb", inputs.air_temp_c, 24.0, 1e-9);
    assert_eq!(inputs.metabolic_rate_met, 1.1);
    assert_eq!(inputs.mean_radiant_temp_c, 21.4);
    assert_eq!(inputs.clothing_clo, 0.54);
}

#[test]
fn negative_temperatures_and_global_flags_parse() {
    let cli = Cli::try_parse_from([
        "thermal_comfort_toolbox",
        "pmv",
        "--tdb",
        "-5",
        "--lang",
        "en",
        "--format",
        "toml",
    ])
    .expect("parse");
    assert_eq!(cli.lang, "en");
    assert_eq!(cli.format, OutputFormat::Toml);
    let Some(Command::Pmv(args)) = cli.command else {
        panic!("expected pmv command");
    };
    assert_eq!(args.tdb, Some(-5.0));
}

#[test]
fn met_value_and_preset_conflict() {
    let res = Cli::try_parse_from([
        "thermal_comfort_toolbox",
        "pmv",
        "--met",
        "1.2",
        "--met-preset",
        "typing",
    ]);
    assert!(res.is_err());
}

#[test]
fn unknown_preset_is_an_error() {
    let cli = Cli::try_parse_from([
        "thermal_comfort_toolbox",
        "pmv",
        "--clo-preset",
        "space suit",
    ])
    .expect("parse");
    let Some(Command::Pmv(args)) = cli.command else {
        panic!("expected pmv command");
    };
    match app::pmv_inputs(&args, &Config::default()) {
        Err(AppError::UnknownPreset(name)) => assert_eq!(name, "space suit"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn hvac_efficiency_is_given_in_percent() {
    let cli = Cli::try_parse_from(["thermal_comfort_toolbox", "hvac", "--efficiency", "80"])
        .expect("parse");
    let Some(Command::Hvac(args)) = cli.command else {
        panic!("expected hvac command");
    };
    let input = app::hvac_input(&args);
    assert_close("eff", input.efficiency, 0.8, 1e-12);
    assert_eq!(input.inlet_pressure_pa, 101_325.0);
}

#[test]
fn language_pack_overrides_builtin_strings() {
    let dir = scratch_dir("locales");
    fs::write(
        dir.join("en.toml"),
        "[class]\ntoo_cold = \"Brr, too cold.\"\n",
    )
    .expect("write");

    let tr = Translator::new_with_pack("en", Some(&dir));
    assert_eq!(tr.t(keys::CLASS_TOO_COLD), "Brr, too cold.");
    // 언어팩에 없는 키는 기본 문구를 쓴다.
    assert_eq!(tr.t(keys::REMEDY_ADD_CLOTHING), "wear more clothing");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn language_resolution_and_nested_keys() {
    assert_eq!(i18n::resolve_language("ko", Some("en")), "ko");
    assert_eq!(i18n::resolve_language("auto", Some("en-US")), "en");

    let map = i18n::parse_toml_to_map("[a]\nb = \"x\"\n[a.c]\nd = \"y\"\n").expect("map");
    assert_eq!(map.get("a.b").map(String::as_str), Some("x"));
    assert_eq!(map.get("a.c.d").map(String::as_str), Some("y"));
    assert!(i18n::parse_toml_to_map("not = [toml").is_none());
}

#[test]
fn comfort_tip_lists_remedies() {
    let tr = Translator::new("en");
    let tip = report::comfort_tip(ComfortClass::TooCold, &tr);
    assert!(tip.contains("wear more clothing"), "{tip}");
    assert!(tip.ends_with('.'));

    let tip = report::comfort_tip(ComfortClass::Comfortable, &tr);
    assert_eq!(tip, tr.t(keys::CLASS_COMFORTABLE));
}

#[test]
fn toml_report_round_trips() {
    let inputs: ComfortInputs = Config::default().pmv_defaults.into();
    let report = comfort::assess(&inputs, ComfortMethod::Iso7730).expect("assess");
    let text = report::to_toml(&report).expect("serialize");
    let back: ComfortReport = toml::from_str(&text).expect("deserialize");
    assert_eq!(back.result, report.result);
    assert_eq!(back.method, ComfortMethod::Iso7730);
}

#[test]
fn menu_choices_parse() {
    assert_eq!(parse_menu_choice("1"), Some(MenuChoice::Pmv));
    assert_eq!(parse_menu_choice(" 4\n"), Some(MenuChoice::Curve));
    assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
    assert_eq!(parse_menu_choice("9"), None);
    assert_eq!(parse_menu_choice("pmv"), None);
}

#[test]
fn closed_input_ends_the_menu() {
    let tr = Translator::new("en");
    let choice = read_menu_choice(&mut io::empty(), &tr).expect("eof is not an error");
    assert_eq!(choice, MenuChoice::Exit);

    let mut input = Cursor::new("9\nabc\n2\n");
    assert_eq!(
        read_menu_choice(&mut input, &tr).expect("menu"),
        MenuChoice::Adaptive
    );
}

#[test]
fn prompt_reports_end_of_input() {
    match read_line_from(&mut io::empty(), "> ") {
        Err(AppError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("unexpected {other:?}"),
    }
    let mut input = Cursor::new("23.5\n");
    assert_eq!(read_line_from(&mut input, "> ").expect("line"), "23.5\n");
}
