use std::io::{self, BufRead, Write};

use crate::app::{AppError, Context};
use crate::comfort::adaptive::{self, AdaptiveInputs};
use crate::comfort::{self, presets, ComfortInputs, ComfortMethod};
use crate::hvac::{self, HvacInput};
use crate::i18n::{keys, Translator};
use crate::report;
use crate::units::{to_celsius, to_meters_per_second};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Pmv,
    Adaptive,
    Hvac,
    Curve,
    Presets,
    Settings,
    Exit,
}

/// 메뉴 번호 문자열을 선택지로 바꾼다.
pub fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::Pmv),
        "2" => Some(MenuChoice::Adaptive),
        "3" => Some(MenuChoice::Hvac),
        "4" => Some(MenuChoice::Curve),
        "5" => Some(MenuChoice::Presets),
        "6" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_PMV,
        keys::MAIN_MENU_ADAPTIVE,
        keys::MAIN_MENU_HVAC,
        keys::MAIN_MENU_CURVE,
        keys::MAIN_MENU_PRESETS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    read_menu_choice(&mut io::stdin().lock(), tr)
}

/// 유효한 메뉴 번호가 나올 때까지 읽는다. 입력이 끝나면 종료로 본다.
pub fn read_menu_choice<R: BufRead>(input: &mut R, tr: &Translator) -> Result<MenuChoice, AppError> {
    loop {
        let sel = match read_line_from(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            Err(e) => return Err(e),
        };
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// PMV/PPD 메뉴를 처리한다. 엔터만 입력하면 설정 기본값을 쓴다.
pub fn handle_pmv(ctx: &Context) -> Result<(), AppError> {
    let tr = &ctx.tr;
    let cfg = &ctx.config;
    let d = &cfg.pmv_defaults;
    let t_sym = cfg.temperature_unit.symbol();
    let v_sym = cfg.velocity_unit.symbol();
    println!("{}", tr.t(keys::PMV_HEADING));

    let tdb = read_f64_or(tr, &format!("{} [{t_sym}]", tr.t(keys::PROMPT_AIR_TEMP)), None)?;
    let trad = read_f64_or(tr, &format!("{} [{t_sym}]", tr.t(keys::PROMPT_RADIANT_TEMP)), None)?;
    let vr = read_f64_or(tr, &format!("{} [{v_sym}]", tr.t(keys::PROMPT_AIR_VELOCITY)), None)?;
    let rh = read_f64_or(tr, tr.t(keys::PROMPT_HUMIDITY), Some(d.relative_humidity_pct))?;
    let met = read_value_or_preset(
        tr,
        tr.t(keys::PROMPT_MET),
        d.metabolic_rate_met,
        presets::find_metabolic,
    )?;
    let clo = read_value_or_preset(
        tr,
        tr.t(keys::PROMPT_CLO),
        d.clothing_clo,
        presets::find_clothing,
    )?;

    let inputs = ComfortInputs {
        air_temp_c: tdb.map_or(d.air_temp_c, |t| to_celsius(t, cfg.temperature_unit)),
        mean_radiant_temp_c: trad.map_or(d.mean_radiant_temp_c, |t| {
            to_celsius(t, cfg.temperature_unit)
        }),
        air_velocity_m_per_s: vr.map_or(d.air_velocity_m_per_s, |v| {
            to_meters_per_second(v, cfg.velocity_unit)
        }),
        relative_humidity_pct: rh.unwrap_or(d.relative_humidity_pct),
        metabolic_rate_met: met,
        clothing_clo: clo,
    };
    let report = comfort::assess(&inputs, cfg.method)?;
    println!();
    print!("{}", report::render_pmv(&report, tr));
    Ok(())
}

/// 적응형 쾌적 메뉴를 처리한다.
pub fn handle_adaptive(ctx: &Context) -> Result<(), AppError> {
    let tr = &ctx.tr;
    let cfg = &ctx.config;
    let d = &cfg.adaptive_defaults;
    let t_sym = cfg.temperature_unit.symbol();
    let v_sym = cfg.velocity_unit.symbol();
    println!("{}", tr.t(keys::ADAPTIVE_HEADING));

    let tdb = read_f64_or(tr, &format!("{} [{t_sym}]", tr.t(keys::PROMPT_INDOOR_TEMP)), None)?;
    let trad = read_f64_or(tr, &format!("{} [{t_sym}]", tr.t(keys::PROMPT_RADIANT_TEMP)), None)?;
    let trm = read_f64_or(tr, &format!("{} [{t_sym}]", tr.t(keys::PROMPT_RUNNING_MEAN)), None)?;
    let vr = read_f64_or(tr, &format!("{} [{v_sym}]", tr.t(keys::PROMPT_AIR_VELOCITY)), None)?;

    let to_c = |t: f64| to_celsius(t, cfg.temperature_unit);
    let inputs = AdaptiveInputs {
        indoor_temp_c: tdb.map_or(d.indoor_temp_c, to_c),
        mean_radiant_temp_c: trad.map_or(d.mean_radiant_temp_c, to_c),
        outdoor_running_mean_c: trm.map_or(d.outdoor_running_mean_c, to_c),
        air_velocity_m_per_s: vr.map_or(d.air_velocity_m_per_s, |v| {
            to_meters_per_second(v, cfg.velocity_unit)
        }),
    };
    let res = adaptive::compute_adaptive(&inputs)?;
    println!();
    print!("{}", report::render_adaptive(&res, tr));
    Ok(())
}

/// 냉동사이클 메뉴를 처리한다.
pub fn handle_hvac(ctx: &Context) -> Result<(), AppError> {
    let tr = &ctx.tr;
    println!("{}", tr.t(keys::HVAC_HEADING));
    let temp = read_f64_or(tr, tr.t(keys::PROMPT_HVAC_TEMP), Some(25.0))?.unwrap_or(25.0);
    let pressure =
        read_f64_or(tr, tr.t(keys::PROMPT_HVAC_PRESSURE), Some(101_325.0))?.unwrap_or(101_325.0);
    let mass_flow = read_f64_or(tr, tr.t(keys::PROMPT_HVAC_MASS_FLOW), Some(1.0))?.unwrap_or(1.0);
    let eff_pct = read_f64_or(tr, tr.t(keys::PROMPT_HVAC_EFFICIENCY), Some(90.0))?.unwrap_or(90.0);
    let res = hvac::compute_cycle(HvacInput {
        inlet_temp_c: temp,
        inlet_pressure_pa: pressure,
        mass_flow_kg_per_s: mass_flow,
        efficiency: eff_pct / 100.0,
    })?;
    println!();
    print!("{}", report::render_hvac(&res, tr));
    Ok(())
}

/// 설정 메뉴를 처리한다. 계산 방식만 바꾼다.
pub fn handle_settings(ctx: &mut Context) -> Result<(), AppError> {
    let tr = &ctx.tr;
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_METHOD), ctx.config.method);
    println!("{}", tr.t(keys::SETTINGS_METHOD_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let method = match sel.trim() {
        "1" => ComfortMethod::SimplifiedFanger,
        "2" => ComfortMethod::Iso7730,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), method);
    ctx.config.method = method;
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof` 오류를 돌려준다.
pub fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    if input.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

/// 숫자를 읽는다. 빈 입력이면 None을 돌려준다.
fn read_f64_or(tr: &Translator, prompt: &str, default: Option<f64>) -> Result<Option<f64>, AppError> {
    let full = match default {
        Some(d) => format!("{prompt} ({d}): "),
        None => format!("{prompt}: "),
    };
    loop {
        let s = read_line(&full)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 숫자 또는 프리셋 이름을 읽는다.
fn read_value_or_preset(
    tr: &Translator,
    prompt: &str,
    default: f64,
    find: fn(&str) -> Option<&'static presets::Preset>,
) -> Result<f64, AppError> {
    let full = format!("{prompt} ({default}): ");
    loop {
        let s = read_line(&full)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        if let Ok(v) = s.parse::<f64>() {
            return Ok(v);
        }
        if let Some(p) = find(s) {
            println!("  → {} = {}", p.name, p.value);
            return Ok(p.value);
        }
        println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
    }
}
