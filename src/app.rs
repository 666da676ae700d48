use serde::Serialize;
use std::path::PathBuf;

use crate::cli::{AdaptiveArgs, Command, CurveArgs, HvacArgs, PmvArgs};
use crate::comfort::adaptive::{self, AdaptiveInputs};
use crate::comfort::{self, presets, ComfortInputs, ValidationError};
use crate::config::Config;
use crate::hvac::{self, HvacError, HvacInput};
use crate::i18n::{self, Translator};
use crate::report::{self, OutputFormat};
use crate::ui_cli::{self, MenuChoice};
use crate::units::{to_celsius, to_meters_per_second};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일/표준입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 쾌적 계산 입력 오류
    Validation(ValidationError),
    /// 냉동사이클 계산 오류
    Hvac(HvacError),
    /// 결과 직렬화 오류
    Serialize(toml::ser::Error),
    /// 존재하지 않는 프리셋 이름
    UnknownPreset(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Validation(e) => write!(f, "입력 검증 오류: {e}"),
            AppError::Hvac(e) => write!(f, "냉동사이클 계산 오류: {e}"),
            AppError::Serialize(e) => write!(f, "결과 직렬화 오류: {e}"),
            AppError::UnknownPreset(name) => write!(f, "알 수 없는 프리셋: {name}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        AppError::Validation(value)
    }
}

impl From<HvacError> for AppError {
    fn from(value: HvacError) -> Self {
        AppError::Hvac(value)
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(value: toml::ser::Error) -> Self {
        AppError::Serialize(value)
    }
}

/// 한 번의 실행 동안 공유하는 설정/번역기/출력 형식.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub config_path: PathBuf,
    pub tr: Translator,
    pub format: OutputFormat,
}

impl Context {
    /// 설정의 언어와 CLI 언어 플래그를 합쳐 번역기를 만든다.
    pub fn new(
        config: Config,
        config_path: PathBuf,
        cli_lang: &str,
        locales: Option<&std::path::Path>,
        format: OutputFormat,
    ) -> Self {
        let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
        Self {
            tr: Translator::new_with_pack(&lang, locales),
            config,
            config_path,
            format,
        }
    }
}

#[derive(Serialize)]
struct CurvePoint {
    pmv: f64,
    ppd: f64,
}

#[derive(Serialize)]
struct CurveOutput {
    points: Vec<CurvePoint>,
}

fn emit<T: Serialize>(ctx: &Context, value: &T, text: impl FnOnce() -> String) -> Result<(), AppError> {
    match ctx.format {
        OutputFormat::Text => print!("{}", text()),
        OutputFormat::Toml => print!("{}", report::to_toml(value)?),
    }
    Ok(())
}

fn resolve_preset(
    value: Option<f64>,
    preset: Option<&str>,
    find: fn(&str) -> Option<&'static presets::Preset>,
    default: f64,
) -> Result<f64, AppError> {
    match (value, preset) {
        (Some(v), _) => Ok(v),
        (None, Some(name)) => find(name)
            .map(|p| p.value)
            .ok_or_else(|| AppError::UnknownPreset(name.to_string())),
        (None, None) => Ok(default),
    }
}

/// CLI 인자와 설정 기본값을 합쳐 °C, m/s 기준 PMV 입력을 만든다.
pub fn pmv_inputs(args: &PmvArgs, cfg: &Config) -> Result<ComfortInputs, AppError> {
    let t_unit = args.temp_unit.unwrap_or(cfg.temperature_unit);
    let v_unit = args.velocity_unit.unwrap_or(cfg.velocity_unit);
    let d = &cfg.pmv_defaults;
    Ok(ComfortInputs {
        air_temp_c: args.tdb.map_or(d.air_temp_c, |t| to_celsius(t, t_unit)),
        mean_radiant_temp_c: args
            .tr
            .map_or(d.mean_radiant_temp_c, |t| to_celsius(t, t_unit)),
        air_velocity_m_per_s: args
            .vr
            .map_or(d.air_velocity_m_per_s, |v| to_meters_per_second(v, v_unit)),
        relative_humidity_pct: args.rh.unwrap_or(d.relative_humidity_pct),
        metabolic_rate_met: resolve_preset(
            args.met,
            args.met_preset.as_deref(),
            presets::find_metabolic,
            d.metabolic_rate_met,
        )?,
        clothing_clo: resolve_preset(
            args.clo,
            args.clo_preset.as_deref(),
            presets::find_clothing,
            d.clothing_clo,
        )?,
    })
}

/// CLI 인자와 설정 기본값을 합쳐 적응형 모델 입력을 만든다.
pub fn adaptive_inputs(args: &AdaptiveArgs, cfg: &Config) -> AdaptiveInputs {
    let t_unit = args.temp_unit.unwrap_or(cfg.temperature_unit);
    let v_unit = args.velocity_unit.unwrap_or(cfg.velocity_unit);
    let d = &cfg.adaptive_defaults;
    AdaptiveInputs {
        indoor_temp_c: args.tdb.map_or(d.indoor_temp_c, |t| to_celsius(t, t_unit)),
        mean_radiant_temp_c: args
            .tr
            .map_or(d.mean_radiant_temp_c, |t| to_celsius(t, t_unit)),
        outdoor_running_mean_c: args
            .trm
            .map_or(d.outdoor_running_mean_c, |t| to_celsius(t, t_unit)),
        air_velocity_m_per_s: args
            .vr
            .map_or(d.air_velocity_m_per_s, |v| to_meters_per_second(v, v_unit)),
    }
}

/// 효율을 % 로 받는 CLI 입력을 사이클 입력으로 바꾼다.
pub fn hvac_input(args: &HvacArgs) -> HvacInput {
    HvacInput {
        inlet_temp_c: args.temp,
        inlet_pressure_pa: args.pressure,
        mass_flow_kg_per_s: args.mass_flow,
        efficiency: args.efficiency / 100.0,
    }
}

fn run_pmv(ctx: &Context, args: &PmvArgs) -> Result<(), AppError> {
    let inputs = pmv_inputs(args, &ctx.config)?;
    let method = args.method.unwrap_or(ctx.config.method);
    let report = comfort::assess(&inputs, method)?;
    emit(ctx, &report, || report::render_pmv(&report, &ctx.tr))
}

fn run_adaptive(ctx: &Context, args: &AdaptiveArgs) -> Result<(), AppError> {
    let inputs = adaptive_inputs(args, &ctx.config);
    let res = adaptive::compute_adaptive(&inputs)?;
    emit(ctx, &res, || report::render_adaptive(&res, &ctx.tr))
}

fn run_hvac(ctx: &Context, args: &HvacArgs) -> Result<(), AppError> {
    let res = hvac::compute_cycle(hvac_input(args))?;
    emit(ctx, &res, || report::render_hvac(&res, &ctx.tr))
}

fn run_curve(ctx: &Context, args: &CurveArgs) -> Result<(), AppError> {
    let points = comfort::ppd_curve(args.from, args.to, args.step);
    let out = CurveOutput {
        points: points
            .iter()
            .map(|&(pmv, ppd)| CurvePoint { pmv, ppd })
            .collect(),
    };
    emit(ctx, &out, || report::render_curve(&points, &ctx.tr))
}

/// 하위 명령을 실행한다. 명령이 없으면 대화형 메뉴를 연다.
pub fn run(ctx: &mut Context, command: Option<Command>) -> Result<(), AppError> {
    match command {
        Some(Command::Pmv(args)) => run_pmv(ctx, &args),
        Some(Command::Adaptive(args)) => run_adaptive(ctx, &args),
        Some(Command::Hvac(args)) => run_hvac(ctx, &args),
        Some(Command::Curve(args)) => run_curve(ctx, &args),
        Some(Command::Presets) => {
            print!("{}", report::render_presets(&ctx.tr));
            Ok(())
        }
        Some(Command::Menu) | None => run_menu(ctx),
    }
}

/// 대화형 메뉴의 메인 루프를 실행한다.
pub fn run_menu(ctx: &mut Context) -> Result<(), AppError> {
    loop {
        let result = match ui_cli::main_menu(&ctx.tr)? {
            MenuChoice::Pmv => ui_cli::handle_pmv(ctx),
            MenuChoice::Adaptive => ui_cli::handle_adaptive(ctx),
            MenuChoice::Hvac => ui_cli::handle_hvac(ctx),
            MenuChoice::Curve => {
                print!("{}", report::render_curve(&comfort::ppd_curve(-3.0, 3.0, 0.5), &ctx.tr));
                Ok(())
            }
            MenuChoice::Presets => {
                print!("{}", report::render_presets(&ctx.tr));
                Ok(())
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(ctx)?;
                ctx.config.save(&ctx.config_path)?;
                Ok(())
            }
            MenuChoice::Exit => {
                println!("{}", ctx.tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        // 계산 입력 오류는 메뉴로 돌아가 다시 입력받는다.
        match result {
            Err(AppError::Validation(e)) => {
                println!("{}: {e}", ctx.tr.t(i18n::keys::ERROR_PREFIX));
            }
            Err(AppError::Hvac(e)) => {
                println!("{}: {e}", ctx.tr.t(i18n::keys::ERROR_PREFIX));
            }
            other => other?,
        }
    }
    Ok(())
}
