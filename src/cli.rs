//! 명령행 인자 정의. 값이 생략되면 설정 파일의 기본값을 사용한다.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::comfort::ComfortMethod;
use crate::config::DEFAULT_CONFIG_PATH;
use crate::report::OutputFormat;
use crate::units::{TemperatureUnit, VelocityUnit};

#[derive(Debug, Parser)]
#[command(
    name = "thermal_comfort_toolbox",
    version,
    about = "PMV/PPD, adaptive comfort and HVAC cycle calculator"
)]
pub struct Cli {
    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L', default_value = "auto", global = true)]
    pub lang: String,
    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,
    /// 언어팩 디렉터리
    #[arg(long, global = true)]
    pub locales: Option<PathBuf>,
    /// 출력 형식 (text/toml)
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// PMV/PPD 계산
    Pmv(PmvArgs),
    /// ASHRAE 55 적응형 쾌적 범위
    Adaptive(AdaptiveArgs),
    /// 냉동사이클 개략 계산
    Hvac(HvacArgs),
    /// PPD-PMV 관계표
    Curve(CurveArgs),
    /// 대사량/착의량 대표값 목록
    Presets,
    /// 대화형 메뉴 (기본값)
    Menu,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PmvArgs {
    /// 공기 온도
    #[arg(long, allow_negative_numbers = true)]
    pub tdb: Option<f64>,
    /// 평균 복사 온도
    #[arg(long, allow_negative_numbers = true)]
    pub tr: Option<f64>,
    /// 풍속
    #[arg(long, allow_negative_numbers = true)]
    pub vr: Option<f64>,
    /// 상대습도 [%]
    #[arg(long, allow_negative_numbers = true)]
    pub rh: Option<f64>,
    /// 대사량 [met]
    #[arg(long, conflicts_with = "met_preset", allow_negative_numbers = true)]
    pub met: Option<f64>,
    /// 대사량 프리셋 이름 (예: "Typing")
    #[arg(long)]
    pub met_preset: Option<String>,
    /// 착의량 [clo]
    #[arg(long, conflicts_with = "clo_preset", allow_negative_numbers = true)]
    pub clo: Option<f64>,
    /// 착의량 프리셋 이름
    #[arg(long)]
    pub clo_preset: Option<String>,
    /// 계산 방식 (simplified/iso7730)
    #[arg(long)]
    pub method: Option<ComfortMethod>,
    /// 온도 입력 단위 (c/k/f/r)
    #[arg(long)]
    pub temp_unit: Option<TemperatureUnit>,
    /// 풍속 입력 단위 (mps/fps/kmh/fpm)
    #[arg(long)]
    pub velocity_unit: Option<VelocityUnit>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct AdaptiveArgs {
    /// 실내 온도
    #[arg(long, allow_negative_numbers = true)]
    pub tdb: Option<f64>,
    /// 평균 복사 온도
    #[arg(long, allow_negative_numbers = true)]
    pub tr: Option<f64>,
    /// 외기 이동평균 온도
    #[arg(long, allow_negative_numbers = true)]
    pub trm: Option<f64>,
    /// 풍속
    #[arg(long, allow_negative_numbers = true)]
    pub vr: Option<f64>,
    #[arg(long)]
    pub temp_unit: Option<TemperatureUnit>,
    #[arg(long)]
    pub velocity_unit: Option<VelocityUnit>,
}

#[derive(Debug, Clone, Args)]
pub struct HvacArgs {
    /// 입구 온도 [°C]
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    pub temp: f64,
    /// 입구 압력 [Pa]
    #[arg(long, default_value_t = 101_325.0)]
    pub pressure: f64,
    /// 질량 유량 [kg/s]
    #[arg(long, default_value_t = 1.0)]
    pub mass_flow: f64,
    /// 효율 [%]
    #[arg(long, default_value_t = 90.0)]
    pub efficiency: f64,
}

#[derive(Debug, Clone, Args)]
pub struct CurveArgs {
    #[arg(long, default_value_t = -3.0, allow_negative_numbers = true)]
    pub from: f64,
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    pub to: f64,
    #[arg(long, default_value_t = 0.5)]
    pub step: f64,
}
