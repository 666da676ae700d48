use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::comfort::{presets, ComfortInputs, ComfortMethod};
use crate::units::{TemperatureUnit, VelocityUnit};

/// 설정 파일 기본 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// PMV 입력을 생략했을 때 사용하는 기본값. 단위는 °C, m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PmvDefaults {
    pub air_temp_c: f64,
    pub mean_radiant_temp_c: f64,
    pub air_velocity_m_per_s: f64,
    pub relative_humidity_pct: f64,
    pub metabolic_rate_met: f64,
    pub clothing_clo: f64,
}

impl Default for PmvDefaults {
    fn default() -> Self {
        Self {
            air_temp_c: 23.0,
            mean_radiant_temp_c: 21.4,
            air_velocity_m_per_s: 0.1,
            relative_humidity_pct: 50.0,
            metabolic_rate_met: presets::default_met(),
            clothing_clo: presets::default_clo(),
        }
    }
}

impl From<PmvDefaults> for ComfortInputs {
    fn from(d: PmvDefaults) -> Self {
        ComfortInputs {
            air_temp_c: d.air_temp_c,
            mean_radiant_temp_c: d.mean_radiant_temp_c,
            air_velocity_m_per_s: d.air_velocity_m_per_s,
            relative_humidity_pct: d.relative_humidity_pct,
            metabolic_rate_met: d.metabolic_rate_met,
            clothing_clo: d.clothing_clo,
        }
    }
}

/// 적응형 모델 입력 기본값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveDefaults {
    pub indoor_temp_c: f64,
    pub mean_radiant_temp_c: f64,
    pub outdoor_running_mean_c: f64,
    pub air_velocity_m_per_s: f64,
}

impl Default for AdaptiveDefaults {
    fn default() -> Self {
        Self {
            indoor_temp_c: 25.0,
            mean_radiant_temp_c: 25.0,
            outdoor_running_mean_c: 20.0,
            air_velocity_m_per_s: 0.1,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (auto/ko/en)
    pub language: String,
    pub method: ComfortMethod,
    /// 입력 온도 단위
    pub temperature_unit: TemperatureUnit,
    /// 입력 풍속 단위
    pub velocity_unit: VelocityUnit,
    pub pmv_defaults: PmvDefaults,
    pub adaptive_defaults: AdaptiveDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            method: ComfortMethod::default(),
            temperature_unit: TemperatureUnit::Celsius,
            velocity_unit: VelocityUnit::MeterPerSecond,
            pmv_defaults: PmvDefaults::default(),
            adaptive_defaults: AdaptiveDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        tracing::info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}
