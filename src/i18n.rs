use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PMV: &str = "main_menu.pmv";
    pub const MAIN_MENU_ADAPTIVE: &str = "main_menu.adaptive";
    pub const MAIN_MENU_HVAC: &str = "main_menu.hvac";
    pub const MAIN_MENU_CURVE: &str = "main_menu.curve";
    pub const MAIN_MENU_PRESETS: &str = "main_menu.presets";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PMV_HEADING: &str = "pmv.heading";
    pub const PROMPT_AIR_TEMP: &str = "prompt.air_temp";
    pub const PROMPT_RADIANT_TEMP: &str = "prompt.radiant_temp";
    pub const PROMPT_AIR_VELOCITY: &str = "prompt.air_velocity";
    pub const PROMPT_HUMIDITY: &str = "prompt.humidity";
    pub const PROMPT_MET: &str = "prompt.met";
    pub const PROMPT_CLO: &str = "prompt.clo";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_METHOD: &str = "result.method";
    pub const RESULT_PMV: &str = "result.pmv";
    pub const RESULT_PPD: &str = "result.ppd";
    pub const RESULT_CATEGORY: &str = "result.category";
    pub const RESULT_SEVERITY: &str = "result.severity";
    pub const RESULT_WARNINGS: &str = "result.warnings";
    pub const RESULT_CLOTHING_SURFACE: &str = "result.clothing_surface";
    pub const RESULT_THERMAL_LOAD: &str = "result.thermal_load";

    pub const CLASS_COMFORTABLE: &str = "class.comfortable";
    pub const CLASS_TOO_COLD: &str = "class.too_cold";
    pub const CLASS_TOO_WARM: &str = "class.too_warm";
    pub const SEVERITY_NONE: &str = "severity.none";
    pub const SEVERITY_MINOR: &str = "severity.minor";
    pub const SEVERITY_SIGNIFICANT: &str = "severity.significant";
    pub const REMEDY_RAISE_TEMP: &str = "remedy.raise_temp";
    pub const REMEDY_REDUCE_SPEED: &str = "remedy.reduce_speed";
    pub const REMEDY_ADD_CLOTHING: &str = "remedy.add_clothing";
    pub const REMEDY_LOWER_TEMP: &str = "remedy.lower_temp";
    pub const REMEDY_INCREASE_SPEED: &str = "remedy.increase_speed";
    pub const REMEDY_REDUCE_CLOTHING: &str = "remedy.reduce_clothing";

    pub const INSIGHT_HEADING: &str = "insight.heading";
    pub const INSIGHT_PMV_SCALE: &str = "insight.pmv_scale";
    pub const INSIGHT_PPD_MEANING: &str = "insight.ppd_meaning";
    pub const INSIGHT_COMFORT_BAND: &str = "insight.comfort_band";
    pub const INSIGHT_PPD_HIGH: &str = "insight.ppd_high";

    pub const ADAPTIVE_HEADING: &str = "adaptive.heading";
    pub const PROMPT_INDOOR_TEMP: &str = "prompt.indoor_temp";
    pub const PROMPT_RUNNING_MEAN: &str = "prompt.running_mean";
    pub const RESULT_OPERATIVE_TEMP: &str = "result.operative_temp";
    pub const RESULT_COMFORT_TEMP: &str = "result.comfort_temp";
    pub const RESULT_BAND_80: &str = "result.band_80";
    pub const RESULT_BAND_90: &str = "result.band_90";
    pub const RESULT_COOLING_EFFECT: &str = "result.cooling_effect";
    pub const ACCEPT_WITHIN_90: &str = "adaptive.within_90";
    pub const ACCEPT_WITHIN_80: &str = "adaptive.within_80";
    pub const ACCEPT_UNACCEPTABLE: &str = "adaptive.unacceptable";

    pub const HVAC_HEADING: &str = "hvac.heading";
    pub const PROMPT_HVAC_TEMP: &str = "prompt.hvac_temp";
    pub const PROMPT_HVAC_PRESSURE: &str = "prompt.hvac_pressure";
    pub const PROMPT_HVAC_MASS_FLOW: &str = "prompt.hvac_mass_flow";
    pub const PROMPT_HVAC_EFFICIENCY: &str = "prompt.hvac_efficiency";
    pub const HVAC_COMPRESSOR: &str = "hvac.compressor";
    pub const HVAC_EVAPORATOR: &str = "hvac.evaporator";
    pub const HVAC_CONDENSER: &str = "hvac.condenser";
    pub const HVAC_VALVE: &str = "hvac.valve";
    pub const HVAC_COP: &str = "hvac.cop";

    pub const CURVE_HEADING: &str = "curve.heading";
    pub const PRESETS_MET_HEADING: &str = "presets.met_heading";
    pub const PRESETS_CLO_HEADING: &str = "presets.clo_heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_METHOD: &str = "settings.current_method";
    pub const SETTINGS_METHOD_OPTIONS: &str = "settings.method_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "언어팩 적용");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 플랫 맵 또는 [section] 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = dir.join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// TOML 문자열을 "section.key" 형태의 평탄한 맵으로 바꾼다. 문자열이 아닌 값은 무시한다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Thermal Comfort Toolbox ===",
        MAIN_MENU_PMV => "1) PMV/PPD 계산",
        MAIN_MENU_ADAPTIVE => "2) 적응형 쾌적 (ASHRAE 55)",
        MAIN_MENU_HVAC => "3) 냉동사이클 추정",
        MAIN_MENU_CURVE => "4) PPD-PMV 관계표",
        MAIN_MENU_PRESETS => "5) 대사량/착의량 대표값",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PMV_HEADING => "\n-- PMV/PPD 계산 --",
        PROMPT_AIR_TEMP => "공기 온도",
        PROMPT_RADIANT_TEMP => "평균 복사 온도",
        PROMPT_AIR_VELOCITY => "풍속",
        PROMPT_HUMIDITY => "상대습도 [%]",
        PROMPT_MET => "대사량 [met] (프리셋 이름 입력 가능)",
        PROMPT_CLO => "착의량 [clo] (프리셋 이름 입력 가능)",
        RESULT_HEADING => "쾌적 계산 결과",
        RESULT_METHOD => "계산 방식:",
        RESULT_PMV => "예상 평균 온열감 (PMV):",
        RESULT_PPD => "예상 불만족률 (PPD) %:",
        RESULT_CATEGORY => "ISO 7730 등급:",
        RESULT_SEVERITY => "불쾌 정도:",
        RESULT_WARNINGS => "주의:",
        RESULT_CLOTHING_SURFACE => "의복 표면온도 [°C]:",
        RESULT_THERMAL_LOAD => "인체 열부하 [W/m²]:",
        CLASS_COMFORTABLE => "✅ 열적으로 쾌적한 환경입니다. 변경이 필요 없습니다.",
        CLASS_TOO_COLD => "❄️ 너무 춥습니다!",
        CLASS_TOO_WARM => "🔥 너무 덥습니다!",
        SEVERITY_NONE => "없음",
        SEVERITY_MINOR => "경미한 불쾌",
        SEVERITY_SIGNIFICANT => "상당한 불쾌",
        REMEDY_RAISE_TEMP => "공기 온도를 높이세요",
        REMEDY_REDUCE_SPEED => "풍속을 줄이세요",
        REMEDY_ADD_CLOTHING => "옷을 더 입으세요",
        REMEDY_LOWER_TEMP => "공기 온도를 낮추세요",
        REMEDY_INCREASE_SPEED => "풍속을 높이세요",
        REMEDY_REDUCE_CLOTHING => "가벼운 옷을 입으세요",
        INSIGHT_HEADING => "📖 결과 해석",
        INSIGHT_PMV_SCALE => "PMV: -3(추움) ~ +3(더움) 척도의 온열감 지표입니다.",
        INSIGHT_PPD_MEANING => "PPD: 해당 환경에 불만족할 것으로 예상되는 사람의 비율입니다.",
        INSIGHT_COMFORT_BAND => "PMV가 -0.5 ~ 0.5 사이이면 대다수가 쾌적하다고 느낍니다.",
        INSIGHT_PPD_HIGH => "PPD가 10%를 넘으면 많은 재실자가 불쾌할 수 있으니 조건을 조정하세요.",
        ADAPTIVE_HEADING => "\n-- 적응형 쾌적 (ASHRAE 55) --",
        PROMPT_INDOOR_TEMP => "실내 온도",
        PROMPT_RUNNING_MEAN => "외기 이동평균 온도",
        RESULT_OPERATIVE_TEMP => "작용온도 [°C]:",
        RESULT_COMFORT_TEMP => "쾌적 온도 [°C]:",
        RESULT_BAND_80 => "80% 수용 구간 [°C]:",
        RESULT_BAND_90 => "90% 수용 구간 [°C]:",
        RESULT_COOLING_EFFECT => "풍속 냉각 효과 [°C]:",
        ACCEPT_WITHIN_90 => "✅ 90% 수용 구간 안입니다.",
        ACCEPT_WITHIN_80 => "🟡 80% 수용 구간 안입니다 (90% 구간 밖).",
        ACCEPT_UNACCEPTABLE => "⚠️ 수용 구간을 벗어났습니다.",
        HVAC_HEADING => "\n-- 냉동사이클 추정 --",
        PROMPT_HVAC_TEMP => "입구 온도 [°C]",
        PROMPT_HVAC_PRESSURE => "입구 압력 [Pa]",
        PROMPT_HVAC_MASS_FLOW => "질량 유량 [kg/s]",
        PROMPT_HVAC_EFFICIENCY => "효율 [%]",
        HVAC_COMPRESSOR => "압축기 출구:",
        HVAC_EVAPORATOR => "증발기 출구:",
        HVAC_CONDENSER => "응축기 출구:",
        HVAC_VALVE => "팽창밸브 출구:",
        HVAC_COP => "성적계수(COP):",
        CURVE_HEADING => "\n-- PPD-PMV 관계 --",
        PRESETS_MET_HEADING => "\n-- 대표 작업별 대사량 [met] --",
        PRESETS_CLO_HEADING => "\n-- 대표 착의 조합별 착의량 [clo] --",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_METHOD => "현재 계산 방식:",
        SETTINGS_METHOD_OPTIONS => "1) 간이 Fanger  2) ISO 7730",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "계산 방식이 변경되었습니다:",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Thermal Comfort Toolbox ===",
        MAIN_MENU_PMV => "1) PMV/PPD calculator",
        MAIN_MENU_ADAPTIVE => "2) Adaptive comfort (ASHRAE 55)",
        MAIN_MENU_HVAC => "3) HVAC cycle estimate",
        MAIN_MENU_CURVE => "4) PPD vs. PMV table",
        MAIN_MENU_PRESETS => "5) Typical met/clo values",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PMV_HEADING => "\n-- PMV/PPD Calculator --",
        PROMPT_AIR_TEMP => "Air temperature",
        PROMPT_RADIANT_TEMP => "Mean radiant temperature",
        PROMPT_AIR_VELOCITY => "Air velocity",
        PROMPT_HUMIDITY => "Relative humidity [%]",
        PROMPT_MET => "Metabolic rate [met] (or preset name)",
        PROMPT_CLO => "Clothing insulation [clo] (or preset name)",
        RESULT_HEADING => "Comfort Results",
        RESULT_METHOD => "Method:",
        RESULT_PMV => "Predicted Mean Vote (PMV):",
        RESULT_PPD => "Predicted Percentage of Dissatisfied (PPD) %:",
        RESULT_CATEGORY => "ISO 7730 category:",
        RESULT_SEVERITY => "Severity:",
        RESULT_WARNINGS => "Warnings:",
        RESULT_CLOTHING_SURFACE => "Clothing surface temperature [°C]:",
        RESULT_THERMAL_LOAD => "Thermal load [W/m²]:",
        CLASS_COMFORTABLE => "✅ The environment is thermally comfortable. No changes needed.",
        CLASS_TOO_COLD => "❄️ It's too cold!",
        CLASS_TOO_WARM => "🔥 It's too warm!",
        SEVERITY_NONE => "none",
        SEVERITY_MINOR => "minor discomfort",
        SEVERITY_SIGNIFICANT => "significant discomfort",
        REMEDY_RAISE_TEMP => "increase air temperature",
        REMEDY_REDUCE_SPEED => "reduce airspeed",
        REMEDY_ADD_CLOTHING => "wear more clothing",
        REMEDY_LOWER_TEMP => "lower air temperature",
        REMEDY_INCREASE_SPEED => "increase airspeed",
        REMEDY_REDUCE_CLOTHING => "wear lighter clothing",
        INSIGHT_HEADING => "📖 Understanding Your Results",
        INSIGHT_PMV_SCALE => "PMV measures thermal sensation from -3 (Cold) to +3 (Hot).",
        INSIGHT_PPD_MEANING => "PPD is the percentage of people likely to be dissatisfied with the environment.",
        INSIGHT_COMFORT_BAND => "If PMV is between -0.5 and 0.5, the majority of people feel comfortable.",
        INSIGHT_PPD_HIGH => "If PPD is high (>10%), many occupants may feel discomfort. Adjust conditions accordingly.",
        ADAPTIVE_HEADING => "\n-- Adaptive Comfort (ASHRAE 55) --",
        PROMPT_INDOOR_TEMP => "Indoor temperature",
        PROMPT_RUNNING_MEAN => "Outdoor running mean temperature",
        RESULT_OPERATIVE_TEMP => "Operative temperature [°C]:",
        RESULT_COMFORT_TEMP => "Comfort temperature [°C]:",
        RESULT_BAND_80 => "80% acceptability range [°C]:",
        RESULT_BAND_90 => "90% acceptability range [°C]:",
        RESULT_COOLING_EFFECT => "Cooling effect of air speed [°C]:",
        ACCEPT_WITHIN_90 => "✅ Within the 90% acceptability range.",
        ACCEPT_WITHIN_80 => "🟡 Within the 80% range (outside 90%).",
        ACCEPT_UNACCEPTABLE => "⚠️ Outside the acceptability ranges.",
        HVAC_HEADING => "\n-- HVAC Cycle Estimate --",
        PROMPT_HVAC_TEMP => "Inlet temperature [°C]",
        PROMPT_HVAC_PRESSURE => "Inlet pressure [Pa]",
        PROMPT_HVAC_MASS_FLOW => "Mass flow rate [kg/s]",
        PROMPT_HVAC_EFFICIENCY => "Efficiency [%]",
        HVAC_COMPRESSOR => "Compressor outlet:",
        HVAC_EVAPORATOR => "Evaporator outlet:",
        HVAC_CONDENSER => "Condenser outlet:",
        HVAC_VALVE => "Expansion valve outlet:",
        HVAC_COP => "Coefficient of performance (COP):",
        CURVE_HEADING => "\n-- PPD as a Function of PMV --",
        PRESETS_MET_HEADING => "\n-- Typical metabolic rates [met] --",
        PRESETS_CLO_HEADING => "\n-- Typical clothing ensembles [clo] --",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_METHOD => "Current method:",
        SETTINGS_METHOD_OPTIONS => "1) Simplified Fanger  2) ISO 7730",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; method unchanged.",
        SETTINGS_SAVED => "Method changed to:",
        _ => "[missing translation]",
    }
}
