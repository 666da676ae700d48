//! 대표 작업별 대사량과 대표 착의 조합별 착의량 목록.

/// 이름이 붙은 대표값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub value: f64,
}

const fn p(name: &'static str, value: f64) -> Preset {
    Preset { name, value }
}

/// 대표 작업별 대사량(met).
pub const METABOLIC_TASKS: &[Preset] = &[
    p("Sleeping", 0.7),
    p("Reclining", 0.8),
    p("Seated, quiet", 1.0),
    p("Reading, seated", 1.0),
    p("Writing", 1.0),
    p("Typing", 1.1),
    p("Standing, relaxed", 1.2),
    p("Filing, seated", 1.2),
    p("Flying aircraft, routine", 1.2),
    p("Filing, standing", 1.4),
    p("Driving a car", 1.5),
    p("Walking about", 1.7),
    p("Cooking", 1.8),
    p("Table sawing", 1.8),
    p("Walking 2mph (3.2kmh)", 2.0),
    p("Lifting/packing", 2.1),
    p("Seated, heavy limb movement", 2.2),
    p("Light machine work", 2.2),
    p("Flying aircraft, combat", 2.4),
    p("Walking 3mph (4.8kmh)", 2.6),
    p("House cleaning", 2.7),
    p("Driving, heavy vehicle", 3.2),
    p("Dancing", 3.4),
    p("Calisthenics", 3.5),
    p("Walking 4mph (6.4kmh)", 3.8),
    p("Tennis", 3.8),
    p("Heavy machine work", 4.0),
    p("Handling 100lb (45 kg) bags", 4.0),
    p("Pick and shovel work", 4.4),
    p("Basketball", 6.3),
    p("Wrestling", 7.8),
];

/// 대표 착의 조합별 착의량(clo).
pub const CLOTHING_ENSEMBLES: &[Preset] = &[
    p("Walking shorts, short-sleeve shirt", 0.36),
    p("Typical summer indoor clothing", 0.5),
    p("Knee-length skirt, short-sleeve shirt, sandals, underwear", 0.54),
    p("Trousers, short-sleeve shirt, socks, shoes, underwear", 0.57),
    p("Trousers, long-sleeve shirt", 0.61),
    p("Knee-length skirt, long-sleeve shirt, full slip", 0.67),
    p("Sweat pants, long-sleeve sweatshirt", 0.74),
    p("Jacket, Trousers, long-sleeve shirt", 0.96),
    p("Typical winter indoor clothing", 1.0),
];

/// 기본 선택 항목 (Reading, seated)
pub const DEFAULT_MET_INDEX: usize = 3;
/// 기본 선택 항목 (Knee-length skirt, short-sleeve shirt, ...)
pub const DEFAULT_CLO_INDEX: usize = 2;

fn find<'a>(table: &'a [Preset], query: &str) -> Option<&'a Preset> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }
    table
        .iter()
        .find(|p| p.name.to_lowercase() == q)
        .or_else(|| table.iter().find(|p| p.name.to_lowercase().starts_with(&q)))
}

/// 이름(대소문자 무시, 접두어 허용)으로 대사량 프리셋을 찾는다.
pub fn find_metabolic(query: &str) -> Option<&'static Preset> {
    find(METABOLIC_TASKS, query)
}

/// 이름(대소문자 무시, 접두어 허용)으로 착의 프리셋을 찾는다.
pub fn find_clothing(query: &str) -> Option<&'static Preset> {
    find(CLOTHING_ENSEMBLES, query)
}

pub fn default_met() -> f64 {
    METABOLIC_TASKS[DEFAULT_MET_INDEX].value
}

pub fn default_clo() -> f64 {
    CLOTHING_ENSEMBLES[DEFAULT_CLO_INDEX].value
}
