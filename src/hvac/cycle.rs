use serde::{Deserialize, Serialize};

/// 공기 정압비열 [kJ/kg·K]
pub const CP_AIR: f64 = 1.005;
/// 공기 비열비
pub const GAMMA_AIR: f64 = 1.4;
/// 압축기 고정 압력비
pub const PRESSURE_RATIO: f64 = 3.0;
/// 증발기/응축기 온도 변화폭(K)
pub const EXCHANGER_DELTA_K: f64 = 10.0;
/// 팽창밸브 압력 감소비
pub const VALVE_PRESSURE_FACTOR: f64 = 0.5;
/// 팽창밸브 온도 강하(K)
pub const VALVE_TEMP_DROP_K: f64 = 5.0;

/// 냉동사이클 계산 오류.
#[derive(Debug)]
pub enum HvacError {
    /// 입력값 오류
    InvalidInput(&'static str),
}

impl std::fmt::Display for HvacError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HvacError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for HvacError {}

/// 사이클 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HvacInput {
    /// 압축기 입구 온도(°C)
    pub inlet_temp_c: f64,
    /// 압축기 입구 압력(Pa, 절대)
    pub inlet_pressure_pa: f64,
    /// 질량 유량(kg/s)
    pub mass_flow_kg_per_s: f64,
    /// 압축기 등엔트로피 효율 (0, 1]
    pub efficiency: f64,
}

/// 압축기 출구 상태.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressorOutlet {
    pub temp_c: f64,
    pub pressure_pa: f64,
    /// 소요 동력(kW)
    pub work_kw: f64,
}

/// 열교환기(증발기/응축기) 출구 상태.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangerOutlet {
    pub temp_c: f64,
    /// 교환 열량(kW)
    pub heat_kw: f64,
}

/// 팽창밸브 출구 상태.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValveOutlet {
    pub temp_c: f64,
    pub pressure_pa: f64,
}

/// 사이클 전체 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HvacResult {
    pub compressor: CompressorOutlet,
    pub evaporator: ExchangerOutlet,
    pub condenser: ExchangerOutlet,
    pub expansion_valve: ValveOutlet,
    /// 성적계수 (증발기 흡열 / 압축 일)
    pub cop: Option<f64>,
}

/// 고정 압력비 압축. 등엔트로피 출구온도는 절대온도로 계산하고 효율로 보정한다.
pub fn compressor(
    mass_flow_kg_per_s: f64,
    inlet_temp_c: f64,
    inlet_pressure_pa: f64,
    efficiency: f64,
) -> CompressorOutlet {
    let outlet_pressure = inlet_pressure_pa * PRESSURE_RATIO;
    let t1_k = inlet_temp_c + 273.15;
    let t2s_k = t1_k * (outlet_pressure / inlet_pressure_pa).powf((GAMMA_AIR - 1.0) / GAMMA_AIR);
    let t2_k = t1_k + (t2s_k - t1_k) / efficiency;
    let outlet_temp_c = t2_k - 273.15;
    CompressorOutlet {
        temp_c: outlet_temp_c,
        pressure_pa: outlet_pressure,
        work_kw: mass_flow_kg_per_s * (outlet_temp_c - inlet_temp_c) * CP_AIR,
    }
}

/// 증발기: 일정 온도만큼 냉각하며 흡열한다.
pub fn evaporator(mass_flow_kg_per_s: f64, inlet_temp_c: f64) -> ExchangerOutlet {
    let outlet = inlet_temp_c - EXCHANGER_DELTA_K;
    ExchangerOutlet {
        temp_c: outlet,
        heat_kw: mass_flow_kg_per_s * (inlet_temp_c - outlet) * CP_AIR,
    }
}

/// 응축기: 일정 온도만큼 가열하며 방열한다.
pub fn condenser(mass_flow_kg_per_s: f64, inlet_temp_c: f64) -> ExchangerOutlet {
    let outlet = inlet_temp_c + EXCHANGER_DELTA_K;
    ExchangerOutlet {
        temp_c: outlet,
        heat_kw: mass_flow_kg_per_s * (outlet - inlet_temp_c) * CP_AIR,
    }
}

/// 팽창밸브: 압력 절반, 온도 5 K 강하.
pub fn expansion_valve(inlet_temp_c: f64, inlet_pressure_pa: f64) -> ValveOutlet {
    ValveOutlet {
        temp_c: inlet_temp_c - VALVE_TEMP_DROP_K,
        pressure_pa: inlet_pressure_pa * VALVE_PRESSURE_FACTOR,
    }
}

/// 압축기 → 증발기 → 응축기 → 팽창밸브 순으로 사이클을 계산한다.
pub fn compute_cycle(input: HvacInput) -> Result<HvacResult, HvacError> {
    if !input.inlet_temp_c.is_finite() || input.inlet_temp_c + 273.15 <= 0.0 {
        return Err(HvacError::InvalidInput(
            "입구 온도는 절대영도보다 높은 유한한 값이어야 합니다.",
        ));
    }
    if !(input.inlet_pressure_pa.is_finite() && input.inlet_pressure_pa > 0.0) {
        return Err(HvacError::InvalidInput("입구 압력은 0보다 커야 합니다."));
    }
    if !(input.mass_flow_kg_per_s.is_finite() && input.mass_flow_kg_per_s > 0.0) {
        return Err(HvacError::InvalidInput("질량 유량은 0보다 커야 합니다."));
    }
    if !(input.efficiency > 0.0 && input.efficiency <= 1.0) {
        return Err(HvacError::InvalidInput("효율은 0 초과 1 이하이어야 합니다."));
    }

    let m = input.mass_flow_kg_per_s;
    let comp = compressor(m, input.inlet_temp_c, input.inlet_pressure_pa, input.efficiency);
    let evap = evaporator(m, comp.temp_c);
    let cond = condenser(m, evap.temp_c);
    let valve = expansion_valve(cond.temp_c, comp.pressure_pa);

    let cop = (comp.work_kw > 0.0).then(|| evap.heat_kw / comp.work_kw);
    tracing::debug!(work_kw = comp.work_kw, cop = ?cop, "냉동사이클 계산 완료");

    Ok(HvacResult {
        compressor: comp,
        evaporator: evap,
        condenser: cond,
        expansion_valve: valve,
        cop,
    })
}
