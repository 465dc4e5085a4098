use super::step_table::StepFactorTable;
use crate::calibration::TableError;

/// 성적서 압력보정계수. 압력(bar, 정수) → PCF.
pub const PRESSURE_FACTORS: &[(i32, f64)] = &[
    (15, 0.999890),
    (16, 0.999912),
    (17, 0.999934),
    (18, 0.999956),
    (19, 0.999978),
    (20, 1.000000),
    (21, 1.000022),
    (22, 1.000044),
    (23, 1.000066),
    (24, 1.000088),
];

/// 압력보정계수(PCF) 표.
///
/// 압력을 정수 bar로 반올림해 정확히 일치하는 항목만 쓴다. 표에 없는 압력은
/// 오류가 아니라 중립 계수 1.0으로 처리한다.
// TODO: 성적서에 1 bar보다 촘촘한 압력 단계가 추가되면 VCF처럼 선형 보간으로 바꾼다.
#[derive(Debug, Clone)]
pub struct PressureCorrectionTable {
    table: StepFactorTable,
}

impl PressureCorrectionTable {
    pub fn new(entries: &[(i32, f64)]) -> Result<Self, TableError> {
        Ok(Self {
            table: StepFactorTable::new("pcf", entries)?,
        })
    }

    /// 내장 성적서 표(15~24 bar).
    pub fn builtin() -> Result<Self, TableError> {
        Self::new(PRESSURE_FACTORS)
    }

    /// 압력(bar)의 PCF. 표 범위 밖이면 1.0.
    pub fn factor_at(&self, pressure_bar: f64) -> f64 {
        self.table.factor_at(pressure_bar)
    }

    /// 표에 정의된 압력 범위 `(최소, 최대)` bar.
    pub fn pressure_range(&self) -> Option<(i32, i32)> {
        self.table.key_range()
    }

    /// 압력이 표에 있는지 여부.
    pub fn covers(&self, pressure_bar: f64) -> bool {
        self.table.lookup(pressure_bar).is_some()
    }

    pub fn entries(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.table.entries()
    }
}
