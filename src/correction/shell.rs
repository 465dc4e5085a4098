use serde::{Deserialize, Serialize};

use super::step_table::StepFactorTable;
use crate::calibration::TableError;

/// Tank 02 성적서의 셸 보정계수. 셸 온도(°C, 정수) → SCF.
pub const TANK2_SHELL_FACTORS: &[(i32, f64)] = &[
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

/// 셸 보정(SCF) 적용 방식.
///
/// 기본값은 항등(1.0)이다. 셸 온도는 입력받지만 실제 보정식은 아직 없다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellCorrection {
    /// SCF = 1.0
    #[default]
    Identity,
    /// 탱크 프로파일의 셸 보정표를 조회한다. 표가 없는 탱크는 1.0.
    CertificateTable,
}

/// 셸 온도(°C) → SCF 이산 표. 조회 규칙은 PCF와 같다.
#[derive(Debug, Clone)]
pub struct ShellCorrectionTable {
    table: StepFactorTable,
}

impl ShellCorrectionTable {
    pub fn new(entries: &[(i32, f64)]) -> Result<Self, TableError> {
        Ok(Self {
            table: StepFactorTable::new("scf", entries)?,
        })
    }

    pub fn factor_at(&self, shell_temperature_c: f64) -> f64 {
        self.table.factor_at(shell_temperature_c)
    }
}

impl ShellCorrection {
    pub fn toggled(self) -> Self {
        match self {
            ShellCorrection::Identity => ShellCorrection::CertificateTable,
            ShellCorrection::CertificateTable => ShellCorrection::Identity,
        }
    }

    /// 이 방식이 셸 온도 입력을 실제로 사용하는지 여부.
    pub fn uses_table<'a>(
        self,
        table: Option<&'a ShellCorrectionTable>,
    ) -> Option<&'a ShellCorrectionTable> {
        match self {
            ShellCorrection::Identity => None,
            ShellCorrection::CertificateTable => table,
        }
    }
}
