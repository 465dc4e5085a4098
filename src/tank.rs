use serde::{Deserialize, Serialize};

use crate::calibration::data::{
    TANK1_HEIGHT_CAPACITY, TANK1_PERCENTAGE_HEIGHT, TANK2_HEIGHT_CAPACITY,
    TANK2_PERCENTAGE_HEIGHT,
};
use crate::calibration::{CalibrationTable, PercentageHeightMapping, TableError};
use crate::correction::shell::TANK2_SHELL_FACTORS;
use crate::correction::vcf_table::{VCF_DENSITIES, VCF_FACTORS, VCF_TEMPERATURES};
use crate::correction::{CorrectionFactorGrid, PressureCorrectionTable, ShellCorrectionTable};

/// 선택 가능한 탱크.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TankId {
    #[default]
    Tank1,
    Tank2,
}

impl TankId {
    pub const ALL: [TankId; 2] = [TankId::Tank1, TankId::Tank2];

    pub fn as_str(self) -> &'static str {
        match self {
            TankId::Tank1 => "tank1",
            TankId::Tank2 => "tank2",
        }
    }
}

impl std::fmt::Display for TankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TankId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tank1" | "1" => Ok(TankId::Tank1),
            "tank2" | "2" => Ok(TankId::Tank2),
            other => Err(format!("알 수 없는 탱크: {other} (tank1 또는 tank2)")),
        }
    }
}

/// 교정 성적서 정보. 표시 전용이며 계산에는 쓰지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct TankMetadata {
    pub label: &'static str,
    pub owner: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub nominal_diameter_mm: f64,
    pub cylinder_length_mm: f64,
    pub nominal_capacity_l: f64,
    /// ISO 8601 날짜
    pub calibration_date: &'static str,
    pub validity_years: u32,
    /// 종합 불확도(±%)
    pub uncertainty_percent: f64,
    pub calibration_method: &'static str,
    pub calibrated_by: &'static str,
    pub certificate_no: &'static str,
}

const TANK1_METADATA: TankMetadata = TankMetadata {
    label: "Tank 01",
    owner: "Total Energies Uganda",
    location: "Jinja, Uganda",
    description: "LPG Bullet Tank",
    nominal_diameter_mm: 2955.0,
    cylinder_length_mm: 15000.0,
    nominal_capacity_l: 98695.0,
    calibration_date: "2025-06-27",
    validity_years: 10,
    uncertainty_percent: 0.013,
    calibration_method: "API MPMS Chapter 2",
    calibrated_by: "Murban Engineering Limited",
    certificate_no: "20257001028TC-01",
};

const TANK2_METADATA: TankMetadata = TankMetadata {
    label: "Tank 02",
    owner: "Total Energies Uganda",
    location: "Jinja, Uganda",
    description: "LPG Bullet Tank",
    nominal_diameter_mm: 2422.0,
    cylinder_length_mm: 15000.0,
    nominal_capacity_l: 98682.0,
    calibration_date: "2025-06-29",
    validity_years: 10,
    uncertainty_percent: 0.012,
    calibration_method: "API MPMS Chapter 2",
    calibrated_by: "Murban Engineering Limited",
    certificate_no: "20257001028TC-02",
};

/// Tank 02 VCF 표는 28.5 °C까지만 있다.
const TANK2_VCF_ROWS: usize = 58;

/// 물리 탱크 하나의 교정 자료 묶음. 생성 후 읽기 전용이다.
#[derive(Debug, Clone)]
pub struct TankCalibrationProfile {
    pub id: TankId,
    pub calibration: CalibrationTable,
    pub correction: CorrectionFactorGrid,
    pub pressure: PressureCorrectionTable,
    pub percentage: PercentageHeightMapping,
    pub shell: Option<ShellCorrectionTable>,
    pub metadata: TankMetadata,
}

impl TankCalibrationProfile {
    /// 내장 성적서 자료로 프로파일을 만든다.
    pub fn builtin(id: TankId) -> Result<Self, TableError> {
        let profile = match id {
            TankId::Tank1 => Self {
                id,
                calibration: CalibrationTable::new(TANK1_HEIGHT_CAPACITY.to_vec())?,
                correction: CorrectionFactorGrid::from_rows(
                    &VCF_TEMPERATURES,
                    &VCF_DENSITIES,
                    &VCF_FACTORS[..],
                )?,
                pressure: PressureCorrectionTable::builtin()?,
                percentage: PercentageHeightMapping::new(TANK1_PERCENTAGE_HEIGHT.to_vec())?,
                shell: None,
                metadata: TANK1_METADATA,
            },
            TankId::Tank2 => Self {
                id,
                calibration: CalibrationTable::new(TANK2_HEIGHT_CAPACITY.to_vec())?,
                correction: CorrectionFactorGrid::from_rows(
                    &VCF_TEMPERATURES[..TANK2_VCF_ROWS],
                    &VCF_DENSITIES,
                    &VCF_FACTORS[..TANK2_VCF_ROWS],
                )?,
                pressure: PressureCorrectionTable::builtin()?,
                percentage: PercentageHeightMapping::new(TANK2_PERCENTAGE_HEIGHT.to_vec())?,
                shell: Some(ShellCorrectionTable::new(TANK2_SHELL_FACTORS)?),
                metadata: TANK2_METADATA,
            },
        };
        log::debug!(
            "{} 교정 프로파일 적재: 측정점 {}개, 최대 액위 {} mm",
            id,
            profile.calibration.points().len(),
            profile.max_height_mm()
        );
        Ok(profile)
    }

    /// 최대 액위(mm). 교정표의 마지막 측정점 높이이다.
    pub fn max_height_mm(&self) -> f64 {
        self.calibration.max_height_mm()
    }

    /// 슬라이더 눈금용 성적서 기준 레벨 `(percentage, height_mm)`.
    pub fn reference_levels(&self) -> Vec<(f64, f64)> {
        self.percentage.reference_levels()
    }
}

/// 프로세스 시작 시 한 번 적재하는 탱크 프로파일 모음.
///
/// 적재 후에는 변경하지 않으므로 여러 스레드에서 동시에 읽어도 된다.
#[derive(Debug, Clone)]
pub struct TankRegistry {
    tank1: TankCalibrationProfile,
    tank2: TankCalibrationProfile,
}

impl TankRegistry {
    pub fn builtin() -> Result<Self, TableError> {
        Ok(Self {
            tank1: TankCalibrationProfile::builtin(TankId::Tank1)?,
            tank2: TankCalibrationProfile::builtin(TankId::Tank2)?,
        })
    }

    pub fn profile(&self, id: TankId) -> &TankCalibrationProfile {
        match id {
            TankId::Tank1 => &self.tank1,
            TankId::Tank2 => &self.tank2,
        }
    }

    pub fn profiles(&self) -> impl Iterator<Item = &TankCalibrationProfile> {
        [&self.tank1, &self.tank2].into_iter()
    }
}
