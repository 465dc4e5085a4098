//! 액위 → 기준 체적 → 보정 체적 → 질량 계산 엔진.
//!
//! 상태를 갖지 않는 순수 함수이며, 입력이 유효하지 않으면 NaN 대신
//! [`NotComputable`]을 돌려준다. UI는 결과 타입으로 분기해 결과 패널 또는
//! 안내 메시지를 그린다.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calibration::CapacityRounding;
use crate::correction::ShellCorrection;
use crate::tank::TankCalibrationProfile;

/// 액위 입력. 슬라이더(%)와 높이 입력란(mm) 중 어느 쪽이 갱신을 일으켰는지 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillLevel {
    Percentage(f64),
    HeightMm(f64),
}

impl FillLevel {
    fn value(self) -> f64 {
        match self {
            FillLevel::Percentage(v) | FillLevel::HeightMm(v) => v,
        }
    }
}

/// 한 번의 계산에 필요한 입력. 빈 칸이나 해석 불가 입력은 `None`이다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationInputs {
    /// `None`이면 게이지 위치가 아직 정해지지 않은 상태
    pub fill: Option<FillLevel>,
    /// 제품 밀도(kg/L)
    pub product_density: Option<f64>,
    /// 제품 온도(°C)
    pub product_temperature: Option<f64>,
    /// 셸 온도(°C)
    pub shell_temperature: Option<f64>,
    /// 탱크 압력(bar)
    pub pressure: Option<f64>,
    /// 압력 보정 체크박스
    pub apply_pressure_correction: bool,
}

/// 계산 화면 입력란의 원문. UI 폼 상태를 그대로 담는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualEntry {
    pub product_density: String,
    pub product_temperature: String,
    pub shell_temperature: String,
    pub pressure: String,
    pub apply_pressure_correction: bool,
}

impl Default for ManualEntry {
    fn default() -> Self {
        Self {
            product_density: "0.55".into(),
            product_temperature: "20".into(),
            shell_temperature: "20".into(),
            pressure: "17".into(),
            apply_pressure_correction: false,
        }
    }
}

impl ManualEntry {
    /// 입력란을 해석해 계산 입력을 만든다. 해석할 수 없는 칸은 `None`이 된다.
    pub fn to_inputs(&self, fill: Option<FillLevel>) -> CalculationInputs {
        CalculationInputs {
            fill,
            product_density: parse_field(&self.product_density),
            product_temperature: parse_field(&self.product_temperature),
            shell_temperature: parse_field(&self.shell_temperature),
            pressure: parse_field(&self.pressure),
            apply_pressure_correction: self.apply_pressure_correction,
        }
    }
}

/// 숫자 입력란 하나를 해석한다. 공백을 무시하고 `,` 소수점도 받는다.
pub fn parse_field(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// PCF 적용 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureCorrectionMode {
    /// 체크박스가 켜진 경우에만 적용
    #[default]
    Gated,
    /// 압력이 입력되면 항상 적용
    Always,
}

impl PressureCorrectionMode {
    /// 설정 메뉴에서 다른 방식으로 전환한다.
    pub fn toggled(self) -> Self {
        match self {
            PressureCorrectionMode::Gated => PressureCorrectionMode::Always,
            PressureCorrectionMode::Always => PressureCorrectionMode::Gated,
        }
    }
}

/// 엔진 설정.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub pressure_correction: PressureCorrectionMode,
    pub capacity_rounding: CapacityRounding,
    pub shell_correction: ShellCorrection,
}

/// 계산 결과. 모든 값은 파생값이며 저장하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// 확정된 액위(mm)
    pub height_mm: f64,
    /// 확정된 충전률(%)
    pub fill_percentage: f64,
    /// 교정표 기준 체적(L)
    pub reference_volume: f64,
    pub vcf: f64,
    pub scf: f64,
    pub pcf: f64,
    /// PCF 조회에 쓴 압력(bar). PCF를 적용하지 않았으면 `None`
    pub pressure_bar: Option<f64>,
    /// 보정 체적(L)
    pub corrected_volume: f64,
    /// 제품 밀도(kg/L)
    pub density: f64,
    /// 질량(kg)
    pub mass: f64,
}

/// 계산할 수 없는 입력 상태. 각 변형은 사용자 안내 문구를 갖는다.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NotComputable {
    #[error("게이지 위치가 정해지지 않았습니다. 충전률 또는 액위(mm)를 입력하세요.")]
    NoGaugePosition,
    #[error("액위 값이 숫자가 아닙니다. 유효한 충전률 또는 액위(mm)를 입력하세요.")]
    InvalidFillLevel,
    #[error("제품 밀도를 입력하세요 (kg/L, 0보다 커야 함).")]
    MissingDensity,
    #[error("제품 밀도 {0} kg/L는 유효하지 않습니다. 0보다 큰 값을 입력하세요.")]
    InvalidDensity(f64),
    #[error("제품 온도(°C)를 숫자로 입력하세요.")]
    InvalidTemperature,
    #[error("압력 보정을 적용하려면 압력(bar)을 숫자로 입력하세요.")]
    InvalidPressure,
    #[error("셸 보정을 적용하려면 셸 온도(°C)를 숫자로 입력하세요.")]
    InvalidShellTemperature,
}

/// 액위 입력을 높이(mm)로 확정한다. 범위 밖 값은 클램프된다.
pub fn resolve_height(profile: &TankCalibrationProfile, fill: FillLevel) -> f64 {
    match fill {
        FillLevel::Percentage(pct) => profile.percentage.height_from_percentage(pct),
        FillLevel::HeightMm(h) => h.clamp(0.0, profile.max_height_mm()),
    }
}

/// 액위 입력을 충전률(%)로 확정한다. 범위 밖 값은 클램프된다.
pub fn resolve_percentage(profile: &TankCalibrationProfile, fill: FillLevel) -> f64 {
    match fill {
        FillLevel::Percentage(pct) => pct.clamp(0.0, 100.0),
        FillLevel::HeightMm(h) => profile.percentage.percentage_from_height(h),
    }
}

/// 레벨 변환 명령의 입력을 높이(mm)로 확정한다.
///
/// 용량이 주어지면 교정표를 역보간하고, 아니면 액위 입력을 쓴다. 둘 다 없으면
/// 빈 탱크(0 mm)와 구분하기 위해 [`NotComputable::NoGaugePosition`]이다.
pub fn level_height(
    profile: &TankCalibrationProfile,
    capacity_l: Option<f64>,
    fill: Option<FillLevel>,
) -> Result<f64, NotComputable> {
    match (capacity_l, fill) {
        (Some(c), _) if !c.is_finite() => Err(NotComputable::InvalidFillLevel),
        (Some(c), _) => Ok(profile.calibration.height_from_capacity(c)),
        (None, Some(fill)) if !fill.value().is_finite() => Err(NotComputable::InvalidFillLevel),
        (None, Some(fill)) => Ok(resolve_height(profile, fill)),
        (None, None) => Err(NotComputable::NoGaugePosition),
    }
}

fn require_finite(value: Option<f64>, err: NotComputable) -> Result<f64, NotComputable> {
    value.filter(|v| v.is_finite()).ok_or(err)
}

/// 보정 체적과 질량을 계산한다.
///
/// 단계: 액위 확정 → 기준 체적 → VCF → PCF → SCF →
/// `보정 체적 = 기준 체적 × VCF × PCF × SCF` → `질량 = 보정 체적 × 밀도`.
pub fn calculate(
    profile: &TankCalibrationProfile,
    inputs: &CalculationInputs,
    options: &EngineOptions,
) -> Result<CalculationResult, NotComputable> {
    let fill = inputs.fill.ok_or(NotComputable::NoGaugePosition)?;
    if !fill.value().is_finite() {
        return Err(NotComputable::InvalidFillLevel);
    }
    let density = inputs
        .product_density
        .ok_or(NotComputable::MissingDensity)?;
    if !density.is_finite() || density <= 0.0 {
        return Err(NotComputable::InvalidDensity(density));
    }
    let temperature =
        require_finite(inputs.product_temperature, NotComputable::InvalidTemperature)?;

    let pressure = match options.pressure_correction {
        PressureCorrectionMode::Gated if inputs.apply_pressure_correction => Some(
            require_finite(inputs.pressure, NotComputable::InvalidPressure)?,
        ),
        PressureCorrectionMode::Gated => None,
        PressureCorrectionMode::Always => inputs
            .pressure
            .map(|p| require_finite(Some(p), NotComputable::InvalidPressure))
            .transpose()?,
    };

    let shell_table = options.shell_correction.uses_table(profile.shell.as_ref());
    let shell_temperature = match shell_table {
        Some(_) => Some(require_finite(
            inputs.shell_temperature,
            NotComputable::InvalidShellTemperature,
        )?),
        None => None,
    };

    let height_mm = resolve_height(profile, fill);
    let fill_percentage = resolve_percentage(profile, fill);
    match fill {
        FillLevel::HeightMm(h) if h != height_mm => {
            log::warn!("{}: 액위 {h} mm를 {height_mm} mm로 클램프", profile.id);
        }
        FillLevel::Percentage(pct) if pct != fill_percentage => {
            log::warn!("{}: 충전률 {pct} %를 {fill_percentage} %로 클램프", profile.id);
        }
        _ => {}
    }

    let reference_volume = profile
        .calibration
        .capacity_at(height_mm, options.capacity_rounding);
    log::debug!("{}: 액위 {height_mm:.2} mm → 기준 체적 {reference_volume} L", profile.id);

    let (t_min, t_max) = profile.correction.temperature_range();
    let (d_min, d_max) = profile.correction.density_range();
    if !(t_min..=t_max).contains(&temperature) || !(d_min..=d_max).contains(&density) {
        log::warn!(
            "{}: VCF 표 범위({t_min}~{t_max} °C, {d_min}~{d_max} kg/L) 밖 입력 → 가장자리 값 사용",
            profile.id
        );
    }
    let vcf = profile.correction.factor_at(temperature, density);

    let pcf = pressure.map_or(1.0, |p| profile.pressure.factor_at(p));
    if let Some(p) = pressure.filter(|p| !profile.pressure.covers(*p)) {
        log::warn!("{}: 압력 {p} bar는 PCF 표에 없어 1.0 적용", profile.id);
    }
    let scf = match (shell_table, shell_temperature) {
        (Some(table), Some(t)) => table.factor_at(t),
        _ => 1.0,
    };
    log::debug!("{}: VCF={vcf:.6} PCF={pcf:.6} SCF={scf:.6}", profile.id);

    let corrected_volume = reference_volume * vcf * pcf * scf;
    let mass = corrected_volume * density;

    Ok(CalculationResult {
        height_mm,
        fill_percentage,
        reference_volume,
        vcf,
        scf,
        pcf,
        pressure_bar: pressure,
        corrected_volume,
        density,
        mass,
    })
}
