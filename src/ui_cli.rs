use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, DisplaySettings};
use crate::engine::{self, CalculationResult, FillLevel, ManualEntry};
use crate::tank::{TankCalibrationProfile, TankId, TankRegistry};
use crate::units::{convert_mass, convert_volume, MassUnit, VolumeUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SelectTank,
    FillLevel,
    ManualInputs,
    Calculate,
    TankDetails,
    Settings,
    Exit,
}

/// 대화형 화면의 입력 상태. 계산 엔진은 이 값을 읽기만 한다.
#[derive(Debug, Clone)]
pub struct Session {
    pub tank: TankId,
    pub fill: Option<FillLevel>,
    pub entry: ManualEntry,
}

impl Session {
    pub fn new(tank: TankId) -> Self {
        Self {
            tank,
            fill: None,
            entry: ManualEntry::default(),
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(session: &Session) -> Result<MenuChoice, AppError> {
    println!("\n=== LPG Tank Mass Calculator [{}] ===", session.tank);
    println!("1) 탱크 선택");
    println!("2) 액위 입력 (충전률 % / 높이 mm)");
    println!("3) 제품 입력 (밀도, 온도, 압력)");
    println!("4) 계산");
    println!("5) 탱크 정보");
    println!("6) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::SelectTank),
            "2" => return Ok(MenuChoice::FillLevel),
            "3" => return Ok(MenuChoice::ManualInputs),
            "4" => return Ok(MenuChoice::Calculate),
            "5" => return Ok(MenuChoice::TankDetails),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 탱크 선택 메뉴를 처리한다. 프로파일은 바꾸지 않고 선택만 바꾼다.
pub fn handle_select_tank(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- 탱크 선택 --");
    println!("1) Tank 01  2) Tank 02");
    let sel = read_line("선택: ")?;
    match sel.trim().parse::<TankId>() {
        Ok(id) => {
            session.tank = id;
            println!("{id} 선택됨");
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// 액위 입력 메뉴를 처리하고 충전률·높이를 함께 보여준다.
pub fn handle_fill_level(session: &mut Session, registry: &TankRegistry) -> Result<(), AppError> {
    println!("\n-- 액위 입력 --");
    println!("1) 충전률(%)  2) 높이(mm)");
    let sel = read_line("선택: ")?;
    let fill = match sel.trim() {
        "1" => FillLevel::Percentage(read_f64("충전률 [%]: ")?),
        "2" => FillLevel::HeightMm(read_f64("높이 [mm]: ")?),
        _ => {
            println!("잘못된 선택입니다.");
            return Ok(());
        }
    };
    session.fill = Some(fill);
    let profile = registry.profile(session.tank);
    println!(
        "충전률 {:.2} % ↔ 높이 {:.1} mm",
        engine::resolve_percentage(profile, fill),
        engine::resolve_height(profile, fill)
    );
    Ok(())
}

/// 수동 입력란을 갱신한다. 엔터는 기존 값을 유지한다.
pub fn handle_manual_inputs(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- 제품 입력 (엔터: 유지) --");
    let entry = &mut session.entry;
    update_field(&mut entry.product_density, "제품 밀도 [kg/L]")?;
    update_field(&mut entry.product_temperature, "제품 온도 [°C]")?;
    update_field(&mut entry.shell_temperature, "셸 온도 [°C]")?;
    update_field(&mut entry.pressure, "압력 [bar]")?;
    let current = if entry.apply_pressure_correction { "y" } else { "n" };
    let answer = read_line(&format!("압력 보정 적용 (y/n) [{current}]: "))?;
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => entry.apply_pressure_correction = true,
        "n" | "no" => entry.apply_pressure_correction = false,
        _ => {}
    }
    Ok(())
}

/// 현재 입력으로 계산해 결과 또는 안내 문구를 출력한다.
pub fn handle_calculate(session: &Session, registry: &TankRegistry, config: &Config) {
    let profile = registry.profile(session.tank);
    let inputs = session.entry.to_inputs(session.fill);
    println!("\n-- 결과 [{}] --", profile.metadata.label);
    match engine::calculate(profile, &inputs, &config.engine) {
        Ok(result) => {
            for line in format_result(&result, &config.display) {
                println!("{line}");
            }
            if let Some(notice) = pcf_notice(profile, &result) {
                println!("{notice}");
            }
        }
        Err(reason) => println!("{reason}"),
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!(
        "1) 압력 보정 방식: {:?}\n2) 체적 단위: {}\n3) 질량 단위: {}\n4) 용량 반올림: {:?}\n5) 셸 보정: {:?}",
        cfg.engine.pressure_correction,
        cfg.display.volume_unit.symbol(),
        cfg.display.mass_unit.symbol(),
        cfg.engine.capacity_rounding,
        cfg.engine.shell_correction
    );
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => cfg.engine.pressure_correction = cfg.engine.pressure_correction.toggled(),
        "4" => cfg.engine.capacity_rounding = cfg.engine.capacity_rounding.toggled(),
        "5" => cfg.engine.shell_correction = cfg.engine.shell_correction.toggled(),
        "2" => {
            println!("1=L 2=m³ 3=US gal");
            cfg.display.volume_unit = match read_line("선택: ")?.trim() {
                "2" => VolumeUnit::CubicMeter,
                "3" => VolumeUnit::UsGallon,
                _ => VolumeUnit::Liter,
            };
        }
        "3" => {
            println!("1=kg 2=t 3=lb");
            cfg.display.mass_unit = match read_line("선택: ")?.trim() {
                "2" => MassUnit::MetricTon,
                "3" => MassUnit::Pound,
                _ => MassUnit::Kilogram,
            };
        }
        _ => {
            println!("잘못된 입력이므로 변경하지 않습니다.");
            return Ok(());
        }
    }
    println!("설정을 변경했습니다.");
    Ok(())
}

/// 계산 결과를 표시 설정에 맞춰 줄 단위 문자열로 만든다.
pub fn format_result(result: &CalculationResult, display: &DisplaySettings) -> Vec<String> {
    let vd = display.volume_decimals;
    let fd = display.factor_decimals;
    let md = display.mass_decimals;
    let vol = |liters: f64| convert_volume(liters, VolumeUnit::Liter, display.volume_unit);
    let v_sym = display.volume_unit.symbol();
    vec![
        format!(
            "액위: {:.1} mm ({:.2} %)",
            result.height_mm, result.fill_percentage
        ),
        format!("기준 체적: {:.vd$} {v_sym}", vol(result.reference_volume)),
        format!("VCF: {:.fd$}", result.vcf),
        format!("SCF: {:.fd$}", result.scf),
        format!("PCF: {:.fd$}", result.pcf),
        format!("보정 체적: {:.vd$} {v_sym}", vol(result.corrected_volume)),
        format!("밀도: {:.4} kg/L", result.density),
        format!(
            "질량: {:.md$} {}",
            convert_mass(result.mass, MassUnit::Kilogram, display.mass_unit),
            display.mass_unit.symbol()
        ),
    ]
}

/// PCF를 적용했지만 압력이 표에 없어 1.0이 쓰였을 때의 안내 문구.
pub fn pcf_notice(profile: &TankCalibrationProfile, result: &CalculationResult) -> Option<String> {
    let pressure = result.pressure_bar?;
    if profile.pressure.covers(pressure) {
        return None;
    }
    let range = match profile.pressure.pressure_range() {
        Some((lo, hi)) => format!("{lo}~{hi} bar"),
        None => "비어 있음".to_string(),
    };
    Some(format!(
        "참고: 압력 {pressure} bar는 PCF 표({range})에 없어 PCF 1.0을 적용했습니다."
    ))
}

/// 액위 변환 결과를 출력한다.
pub fn print_level(profile: &TankCalibrationProfile, height_mm: f64, config: &Config) {
    let h = height_mm.clamp(0.0, profile.max_height_mm());
    let capacity = profile
        .calibration
        .capacity_at(h, config.engine.capacity_rounding);
    let display = &config.display;
    println!("[{}] {}", profile.id, profile.metadata.label);
    println!("높이: {h:.1} mm");
    println!(
        "충전률: {:.2} %",
        profile.percentage.percentage_from_height(h)
    );
    println!(
        "용량: {:.prec$} {}",
        convert_volume(capacity, VolumeUnit::Liter, display.volume_unit),
        display.volume_unit.symbol(),
        prec = display.volume_decimals
    );
}

/// 성적서 정보와 기준 레벨을 출력한다.
pub fn print_tank_details(profile: &TankCalibrationProfile, config: &Config) {
    let m = &profile.metadata;
    let (t_min, t_max) = profile.correction.temperature_range();
    let (d_min, d_max) = profile.correction.density_range();
    println!("\n-- {} ({}) --", m.label, profile.id);
    println!("소유자: {}", m.owner);
    println!("위치: {}", m.location);
    println!("형식: {}", m.description);
    println!("공칭 직경: {} mm", m.nominal_diameter_mm);
    println!("동체 길이: {} mm", m.cylinder_length_mm);
    println!(
        "공칭 용량: {} {}",
        convert_volume(m.nominal_capacity_l, VolumeUnit::Liter, config.display.volume_unit),
        config.display.volume_unit.symbol()
    );
    println!("교정일: {} (유효 {}년)", m.calibration_date, m.validity_years);
    println!("종합 불확도: ±{}%", m.uncertainty_percent);
    println!("교정 방법: {} / {}", m.calibration_method, m.calibrated_by);
    println!("성적서 번호: {}", m.certificate_no);
    println!("VCF 표 범위: {t_min}~{t_max} °C, {d_min:.3}~{d_max:.3} kg/L");
    println!("PCF 표:");
    for (bar, factor) in profile.pressure.entries() {
        println!("  {bar} bar → {factor:.6}");
    }
    if profile.shell.is_some() {
        println!("셸 보정표: 있음");
    }
    println!("기준 레벨:");
    for (pct, height) in profile.reference_levels() {
        println!("  {pct}% → {height} mm");
    }
    println!("  최대 → {} mm", profile.max_height_mm());
}

fn update_field(field: &mut String, label: &str) -> Result<(), AppError> {
    let input = read_line(&format!("{label} [{field}]: "))?;
    let trimmed = input.trim();
    if !trimmed.is_empty() {
        if engine::parse_field(trimmed).is_none() {
            println!("숫자가 아니므로 계산 시 안내 메시지가 표시됩니다.");
        }
        *field = trimmed.to_string();
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let read = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "입력이 종료되었습니다",
        )));
    }
    Ok(buf)
}

fn read_f64(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match engine::parse_field(&s) {
            Some(v) => return Ok(v),
            None => println!("숫자를 입력하세요."),
        }
    }
}
