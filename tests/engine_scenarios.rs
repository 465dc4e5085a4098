//! 계산 엔진 시나리오 테스트: 액위 → 기준 체적 → 보정계수 → 질량.
use lpg_tank_calculator::calibration::CapacityRounding;
use lpg_tank_calculator::config::DisplaySettings;
use lpg_tank_calculator::correction::ShellCorrection;
use lpg_tank_calculator::engine::{
    calculate, level_height, parse_field, resolve_height, resolve_percentage, CalculationInputs,
    EngineOptions, FillLevel, ManualEntry, NotComputable, PressureCorrectionMode,
};
use lpg_tank_calculator::tank::{TankId, TankRegistry};
use lpg_tank_calculator::ui_cli::{format_result, pcf_notice};
use lpg_tank_calculator::units::{MassUnit, VolumeUnit};

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {tol})"
    );
}

fn registry() -> TankRegistry {
    TankRegistry::builtin().expect("builtin tables")
}

fn inputs(fill: FillLevel) -> CalculationInputs {
    CalculationInputs {
        fill: Some(fill),
        product_density: Some(0.55),
        product_temperature: Some(20.0),
        shell_temperature: Some(20.0),
        pressure: Some(20.0),
        apply_pressure_correction: true,
    }
}

#[test]
fn full_tank_at_reference_conditions() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank1);
    for fill in [FillLevel::HeightMm(2954.0), FillLevel::Percentage(100.0)] {
        let r = calculate(profile, &inputs(fill), &EngineOptions::default()).expect("computable");
        assert_eq!(r.height_mm, 2954.0);
        assert_eq!(r.fill_percentage, 100.0);
        assert_eq!(r.reference_volume, 98695.0);
        assert_eq!((r.vcf, r.pcf, r.scf), (1.0, 1.0, 1.0));
        assert_eq!(r.corrected_volume, 98695.0);
        assert_close("mass", r.mass, 54282.25, 1e-6);
    }
}

#[test]
fn empty_tank_is_a_valid_zero_result() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank2);
    let r = calculate(
        profile,
        &inputs(FillLevel::Percentage(0.0)),
        &EngineOptions::default(),
    )
    .expect("zero fill is computable");
    assert_eq!(r.height_mm, 0.0);
    assert_eq!(r.reference_volume, 0.0);
    assert_eq!(r.corrected_volume, 0.0);
    assert_eq!(r.mass, 0.0);
}

#[test]
fn mid_level_reading_uses_interpolated_capacity_and_vcf() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank1);
    let mut i = inputs(FillLevel::HeightMm(75.0));
    i.product_density = Some(0.5);
    i.product_temperature = Some(0.0);
    let r = calculate(profile, &i, &EngineOptions::default()).expect("computable");
    assert_eq!(r.reference_volume, 643.0);
    assert_eq!(r.vcf, 1.070);
    assert_close("corrected", r.corrected_volume, 643.0 * 1.070, 1e-9);
    assert_close("mass", r.mass, 643.0 * 1.070 * 0.5, 1e-9);
}

#[test]
fn exact_capacity_rounding_keeps_fraction() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank1);
    let i = inputs(FillLevel::HeightMm(60.0));
    let rounded = calculate(profile, &i, &EngineOptions::default()).expect("computable");
    assert_eq!(rounded.reference_volume, 458.0);

    let options = EngineOptions {
        capacity_rounding: CapacityRounding::Exact,
        ..EngineOptions::default()
    };
    let exact = calculate(profile, &i, &options).expect("computable");
    assert_close("exact", exact.reference_volume, 457.6, 1e-9);
}

#[test]
fn percentage_fill_resolves_through_anchor_mapping() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank1);
    let r = calculate(
        profile,
        &inputs(FillLevel::Percentage(5.0)),
        &EngineOptions::default(),
    )
    .expect("computable");
    assert_eq!(r.height_mm, 154.45);
    assert_eq!(r.fill_percentage, 5.0);
    assert_eq!(
        r.reference_volume,
        profile.calibration.capacity_from_height(154.45)
    );
}

#[test]
fn out_of_range_heights_are_clamped() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank1);
    let high = calculate(
        profile,
        &inputs(FillLevel::HeightMm(5000.0)),
        &EngineOptions::default(),
    )
    .expect("computable");
    assert_eq!(high.height_mm, 2954.0);
    assert_eq!(high.fill_percentage, 100.0);
    assert_eq!(high.reference_volume, 98695.0);

    let low = calculate(
        profile,
        &inputs(FillLevel::HeightMm(-10.0)),
        &EngineOptions::default(),
    )
    .expect("computable");
    assert_eq!(low.height_mm, 0.0);
    assert_eq!(low.reference_volume, 0.0);

    assert_eq!(resolve_height(profile, FillLevel::Percentage(120.0)), 2954.0);
    assert_eq!(resolve_percentage(profile, FillLevel::Percentage(-3.0)), 0.0);
}

#[test]
fn missing_or_invalid_inputs_are_not_computable() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank1);
    let options = EngineOptions::default();
    let base = inputs(FillLevel::HeightMm(1500.0));

    let mut i = base.clone();
    i.fill = None;
    assert_eq!(calculate(profile, &i, &options), Err(NotComputable::NoGaugePosition));

    let mut i = base.clone();
    i.fill = Some(FillLevel::HeightMm(f64::NAN));
    assert_eq!(calculate(profile, &i, &options), Err(NotComputable::InvalidFillLevel));

    let mut i = base.clone();
    i.product_density = None;
    assert_eq!(calculate(profile, &i, &options), Err(NotComputable::MissingDensity));

    let mut i = base.clone();
    i.product_density = Some(0.0);
    assert_eq!(
        calculate(profile, &i, &options),
        Err(NotComputable::InvalidDensity(0.0))
    );

    let mut i = base.clone();
    i.product_density = Some(-0.5);
    assert!(matches!(
        calculate(profile, &i, &options),
        Err(NotComputable::InvalidDensity(_))
    ));

    let mut i = base.clone();
    i.product_temperature = None;
    assert_eq!(
        calculate(profile, &i, &options),
        Err(NotComputable::InvalidTemperature)
    );

    let mut i = base;
    i.pressure = None;
    assert_eq!(calculate(profile, &i, &options), Err(NotComputable::InvalidPressure));
}

#[test]
fn not_computable_reasons_are_user_readable() {
    assert!(NotComputable::MissingDensity.to_string().contains("밀도"));
    assert!(NotComputable::InvalidDensity(-1.0).to_string().contains("-1"));
    assert!(NotComputable::NoGaugePosition.to_string().contains("mm"));
}

#[test]
fn gated_pressure_correction_follows_checkbox() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank1);
    let mut i = inputs(FillLevel::HeightMm(1500.0));
    i.pressure = Some(17.0);

    i.apply_pressure_correction = false;
    let off = calculate(profile, &i, &EngineOptions::default()).expect("computable");
    assert_eq!(off.pcf, 1.0);

    i.apply_pressure_correction = true;
    let on = calculate(profile, &i, &EngineOptions::default()).expect("computable");
    assert_eq!(on.pcf, 0.999934);
    assert_close(
        "corrected",
        on.corrected_volume,
        50346.0 * 0.999934,
        1e-9,
    );

    // 체크박스가 꺼져 있으면 빈 압력도 문제 삼지 않는다
    i.apply_pressure_correction = false;
    i.pressure = None;
    assert!(calculate(profile, &i, &EngineOptions::default()).is_ok());
}

#[test]
fn always_mode_applies_any_entered_pressure() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank1);
    let options = EngineOptions {
        pressure_correction: PressureCorrectionMode::Always,
        ..EngineOptions::default()
    };
    let mut i = inputs(FillLevel::HeightMm(1500.0));
    i.apply_pressure_correction = false;
    i.pressure = Some(17.0);
    assert_eq!(calculate(profile, &i, &options).expect("ok").pcf, 0.999934);

    i.pressure = Some(30.0);
    assert_eq!(calculate(profile, &i, &options).expect("ok").pcf, 1.0);

    i.pressure = None;
    assert_eq!(calculate(profile, &i, &options).expect("ok").pcf, 1.0);

    i.pressure = Some(f64::INFINITY);
    assert_eq!(calculate(profile, &i, &options), Err(NotComputable::InvalidPressure));
}

#[test]
fn shell_correction_defaults_to_identity() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank2);
    let mut i = inputs(FillLevel::HeightMm(1500.0));
    i.shell_temperature = None;
    let r = calculate(profile, &i, &EngineOptions::default()).expect("computable");
    assert_eq!(r.scf, 1.0);
    assert_eq!(r.reference_volume, 50208.0);
}

#[test]
fn certificate_shell_table_applies_only_where_available() {
    let reg = registry();
    let options = EngineOptions {
        shell_correction: ShellCorrection::CertificateTable,
        ..EngineOptions::default()
    };
    let mut i = inputs(FillLevel::HeightMm(1500.0));
    i.shell_temperature = Some(15.0);

    let t2 = calculate(reg.profile(TankId::Tank2), &i, &options).expect("computable");
    assert_eq!(t2.scf, 0.999890);
    assert_close("corrected", t2.corrected_volume, 50208.0 * 0.999890, 1e-9);

    let t1 = calculate(reg.profile(TankId::Tank1), &i, &options).expect("computable");
    assert_eq!(t1.scf, 1.0);

    i.shell_temperature = None;
    assert_eq!(
        calculate(reg.profile(TankId::Tank2), &i, &options),
        Err(NotComputable::InvalidShellTemperature)
    );
    assert!(calculate(reg.profile(TankId::Tank1), &i, &options).is_ok());
}

#[test]
fn parse_field_accepts_common_entry_forms() {
    assert_eq!(parse_field("0,55"), Some(0.55));
    assert_eq!(parse_field(" 20 "), Some(20.0));
    assert_eq!(parse_field("-1.5"), Some(-1.5));
    assert_eq!(parse_field(""), None);
    assert_eq!(parse_field("   "), None);
    assert_eq!(parse_field("abc"), None);
    assert_eq!(parse_field("inf"), None);
    assert_eq!(parse_field("NaN"), None);
}

#[test]
fn manual_entry_defaults_are_computable() {
    let reg = registry();
    let entry = ManualEntry::default();
    let i = entry.to_inputs(Some(FillLevel::Percentage(50.0)));
    assert_eq!(i.product_density, Some(0.55));
    assert_eq!(i.pressure, Some(17.0));
    assert!(!i.apply_pressure_correction);
    let r = calculate(reg.profile(TankId::Tank1), &i, &EngineOptions::default())
        .expect("computable");
    assert_eq!(r.vcf, 1.0);
    assert_eq!(r.pcf, 1.0);

    let blank = ManualEntry {
        product_density: String::new(),
        ..ManualEntry::default()
    };
    assert_eq!(
        calculate(
            reg.profile(TankId::Tank1),
            &blank.to_inputs(Some(FillLevel::Percentage(50.0))),
            &EngineOptions::default()
        ),
        Err(NotComputable::MissingDensity)
    );
}

#[test]
fn result_lines_follow_display_settings() {
    let reg = registry();
    let r = calculate(
        reg.profile(TankId::Tank1),
        &inputs(FillLevel::HeightMm(2954.0)),
        &EngineOptions::default(),
    )
    .expect("computable");

    let lines = format_result(&r, &DisplaySettings::default());
    assert!(lines.iter().any(|l| l.contains("98695.000 L")), "{lines:?}");
    assert!(lines.iter().any(|l| l == "VCF: 1.000000"), "{lines:?}");
    assert!(lines.iter().any(|l| l.contains("54282.25 kg")), "{lines:?}");

    let metric = DisplaySettings {
        volume_unit: VolumeUnit::CubicMeter,
        mass_unit: MassUnit::MetricTon,
        ..DisplaySettings::default()
    };
    let lines = format_result(&r, &metric);
    assert!(lines.iter().any(|l| l.contains("98.695 m³")), "{lines:?}");
    assert!(lines.iter().any(|l| l.contains("54.28 t")), "{lines:?}");
}

#[test]
fn out_of_range_percentage_is_clamped_to_full() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank2);
    let r = calculate(
        profile,
        &inputs(FillLevel::Percentage(130.0)),
        &EngineOptions::default(),
    )
    .expect("computable");
    assert_eq!(r.fill_percentage, 100.0);
    assert_eq!(r.height_mm, 2960.0);
    assert_eq!(r.reference_volume, 98682.0);
}

#[test]
fn level_conversion_requires_a_reading() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank1);
    assert_eq!(
        level_height(profile, None, None),
        Err(NotComputable::NoGaugePosition)
    );
    assert_eq!(
        level_height(profile, None, Some(FillLevel::HeightMm(f64::NAN))),
        Err(NotComputable::InvalidFillLevel)
    );
    assert_eq!(
        level_height(profile, None, Some(FillLevel::Percentage(f64::INFINITY))),
        Err(NotComputable::InvalidFillLevel)
    );
    assert_eq!(
        level_height(profile, Some(f64::NAN), None),
        Err(NotComputable::InvalidFillLevel)
    );

    assert_eq!(level_height(profile, None, Some(FillLevel::HeightMm(0.0))), Ok(0.0));
    assert_eq!(
        level_height(profile, None, Some(FillLevel::Percentage(5.0))),
        Ok(154.45)
    );
    let from_capacity = level_height(profile, Some(643.0), None).expect("finite capacity");
    assert_close("643 L", from_capacity, 75.0, 1e-9);
}

#[test]
fn pressure_outside_pcf_table_is_reported() {
    let reg = registry();
    let profile = reg.profile(TankId::Tank1);
    let mut i = inputs(FillLevel::HeightMm(1500.0));

    i.pressure = Some(30.0);
    let r = calculate(profile, &i, &EngineOptions::default()).expect("computable");
    assert_eq!(r.pcf, 1.0);
    assert_eq!(r.pressure_bar, Some(30.0));
    let notice = pcf_notice(profile, &r).expect("notice for uncovered pressure");
    assert!(notice.contains("15~24 bar"), "{notice}");

    i.pressure = Some(17.0);
    let r = calculate(profile, &i, &EngineOptions::default()).expect("computable");
    assert!(pcf_notice(profile, &r).is_none());

    i.apply_pressure_correction = false;
    i.pressure = Some(30.0);
    let r = calculate(profile, &i, &EngineOptions::default()).expect("computable");
    assert_eq!(r.pressure_bar, None);
    assert!(pcf_notice(profile, &r).is_none());
}
