//! VCF 격자 쌍선형 보간, PCF/SCF 이산 표 조회 테스트.
use lpg_tank_calculator::calibration::TableError;
use lpg_tank_calculator::correction::step_table::StepFactorTable;
use lpg_tank_calculator::correction::vcf_table::{VCF_DENSITIES, VCF_FACTORS, VCF_TEMPERATURES};
use lpg_tank_calculator::correction::{CorrectionFactorGrid, PressureCorrectionTable};
use lpg_tank_calculator::tank::{TankId, TankRegistry};

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

#[test]
fn vcf_is_unity_at_reference_temperature() {
    let reg = registry();
    for profile in reg.profiles() {
        for &d in profile.correction.densities() {
            assert_eq!(profile.correction.factor_at(20.0, d), 1.0, "{} d={d}", profile.id);
        }
    }
}

#[test]
fn vcf_returns_tabulated_values_on_grid_points() {
    let reg = registry();
    let grid = &reg.profile(TankId::Tank1).correction;
    for (ti, &t) in VCF_TEMPERATURES.iter().enumerate() {
        for (di, &d) in VCF_DENSITIES.iter().enumerate() {
            assert_eq!(grid.factor_at(t, d), VCF_FACTORS[ti][di], "t={t} d={d}");
        }
    }
    assert_eq!(grid.factor_at(0.0, 0.5), 1.070);
    assert_eq!(grid.factor_at(15.0, 0.55), 1.012);
    assert_eq!(grid.factor_at(30.0, 0.59), 0.980);
}

#[test]
fn vcf_interpolates_single_axis() {
    let reg = registry();
    let grid = &reg.profile(TankId::Tank1).correction;
    // 0 °C 행: 0.500 → 1.070, 0.510 → 1.065
    assert_close("density only", grid.factor_at(0.0, 0.505), 1.0675, 1e-9);
    // 0.500 열: 0 °C → 1.070, 0.5 °C → 1.068
    assert_close("temperature only", grid.factor_at(0.25, 0.5), 1.069, 1e-9);
}

#[test]
fn vcf_interpolates_bilinearly() {
    let reg = registry();
    let grid = &reg.profile(TankId::Tank1).correction;
    // (1.0675 + 1.0655) / 2
    assert_close("bilinear", grid.factor_at(0.25, 0.505), 1.0665, 1e-9);
    // 20.5 °C 행과 21.0 °C 행 사이, 0.540~0.550 열 사이
    let lower = 0.999 + (0.999 - 0.999) * 0.5;
    let upper = 0.997 + (0.998 - 0.997) * 0.5;
    assert_close(
        "bilinear mid",
        grid.factor_at(20.75, 0.545),
        lower + (upper - lower) * 0.5,
        1e-6,
    );
}

#[test]
fn vcf_is_rounded_to_six_decimals() {
    let reg = registry();
    let grid = &reg.profile(TankId::Tank1).correction;
    let v = grid.factor_at(7.3, 0.537);
    let scaled = v * 1e6;
    assert!((scaled - scaled.round()).abs() < 1e-6, "vcf={v}");
}

#[test]
fn vcf_clamps_to_each_profile_range() {
    let reg = registry();
    let t1 = &reg.profile(TankId::Tank1).correction;
    let t2 = &reg.profile(TankId::Tank2).correction;
    assert_eq!(t1.temperature_range(), (0.0, 30.0));
    assert_eq!(t2.temperature_range(), (0.0, 28.5));
    assert_eq!(t1.density_range(), (0.5, 0.59));

    assert_eq!(t1.factor_at(-5.0, 0.4), 1.070);
    assert_eq!(t1.factor_at(40.0, 0.7), 0.980);
    assert_eq!(t2.factor_at(40.0, 0.7), 0.983);
    assert_eq!(t2.factor_at(40.0, 0.55), t2.factor_at(28.5, 0.55));
}

#[test]
fn vcf_decreases_with_temperature() {
    let reg = registry();
    let grid = &reg.profile(TankId::Tank1).correction;
    for &d in grid.densities() {
        assert!(grid.factor_at(0.0, d) > grid.factor_at(20.0, d));
        assert!(grid.factor_at(20.0, d) > grid.factor_at(30.0, d));
    }
}

#[test]
fn grid_rejects_malformed_tables() {
    let short_row = CorrectionFactorGrid::new(
        vec![0.0, 1.0],
        vec![0.5, 0.6],
        vec![vec![1.0, 1.0], vec![1.0]],
    );
    assert!(matches!(
        short_row,
        Err(TableError::RowLength {
            row: 1,
            expected: 2,
            found: 1,
            ..
        })
    ));

    let unsorted = CorrectionFactorGrid::new(
        vec![1.0, 0.0],
        vec![0.5],
        vec![vec![1.0], vec![1.0]],
    );
    assert!(matches!(
        unsorted,
        Err(TableError::NotIncreasing {
            axis: "temperature",
            ..
        })
    ));

    let zero_factor = CorrectionFactorGrid::new(vec![0.0], vec![0.5], vec![vec![0.0]]);
    assert!(matches!(zero_factor, Err(TableError::InvalidValue { .. })));
}

#[test]
fn single_cell_grid_always_returns_its_value() {
    let grid = CorrectionFactorGrid::new(vec![20.0], vec![0.55], vec![vec![1.0]])
        .expect("single cell");
    assert_eq!(grid.factor_at(-40.0, 0.1), 1.0);
    assert_eq!(grid.factor_at(60.0, 0.9), 1.0);
}

#[test]
fn pcf_exact_lookup_after_rounding() {
    let pcf = PressureCorrectionTable::builtin().expect("pcf");
    assert_eq!(pcf.factor_at(20.0), 1.0);
    assert_eq!(pcf.factor_at(17.0), 0.999934);
    assert_eq!(pcf.factor_at(16.6), 0.999934);
    assert_eq!(pcf.factor_at(24.4), 1.000088);
    assert!(pcf.covers(15.0));
    assert!(!pcf.covers(14.0));
    assert_eq!(pcf.pressure_range(), Some((15, 24)));
}

#[test]
fn pcf_defaults_to_unity_outside_table() {
    let pcf = PressureCorrectionTable::builtin().expect("pcf");
    for p in [-3.0, 0.0, 14.0, 14.4, 24.5, 25.0, 100.0, f64::NAN, f64::INFINITY] {
        assert_eq!(pcf.factor_at(p), 1.0, "p={p}");
    }
    assert_eq!(pcf.entries().count(), 10);
}

#[test]
fn step_table_rejects_duplicates_and_bad_factors() {
    let dup = StepFactorTable::new("test", &[(15, 1.0), (15, 0.9)]);
    assert!(matches!(dup, Err(TableError::DuplicateKey { key: 15, .. })));
    let neg = StepFactorTable::new("test", &[(15, -1.0)]);
    assert!(matches!(neg, Err(TableError::InvalidValue { index: 0, .. })));
    let ok = StepFactorTable::new("test", &[(16, 1.1), (15, 1.0)]).expect("valid");
    assert_eq!(ok.key_range(), Some((15, 16)));
}

#[test]
fn only_tank2_carries_shell_table() {
    let reg = registry();
    assert!(reg.profile(TankId::Tank1).shell.is_none());
    let shell = reg
        .profile(TankId::Tank2)
        .shell
        .as_ref()
        .expect("tank2 shell table");
    assert_eq!(shell.factor_at(15.0), 0.999890);
    assert_eq!(shell.factor_at(20.0), 1.0);
    assert_eq!(shell.factor_at(30.0), 1.0);
}
