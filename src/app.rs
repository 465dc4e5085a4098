use std::path::Path;
use thiserror::Error;

use crate::calibration::TableError;
use crate::cli::{CalcArgs, Command, LevelArgs};
use crate::config::{Config, ConfigError};
use crate::engine::{self, ManualEntry, NotComputable};
use crate::tank::{TankId, TankRegistry};
use crate::ui_cli::{self, MenuChoice, Session};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("교정표 오류: {0}")]
    Table(#[from] TableError),
    #[error("계산 불가: {0}")]
    NotComputable(#[from] NotComputable),
}

/// 대화형 메인 루프를 실행한다. 종료 시 설정을 `config_path`에 저장한다.
pub fn run(config: &mut Config, registry: &TankRegistry, config_path: &Path) -> Result<(), AppError> {
    let mut session = Session::new(config.default_tank);
    loop {
        match ui_cli::main_menu(&session)? {
            MenuChoice::SelectTank => ui_cli::handle_select_tank(&mut session)?,
            MenuChoice::FillLevel => ui_cli::handle_fill_level(&mut session, registry)?,
            MenuChoice::ManualInputs => ui_cli::handle_manual_inputs(&mut session)?,
            MenuChoice::Calculate => ui_cli::handle_calculate(&session, registry, config),
            MenuChoice::TankDetails => {
                ui_cli::print_tank_details(registry.profile(session.tank), config)
            }
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save_to(config_path)?;
            }
            MenuChoice::Exit => {
                config.default_tank = session.tank;
                config.save_to(config_path)?;
                println!("종료합니다.");
                break;
            }
        }
    }
    Ok(())
}

/// 단일 하위 명령을 실행한다.
pub fn run_command(command: Command, config: &Config, registry: &TankRegistry) -> Result<(), AppError> {
    match command {
        Command::Calc(args) => run_calc(&args, config, registry),
        Command::Level(args) => run_level(&args, config, registry),
        Command::Info { tank } => {
            match tank {
                Some(id) => ui_cli::print_tank_details(registry.profile(id), config),
                None => registry
                    .profiles()
                    .for_each(|p| ui_cli::print_tank_details(p, config)),
            }
            Ok(())
        }
    }
}

fn run_calc(args: &CalcArgs, config: &Config, registry: &TankRegistry) -> Result<(), AppError> {
    let profile = registry.profile(args.tank.unwrap_or(config.default_tank));
    let entry = ManualEntry {
        product_density: args.density.clone(),
        product_temperature: args.temperature.clone(),
        shell_temperature: args.shell_temperature.clone(),
        pressure: args.pressure.clone(),
        apply_pressure_correction: args.pressure_correction,
    };
    let inputs = entry.to_inputs(args.fill.fill_level());
    let result = engine::calculate(profile, &inputs, &config.engine)?;
    println!("[{}] {}", profile.id, profile.metadata.label);
    for line in ui_cli::format_result(&result, &config.display) {
        println!("{line}");
    }
    if let Some(notice) = ui_cli::pcf_notice(profile, &result) {
        println!("{notice}");
    }
    Ok(())
}

fn run_level(args: &LevelArgs, config: &Config, registry: &TankRegistry) -> Result<(), AppError> {
    let id: TankId = args.tank.unwrap_or(config.default_tank);
    let profile = registry.profile(id);
    let height_mm = engine::level_height(profile, args.capacity, args.fill.fill_level())?;
    ui_cli::print_level(profile, height_mm, config);
    Ok(())
}
