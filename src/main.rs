use clap::Parser;
use std::path::PathBuf;

use lpg_tank_calculator::cli::Cli;
use lpg_tank_calculator::tank::TankRegistry;
use lpg_tank_calculator::{app, config};

/// 프로그램의 엔트리 포인트. 설정과 교정표를 적재한 뒤 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (mut cfg, config_path) = match cli.config {
        Some(path) => (config::load_from(&path)?, path),
        None => (config::load_or_default()?, PathBuf::from(config::CONFIG_FILE)),
    };
    let registry = TankRegistry::builtin()?;
    match cli.command {
        Some(command) => app::run_command(command, &cfg, &registry)?,
        None => app::run(&mut cfg, &registry, &config_path)?,
    }
    Ok(())
}
