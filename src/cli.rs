//! 명령행 인자 정의.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::FillLevel;
use crate::tank::TankId;

#[derive(Debug, Parser)]
#[command(
    name = "lpg_tank_calculator",
    version,
    about = "LPG 탱크 액위로 보정 체적과 질량을 계산한다"
)]
pub struct Cli {
    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 생략하면 대화형 메뉴를 실행한다
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 보정 체적과 질량을 한 번 계산한다
    Calc(CalcArgs),
    /// 충전률·액위·용량을 서로 변환한다
    Level(LevelArgs),
    /// 탱크 교정 성적서 정보를 보여준다
    Info {
        /// 생략하면 모든 탱크
        #[arg(long)]
        tank: Option<TankId>,
    },
}

/// 액위 입력. 충전률과 높이 중 하나만 받는다.
#[derive(Debug, Clone, Args)]
pub struct FillArgs {
    /// 충전률(%)
    #[arg(long, conflicts_with = "height")]
    pub percent: Option<f64>,
    /// 액위(mm)
    #[arg(long)]
    pub height: Option<f64>,
}

impl FillArgs {
    pub fn fill_level(&self) -> Option<FillLevel> {
        match (self.percent, self.height) {
            (Some(p), _) => Some(FillLevel::Percentage(p)),
            (None, Some(h)) => Some(FillLevel::HeightMm(h)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// 생략하면 설정의 기본 탱크
    #[arg(long)]
    pub tank: Option<TankId>,
    #[command(flatten)]
    pub fill: FillArgs,
    /// 제품 밀도(kg/L)
    #[arg(long, default_value = "0.55")]
    pub density: String,
    /// 제품 온도(°C)
    #[arg(long, default_value = "20")]
    pub temperature: String,
    /// 셸 온도(°C)
    #[arg(long, default_value = "20")]
    pub shell_temperature: String,
    /// 탱크 압력(bar)
    #[arg(long, default_value = "17")]
    pub pressure: String,
    /// 압력 보정(PCF) 적용
    #[arg(long)]
    pub pressure_correction: bool,
}

#[derive(Debug, Clone, Args)]
pub struct LevelArgs {
    #[arg(long)]
    pub tank: Option<TankId>,
    #[command(flatten)]
    pub fill: FillArgs,
    /// 용량(L)에서 액위를 역산한다
    #[arg(long, conflicts_with_all = ["percent", "height"])]
    pub capacity: Option<f64>,
}
