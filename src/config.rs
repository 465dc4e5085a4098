use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::engine::EngineOptions;
use crate::tank::TankId;
use crate::units::{MassUnit, VolumeUnit};

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 결과 표시 설정. 계산은 항상 L, kg 기준이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub volume_unit: VolumeUnit,
    pub mass_unit: MassUnit,
    /// 체적 소수 자릿수
    pub volume_decimals: usize,
    /// 보정계수 소수 자릿수
    pub factor_decimals: usize,
    /// 질량 소수 자릿수
    pub mass_decimals: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            volume_unit: VolumeUnit::Liter,
            mass_unit: MassUnit::Kilogram,
            volume_decimals: 3,
            factor_decimals: 6,
            mass_decimals: 2,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 시작 시 선택되는 탱크
    pub default_tank: TankId,
    pub engine: EngineOptions,
    pub display: DisplaySettings,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        log::info!("{CONFIG_FILE}이 없어 기본 설정을 생성했습니다");
        Ok(cfg)
    }
}

/// 지정한 경로의 설정 파일을 읽는다. 빠진 항목은 기본값으로 채운다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    log::debug!("설정 로드: {}", path.display());
    Ok(cfg)
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_FILE))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
