use serde::{Deserialize, Serialize};

/// 체적 표시 단위. 계산 기준은 리터이다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    #[default]
    Liter,
    CubicMeter,
    UsGallon,
}

impl VolumeUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Liter => "L",
            VolumeUnit::CubicMeter => "m³",
            VolumeUnit::UsGallon => "US gal",
        }
    }
}

fn liters_per_unit(unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Liter => 1.0,
        VolumeUnit::CubicMeter => 1000.0,
        VolumeUnit::UsGallon => 3.785_411_784,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    value * liters_per_unit(from) / liters_per_unit(to)
}
