//! 탱크 교정표(높이↔용량, 백분율↔높이) 모듈 모음.

pub mod capacity_table;
pub mod data;
pub mod percentage_mapping;

pub use capacity_table::{CalibrationPoint, CalibrationTable, CapacityRounding};
pub use percentage_mapping::{PercentageHeightMapping, PercentagePoint};

use thiserror::Error;

/// 교정표·보정계수표를 구성할 때 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// 보간에 필요한 점 수 부족
    #[error("{table}: 최소 {required}개의 점이 필요하지만 {found}개뿐입니다")]
    TooFewPoints {
        table: &'static str,
        required: usize,
        found: usize,
    },
    /// NaN/무한대 또는 음수 값
    #[error("{table}: {index}번째 값이 유효하지 않습니다")]
    InvalidValue { table: &'static str, index: usize },
    /// 축이 엄격히 증가하지 않음
    #[error("{table}: {index}번째 {axis} 값이 앞 값보다 크지 않습니다")]
    NotIncreasing {
        table: &'static str,
        axis: &'static str,
        index: usize,
    },
    /// 용량이 높이에 따라 감소함
    #[error("{table}: {index}번째 용량이 앞 용량보다 작습니다")]
    DecreasingCapacity { table: &'static str, index: usize },
    /// 축 양 끝이 요구 범위와 다름
    #[error("{table}: {axis} 축은 {expected}에서 시작/종료해야 합니다")]
    BadEndpoint {
        table: &'static str,
        axis: &'static str,
        expected: f64,
    },
    /// 격자 행 길이가 밀도 축과 다름
    #[error("{table}: {row}번째 행은 {expected}개의 계수가 필요하지만 {found}개입니다")]
    RowLength {
        table: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    /// 같은 키가 두 번 등장
    #[error("{table}: 키 {key}가 중복되었습니다")]
    DuplicateKey { table: &'static str, key: i32 },
}

pub(crate) fn is_valid_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
