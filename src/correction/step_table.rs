use std::collections::BTreeMap;

use crate::calibration::TableError;

/// 정수 키(bar, °C 등) → 보정계수 이산 표. 보간하지 않는다.
///
/// 입력을 가장 가까운 정수로 반올림해 정확히 일치하는 키만 찾고,
/// 없으면 중립 계수 1.0을 돌려준다.
#[derive(Debug, Clone)]
pub struct StepFactorTable {
    entries: BTreeMap<i32, f64>,
}

impl StepFactorTable {
    pub fn new(name: &'static str, entries: &[(i32, f64)]) -> Result<Self, TableError> {
        let mut map = BTreeMap::new();
        for (index, &(key, factor)) in entries.iter().enumerate() {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(TableError::InvalidValue { table: name, index });
            }
            if map.insert(key, factor).is_some() {
                return Err(TableError::DuplicateKey { table: name, key });
            }
        }
        Ok(Self { entries: map })
    }

    /// 입력값에 해당하는 계수. 표에 없는 값은 1.0이다.
    pub fn factor_at(&self, value: f64) -> f64 {
        self.lookup(value).unwrap_or(1.0)
    }

    /// 표에 키가 있을 때만 계수를 돌려준다.
    pub fn lookup(&self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        let rounded = value.round();
        if rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
            return None;
        }
        self.entries.get(&(rounded as i32)).copied()
    }

    /// `(키, 계수)`를 키 오름차순으로 나열한다.
    pub fn entries(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// 표에 정의된 키 범위 `(최소, 최대)`.
    pub fn key_range(&self) -> Option<(i32, i32)> {
        let first = self.entries.keys().next()?;
        let last = self.entries.keys().next_back()?;
        Some((*first, *last))
    }
}
