use serde::{Deserialize, Serialize};

use super::{is_valid_non_negative, TableError};
use crate::interpolate::{bracket_by, lerp, Bracket};

/// 교정 성적서의 한 측정점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    /// 액위 높이(mm)
    pub height_mm: f64,
    /// 해당 높이의 용량(L)
    pub capacity_l: f64,
}

impl CalibrationPoint {
    pub const fn new(height_mm: f64, capacity_l: f64) -> Self {
        Self {
            height_mm,
            capacity_l,
        }
    }
}

/// 보간된 용량의 반올림 정책.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityRounding {
    /// 성적서와 같이 정수 리터로 반올림한다.
    #[default]
    NearestLiter,
    /// 보간 결과를 그대로 쓴다.
    Exact,
}

impl CapacityRounding {
    pub fn toggled(self) -> Self {
        match self {
            CapacityRounding::NearestLiter => CapacityRounding::Exact,
            CapacityRounding::Exact => CapacityRounding::NearestLiter,
        }
    }

    fn apply(self, capacity_l: f64) -> f64 {
        match self {
            CapacityRounding::NearestLiter => capacity_l.round(),
            CapacityRounding::Exact => capacity_l,
        }
    }
}

/// 높이(mm) → 용량(L) 교정표. 불연속 측정점 사이는 선형 보간한다.
///
/// 높이는 엄격히 증가, 용량은 비감소임을 생성 시 검사한다.
#[derive(Debug, Clone)]
pub struct CalibrationTable {
    points: Vec<CalibrationPoint>,
}

impl CalibrationTable {
    /// 측정점 목록을 검증해 교정표를 만든다.
    pub fn new(points: Vec<CalibrationPoint>) -> Result<Self, TableError> {
        const TABLE: &str = "height-capacity";
        if points.len() < 2 {
            return Err(TableError::TooFewPoints {
                table: TABLE,
                required: 2,
                found: points.len(),
            });
        }
        for (i, p) in points.iter().enumerate() {
            if !is_valid_non_negative(p.height_mm) || !is_valid_non_negative(p.capacity_l) {
                return Err(TableError::InvalidValue {
                    table: TABLE,
                    index: i,
                });
            }
        }
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].height_mm <= pair[0].height_mm {
                return Err(TableError::NotIncreasing {
                    table: TABLE,
                    axis: "height",
                    index: i + 1,
                });
            }
            if pair[1].capacity_l < pair[0].capacity_l {
                return Err(TableError::DecreasingCapacity {
                    table: TABLE,
                    index: i + 1,
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[CalibrationPoint] {
        &self.points
    }

    fn first(&self) -> CalibrationPoint {
        self.points[0]
    }

    fn last(&self) -> CalibrationPoint {
        self.points[self.points.len() - 1]
    }

    /// 교정표 최대 높이(mm).
    pub fn max_height_mm(&self) -> f64 {
        self.last().height_mm
    }

    /// 교정표 최대 용량(L).
    pub fn max_capacity_l(&self) -> f64 {
        self.last().capacity_l
    }

    /// 높이에 해당하는 용량을 정수 리터로 반올림해 돌려준다.
    pub fn capacity_from_height(&self, height_mm: f64) -> f64 {
        self.capacity_at(height_mm, CapacityRounding::NearestLiter)
    }

    /// 높이에 해당하는 용량을 지정한 반올림 정책으로 계산한다.
    ///
    /// 높이는 먼저 `[0, 최대 높이]`로 클램프한다. 범위 밖 입력은 오류가 아니다.
    pub fn capacity_at(&self, height_mm: f64, rounding: CapacityRounding) -> f64 {
        let h = height_mm.clamp(0.0, self.max_height_mm());
        if h <= self.first().height_mm {
            return self.first().capacity_l;
        }
        let capacity = match bracket_by(&self.points, h, |p| p.height_mm) {
            Bracket::Exact(i) => return self.points[i].capacity_l,
            Bracket::Between(lo, hi) => {
                let (a, b) = (self.points[lo], self.points[hi]);
                lerp(a.height_mm, a.capacity_l, b.height_mm, b.capacity_l, h)
            }
        };
        rounding.apply(capacity)
    }

    /// 용량(L)에 해당하는 높이(mm)를 역보간한다. 양 끝은 대칭으로 클램프한다.
    ///
    /// 용량이 같은 구간이 있으면 가장 낮은 높이를 돌려준다.
    pub fn height_from_capacity(&self, capacity_l: f64) -> f64 {
        let c = capacity_l.clamp(self.first().capacity_l, self.max_capacity_l());
        match bracket_by(&self.points, c, |p| p.capacity_l) {
            Bracket::Exact(i) => self.points[i].height_mm,
            Bracket::Between(lo, hi) => {
                let (a, b) = (self.points[lo], self.points[hi]);
                lerp(a.capacity_l, a.height_mm, b.capacity_l, b.height_mm, c)
            }
        }
    }
}
