use super::{is_valid_non_negative, TableError};
use crate::interpolate::{bracket_by, lerp, Bracket};

/// 충전률(%)과 실제 액위(mm)를 잇는 기준점.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentagePoint {
    pub percentage: f64,
    pub height_mm: f64,
}

impl PercentagePoint {
    pub const fn new(percentage: f64, height_mm: f64) -> Self {
        Self {
            percentage,
            height_mm,
        }
    }
}

/// 슬라이더의 충전률(0~100%)을 액위(mm)로 바꾸는 비균등 기준점 목록.
///
/// 5/10/85/90/95% 같은 성적서 기준 레벨을 포함하며 기준점 사이는 선형 보간한다.
#[derive(Debug, Clone)]
pub struct PercentageHeightMapping {
    anchors: Vec<PercentagePoint>,
}

impl PercentageHeightMapping {
    pub fn new(anchors: Vec<PercentagePoint>) -> Result<Self, TableError> {
        const TABLE: &str = "percentage-height";
        if anchors.len() < 2 {
            return Err(TableError::TooFewPoints {
                table: TABLE,
                required: 2,
                found: anchors.len(),
            });
        }
        for (i, a) in anchors.iter().enumerate() {
            if !is_valid_non_negative(a.percentage) || !is_valid_non_negative(a.height_mm) {
                return Err(TableError::InvalidValue {
                    table: TABLE,
                    index: i,
                });
            }
        }
        for (i, pair) in anchors.windows(2).enumerate() {
            if pair[1].percentage <= pair[0].percentage {
                return Err(TableError::NotIncreasing {
                    table: TABLE,
                    axis: "percentage",
                    index: i + 1,
                });
            }
            if pair[1].height_mm <= pair[0].height_mm {
                return Err(TableError::NotIncreasing {
                    table: TABLE,
                    axis: "height",
                    index: i + 1,
                });
            }
        }
        let first = anchors[0];
        let last = anchors[anchors.len() - 1];
        if first.percentage != 0.0 || last.percentage != 100.0 {
            return Err(TableError::BadEndpoint {
                table: TABLE,
                axis: "percentage",
                expected: if first.percentage != 0.0 { 0.0 } else { 100.0 },
            });
        }
        if first.height_mm != 0.0 {
            return Err(TableError::BadEndpoint {
                table: TABLE,
                axis: "height",
                expected: 0.0,
            });
        }
        Ok(Self { anchors })
    }

    /// 100% 기준점의 액위(mm).
    pub fn max_height_mm(&self) -> f64 {
        self.anchors[self.anchors.len() - 1].height_mm
    }

    /// 충전률(%)을 액위(mm)로 변환한다. 입력은 `[0, 100]`으로 클램프한다.
    pub fn height_from_percentage(&self, percentage: f64) -> f64 {
        let pct = percentage.clamp(0.0, 100.0);
        match bracket_by(&self.anchors, pct, |a| a.percentage) {
            Bracket::Exact(i) => self.anchors[i].height_mm,
            Bracket::Between(lo, hi) => {
                let (a, b) = (self.anchors[lo], self.anchors[hi]);
                lerp(a.percentage, a.height_mm, b.percentage, b.height_mm, pct)
            }
        }
    }

    /// 액위(mm)를 충전률(%)로 변환한다. 입력은 `[0, 최대 높이]`로 클램프한다.
    pub fn percentage_from_height(&self, height_mm: f64) -> f64 {
        let h = height_mm.clamp(0.0, self.max_height_mm());
        match bracket_by(&self.anchors, h, |a| a.height_mm) {
            Bracket::Exact(i) => self.anchors[i].percentage,
            Bracket::Between(lo, hi) => {
                let (a, b) = (self.anchors[lo], self.anchors[hi]);
                lerp(a.height_mm, a.percentage, b.height_mm, b.percentage, h)
            }
        }
    }

    /// 0%와 100%를 제외한 성적서 기준 레벨 `(percentage, height_mm)` 목록.
    pub fn reference_levels(&self) -> Vec<(f64, f64)> {
        self.anchors
            .iter()
            .filter(|a| a.percentage != 0.0 && a.percentage != 100.0)
            .map(|a| (a.percentage, a.height_mm))
            .collect()
    }
}
