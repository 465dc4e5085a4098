//! 모든 교정표가 공유하는 구간 탐색·선형 보간·반올림 도우미.
//!
//! 용량표, 백분율 매핑, VCF 격자가 모두 같은 규칙(첫 번째 `>=` 항목을 찾아
//! 정확히 일치하면 그 값을, 아니면 앞 항목과의 사이를 보간)을 따르도록
//! 이 모듈 하나로 모은다.

/// 정렬된 축에서 입력값이 놓인 위치.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// 축의 한 점과 정확히 일치하거나 가장자리로 클램프됨
    Exact(usize),
    /// `lower < x < upper` 인 두 인접 인덱스
    Between(usize, usize),
}

/// 오름차순 축에서 `x`를 감싸는 구간을 찾는다.
///
/// `key`가 비감소라고 가정한다. 첫 항목보다 작으면 `Exact(0)`,
/// 마지막 항목보다 크면 `Exact(len - 1)`을 돌려준다. 빈 슬라이스는 호출하지 않는다.
pub fn bracket_by<T>(items: &[T], x: f64, key: impl Fn(&T) -> f64) -> Bracket {
    let idx = items.partition_point(|item| key(item) < x);
    if idx >= items.len() {
        return Bracket::Exact(items.len().saturating_sub(1));
    }
    if idx == 0 || key(&items[idx]) == x {
        return Bracket::Exact(idx);
    }
    Bracket::Between(idx - 1, idx)
}

/// 실수 축 전용 [`bracket_by`].
pub fn bracket(axis: &[f64], x: f64) -> Bracket {
    bracket_by(axis, x, |v| *v)
}

/// 두 점 `(x0, y0)`, `(x1, y1)` 사이에서 `x`의 값을 선형 보간한다.
/// 두 x가 같으면(자료 공백) `y0`를 그대로 쓴다.
pub fn lerp(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    if x1 == x0 {
        return y0;
    }
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// 소수점 `decimals` 자리로 반올림한다.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
