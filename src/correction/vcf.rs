use crate::calibration::TableError;
use crate::interpolate::{bracket, lerp, round_to, Bracket};

/// VCF 결과의 소수 자릿수. 성적서 표와 같은 정밀도이다.
pub const VCF_DECIMALS: u32 = 6;

/// (온도, 밀도) 2차원 체적보정계수 격자.
///
/// 격자 밖 입력은 가장자리로 클램프하며 외삽하지 않는다.
/// 격자 사이 값은 네 모서리 계수로 쌍선형 보간한다.
#[derive(Debug, Clone)]
pub struct CorrectionFactorGrid {
    temperatures: Vec<f64>,
    densities: Vec<f64>,
    factors: Vec<Vec<f64>>,
}

impl CorrectionFactorGrid {
    /// 축과 행을 검증해 격자를 만든다. `factors[온도][밀도]` 순서이다.
    pub fn new(
        temperatures: Vec<f64>,
        densities: Vec<f64>,
        factors: Vec<Vec<f64>>,
    ) -> Result<Self, TableError> {
        const TABLE: &str = "vcf";
        check_axis(TABLE, "temperature", &temperatures)?;
        check_axis(TABLE, "density", &densities)?;
        if factors.len() != temperatures.len() {
            return Err(TableError::TooFewPoints {
                table: TABLE,
                required: temperatures.len(),
                found: factors.len(),
            });
        }
        for (row, values) in factors.iter().enumerate() {
            if values.len() != densities.len() {
                return Err(TableError::RowLength {
                    table: TABLE,
                    row,
                    expected: densities.len(),
                    found: values.len(),
                });
            }
            if let Some(col) = values.iter().position(|f| !f.is_finite() || *f <= 0.0) {
                return Err(TableError::InvalidValue {
                    table: TABLE,
                    index: row * densities.len() + col,
                });
            }
        }
        Ok(Self {
            temperatures,
            densities,
            factors,
        })
    }

    /// 고정 크기 행 슬라이스에서 격자를 만든다. 내장 성적서 표 적재용.
    pub fn from_rows<const N: usize>(
        temperatures: &[f64],
        densities: &[f64; N],
        rows: &[[f64; N]],
    ) -> Result<Self, TableError> {
        Self::new(
            temperatures.to_vec(),
            densities.to_vec(),
            rows.iter().map(|r| r.to_vec()).collect(),
        )
    }

    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    /// 유효 온도 범위 `(최소, 최대)` °C.
    pub fn temperature_range(&self) -> (f64, f64) {
        axis_range(&self.temperatures)
    }

    /// 유효 밀도 범위 `(최소, 최대)` kg/L.
    pub fn density_range(&self) -> (f64, f64) {
        axis_range(&self.densities)
    }

    /// 온도(°C)·밀도(kg/L)의 VCF를 소수 6자리로 계산한다.
    ///
    /// 한 축이 격자점과 일치하면 1차 보간, 두 축 모두 일치하면 표 값을 쓴다.
    pub fn factor_at(&self, temperature_c: f64, density_kg_per_l: f64) -> f64 {
        let (t_min, t_max) = self.temperature_range();
        let (d_min, d_max) = self.density_range();
        let t = temperature_c.clamp(t_min, t_max);
        let d = density_kg_per_l.clamp(d_min, d_max);

        let (t_lo, t_hi) = bounds(bracket(&self.temperatures, t));
        let (d_lo, d_hi) = bounds(bracket(&self.densities, d));

        let f = |ti: usize, di: usize| self.factors[ti][di];
        let value = if t_lo == t_hi && d_lo == d_hi {
            f(t_lo, d_lo)
        } else if t_lo == t_hi {
            lerp(
                self.densities[d_lo],
                f(t_lo, d_lo),
                self.densities[d_hi],
                f(t_lo, d_hi),
                d,
            )
        } else if d_lo == d_hi {
            lerp(
                self.temperatures[t_lo],
                f(t_lo, d_lo),
                self.temperatures[t_hi],
                f(t_hi, d_lo),
                t,
            )
        } else {
            let (d0, d1) = (self.densities[d_lo], self.densities[d_hi]);
            let lower = lerp(d0, f(t_lo, d_lo), d1, f(t_lo, d_hi), d);
            let upper = lerp(d0, f(t_hi, d_lo), d1, f(t_hi, d_hi), d);
            lerp(self.temperatures[t_lo], lower, self.temperatures[t_hi], upper, t)
        };
        round_to(value, VCF_DECIMALS)
    }
}

fn bounds(b: Bracket) -> (usize, usize) {
    match b {
        Bracket::Exact(i) => (i, i),
        Bracket::Between(lo, hi) => (lo, hi),
    }
}

fn axis_range(axis: &[f64]) -> (f64, f64) {
    (axis[0], axis[axis.len() - 1])
}

fn check_axis(table: &'static str, axis: &'static str, values: &[f64]) -> Result<(), TableError> {
    if values.is_empty() {
        return Err(TableError::TooFewPoints {
            table,
            required: 1,
            found: 0,
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(TableError::InvalidValue { table, index });
    }
    for (i, pair) in values.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(TableError::NotIncreasing {
                table,
                axis,
                index: i + 1,
            });
        }
    }
    Ok(())
}
