//! 감사 점수 곡선.
//!
//! Lighthouse 계열 log-normal 점수: 측정값이 p10 이하이면 0.9 이상,
//! median이면 정확히 0.5. 누적분포의 여집합을 erf 근사로 계산한다.

use exposr_core::config::ScoreCurve;

/// erfc(x) = 1/5가 되는 x. p10 제어점을 표준화할 때 쓰는 상수.
const INVERSE_ERFC_ONE_FIFTH: f64 = 0.906_193_802_436_823_2;

/// 오차함수 근사 (Abramowitz–Stegun 7.1.26, 최대 오차 1.5e-7)
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    const A1: f64 = 0.254_829_592;
    const A2: f64 = -0.284_496_736;
    const A3: f64 = 1.421_413_741;
    const A4: f64 = -1.453_152_027;
    const A5: f64 = 1.061_405_429;
    const P: f64 = 0.327_591_1;

    let t = 1.0 / (1.0 + P * x);
    let y = t * (A1 + t * (A2 + t * (A3 + t * (A4 + t * A5))));
    sign * (1.0 - y * (-x * x).exp())
}

/// 측정값을 0..=1 점수로 변환한다. 값이 작을수록(낭비가 적을수록) 높은 점수.
///
/// 0 이하의 값은 만점. 곡선 제어점이 비정상(p10 >= median 등)이면
/// 분모가 0에 가까워질 수 있으므로 최솟값으로 바닥을 깐다.
pub fn log_normal_score(curve: &ScoreCurve, value: f64) -> f64 {
    if value <= 0.0 {
        return 1.0;
    }

    let median = curve.median.max(f64::MIN_POSITIVE);
    let x_log_ratio = (value / median).max(f64::MIN_POSITIVE).ln();
    let p10_log_ratio = (-((curve.p10 / median).max(f64::MIN_POSITIVE).ln()))
        .max(f64::MIN_POSITIVE);
    let standardized_x = x_log_ratio * INVERSE_ERFC_ONE_FIFTH / p10_log_ratio;

    let complementary_percentile = (1.0 - erf(standardized_x)) / 2.0;
    complementary_percentile.clamp(0.0, 1.0)
}
