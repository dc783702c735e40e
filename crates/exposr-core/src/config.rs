//! 스캔/스코어 설정 구조체.
//!
//! 알려진 lazy-load 마커 클래스와 감사 점수 곡선(log-normal 제어점)을
//! 정의한다. CLI가 설정 파일(JSON)에서 로드하거나 기본값을 사용한다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 페이지 스캔 설정
    #[serde(default)]
    pub scan: ScanSettings,
    /// 감사 점수 곡선
    #[serde(default)]
    pub score: ScoreCurve,
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self::default()
    }
}

/// 페이지 스캔 설정 — 알려진 lazy-load 라이브러리 마커
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSettings {
    /// 알려진 lazy-load 라이브러리의 마커 클래스 목록.
    /// 기본값은 lazySizes의 `lazyload` 하나.
    #[serde(default = "default_lazy_markers")]
    pub lazy_markers: BTreeSet<String>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            lazy_markers: default_lazy_markers(),
        }
    }
}

fn default_lazy_markers() -> BTreeSet<String> {
    BTreeSet::from(["lazyload".to_string()])
}

/// 감사 점수 곡선 — log-normal 분포의 두 제어점.
/// wastedBytes가 p10 이하이면 0.9점 이상, median이면 0.5점.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreCurve {
    /// 상위 10% 경계값 (바이트)
    #[serde(default = "default_p10")]
    pub p10: f64,
    /// 중앙값 (바이트)
    #[serde(default = "default_median")]
    pub median: f64,
}

impl Default for ScoreCurve {
    fn default() -> Self {
        Self {
            p10: default_p10(),
            median: default_median(),
        }
    }
}

fn default_p10() -> f64 {
    2_000.0
}

fn default_median() -> f64 {
    40_000.0
}
