//! 페이지 스캔 결과 모델.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::image::ImageRecord;

/// 스캔 1회의 집계 결과. 생성 후 불변.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageScanResult {
    /// 술어를 만족한 이미지 레코드 (문서 순서 유지)
    pub images: Vec<ImageRecord>,
    /// 알려진 lazy-load 라이브러리 활성 여부
    pub uses_lazy_load_library: bool,
    /// 스캔 시각
    pub scanned_at: DateTime<Utc>,
}
