//! 낭비 바이트 레코드 모델.

use serde::{Deserialize, Serialize};

/// 확인된 낭비 이미지 한 건 (URL 기준 유일).
///
/// 보이지 않는 이미지는 전송 비용 전체가 낭비이므로
/// `wasted_bytes == total_bytes == min(resourceSize, transferSize)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteItem {
    /// 표시용 URL (data URI는 절단됨)
    pub url: String,
    /// 브라우저가 요청한 원본 URL
    pub current_src: String,
    /// 리소스 총 비용 (바이트)
    pub total_bytes: u64,
    /// 낭비 바이트
    pub wasted_bytes: u64,
}
