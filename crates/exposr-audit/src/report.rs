//! 감사 리포트 조립.
//!
//! 스캔 결과와 네트워크 로그를 받아 낭비 계산과 점수 산정을 잇는
//! 최종 단계. 드라이버(CLI 등)는 이 리포트를 그대로 직렬화해 내보낸다.

use serde::{Deserialize, Serialize};
use tracing::info;

use exposr_core::config::ScoreCurve;
use exposr_core::models::network::NetworkRecord;
use exposr_core::models::scan::PageScanResult;
use exposr_core::models::waste::WasteItem;

use crate::score::log_normal_score;
use crate::waste::compute_waste;

/// 숨은 이미지 감사 리포트
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// 확인된 낭비 이미지 (wastedBytes 내림차순)
    pub items: Vec<WasteItem>,
    /// 이미지별 처리 실패 경고
    pub warnings: Vec<String>,
    /// 페이지가 lazy-load 라이브러리를 쓰는지 (스캔 결과에서 전달)
    pub uses_lazy_load_library: bool,
    /// 낭비 바이트 합계
    pub wasted_bytes: u64,
    /// log-normal 점수 (0..=1, 높을수록 좋음)
    pub score: f64,
}

/// 스캔 결과 + 네트워크 로그 → 감사 리포트.
///
/// 빈 입력도 정상 경로다: 항목 없음, 낭비 0, 만점.
pub fn run_audit(
    scan: &PageScanResult,
    records: &[NetworkRecord],
    curve: &ScoreCurve,
) -> AuditReport {
    let analysis = compute_waste(&scan.images, records);
    let wasted_bytes: u64 = analysis.items.iter().map(|item| item.wasted_bytes).sum();
    let score = log_normal_score(curve, wasted_bytes as f64);

    info!(images = analysis.items.len(), "발견된 낭비 이미지 수");
    info!(wasted_bytes, score, "감사 완료");

    AuditReport {
        items: analysis.items,
        warnings: analysis.warnings,
        uses_lazy_load_library: scan.uses_lazy_load_library,
        wasted_bytes,
        score,
    }
}
