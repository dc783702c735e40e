//! 페이지 스캐너.
//!
//! 호출자가 넘긴 후보 요소 전체에 분류기를 문서 순서대로 적용하고
//! [`PageScanResult`]로 집계한다. 동기·무상태이며 DOM이 바뀌지 않는 한
//! 반복 호출해도 같은 결과를 낸다.

use chrono::Utc;
use tracing::debug;

use exposr_core::models::scan::PageScanResult;
use exposr_core::ports::element::HostElement;
use exposr_core::ports::inspector::NodeInspector;

use crate::classifier::{classify, ScanContext};

/// 페이지 스캐너 — 스캔 문맥과 선택적 노드 식별자를 들고 있는 얇은 래퍼
pub struct Scanner<'a> {
    ctx: ScanContext,
    inspector: Option<&'a dyn NodeInspector>,
}

impl<'a> Scanner<'a> {
    /// 새 스캐너 생성
    pub fn new(ctx: ScanContext) -> Self {
        Self {
            ctx,
            inspector: None,
        }
    }

    /// 노드 식별자 주입 (없으면 레코드의 node = None)
    pub fn with_inspector(mut self, inspector: &'a dyn NodeInspector) -> Self {
        self.inspector = Some(inspector);
        self
    }

    /// 후보 요소 전체를 스캔한다.
    ///
    /// 술어를 만족한 요소만 결과에 포함되고 상대 순서는 입력 순서
    /// (= 문서 순서)를 그대로 따른다. 빈 후보 목록은 빈 결과 —
    /// "이미지 없음" 보고는 드라이버 레이어의 몫이다.
    pub fn scan<E: HostElement>(&self, candidates: &[E]) -> PageScanResult {
        let images = candidates
            .iter()
            .filter_map(|element| classify(element, &self.ctx, self.inspector))
            .collect::<Vec<_>>();

        debug!(
            candidates = candidates.len(),
            flagged = images.len(),
            "페이지 스캔 완료"
        );

        PageScanResult {
            images,
            uses_lazy_load_library: self.ctx.library_active(),
            scanned_at: Utc::now(),
        }
    }
}
