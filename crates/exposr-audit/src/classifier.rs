//! 가시성 분류기.
//!
//! 이미지 요소 한 개의 관측 속성만으로 "숨은 채 다운로드됨"을 판정하고,
//! 판정 시 요소의 속성을 복사한 [`ImageRecord`]를 만든다.

use std::collections::BTreeSet;

use exposr_core::models::element::LoadingMode;
use exposr_core::models::image::ImageRecord;
use exposr_core::ports::element::HostElement;
use exposr_core::ports::inspector::NodeInspector;

/// 스캔 문맥 — 페이지에서 활성 상태인 lazy-load 라이브러리의 마커 클래스.
///
/// 전역 플래그(`window.lazySizes`) 의존을 명시적 능력 파라미터로 대체한
/// 형태. 마커 집합이 비어 있지 않으면 라이브러리가 활성인 것으로 본다.
#[derive(Debug, Clone, Default)]
pub struct ScanContext {
    /// 활성 lazy-load 라이브러리의 마커 클래스 집합
    pub active_lazy_markers: BTreeSet<String>,
}

impl ScanContext {
    /// 라이브러리 없음 (마커 집합 비어 있음)
    pub fn new() -> Self {
        Self::default()
    }

    /// lazySizes 활성 페이지용 문맥 (`lazyload` 마커)
    pub fn lazysizes() -> Self {
        Self::with_markers(["lazyload"])
    }

    /// 임의 마커 집합으로 문맥 생성
    pub fn with_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            active_lazy_markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// 알려진 lazy-load 라이브러리가 활성인지
    pub fn library_active(&self) -> bool {
        !self.active_lazy_markers.is_empty()
    }

    /// 요소가 라이브러리에 의해 의도적으로 지연되고 있는지.
    /// 라이브러리 활성 + 요소 클래스에 마커 존재, 둘 다 성립해야 한다.
    pub fn is_library_deferred(&self, class_list: &BTreeSet<String>) -> bool {
        self.active_lazy_markers
            .iter()
            .any(|marker| class_list.contains(marker))
    }
}

/// 요소 한 개를 판정한다.
///
/// 네 조건이 모두 성립할 때만 레코드를 만든다:
/// 1. `clientHeight == 0` — 화면에 렌더링되지 않음
/// 2. `currentSrc != ""` — 브라우저가 실제로 소스를 해석·요청함
/// 3. `loading != lazy` — 네이티브 lazy loading은 의도된 지연
/// 4. 활성 lazy-load 라이브러리의 마커 클래스가 없음
///
/// 불일치는 에러가 아니라 None (필터링). 부수효과 없음.
pub fn classify<E: HostElement>(
    element: &E,
    ctx: &ScanContext,
    inspector: Option<&dyn NodeInspector>,
) -> Option<ImageRecord> {
    if element.client_height() != 0 {
        return None;
    }
    if element.current_src().is_empty() {
        return None;
    }
    if element.loading() == LoadingMode::Lazy {
        return None;
    }
    if ctx.is_library_deferred(element.class_list()) {
        return None;
    }

    Some(ImageRecord {
        parent_node_name: element.parent_node_name().to_string(),
        parent_class_list: element.parent_class_list().clone(),
        src: element.src().to_string(),
        current_src: element.current_src().to_string(),
        client_height: element.client_height(),
        class_list: element.class_list().clone(),
        alt: element.alt().to_string(),
        width: element.width(),
        height: element.height(),
        loading: element.loading(),
        node: inspector.and_then(|i| i.node_details(element)),
    })
}
