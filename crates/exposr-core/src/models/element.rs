//! 이미지 요소 스냅샷 모델.
//!
//! 브라우저에서 캡처한 `<img>` 요소의 관측 가능한 속성 집합.
//! 분류기는 이 구조체가 아니라 [`HostElement`] 포트에만 의존한다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::ports::element::HostElement;

/// `<img>` loading 속성 값
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingMode {
    /// 브라우저 기본 동작 (속성 미지정 포함)
    #[default]
    Auto,
    /// 네이티브 lazy loading — 뷰포트 진입 시점까지 지연
    Lazy,
    /// 즉시 로드
    Eager,
}

/// `<img>` 부모 요소 요약 (nodeName + 클래스 목록)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentSnapshot {
    /// 부모 요소 노드 이름 (예: "DIV", "PICTURE")
    #[serde(default)]
    pub node_name: String,
    /// 부모 요소 클래스 목록
    #[serde(default)]
    pub class_list: BTreeSet<String>,
}

/// 캡처된 `<img>` 요소 스냅샷.
/// 분류기가 요구하는 일곱 개 필드와 부모 요약만 담는다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    /// 부모 요소 요약
    #[serde(default)]
    pub parent: ParentSnapshot,
    /// src 속성
    #[serde(default)]
    pub src: String,
    /// 브라우저가 실제로 요청한 URL (srcset 해석 결과)
    #[serde(default)]
    pub current_src: String,
    /// 화면에 렌더링된 높이 (픽셀, 미표시 시 0)
    #[serde(default)]
    pub client_height: u32,
    /// 요소 클래스 목록
    #[serde(default)]
    pub class_list: BTreeSet<String>,
    /// alt 속성
    #[serde(default)]
    pub alt: String,
    /// width 속성 또는 CSS 지정 너비
    #[serde(default)]
    pub width: u32,
    /// height 속성 또는 CSS 지정 높이
    #[serde(default)]
    pub height: u32,
    /// loading 속성
    #[serde(default)]
    pub loading: LoadingMode,
}

impl HostElement for ElementSnapshot {
    fn parent_node_name(&self) -> &str {
        &self.parent.node_name
    }

    fn parent_class_list(&self) -> &BTreeSet<String> {
        &self.parent.class_list
    }

    fn src(&self) -> &str {
        &self.src
    }

    fn current_src(&self) -> &str {
        &self.current_src
    }

    fn client_height(&self) -> u32 {
        self.client_height
    }

    fn class_list(&self) -> &BTreeSet<String> {
        &self.class_list
    }

    fn alt(&self) -> &str {
        &self.alt
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn loading(&self) -> LoadingMode {
        self.loading
    }
}
