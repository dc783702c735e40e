//! 숨은 이미지 레코드 모델.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::element::LoadingMode;

/// 외부 프레임워크의 노드 식별 토큰.
/// 내용은 불투명하며 디버깅 상관관계 용도로만 전달된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeHandle(pub serde_json::Value);

/// 숨은 채 다운로드된 이미지 한 건의 스냅샷.
///
/// 스캔 출력에 포함된 레코드는 캡처 시점에 분류기의
/// hidden-but-fetched 술어를 만족했음이 보장된다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// 부모 요소 노드 이름
    pub parent_node_name: String,
    /// 부모 요소 클래스 목록
    pub parent_class_list: BTreeSet<String>,
    /// src 속성
    pub src: String,
    /// 브라우저가 실제로 요청한 URL
    pub current_src: String,
    /// 렌더링된 높이 (술어상 항상 0)
    pub client_height: u32,
    /// 요소 클래스 목록
    pub class_list: BTreeSet<String>,
    /// alt 속성
    pub alt: String,
    /// 지정 너비
    pub width: u32,
    /// 지정 높이
    pub height: u32,
    /// loading 속성
    pub loading: LoadingMode,
    /// 노드 식별 토큰 (식별자 제공자 부재 시 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeHandle>,
}
