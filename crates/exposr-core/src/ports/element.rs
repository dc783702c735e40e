//! 이미지 요소 포트.

use std::collections::BTreeSet;

use crate::models::element::LoadingMode;

/// 분류기가 요구하는 이미지 요소 능력 집합.
///
/// 일곱 개의 읽기 가능 필드와 부모 요약(nodeName, classList)만 노출하면
/// 어떤 타입이든 분류 대상이 될 수 있다.
pub trait HostElement {
    /// 부모 요소 노드 이름
    fn parent_node_name(&self) -> &str;
    /// 부모 요소 클래스 목록
    fn parent_class_list(&self) -> &BTreeSet<String>;
    /// src 속성
    fn src(&self) -> &str;
    /// 브라우저가 실제로 요청한 URL (미요청 시 빈 문자열)
    fn current_src(&self) -> &str;
    /// 렌더링된 높이 (픽셀)
    fn client_height(&self) -> u32;
    /// 요소 클래스 목록
    fn class_list(&self) -> &BTreeSet<String>;
    /// alt 속성
    fn alt(&self) -> &str;
    /// 지정 너비
    fn width(&self) -> u32;
    /// 지정 높이
    fn height(&self) -> u32;
    /// loading 속성
    fn loading(&self) -> LoadingMode;
}
