//! 노드 식별자 포트.

use crate::models::image::NodeHandle;
use crate::ports::element::HostElement;

/// 외부에서 주입되는 노드 식별 능력 (`getNodeDetails` 상당).
///
/// 제공자가 없으면 레코드의 `node`는 None으로 남는다.
/// 식별 실패도 None — 스캔을 중단시키지 않는다.
pub trait NodeInspector {
    /// 요소의 불투명 식별 토큰 반환
    fn node_details(&self, element: &dyn HostElement) -> Option<NodeHandle>;
}
