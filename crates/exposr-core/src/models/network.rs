//! 네트워크 전송 레코드 모델 (외부 입력).
//!
//! devtools 네트워크 로그에서 추출한 전송 건별 레코드.
//! 이 crate가 소유하지 않는 데이터이며 소비하는 필드만 정의한다.

use serde::{Deserialize, Serialize};

/// devtools 리소스 타입 (소비하는 부분집합).
/// 목록에 없는 타입은 `Other`로 수렴한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Document,
    Stylesheet,
    Image,
    Media,
    Font,
    Script,
    #[serde(rename = "XHR")]
    Xhr,
    Fetch,
    #[serde(other)]
    Other,
}

/// 페이지 로드 중 관측된 네트워크 전송 한 건
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    /// 요청 URL
    pub url: String,
    /// 리소스 타입
    pub resource_type: ResourceType,
    /// 선언된 MIME 타입
    #[serde(default)]
    pub mime_type: String,
    /// 디코딩된 크기 (바이트)
    #[serde(default)]
    pub resource_size: u64,
    /// 전송 크기 (바이트, 압축 포함)
    #[serde(default)]
    pub transfer_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_wire_names() {
        assert_eq!(
            serde_json::from_str::<ResourceType>("\"XHR\"").unwrap(),
            ResourceType::Xhr
        );
        assert_eq!(
            serde_json::from_str::<ResourceType>("\"Image\"").unwrap(),
            ResourceType::Image
        );
    }

    #[test]
    fn sizes_default_to_zero() {
        let record: NetworkRecord = serde_json::from_str(
            r#"{"url": "https://x/a.png", "resourceType": "Image"}"#,
        )
        .unwrap();
        assert_eq!(record.resource_size, 0);
        assert_eq!(record.transfer_size, 0);
    }
}
