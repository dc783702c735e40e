//! 낭비 바이트 계산기.
//!
//! 스캔 결과의 이미지 레코드를 네트워크 로그와 URL로 대조해
//! 낭비된 바이트를 집계한다. 같은 URL이 여러 번 쓰였으면
//! 가장 낭비가 적은 사용례만 남긴다 (보수적 하한).

use std::collections::BTreeMap;

use tracing::debug;
use url::Url;

use exposr_core::error::CoreError;
use exposr_core::models::image::ImageRecord;
use exposr_core::models::network::{NetworkRecord, ResourceType};
use exposr_core::models::waste::WasteItem;

/// 보고 최소 낭비 바이트. 이 값 미만은 노이즈로 간주해 제외한다.
pub const IGNORE_THRESHOLD_IN_BYTES: u64 = 2048;

/// data URI 절단 길이 (표시용)
const DATA_URI_ELIDE_LEN: usize = 100;

/// 낭비 계산 결과
#[derive(Debug, Clone, Default)]
pub struct WasteAnalysis {
    /// 확인된 낭비 이미지 (wastedBytes 내림차순)
    pub items: Vec<WasteItem>,
    /// 이미지별 처리 실패 경고
    pub warnings: Vec<String>,
}

/// 중복 제거 단계까지 들고 다니는 중간 후보.
/// 필터 단계에서 네트워크 레코드를 다시 찾지 않도록 타입/MIME을 동반한다.
struct Candidate {
    item: WasteItem,
    resource_type: ResourceType,
    mime_type: String,
}

/// 표시용 URL 정규화 — data URI는 앞 100자로 절단한다.
pub fn elide_data_uri(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(parsed) if parsed.scheme() == "data" => raw.chars().take(DATA_URI_ELIDE_LEN).collect(),
        _ => raw.to_string(),
    }
}

/// 이미지 레코드 한 건의 낭비 후보 계산.
///
/// - `currentSrc`와 일치하는 첫 네트워크 레코드를 선형 탐색 (first match wins)
/// - 일치 없음 → `Ok(None)`: 경고 없이 조용히 제외
/// - `totalBytes = wastedBytes = min(resourceSize, transferSize)`
/// - 스캔 불변식을 깨는 레코드(빈 `currentSrc`)는 에러 → 호출자가 경고로 변환
fn compute_item(
    image: &ImageRecord,
    records: &[NetworkRecord],
) -> Result<Option<Candidate>, CoreError> {
    if image.current_src.is_empty() {
        return Err(CoreError::Validation {
            field: "currentSrc".to_string(),
            message: format!("빈 URL (src: {})", image.src),
        });
    }

    let Some(record) = records.iter().find(|r| r.url == image.current_src) else {
        return Ok(None);
    };

    // 압축 회계나 불완전한 레코드로 resourceSize가 전송량을 넘을 수 있다
    let total_bytes = record.resource_size.min(record.transfer_size);

    Ok(Some(Candidate {
        item: WasteItem {
            url: elide_data_uri(&image.current_src),
            current_src: image.current_src.clone(),
            total_bytes,
            wasted_bytes: total_bytes,
        },
        resource_type: record.resource_type,
        mime_type: record.mime_type.clone(),
    }))
}

/// 낭비 바이트 집계.
///
/// 1. 레코드별 후보 계산 ([`compute_item`]) — 실패는 경고로 수집하고 계속
/// 2. URL(절단 후) 기준 중복 제거 — `wastedBytes` 최솟값 유지
/// 3. 필터 — 리소스 타입이 Image가 아니거나, MIME이 `text/plain`이거나,
///    `wastedBytes`가 임계값 미만이면 제외
/// 4. `wastedBytes` 내림차순 정렬 (동률은 URL 오름차순)
pub fn compute_waste(images: &[ImageRecord], records: &[NetworkRecord]) -> WasteAnalysis {
    let mut warnings = Vec::new();
    let mut by_url: BTreeMap<String, Candidate> = BTreeMap::new();

    for image in images {
        match compute_item(image, records) {
            Ok(Some(candidate)) => {
                let key = candidate.item.url.clone();
                // 같은 키가 이미 있으면 낭비가 더 적은 쪽만 유지 (동률은 선착순)
                let keep_existing = by_url
                    .get(&key)
                    .is_some_and(|existing| existing.item.wasted_bytes <= candidate.item.wasted_bytes);
                if !keep_existing {
                    by_url.insert(key, candidate);
                }
            }
            Ok(None) => {
                debug!(current_src = %image.current_src, "네트워크 레코드 없음, 제외");
            }
            Err(err) => warnings.push(err.to_string()),
        }
    }

    let mut items: Vec<WasteItem> = by_url
        .into_values()
        .filter(|c| {
            c.resource_type == ResourceType::Image
                && c.mime_type != "text/plain"
                && c.item.wasted_bytes >= IGNORE_THRESHOLD_IN_BYTES
        })
        .map(|c| c.item)
        .collect();

    items.sort_by(|a, b| {
        b.wasted_bytes
            .cmp(&a.wasted_bytes)
            .then_with(|| a.url.cmp(&b.url))
    });

    WasteAnalysis { items, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use exposr_core::models::element::LoadingMode;
    use std::collections::BTreeSet;

    fn image(current_src: &str) -> ImageRecord {
        ImageRecord {
            parent_node_name: "DIV".to_string(),
            parent_class_list: BTreeSet::new(),
            src: current_src.to_string(),
            current_src: current_src.to_string(),
            client_height: 0,
            class_list: BTreeSet::new(),
            alt: String::new(),
            width: 0,
            height: 0,
            loading: LoadingMode::Auto,
            node: None,
        }
    }

    fn record(url: &str, resource_size: u64, transfer_size: u64) -> NetworkRecord {
        NetworkRecord {
            url: url.to_string(),
            resource_type: ResourceType::Image,
            mime_type: "image/png".to_string(),
            resource_size,
            transfer_size,
        }
    }

    #[test]
    fn waste_is_min_of_resource_and_transfer_size() {
        let analysis = compute_waste(
            &[image("https://x/a.png")],
            &[record("https://x/a.png", 5_000, 3_000)],
        );
        assert_eq!(analysis.items.len(), 1);
        assert_eq!(analysis.items[0].total_bytes, 3_000);
        assert_eq!(analysis.items[0].wasted_bytes, 3_000);
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn hidden_image_scenario() {
        let analysis = compute_waste(
            &[image("https://x/a.png")],
            &[record("https://x/a.png", 10_000, 10_000)],
        );
        assert_eq!(
            analysis.items,
            vec![WasteItem {
                url: "https://x/a.png".to_string(),
                current_src: "https://x/a.png".to_string(),
                total_bytes: 10_000,
                wasted_bytes: 10_000,
            }]
        );
    }

    /// 절단 후 같은 키로 수렴하는 data URI 두 개 (앞 100자 공유)
    fn colliding_data_uris() -> (String, String) {
        let prefix = format!("data:image/png;base64,{}", "A".repeat(90));
        (format!("{prefix}BBBB"), format!("{prefix}CCCC"))
    }

    #[test]
    fn duplicate_url_keeps_least_wasteful() {
        // 같은 표시 URL로 수렴하는 사용례가 여럿이면 낭비 최솟값만 남는다
        let (uri_a, uri_b) = colliding_data_uris();
        let records = vec![record(&uri_a, 3_000, 3_000), record(&uri_b, 2_500, 2_500)];
        let images = vec![image(&uri_a), image(&uri_b)];

        let analysis = compute_waste(&images, &records);
        assert_eq!(analysis.items.len(), 1);
        assert_eq!(analysis.items[0].wasted_bytes, 2_500);
        assert_eq!(analysis.items[0].current_src, uri_b);
    }

    #[test]
    fn dedup_minimum_can_fall_below_threshold() {
        // 500 vs 2500 → 최솟값 500이 유지되고, 이후 임계값 필터에서 탈락.
        // 보수적 하한이 보고 자체를 지우는 경우다.
        let (uri_a, uri_b) = colliding_data_uris();
        let records = vec![record(&uri_a, 2_500, 2_500), record(&uri_b, 500, 500)];
        let images = vec![image(&uri_a), image(&uri_b)];

        let analysis = compute_waste(&images, &records);
        assert!(analysis.items.is_empty());
    }

    #[test]
    fn threshold_is_inclusive_at_boundary() {
        let at = compute_waste(
            &[image("https://x/at.png")],
            &[record("https://x/at.png", 2_048, 2_048)],
        );
        assert_eq!(at.items.len(), 1);

        let below = compute_waste(
            &[image("https://x/below.png")],
            &[record("https://x/below.png", 2_047, 2_047)],
        );
        assert!(below.items.is_empty());
    }

    #[test]
    fn non_image_records_are_filtered() {
        let mut doc = record("https://x/doc", 50_000, 50_000);
        doc.resource_type = ResourceType::Document;

        // <img src>로 요청됐지만 트래킹 픽셀류가 text/plain으로 응답하는 경우
        let mut plain = record("https://x/pixel", 50_000, 50_000);
        plain.mime_type = "text/plain".to_string();

        let analysis = compute_waste(
            &[image("https://x/doc"), image("https://x/pixel")],
            &[doc, plain],
        );
        assert!(analysis.items.is_empty());
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn missing_network_record_is_silently_dropped() {
        let analysis = compute_waste(&[image("https://x/ghost.png")], &[]);
        assert!(analysis.items.is_empty());
        // 레코드 부재는 경고 경로가 아니다
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn malformed_record_becomes_warning() {
        let mut broken = image("");
        broken.src = "https://x/broken.png".to_string();

        let analysis = compute_waste(
            &[broken, image("https://x/ok.png")],
            &[record("https://x/ok.png", 4_000, 4_000)],
        );
        // 실패한 건은 경고로 남고 나머지는 계속 처리된다
        assert_matches!(analysis.warnings.as_slice(), [w] if w.contains("currentSrc"));
        assert_eq!(analysis.items.len(), 1);
    }

    #[test]
    fn items_sorted_by_descending_waste() {
        let records = vec![
            record("https://x/small.png", 3_000, 3_000),
            record("https://x/large.png", 9_000, 9_000),
        ];
        let analysis = compute_waste(
            &[image("https://x/small.png"), image("https://x/large.png")],
            &records,
        );
        assert_eq!(analysis.items[0].url, "https://x/large.png");
        assert_eq!(analysis.items[1].url, "https://x/small.png");
    }

    #[test]
    fn first_matching_record_wins() {
        // 같은 URL의 레코드가 중복 관측돼도 앞선 것이 결정적으로 쓰인다
        let records = vec![
            record("https://x/a.png", 4_000, 4_000),
            record("https://x/a.png", 8_000, 8_000),
        ];
        let analysis = compute_waste(&[image("https://x/a.png")], &records);
        assert_eq!(analysis.items[0].wasted_bytes, 4_000);
    }

    #[test]
    fn data_uri_is_elided_for_display() {
        let long_uri = format!("data:image/png;base64,{}", "A".repeat(4_096));
        let elided = elide_data_uri(&long_uri);
        assert_eq!(elided.chars().count(), 100);

        assert_eq!(elide_data_uri("https://x/a.png"), "https://x/a.png");
        // 파싱 불가능한 문자열은 그대로 둔다
        assert_eq!(elide_data_uri("not a url"), "not a url");
    }
}
