//! # exposr-audit
//!
//! 숨은 이미지 감사 파이프라인.
//! 높이 0으로 렌더링됐지만 네트워크로 다운로드된 `<img>` 요소를 찾아
//! 낭비된 바이트를 집계하고 log-normal 점수를 매긴다.
//!
//! ## 파이프라인
//!
//! - [`classifier`] — 요소 한 개의 hidden-but-fetched 판정
//! - [`scanner`] — 후보 요소 열거 + 분류기 일괄 적용
//! - [`waste`] — 네트워크 레코드 대조, 바이트 계산, URL 중복 제거
//! - [`score`] — log-normal 점수 곡선
//! - [`report`] — 스캔 결과 + 네트워크 로그 → 감사 리포트
//!
//! 모든 단계는 동기·순수 함수이며 내부 상태를 갖지 않는다.

pub mod classifier;
pub mod report;
pub mod scanner;
pub mod score;
pub mod waste;

pub use classifier::{classify, ScanContext};
pub use report::{run_audit, AuditReport};
pub use scanner::Scanner;
pub use waste::{compute_waste, WasteAnalysis, IGNORE_THRESHOLD_IN_BYTES};
