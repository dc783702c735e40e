//! # exposr-core
//!
//! EXPOSR 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] — 호스트 환경 인터페이스 (이미지 요소, 노드 식별자)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 스캔/스코어 설정 구조체

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
