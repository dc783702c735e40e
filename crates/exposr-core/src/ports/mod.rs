//! 호스트 환경 포트 인터페이스.
//!
//! 분류기/스캐너가 의존하는 최소 능력 집합을 trait로 정의한다.
//! 실제 DOM 요소가 아니라 이 인터페이스를 만족하는 어떤 객체든 허용된다.

pub mod element;
pub mod inspector;
