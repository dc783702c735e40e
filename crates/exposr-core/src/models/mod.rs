//! 도메인 데이터 모델.
//!
//! 와이어 포맷은 원본 브라우저 산출물(analyser 출력, devtools 네트워크 로그)과
//! 호환되는 camelCase JSON.

pub mod element;
pub mod image;
pub mod network;
pub mod scan;
pub mod waste;
