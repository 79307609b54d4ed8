//! # 도메인 모듈
//!
//! 학생 블로그 API의 경계 계약을 정의합니다.
//!
//! - [`dto`] - 요청/응답 DTO와 필드 제약
//! - [`contract`] - DTO 형태를 기술하는 정적 메타데이터와 레지스트리

pub mod contract;
pub mod dto;

pub use contract::*;
pub use dto::*;
