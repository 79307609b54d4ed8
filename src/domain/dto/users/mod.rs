//! # 사용자 DTO 모듈
//!
//! 사용자 프로필과 관련된 데이터 전송 객체입니다.
//! 현재 사용자 도메인은 응답 DTO만 노출합니다.

pub mod response;

pub use response::*;
