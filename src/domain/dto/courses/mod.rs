//! # 수강 DTO 모듈
//!
//! 수강 신청, 강의 상세, 성적 입력 DTO를 정의합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
