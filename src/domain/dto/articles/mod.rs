//! # 게시글 DTO 모듈
//!
//! 게시글 작성과 댓글 작성 요청 DTO를 정의합니다.

pub mod request;

pub use request::*;
