//! # 행사 일정 DTO 모듈

pub mod request;

pub use request::*;
