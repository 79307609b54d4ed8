//! # 도서 대출 DTO 모듈

pub mod request;

pub use request::*;
