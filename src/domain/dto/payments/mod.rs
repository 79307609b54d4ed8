//! # 결제 DTO 모듈

pub mod request;

pub use request::*;
