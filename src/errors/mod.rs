//! 에러 타입과 검증 위반 변환 유틸리티

pub mod errors;

pub use errors::*;
