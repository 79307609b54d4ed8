//! 공통 유틸리티 함수 모듈
//!
//! DTO 필드 검증에 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열, 카드 번호 검증 함수

pub mod string_utils;
