//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 경로 파라미터를 해석하고 서비스 계층을 호출한 뒤,
//! 결과를 JSON 응답으로 변환합니다. 에러는 `AppError`의 `ResponseError`
//! 구현을 통해 일관된 JSON 에러 응답이 됩니다.
//!
//! # Modules
//!
//! - [`dto`] - DTO 계약 조회 및 페이로드 검증

pub mod dto;
