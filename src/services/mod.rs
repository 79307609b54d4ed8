//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 상태가 없는 서비스들로, 핸들러에서 연관 함수로 직접 호출합니다.
//!
//! # Features
//!
//! - JSON 페이로드의 DTO 역직렬화 및 필드 제약 검증
//! - DTO 계약의 TypeScript 타입 정의 생성
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::dto::{DtoValidationService, TypeScriptService};
//!
//! let normalized = DtoValidationService::validate(DtoKind::ArticleCreate, payload)?;
//! let ts = TypeScriptService::render_all(DtoKind::contracts());
//! ```

pub mod dto;
