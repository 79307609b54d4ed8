//! DTO 검증 및 타입 생성 서비스

pub mod typescript_service;
pub mod validation_service;

pub use typescript_service::TypeScriptService;
pub use validation_service::DtoValidationService;
