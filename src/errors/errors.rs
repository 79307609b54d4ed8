//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! DTO 계약 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 응답을 제공합니다.
//!
//! 유효성 검증 실패는 첫 번째 위반에서 멈추지 않고, 레코드의 모든 위반 사항을
//! `(field, constraint, value)` 형태로 모아서 한 번에 반환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::errors::AppError;
//!
//! fn accept(dto: ArticleCreateReqDto) -> Result<ArticleCreateReqDto, AppError> {
//!     dto.validate()?;
//!     Ok(dto)
//! }
//! ```

use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// 단일 필드 제약 위반 정보
///
/// `field`는 와이어 포맷(camelCase) 기준의 필드명이며,
/// `constraint`는 위반된 제약 코드(`required`, `length`, `range`, `email`, `url`, `credit_card`)입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub constraint: String,
    /// 위반 당시의 실제 값 (값이 없으면 `null`)
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 애플리케이션 전역 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필드 제약 위반 (400 Bad Request)
    #[error("Validation failed: {} violation(s)", .0.len())]
    ValidationFailed(Vec<FieldViolation>),

    /// 잘못된 요청 본문, 타입 불일치 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 기계 판독용 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationFailed(_) => "validation_failed",
            AppError::BadRequest(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationFailed(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 실패인 경우 `details`에 모든 위반 사항을 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationFailed(violations) => serde_json::json!({
                "error": self.code(),
                "message": self.to_string(),
                "details": violations,
            }),
            _ => serde_json::json!({
                "error": self.code(),
                "message": self.to_string(),
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationFailed(collect_violations(&errors))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// `validator`의 에러 트리를 평탄한 위반 목록으로 변환합니다.
///
/// 필드명은 camelCase 와이어 이름으로 바꾸고, 필드 → 제약 순으로 정렬하여
/// 응답이 항상 같은 순서를 갖도록 합니다.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    flatten_into(errors, None, &mut violations);
    violations.sort_by(|a, b| {
        a.field
            .cmp(&b.field)
            .then_with(|| a.constraint.cmp(&b.constraint))
    });
    violations
}

fn flatten_into(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let wire = to_wire_name(&field.to_string());
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, wire),
            None => wire,
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    out.push(FieldViolation {
                        field: path.clone(),
                        constraint: error.code.to_string(),
                        value: error
                            .params
                            .get("value")
                            .cloned()
                            .unwrap_or(serde_json::Value::Null),
                        message: error.message.as_ref().map(|m| m.to_string()),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_into(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_into(nested, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

/// snake_case 필드명을 camelCase 와이어 이름으로 변환합니다.
///
/// 이미 camelCase인 이름은 그대로 반환됩니다.
pub fn to_wire_name(field: &str) -> String {
    let mut wire = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = !wire.is_empty();
        } else if upper_next {
            wire.extend(c.to_uppercase());
            upper_next = false;
        } else {
            wire.push(c);
        }
    }
    wire
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::ValidationError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationFailed(vec![FieldViolation {
            field: "title".to_string(),
            constraint: "required".to_string(),
            value: serde_json::Value::Null,
            message: None,
        }]);
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_error_response() {
        let error = AppError::BadRequest("expected a JSON object".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("unknown dto".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_to_wire_name() {
        assert_eq!(to_wire_name("featured_image_url"), "featuredImageUrl");
        assert_eq!(to_wire_name("cvv"), "cvv");
        assert_eq!(to_wire_name("organizerEmail"), "organizerEmail");
        assert_eq!(to_wire_name("__schema__"), "schema");
    }

    #[test]
    fn test_collect_violations_keeps_every_error_sorted() {
        let mut errors = ValidationErrors::new();

        let mut range = ValidationError::new("range");
        range.add_param("value".into(), &0);
        errors.add("year", range);
        errors.add("featured_image_url", ValidationError::new("url"));
        errors.add("content", ValidationError::new("required"));
        errors.add("content", ValidationError::new("length"));

        let violations = collect_violations(&errors);
        let pairs: Vec<(&str, &str)> = violations
            .iter()
            .map(|v| (v.field.as_str(), v.constraint.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("content", "length"),
                ("content", "required"),
                ("featuredImageUrl", "url"),
                ("year", "range"),
            ]
        );
        assert_eq!(violations[3].value, serde_json::json!(0));
        assert_eq!(violations[2].value, serde_json::Value::Null);
    }

    #[test]
    fn test_from_validation_errors() {
        let mut errors = ValidationErrors::new();
        errors.add("cvv", ValidationError::new("range"));

        match AppError::from(errors) {
            AppError::ValidationFailed(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "cvv");
            }
            other => panic!("Expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
