//! DTO Contract HTTP Handlers
//!
//! DTO 계약 조회, TypeScript 타입 정의 제공, 페이로드 검증 엔드포인트입니다.
//!
//! # Endpoints
//!
//! - `GET /api/v1/dto` - 모든 DTO 계약 목록
//! - `GET /api/v1/dto/typescript` - TypeScript 타입 정의
//! - `GET /api/v1/dto/{name}` - 단일 DTO 계약
//! - `POST /api/v1/dto/{name}/validate` - 페이로드 검증
use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, get, post, web};
use serde_json::json;

use crate::domain::contract::DtoKind;
use crate::errors::AppError;
use crate::services::dto::{DtoValidationService, TypeScriptService};

fn resolve(name: &str) -> Result<DtoKind, AppError> {
    DtoKind::lookup(name).ok_or_else(|| {
        log::debug!("알 수 없는 DTO 요청: {}", name);
        AppError::NotFound(format!("DTO '{}'을(를) 찾을 수 없습니다", name))
    })
}

/// DTO 계약 목록 핸들러
///
/// # Endpoint
/// `GET /api/v1/dto`
#[get("")]
pub async fn list_contracts() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "contracts": DtoKind::contracts(),
    }))
}

/// TypeScript 타입 정의 핸들러
///
/// 모든 DTO의 `export type` 정의를 `text/plain`으로 반환합니다.
///
/// # Endpoint
/// `GET /api/v1/dto/typescript`
#[get("/typescript")]
pub async fn typescript_definitions() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(TypeScriptService::render_all(DtoKind::contracts()))
}

/// 단일 DTO 계약 조회 핸들러
///
/// `name`은 slug(`article-create`) 또는 타입 이름(`ArticleCreateReqDto`)입니다.
///
/// # Endpoint
/// `GET /api/v1/dto/{name}`
#[get("/{name}")]
pub async fn get_contract(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let kind = resolve(&path)?;

    Ok(HttpResponse::Ok().json(kind.contract()))
}

/// 페이로드 검증 핸들러
///
/// 요청 본문을 지정된 DTO로 역직렬화하고 모든 필드 제약을 검사합니다.
///
/// # Endpoint
/// `POST /api/v1/dto/{name}/validate`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "dto": "GradeUpdateReqDto", "valid": true, "value": { "enrollmentId": "...", "score": 87.5 } }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "error": "validation_failed",
///   "message": "Validation failed: 2 violation(s)",
///   "details": [
///     { "field": "content", "constraint": "length", "value": "..." },
///     { "field": "title", "constraint": "required", "value": "" }
///   ]
/// }
/// ```
#[post("/{name}/validate")]
pub async fn validate_dto(
    path: web::Path<String>,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    let kind = resolve(&path)?;
    let value = DtoValidationService::validate(kind, payload.into_inner())?;

    log::debug!("{} 검증 통과", kind);

    Ok(HttpResponse::Ok().json(json!({
        "dto": kind.contract().name,
        "valid": true,
        "value": value,
    })))
}

/// JSON 본문 파싱 실패를 `AppError::BadRequest` 응답으로 변환합니다.
///
/// `web::JsonConfig::error_handler`에 등록합니다.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("JSON 본문 파싱 실패 - {}: {}", req.path(), err);
    AppError::BadRequest(format!("JSON 본문을 읽을 수 없습니다: {}", err)).into()
}
