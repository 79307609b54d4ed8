//! 라우트 설정 모듈
//!
//! 애플리케이션의 모든 HTTP 라우트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `/api/v1/dto/*` - DTO 계약 조회 및 검증

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 에러도 `AppError` 형식으로 응답하도록 `JsonConfig`를 함께 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handlers::dto::json_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_dto_routes(cfg);
}

/// DTO 계약 라우트를 설정합니다
///
/// `/typescript`는 `/{name}`보다 먼저 등록되어야 합니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/api/v1/dto
/// curl http://localhost:8080/api/v1/dto/typescript
/// curl -X POST http://localhost:8080/api/v1/dto/enrollment/validate \
///   -H "Content-Type: application/json" \
///   -d '{"studentId":"6f1c1c7e-8f5e-4c53-9f0e-2b8b7d3c9a10","courseId":"0b7f6d2e-1c1a-4d7e-9a61-3f2f3a4c5d6e","year":5}'
/// ```
fn configure_dto_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/dto")
            .service(handlers::dto::list_contracts)
            .service(handlers::dto::typescript_definitions)
            .service(handlers::dto::get_contract)
            .service(handlers::dto::validate_dto),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "student_blog_dto",
///   "version": "0.1.0",
///   "timestamp": "2026-10-19T00:00:00Z",
///   "dto_count": 9
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "dto_count": crate::domain::contract::DtoKind::ALL.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["dto_count"], 9);
    }
}
