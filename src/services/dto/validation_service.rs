//! # DTO 검증 서비스
//!
//! 임의의 JSON 페이로드를 지정된 DTO로 역직렬화하고 필드 제약을 검증합니다.
//!
//! ## 처리 단계
//!
//! 1. **역직렬화**: JSON → DTO. 타입 불일치, 누락된 비필수 키는 `BadRequest`
//! 2. **검증**: `Validate::validate`로 모든 위반 수집 → `ValidationFailed`
//! 3. **정규화**: 검증된 DTO를 다시 JSON으로 직렬화하여 반환
//!
//! 누락된 필수 문자열은 1단계가 아니라 2단계에서 `required` 위반으로 보고됩니다.

use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::contract::DtoKind;
use crate::domain::dto::{
    ArticleCreateReqDto, BookBorrowReqDto, CommentPostReqDto, CourseDetailResDto,
    EnrollmentReqDto, EventScheduleReqDto, GradeUpdateReqDto, PaymentProcessReqDto,
    UserProfileResDto,
};
use crate::errors::{AppError, AppResult, ErrorContext};

/// DTO 검증 서비스
///
/// 상태를 갖지 않으므로 연관 함수로만 사용합니다.
///
/// ```rust,ignore
/// let normalized = DtoValidationService::validate(DtoKind::Enrollment, payload)?;
/// ```
pub struct DtoValidationService;

impl DtoValidationService {
    /// 페이로드를 `kind`에 해당하는 DTO로 검증하고 정규화된 JSON을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - JSON이 DTO 형태와 맞지 않음
    /// * `AppError::ValidationFailed` - 하나 이상의 필드 제약 위반 (모든 위반 포함)
    pub fn validate(kind: DtoKind, payload: serde_json::Value) -> AppResult<serde_json::Value> {
        match kind {
            DtoKind::UserProfile => Self::check::<UserProfileResDto>(kind, payload),
            DtoKind::ArticleCreate => Self::check::<ArticleCreateReqDto>(kind, payload),
            DtoKind::CommentPost => Self::check::<CommentPostReqDto>(kind, payload),
            DtoKind::Enrollment => Self::check::<EnrollmentReqDto>(kind, payload),
            DtoKind::CourseDetail => Self::check::<CourseDetailResDto>(kind, payload),
            DtoKind::PaymentProcess => Self::check::<PaymentProcessReqDto>(kind, payload),
            DtoKind::EventSchedule => Self::check::<EventScheduleReqDto>(kind, payload),
            DtoKind::GradeUpdate => Self::check::<GradeUpdateReqDto>(kind, payload),
            DtoKind::BookBorrow => Self::check::<BookBorrowReqDto>(kind, payload),
        }
    }

    /// 페이로드를 DTO 타입으로 파싱한 뒤 검증합니다.
    pub fn parse<T>(kind: DtoKind, payload: serde_json::Value) -> AppResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let dto: T = serde_json::from_value(payload).map_err(|e| {
            log::debug!("{} 역직렬화 실패: {}", kind, e);
            AppError::BadRequest(format!("{} 형식이 올바르지 않습니다: {}", kind, e))
        })?;

        if let Err(errors) = dto.validate() {
            let error = AppError::from(errors);
            if let AppError::ValidationFailed(violations) = &error {
                log::info!(
                    "{} 검증 실패 - 위반 {}건: {}",
                    kind,
                    violations.len(),
                    violations
                        .iter()
                        .map(|v| format!("{}({})", v.field, v.constraint))
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            return Err(error);
        }

        Ok(dto)
    }

    fn check<T>(kind: DtoKind, payload: serde_json::Value) -> AppResult<serde_json::Value>
    where
        T: DeserializeOwned + Validate + Serialize,
    {
        let dto = Self::parse::<T>(kind, payload)?;
        serde_json::to_value(&dto).with_context(|| format!("{} 직렬화 실패", kind))
    }
}
