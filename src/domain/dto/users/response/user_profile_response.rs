//! 사용자 프로필 응답 DTO
//!
//! 응답 DTO의 제약은 소비자가 아니라 생산자(서버)에게 적용됩니다.
//! 응답을 내보내기 전에 `validate()`로 이메일 형식을 확인할 수 있습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::contract::{Constraint, Contract, Direction, DtoContract, FieldSpec, WireType};

/// 사용자 프로필 응답 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "userId": "6f1c1c7e-8f5e-4c53-9f0e-2b8b7d3c9a10",
///   "displayName": "김학생",
///   "dateOfBirth": "2003-04-05T00:00:00Z",
///   "email": "student@example.com",
///   "bio": "컴퓨터공학과 2학년"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResDto {
    pub user_id: Uuid,
    pub display_name: String,
    pub date_of_birth: DateTime<Utc>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    pub bio: String,
}

static USER_PROFILE_CONTRACT: DtoContract = DtoContract {
    name: "UserProfileResDto",
    slug: "user-profile",
    direction: Direction::Response,
    fields: &[
        FieldSpec::plain("userId", WireType::Uuid),
        FieldSpec::plain("displayName", WireType::String),
        FieldSpec::plain("dateOfBirth", WireType::DateTime),
        FieldSpec::new("email", WireType::String, &[Constraint::Email]),
        FieldSpec::plain("bio", WireType::String),
    ],
};

impl Contract for UserProfileResDto {
    fn contract() -> &'static DtoContract {
        &USER_PROFILE_CONTRACT
    }
}
