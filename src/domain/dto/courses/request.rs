//! 수강 신청 / 성적 입력 요청 DTO

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::contract::{Constraint, Contract, Direction, DtoContract, FieldSpec, WireType};

/// 수강 신청 요청 DTO
///
/// `year`는 학년(1-4)이며 필수입니다. 누락되면 `required` 위반으로 보고됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentReqDto {
    pub student_id: Uuid,
    pub course_id: Uuid,

    #[validate(required(message = "학년을 입력해주세요"))]
    #[validate(range(min = 1, max = 4, message = "학년은 1-4 사이여야 합니다"))]
    pub year: Option<i64>,
}

static ENROLLMENT_CONTRACT: DtoContract = DtoContract {
    name: "EnrollmentReqDto",
    slug: "enrollment",
    direction: Direction::Request,
    fields: &[
        FieldSpec::plain("studentId", WireType::Uuid),
        FieldSpec::plain("courseId", WireType::Uuid),
        FieldSpec::new(
            "year",
            WireType::Integer,
            &[Constraint::Required, Constraint::Range { min: 1.0, max: 4.0 }],
        )
        .nullable(),
    ],
};

impl Contract for EnrollmentReqDto {
    fn contract() -> &'static DtoContract {
        &ENROLLMENT_CONTRACT
    }
}

/// 성적 입력 요청 DTO
///
/// 점수는 0.0 이상 100.0 이하 (양 끝 포함). NaN은 범위 밖으로 취급합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GradeUpdateReqDto {
    pub enrollment_id: Uuid,

    #[validate(range(min = 0.0, max = 100.0, message = "점수는 0-100 사이여야 합니다"))]
    #[validate(custom(function = "validate_score_is_number"))]
    pub score: f64,
}

/// `range` 검증기는 NaN을 통과시키므로 별도로 거부합니다.
fn validate_score_is_number(score: f64) -> Result<(), ValidationError> {
    if !score.is_nan() {
        return Ok(());
    }

    let mut error = ValidationError::new("range")
        .with_message(Cow::from("점수는 0-100 사이여야 합니다"));
    error.add_param(Cow::from("value"), &score);
    Err(error)
}

static GRADE_UPDATE_CONTRACT: DtoContract = DtoContract {
    name: "GradeUpdateReqDto",
    slug: "grade-update",
    direction: Direction::Request,
    fields: &[
        FieldSpec::plain("enrollmentId", WireType::Uuid),
        FieldSpec::new("score", WireType::Float, &[Constraint::Range { min: 0.0, max: 100.0 }]),
    ],
};

impl Contract for GradeUpdateReqDto {
    fn contract() -> &'static DtoContract {
        &GRADE_UPDATE_CONTRACT
    }
}
