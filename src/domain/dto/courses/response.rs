//! 강의 상세 응답 DTO

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::contract::{Constraint, Contract, Direction, DtoContract, FieldSpec, WireType};

/// 강의 상세 응답 DTO
///
/// `semester`는 1-8 학기 범위입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetailResDto {
    pub course_id: Uuid,
    pub course_name: String,
    pub description: String,

    #[validate(range(min = 1, max = 8, message = "학기는 1-8 사이여야 합니다"))]
    pub semester: i64,

    pub professor_name: String,
}

static COURSE_DETAIL_CONTRACT: DtoContract = DtoContract {
    name: "CourseDetailResDto",
    slug: "course-detail",
    direction: Direction::Response,
    fields: &[
        FieldSpec::plain("courseId", WireType::Uuid),
        FieldSpec::plain("courseName", WireType::String),
        FieldSpec::plain("description", WireType::String),
        FieldSpec::new("semester", WireType::Integer, &[Constraint::Range { min: 1.0, max: 8.0 }]),
        FieldSpec::plain("professorName", WireType::String),
    ],
};

impl Contract for CourseDetailResDto {
    fn contract() -> &'static DtoContract {
        &COURSE_DETAIL_CONTRACT
    }
}
