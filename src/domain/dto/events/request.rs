//! 행사 일정 등록 요청 DTO
//!
//! 시작/종료 시각 사이의 순서는 검증하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::contract::{Constraint, Contract, Direction, DtoContract, FieldSpec, WireType};
use crate::utils::string_utils::validate_not_blank;

/// 행사 설명 최대 길이 (문자 수)
pub const EVENT_DESCRIPTION_MAX: u64 = 1000;

/// 행사 일정 등록 요청 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventScheduleReqDto {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub event_title: String,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    #[validate(length(max = 1000, message = "설명은 1000자를 넘을 수 없습니다"))]
    pub description: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub organizer_email: String,
}

static EVENT_SCHEDULE_CONTRACT: DtoContract = DtoContract {
    name: "EventScheduleReqDto",
    slug: "event-schedule",
    direction: Direction::Request,
    fields: &[
        FieldSpec::new("eventTitle", WireType::String, &[Constraint::Required]),
        FieldSpec::plain("startTime", WireType::DateTime),
        FieldSpec::plain("endTime", WireType::DateTime),
        FieldSpec::new(
            "description",
            WireType::String,
            &[Constraint::MaxLength { max: EVENT_DESCRIPTION_MAX }],
        ),
        FieldSpec::new("organizerEmail", WireType::String, &[Constraint::Email]),
    ],
};

impl Contract for EventScheduleReqDto {
    fn contract() -> &'static DtoContract {
        &EVENT_SCHEDULE_CONTRACT
    }
}
