//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 각 DTO는 불변 값 타입이며, 필드 값으로 비교/직렬화됩니다.
//!
//! ## 구성
//!
//! | 모듈 | 방향 | DTO |
//! |------|------|-----|
//! | [`users`] | 응답 | `UserProfileResDto` |
//! | [`articles`] | 요청 | `ArticleCreateReqDto`, `CommentPostReqDto` |
//! | [`courses`] | 요청/응답 | `EnrollmentReqDto`, `GradeUpdateReqDto`, `CourseDetailResDto` |
//! | [`payments`] | 요청 | `PaymentProcessReqDto` |
//! | [`events`] | 요청 | `EventScheduleReqDto` |
//! | [`library`] | 요청 | `BookBorrowReqDto` |
//!
//! ## 유효성 검증 (Validation)
//!
//! | 제약 | Rust | 위반 코드 |
//! |------|------|-----------|
//! | 필수 문자열 | `#[validate(custom(function = "validate_not_blank"))]` + `#[serde(default)]` | `required` |
//! | 필수 값 | `Option<T>` + `#[validate(required)]` | `required` |
//! | 최대 길이 | `#[validate(length(max = N))]` | `length` |
//! | 범위 | `#[validate(range(min, max))]` (양 끝 포함) | `range` |
//! | 이메일 | `#[validate(email)]` | `email` |
//! | URL | `#[validate(url)]` | `url` |
//! | 카드 번호 | `#[validate(custom(function = "validate_card_number"))]` | `credit_card` |
//!
//! `validate()`는 첫 번째 위반에서 멈추지 않고 모든 위반을 모아 반환합니다.
//! 필드 간 제약(시작/종료 시각 순서 등)은 선언되어 있지 않으므로 검사하지 않습니다.
//!
//! ## 와이어 포맷
//!
//! JSON 필드명은 camelCase(`featuredImageUrl`), UUID는 하이픈 포함 문자열,
//! 날짜/시간은 RFC 3339 문자열입니다.

pub mod articles;
pub mod courses;
pub mod events;
pub mod library;
pub mod payments;
pub mod users;

pub use articles::*;
pub use courses::*;
pub use events::*;
pub use library::*;
pub use payments::*;
pub use users::*;
