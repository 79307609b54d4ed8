//! 도서 대출 요청 DTO
//!
//! 반납 예정일이 대출일 이후인지는 검증하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::contract::{Constraint, Contract, Direction, DtoContract, FieldSpec, WireType};

/// 도서 대출 요청 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookBorrowReqDto {
    pub user_id: Uuid,
    pub book_id: Uuid,

    #[validate(required(message = "대출일을 입력해주세요"))]
    pub borrow_date: Option<DateTime<Utc>>,

    pub expected_return_date: DateTime<Utc>,
}

static BOOK_BORROW_CONTRACT: DtoContract = DtoContract {
    name: "BookBorrowReqDto",
    slug: "book-borrow",
    direction: Direction::Request,
    fields: &[
        FieldSpec::plain("userId", WireType::Uuid),
        FieldSpec::plain("bookId", WireType::Uuid),
        FieldSpec::new("borrowDate", WireType::DateTime, &[Constraint::Required]).nullable(),
        FieldSpec::plain("expectedReturnDate", WireType::DateTime),
    ],
};

impl Contract for BookBorrowReqDto {
    fn contract() -> &'static DtoContract {
        &BOOK_BORROW_CONTRACT
    }
}
