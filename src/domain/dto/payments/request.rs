//! 결제 처리 요청 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::contract::{Constraint, Contract, Direction, DtoContract, FieldSpec, WireType};
use crate::utils::string_utils::validate_card_number;

/// 결제 처리 요청 DTO
///
/// - `cardNumber`: 공백/하이픈 구분자 허용, Luhn 체크섬 통과 필요
/// - `cvv`: 100-999
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProcessReqDto {
    pub user_id: Uuid,

    #[validate(custom(function = "validate_card_number"))]
    pub card_number: String,

    pub card_expiry: DateTime<Utc>,

    #[validate(range(min = 100, max = 999, message = "CVV는 3자리 숫자여야 합니다"))]
    pub cvv: i64,
}

static PAYMENT_PROCESS_CONTRACT: DtoContract = DtoContract {
    name: "PaymentProcessReqDto",
    slug: "payment-process",
    direction: Direction::Request,
    fields: &[
        FieldSpec::plain("userId", WireType::Uuid),
        FieldSpec::new("cardNumber", WireType::String, &[Constraint::CreditCard]),
        FieldSpec::plain("cardExpiry", WireType::DateTime),
        FieldSpec::new("cvv", WireType::Integer, &[Constraint::Range { min: 100.0, max: 999.0 }]),
    ],
};

impl Contract for PaymentProcessReqDto {
    fn contract() -> &'static DtoContract {
        &PAYMENT_PROCESS_CONTRACT
    }
}
