//! 필드 수준 계약 메타데이터
//!
//! 각 DTO 필드의 와이어 이름, 의미 타입, 선언된 제약을 정적 데이터로 표현합니다.
//! 검증 자체는 `validator` derive가 수행하며, 이 메타데이터는 계약 조회 API와
//! TypeScript 타입 생성에 사용됩니다.

use std::fmt;

use serde::Serialize;

/// 와이어 상의 의미 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WireType {
    /// 문자열 형태의 UUID
    Uuid,
    String,
    /// RFC 3339 형식의 날짜/시간 문자열
    DateTime,
    Integer,
    Float,
}

impl WireType {
    /// TypeScript 타입 이름
    pub fn typescript(&self) -> &'static str {
        match self {
            WireType::Uuid | WireType::String | WireType::DateTime => "string",
            WireType::Integer | WireType::Float => "number",
        }
    }

    /// 문자열로 표현되는 비문자열 타입에 대한 설명
    pub fn note(&self) -> Option<&'static str> {
        match self {
            WireType::Uuid => Some("UUID in string format"),
            WireType::DateTime => Some("RFC 3339 date-time in string format"),
            _ => None,
        }
    }
}

/// 필드에 선언된 제약
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Constraint {
    Required,
    MaxLength { max: u64 },
    Range { min: f64, max: f64 },
    Email,
    Url,
    CreditCard,
}

impl Constraint {
    /// 위반 시 보고되는 제약 코드 (`FieldViolation::constraint`와 동일)
    pub fn code(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::MaxLength { .. } => "length",
            Constraint::Range { .. } => "range",
            Constraint::Email => "email",
            Constraint::Url => "url",
            Constraint::CreditCard => "credit_card",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Required => write!(f, "required"),
            Constraint::MaxLength { max } => write!(f, "maxLength({})", max),
            Constraint::Range { min, max } => write!(f, "range({}, {})", min, max),
            Constraint::Email => write!(f, "email"),
            Constraint::Url => write!(f, "url"),
            Constraint::CreditCard => write!(f, "creditCard"),
        }
    }
}

/// 단일 필드 명세
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    /// camelCase 와이어 이름
    pub name: &'static str,
    #[serde(rename = "type")]
    pub wire_type: WireType,
    pub constraints: &'static [Constraint],
    /// 값이 없을 때 `null`로 직렬화되는 필드
    pub nullable: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, wire_type: WireType, constraints: &'static [Constraint]) -> Self {
        Self { name, wire_type, constraints, nullable: false }
    }

    pub const fn plain(name: &'static str, wire_type: WireType) -> Self {
        Self::new(name, wire_type, &[])
    }

    pub const fn nullable(self) -> Self {
        Self { nullable: true, ..self }
    }

    pub fn is_required(&self) -> bool {
        self.constraints.contains(&Constraint::Required)
    }
}
