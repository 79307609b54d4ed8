//! # DTO 계약 (Contract) 모듈
//!
//! API 경계에서 교환되는 각 DTO의 형태(필드, 타입, 제약)를 정적 데이터로 기술합니다.
//!
//! | 타입 | 역할 |
//! |------|------|
//! | [`DtoContract`] | 레코드 단위 계약 (이름, 방향, 필드 목록) |
//! | [`FieldSpec`] | 필드 단위 명세 |
//! | [`Contract`] | DTO 타입과 계약을 연결하는 trait |
//! | [`DtoKind`] | 서비스가 다루는 모든 DTO의 열거 |

pub mod field;
pub mod registry;

pub use field::*;
pub use registry::*;

use serde::Serialize;

/// 데이터 흐름 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// 인바운드 요청 본문에서 역직렬화됨
    Request,
    /// 아웃바운드 응답 본문으로 직렬화됨 (제약은 생산자에게 적용)
    Response,
}

/// 레코드 단위 계약
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DtoContract {
    /// DTO 타입 이름 (예: `ArticleCreateReqDto`)
    pub name: &'static str,
    /// URL 경로에서 사용하는 식별자 (예: `article-create`)
    pub slug: &'static str,
    pub direction: Direction,
    pub fields: &'static [FieldSpec],
}

impl DtoContract {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// DTO 타입이 자신의 정적 계약을 제공하도록 하는 trait
pub trait Contract {
    fn contract() -> &'static DtoContract;
}
