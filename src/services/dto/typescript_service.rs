//! # TypeScript 타입 생성 서비스
//!
//! DTO 계약을 프론트엔드에서 사용할 TypeScript `export type` 정의로 변환합니다.
//!
//! ```text
//! export type ArticleCreateReqDto = {
//!   title: string; // required
//!   content: string; // required, maxLength(5000)
//!   featuredImageUrl: string; // url
//!   authorId: string; // UUID in string format
//! }
//! ```
//!
//! 값이 없을 때 `null`로 직렬화되는 필드는 `T | null`로 렌더링됩니다.

use crate::domain::contract::{DtoContract, FieldSpec};

pub struct TypeScriptService;

impl TypeScriptService {
    /// 여러 계약을 하나의 TypeScript 소스로 렌더링합니다.
    ///
    /// 각 타입 정의 사이에는 빈 줄이 하나 들어갑니다.
    pub fn render_all<'a, I>(contracts: I) -> String
    where
        I: IntoIterator<Item = &'a DtoContract>,
    {
        let mut out = String::new();
        for contract in contracts {
            out.push_str(&Self::render(contract));
            out.push('\n');
        }
        out
    }

    /// 단일 계약을 `export type` 블록으로 렌더링합니다.
    pub fn render(contract: &DtoContract) -> String {
        let mut out = format!("export type {} = {{\n", contract.name);
        for field in contract.fields {
            out.push_str("  ");
            out.push_str(&Self::render_field(field));
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }

    fn render_field(field: &FieldSpec) -> String {
        let nullable = if field.nullable { " | null" } else { "" };
        let mut line = format!("{}: {}{};", field.name, field.wire_type.typescript(), nullable);

        let mut notes: Vec<String> = Vec::new();
        if let Some(note) = field.wire_type.note() {
            notes.push(note.to_string());
        }
        if !field.constraints.is_empty() {
            notes.push(
                field
                    .constraints
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            );
        }

        if !notes.is_empty() {
            line.push_str(&format!(" // {}", notes.join("; ")));
        }
        line
    }
}
