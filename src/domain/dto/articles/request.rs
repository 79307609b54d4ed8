//! 게시글/댓글 요청 DTO
//!
//! 필수 문자열 필드는 `#[serde(default)]`로 선언되어, 키가 누락된 경우에도
//! 역직렬화 에러 대신 `required` 위반으로 다른 위반들과 함께 보고됩니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::contract::{Constraint, Contract, Direction, DtoContract, FieldSpec, WireType};
use crate::utils::string_utils::{validate_not_blank, validate_web_url};

/// 게시글 본문 최대 길이 (문자 수)
pub const ARTICLE_CONTENT_MAX: u64 = 5000;

/// 댓글 본문 최대 길이 (문자 수)
pub const COMMENT_BODY_MAX: u64 = 1000;

/// 게시글 작성 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "title": "첫 번째 글",
///   "content": "안녕하세요!",
///   "featuredImageUrl": "https://cdn.example.com/cover.png",
///   "authorId": "6f1c1c7e-8f5e-4c53-9f0e-2b8b7d3c9a10"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCreateReqDto {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,

    /// 게시글 본문 (최대 5000자)
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 5000, message = "본문은 5000자를 넘을 수 없습니다"))]
    pub content: String,

    /// 대표 이미지 URL (http, https, ftp만 허용)
    #[validate(custom(function = "validate_web_url"))]
    pub featured_image_url: String,

    pub author_id: Uuid,
}

static ARTICLE_CREATE_CONTRACT: DtoContract = DtoContract {
    name: "ArticleCreateReqDto",
    slug: "article-create",
    direction: Direction::Request,
    fields: &[
        FieldSpec::new("title", WireType::String, &[Constraint::Required]),
        FieldSpec::new(
            "content",
            WireType::String,
            &[Constraint::Required, Constraint::MaxLength { max: ARTICLE_CONTENT_MAX }],
        ),
        FieldSpec::new("featuredImageUrl", WireType::String, &[Constraint::Url]),
        FieldSpec::plain("authorId", WireType::Uuid),
    ],
};

impl Contract for ArticleCreateReqDto {
    fn contract() -> &'static DtoContract {
        &ARTICLE_CREATE_CONTRACT
    }
}

/// 댓글 작성 요청 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommentPostReqDto {
    pub article_id: Uuid,
    pub user_id: Uuid,

    /// 댓글 본문 (최대 1000자)
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 1000, message = "댓글은 1000자를 넘을 수 없습니다"))]
    pub body: String,
}

static COMMENT_POST_CONTRACT: DtoContract = DtoContract {
    name: "CommentPostReqDto",
    slug: "comment-post",
    direction: Direction::Request,
    fields: &[
        FieldSpec::plain("articleId", WireType::Uuid),
        FieldSpec::plain("userId", WireType::Uuid),
        FieldSpec::new(
            "body",
            WireType::String,
            &[Constraint::Required, Constraint::MaxLength { max: COMMENT_BODY_MAX }],
        ),
    ],
};

impl Contract for CommentPostReqDto {
    fn contract() -> &'static DtoContract {
        &COMMENT_POST_CONTRACT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::collect_violations;

    fn article(title: &str, content: &str, url: &str) -> ArticleCreateReqDto {
        ArticleCreateReqDto {
            title: title.to_string(),
            content: content.to_string(),
            featured_image_url: url.to_string(),
            author_id: Uuid::new_v4(),
        }
    }

    fn comment(body: &str) -> CommentPostReqDto {
        CommentPostReqDto {
            article_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_valid_article() {
        let dto = article("제목", "본문", "https://cdn.example.com/cover.png");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_content_length_boundary() {
        let url = "https://example.com";
        let exact = "가".repeat(5000);
        let over = "a".repeat(5001);

        assert!(article("제목", &exact, url).validate().is_ok());

        let errors = article("제목", &over, url).validate().unwrap_err();
        let violations = collect_violations(&errors);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "content");
        assert_eq!(violations[0].constraint, "length");
    }

    #[test]
    fn test_all_article_violations_are_collected() {
        let errors = article("  ", "", "not a url").validate().unwrap_err();
        let violations = collect_violations(&errors);
        let fields: Vec<(&str, &str)> = violations
            .iter()
            .map(|v| (v.field.as_str(), v.constraint.as_str()))
            .collect();

        assert_eq!(
            fields,
            vec![
                ("content", "required"),
                ("featuredImageUrl", "url"),
                ("title", "required"),
            ]
        );
        let url_violation = &violations[1];
        assert_eq!(url_violation.value, serde_json::json!("not a url"));
    }

    #[test]
    fn test_featured_image_url_must_be_web_url() {
        for url in ["javascript:alert(1)", "mailto:a@b.c", "foo:bar", "data:text/html,hi"] {
            let violations = collect_violations(&article("제목", "본문", url).validate().unwrap_err());
            assert_eq!(violations.len(), 1, "{:?}", url);
            assert_eq!(violations[0].field, "featuredImageUrl");
            assert_eq!(violations[0].constraint, "url");
        }

        assert!(article("제목", "본문", "ftp://files.example.com/a.png").validate().is_ok());
    }

    #[test]
    fn test_missing_required_keys_become_violations() {
        let json = serde_json::json!({
            "featuredImageUrl": "https://example.com/a.png",
            "authorId": "6f1c1c7e-8f5e-4c53-9f0e-2b8b7d3c9a10"
        });
        let dto: ArticleCreateReqDto = serde_json::from_value(json).unwrap();
        let violations = collect_violations(&dto.validate().unwrap_err());

        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.constraint == "required"));
    }

    #[test]
    fn test_comment_body_boundary() {
        assert!(comment(&"x".repeat(1000)).validate().is_ok());

        let errors = comment(&"x".repeat(1001)).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("body"));

        let errors = comment("").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("body"));
    }

    #[test]
    fn test_round_trip() {
        let original = article("제목", "본문", "https://example.com/a.png");
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("\"featuredImageUrl\""));
        assert!(json.contains("\"authorId\""));
        let restored: ArticleCreateReqDto = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);

        let original = comment("좋은 글이네요");
        let json = serde_json::to_string(&original).unwrap();
        let restored: CommentPostReqDto = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
