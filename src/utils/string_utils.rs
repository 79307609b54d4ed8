//! # 문자열 검증 유틸리티
//!
//! `validator`의 `custom(function = ...)` 속성에서 사용하는 문자열 필드 검증 함수들입니다.
//! 내장 검증기로 표현되지 않는 제약(공백만 있는 필수 문자열, 카드 번호 체크섬,
//! 웹 URL 스킴 제한)을 담당합니다.

use std::borrow::Cow;

use validator::{ValidateUrl, ValidationError};

/// 게시글 이미지 등 웹 리소스 URL에 허용되는 스킴
pub const WEB_URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 필수 문자열 필드 검증
///
/// 빈 문자열이나 공백만 있는 경우 `required` 코드의 ValidationError를 반환합니다.
/// 누락된 키는 `#[serde(default)]`로 빈 문자열이 되므로 같은 위반으로 보고됩니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// struct Post {
///     #[serde(default)]
///     #[validate(custom(function = "validate_not_blank"))]
///     title: String,
/// }
/// ```
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if is_valid_string(value) {
        return Ok(());
    }

    let mut error = ValidationError::new("required")
        .with_message(Cow::from("값을 입력해주세요"));
    error.add_param(Cow::from("value"), &value);
    Err(error)
}

/// 카드 번호에서 구분자(공백, 하이픈)를 제거한 숫자열을 반환합니다.
///
/// 숫자와 구분자 이외의 문자가 있으면 `None`을 반환합니다.
pub fn normalize_card_number(value: &str) -> Option<String> {
    let mut digits = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ' ' | '-' => continue,
            '0'..='9' => digits.push(c),
            _ => return None,
        }
    }
    Some(digits)
}

/// Luhn(mod 10) 체크섬 검사
///
/// 빈 문자열은 유효하지 않은 것으로 처리합니다.
pub fn passes_luhn(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (index, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if index % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}

/// 신용카드 번호 형식 검증
///
/// 공백과 하이픈을 구분자로 허용하고, 나머지는 숫자만 허용하며 Luhn 체크섬을 통과해야 합니다.
pub fn validate_card_number(value: &str) -> Result<(), ValidationError> {
    let valid = normalize_card_number(value)
        .map(|digits| passes_luhn(&digits))
        .unwrap_or(false);

    if valid {
        return Ok(());
    }

    let mut error = ValidationError::new("credit_card")
        .with_message(Cow::from("유효한 카드 번호가 아닙니다"));
    error.add_param(Cow::from("value"), &value);
    Err(error)
}

/// URL의 스킴이 `WEB_URL_SCHEMES` 중 하나인지 확인합니다 (대소문자 무시).
pub fn has_web_scheme(value: &str) -> bool {
    value
        .split_once("://")
        .map(|(scheme, _)| WEB_URL_SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)))
        .unwrap_or(false)
}

/// 웹 URL 형식 검증
///
/// 절대 URL로 파싱되어야 하고 스킴은 http, https, ftp만 허용합니다.
/// `javascript:`, `data:`, `mailto:` 같은 URL은 `url` 위반입니다.
pub fn validate_web_url(value: &str) -> Result<(), ValidationError> {
    if value.validate_url() && has_web_scheme(value) {
        return Ok(());
    }

    let mut error = ValidationError::new("url")
        .with_message(Cow::from("유효한 URL 형식이 아닙니다"));
    error.add_param(Cow::from("value"), &value);
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("제목").is_ok());
        assert!(validate_not_blank(" a ").is_ok());

        let error = validate_not_blank("  ").unwrap_err();
        assert_eq!(error.code, "required");
        assert_eq!(error.params.get("value"), Some(&serde_json::json!("  ")));
        assert!(validate_not_blank("").is_err());
    }

    #[test]
    fn test_normalize_card_number() {
        assert_eq!(
            normalize_card_number("4111 1111-1111 1111"),
            Some("4111111111111111".to_string())
        );
        assert_eq!(normalize_card_number("4111a111"), None);
        assert_eq!(normalize_card_number(""), Some(String::new()));
    }

    #[test]
    fn test_passes_luhn() {
        assert!(passes_luhn("4111111111111111"));
        assert!(passes_luhn("5500000000000004"));
        assert!(passes_luhn("378282246310005"));
        assert!(!passes_luhn("4111111111111112"));
        assert!(!passes_luhn(""));
    }

    #[test]
    fn test_has_web_scheme() {
        assert!(has_web_scheme("https://example.com"));
        assert!(has_web_scheme("HTTP://example.com"));
        assert!(has_web_scheme("ftp://files.example.com/a.png"));
        assert!(!has_web_scheme("javascript:alert(1)"));
        assert!(!has_web_scheme("cover.png"));
    }

    #[test]
    fn test_validate_web_url() {
        assert!(validate_web_url("https://cdn.example.com/cover.png").is_ok());
        assert!(validate_web_url("http://localhost:8080/a.png").is_ok());
        assert!(validate_web_url("ftp://files.example.com/a.png").is_ok());

        for bad in [
            "javascript:alert(1)",
            "mailto:a@b.c",
            "foo:bar",
            "data:text/html,hi",
            "file:///etc/passwd",
            "cover.png",
            "",
        ] {
            let error = validate_web_url(bad).unwrap_err();
            assert_eq!(error.code, "url", "{:?}", bad);
        }
    }

    #[test]
    fn test_validate_card_number() {
        assert!(validate_card_number("4111-1111-1111-1111").is_ok());
        assert!(validate_card_number("4111 1111 1111 1111").is_ok());

        let error = validate_card_number("4111 1111 1111 1112").unwrap_err();
        assert_eq!(error.code, "credit_card");
        assert!(validate_card_number("abcd").is_err());
        assert!(validate_card_number("").is_err());
        assert!(validate_card_number(" - ").is_err());
    }
}
