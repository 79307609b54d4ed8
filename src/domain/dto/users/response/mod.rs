//! # 사용자 관련 응답 DTO 모듈
//!
//! 사용자 도메인에서 클라이언트로 나가는 응답 DTO를 정의합니다.
//!
//! - `UserProfileResDto` - 사용자 공개 프로필

pub mod user_profile_response;

pub use user_profile_response::UserProfileResDto;
