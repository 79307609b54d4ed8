//! 학생 블로그 API DTO 계약
//!
//! 학생 블로그 웹 API의 요청/응답 DTO와 필드 제약을 정의하고,
//! 이를 조회/검증하는 작은 HTTP 서비스를 제공합니다.
//!
//! # Features
//!
//! - **DTO**: 사용자 프로필, 게시글, 댓글, 수강 신청, 강의, 결제, 행사, 성적, 도서 대출
//! - **검증**: `validator` 기반 필드 제약, 모든 위반을 `(field, constraint, value)`로 수집
//! - **계약 메타데이터**: 필드 와이어 이름/타입/제약의 정적 기술
//! - **TypeScript**: 계약에서 프론트엔드용 `export type` 정의 생성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /api/v1/dto/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 역직렬화 + 검증, TypeScript 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Domain (DTO +   │ ← 값 타입과 계약
//! │   Contracts)    │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use student_blog_dto::domain::dto::EnrollmentReqDto;
//! use student_blog_dto::errors::AppError;
//! use validator::Validate;
//!
//! let dto: EnrollmentReqDto = serde_json::from_str(body)?;
//! dto.validate().map_err(AppError::from)?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
