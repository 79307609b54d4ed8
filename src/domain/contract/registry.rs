//! DTO 레지스트리
//!
//! 서비스가 알고 있는 모든 DTO를 열거하고, 경로 파라미터로 들어온 이름을
//! 해당 DTO 종류로 해석합니다.

use std::fmt;

use crate::domain::contract::{Contract, DtoContract};
use crate::domain::dto::{
    ArticleCreateReqDto, BookBorrowReqDto, CommentPostReqDto, CourseDetailResDto,
    EnrollmentReqDto, EventScheduleReqDto, GradeUpdateReqDto, PaymentProcessReqDto,
    UserProfileResDto,
};

/// 서비스가 다루는 DTO 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DtoKind {
    UserProfile,
    ArticleCreate,
    CommentPost,
    Enrollment,
    CourseDetail,
    PaymentProcess,
    EventSchedule,
    GradeUpdate,
    BookBorrow,
}

impl DtoKind {
    /// 선언 순서대로 나열된 모든 DTO 종류
    pub const ALL: [DtoKind; 9] = [
        DtoKind::UserProfile,
        DtoKind::ArticleCreate,
        DtoKind::CommentPost,
        DtoKind::Enrollment,
        DtoKind::CourseDetail,
        DtoKind::PaymentProcess,
        DtoKind::EventSchedule,
        DtoKind::GradeUpdate,
        DtoKind::BookBorrow,
    ];

    pub fn contract(&self) -> &'static DtoContract {
        match self {
            DtoKind::UserProfile => UserProfileResDto::contract(),
            DtoKind::ArticleCreate => ArticleCreateReqDto::contract(),
            DtoKind::CommentPost => CommentPostReqDto::contract(),
            DtoKind::Enrollment => EnrollmentReqDto::contract(),
            DtoKind::CourseDetail => CourseDetailResDto::contract(),
            DtoKind::PaymentProcess => PaymentProcessReqDto::contract(),
            DtoKind::EventSchedule => EventScheduleReqDto::contract(),
            DtoKind::GradeUpdate => GradeUpdateReqDto::contract(),
            DtoKind::BookBorrow => BookBorrowReqDto::contract(),
        }
    }

    /// slug(`article-create`) 또는 타입 이름(`ArticleCreateReqDto`)으로 DTO 종류를 찾습니다.
    ///
    /// 대소문자는 구분하지 않습니다.
    pub fn lookup(name: &str) -> Option<DtoKind> {
        let name = name.trim();
        Self::ALL.into_iter().find(|kind| {
            let contract = kind.contract();
            contract.slug.eq_ignore_ascii_case(name) || contract.name.eq_ignore_ascii_case(name)
        })
    }

    pub fn contracts() -> Vec<&'static DtoContract> {
        Self::ALL.iter().map(DtoKind::contract).collect()
    }
}

impl fmt::Display for DtoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.contract().name)
    }
}
