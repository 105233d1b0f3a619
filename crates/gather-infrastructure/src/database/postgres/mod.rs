//! PostgreSQL repository implementations

pub mod group_repo_impl;
pub mod group_member_repo_impl;
pub mod meeting_repo_impl;

pub use group_repo_impl::PgGroupRepository;
pub use group_member_repo_impl::PgGroupMemberRepository;
pub use meeting_repo_impl::PgMeetingRepository;
