//! Repository traits (ports)

pub mod group_repository;
pub mod group_member_repository;
pub mod meeting_repository;

pub use group_repository::GroupRepository;
pub use group_member_repository::GroupMemberRepository;
pub use meeting_repository::MeetingRepository;

#[cfg(test)]
pub use group_repository::MockGroupRepository;
#[cfg(test)]
pub use group_member_repository::MockGroupMemberRepository;
#[cfg(test)]
pub use meeting_repository::MockMeetingRepository;
