pub mod topic;
pub mod user;

pub use topic::{Topic, TopicList};
pub use user::User;
