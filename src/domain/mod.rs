pub mod entity;
pub mod slug;
