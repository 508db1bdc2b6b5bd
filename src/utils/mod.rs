pub mod files;
pub mod path;
pub mod slug;
