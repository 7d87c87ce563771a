pub mod list;
pub mod next;
pub mod show;
