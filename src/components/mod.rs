pub mod checkable_tag;
pub mod tag;
