pub mod category;
pub mod note;
