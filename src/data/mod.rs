pub mod resume;
pub mod states;
