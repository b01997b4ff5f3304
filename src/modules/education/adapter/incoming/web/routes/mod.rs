mod get_education;

pub use get_education::{__path_get_education_handler, get_education_handler};
