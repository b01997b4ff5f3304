mod get_experiences;

pub use get_experiences::{__path_get_experiences_handler, get_experiences_handler};
