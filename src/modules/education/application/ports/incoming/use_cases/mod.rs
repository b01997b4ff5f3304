mod get_education;

pub use get_education::{GetEducationError, GetEducationUseCase};
