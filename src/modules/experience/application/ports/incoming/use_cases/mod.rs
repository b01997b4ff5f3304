mod get_experiences;

pub use get_experiences::{GetExperiencesError, GetExperiencesUseCase};
