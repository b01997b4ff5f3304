mod get_experiences_service;

pub use get_experiences_service::GetExperiencesService;
