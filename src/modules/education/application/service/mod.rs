mod get_education_service;

pub use get_education_service::GetEducationService;
