mod fallback_data;
mod project_query_fallback;
mod project_query_postgres;
pub mod sea_orm_entity;

pub use fallback_data::fallback_projects;
pub use project_query_fallback::ProjectQueryFallback;
pub use project_query_postgres::ProjectQueryPostgres;
