mod education_query_postgres;
pub mod sea_orm_entity;

pub use education_query_postgres::EducationQueryPostgres;
