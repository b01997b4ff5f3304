pub mod education_query;

pub use education_query::{EducationQuery, EducationQueryError};
