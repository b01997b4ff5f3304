mod achievement_query_fallback;
mod achievement_query_postgres;
mod fallback_data;
pub mod sea_orm_entity;

pub use achievement_query_fallback::AchievementQueryFallback;
pub use achievement_query_postgres::AchievementQueryPostgres;
pub use fallback_data::fallback_achievements;
