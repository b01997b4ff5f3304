mod get_achievements;

pub use get_achievements::{GetAchievementsError, GetAchievementsUseCase};
