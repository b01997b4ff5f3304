use async_trait::async_trait;

use super::fallback_data::fallback_achievements;
use crate::modules::achievement::application::domain::entities::Achievement;
use crate::modules::achievement::application::ports::outgoing::{
    AchievementQuery, AchievementQueryError,
};

#[derive(Debug, Clone, Copy)]
pub struct AchievementQueryFallback {
    achievements: &'static [Achievement],
}

impl AchievementQueryFallback {
    pub fn new() -> Self {
        Self {
            achievements: fallback_achievements(),
        }
    }
}

impl Default for AchievementQueryFallback {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AchievementQuery for AchievementQueryFallback {
    async fn list(&self) -> Result<Vec<Achievement>, AchievementQueryError> {
        let mut achievements = self.achievements.to_vec();
        achievements.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(achievements)
    }
}
