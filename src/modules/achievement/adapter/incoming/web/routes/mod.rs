mod get_achievements;

pub use get_achievements::{__path_get_achievements_handler, get_achievements_handler};
