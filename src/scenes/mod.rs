//! The application's scenes, one plugin each.

pub mod earth_learn;
pub mod explorer;
pub mod learn;
pub mod menu;
pub mod quiz;

pub use earth_learn::EarthLearnPlugin;
pub use explorer::ExplorerPlugin;
pub use learn::LearnPlugin;
pub use menu::MenuPlugin;
pub use quiz::QuizPlugin;
