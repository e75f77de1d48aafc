pub mod ai;
pub mod collision;
pub mod difficulty;
pub mod movement;
pub mod particles;
pub mod power_ups;
pub mod scoring;

pub use ai::*;
pub use collision::*;
pub use difficulty::*;
pub use movement::*;
pub use particles::*;
pub use power_ups::*;
pub use scoring::*;
