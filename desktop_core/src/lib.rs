pub mod apps;
pub mod config;
pub mod geometry;
pub mod icons;
pub mod params;
pub mod scene;
pub mod shell;
pub mod snapshot;
pub mod window;

pub use apps::*;
pub use config::*;
pub use geometry::*;
pub use icons::*;
pub use params::*;
pub use scene::*;
pub use shell::*;
pub use snapshot::*;
pub use window::*;
