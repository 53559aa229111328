pub mod config;
pub mod constants;
pub mod field;
pub mod marker;
pub mod motion;
pub mod physics;
pub mod placement;

pub use config::*;
pub use field::*;
pub use marker::*;
pub use motion::*;
pub use physics::*;
pub use placement::*;
