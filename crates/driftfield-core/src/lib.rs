pub mod color;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod field;
pub mod grain;
pub mod paint;
pub mod particle;
pub mod sim;
pub mod spawn;
pub mod tier;

pub use color::*;
pub use config::*;
pub use constants::*;
pub use debounce::*;
pub use error::*;
pub use field::*;
pub use grain::*;
pub use paint::*;
pub use particle::*;
pub use tier::*;
