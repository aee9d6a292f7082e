pub mod clock;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod overlay;
pub mod presets;
pub mod state;
pub mod visual;

pub use clock::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use overlay::*;
pub use presets::*;
pub use state::*;
pub use visual::*;
