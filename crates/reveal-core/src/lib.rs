pub mod config;
pub mod echo;
pub mod engine;
pub mod grid;
pub mod input;
pub mod mask;
pub mod reactivity;
pub mod smoother;
pub mod surface;

pub use config::*;
pub use echo::*;
pub use engine::*;
pub use grid::*;
pub use input::*;
pub use mask::*;
pub use reactivity::*;
pub use smoother::*;
pub use surface::*;
