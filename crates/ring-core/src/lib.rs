pub mod color;
pub mod constants;
pub mod frame_loop;
pub mod input;
pub mod projection;
pub mod renderer;
pub mod ring;
pub mod rotation;
pub mod settings;

pub use color::*;
pub use constants::*;
pub use frame_loop::*;
pub use input::*;
pub use projection::*;
pub use renderer::*;
pub use ring::*;
pub use rotation::*;
pub use settings::*;
