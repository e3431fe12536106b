pub mod dsp;
pub mod mixer;
pub mod noise;
pub mod scene;

pub use dsp::*;
pub use mixer::*;
pub use noise::*;
pub use scene::*;
