pub mod audio;
pub mod chapter;
pub mod constants;
pub mod error;
pub mod fade;
pub mod gesture;
pub mod snow;
pub mod story;
pub mod tuning;

pub use audio::*;
pub use chapter::*;
pub use constants::*;
pub use error::*;
pub use fade::*;
pub use gesture::*;
pub use snow::*;
pub use story::*;
pub use tuning::*;
