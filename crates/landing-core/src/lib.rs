pub mod carousel;
pub mod constants;
pub mod counter;
pub mod form;
pub mod hero;
pub mod interpolate;
pub mod motion;
pub mod spring;

pub use carousel::*;
pub use counter::*;
pub use form::*;
pub use hero::*;
pub use interpolate::*;
pub use motion::*;
pub use spring::*;
