pub mod get_mode;
pub mod set_mode;

pub use get_mode::{GetLoggingModeParams, GetLoggingModeTool};
pub use set_mode::{SetLoggingModeParams, SetLoggingModeTool};
