pub mod execute_bash;

pub use execute_bash::{ExecuteBashParams, ExecuteBashTool};
