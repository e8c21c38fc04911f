pub mod get_time;
pub mod say_hello;

pub use get_time::{GetTimeParams, GetTimeTool};
pub use say_hello::{SayHelloParams, SayHelloTool};
