mod tool_command;

pub use tool_command::{DEFAULT_TOOL, ToolCommandRunner, launch_command};
