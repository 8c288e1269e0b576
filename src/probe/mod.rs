//! Evidence gathering: executable lookups and shell command probes.

pub mod command;
pub mod executable;
pub mod types;

pub use command::{run_command, run_commands, DEFAULT_COMMAND_TIMEOUT};
pub use executable::{
    find_executables, find_executables_on_system_path, is_executable, parse_system_path,
    resolve_tool_path,
};
pub use types::{ProbeDetail, ProbeOutcome};
