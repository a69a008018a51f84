// Common constants and small helpers shared by the config, calendar and commands
pub mod constants;
pub mod utils;
