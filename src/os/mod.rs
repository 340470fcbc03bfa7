//! OS-level interactions: environment snapshots and external helper programs.

pub mod env;
pub mod helper;
