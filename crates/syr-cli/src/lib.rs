pub mod commands;
pub mod table;
pub mod trace_init;
