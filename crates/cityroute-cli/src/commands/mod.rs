// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs dispatches to these
// handlers and keeps parsing and graph loading to itself.

pub mod interactive;
pub mod map;
pub mod route;
