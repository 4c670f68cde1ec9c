pub mod cli;
pub mod config;
pub mod escape;
pub mod generate;
pub mod header;
pub mod identifier;
pub mod literal;
