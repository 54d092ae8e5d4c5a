pub mod args;
pub mod cashbook;
pub mod cli;
pub mod config;
pub mod import;
pub mod marker;
pub mod notimon;
pub mod parser;
mod terminal;
