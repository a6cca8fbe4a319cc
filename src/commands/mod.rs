pub mod check;
pub mod command_handler;
