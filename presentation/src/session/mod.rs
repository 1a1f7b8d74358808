//! Front-end drivers: the interactive session and one-shot runs

pub mod command;
pub mod one_shot;
pub mod repl;
