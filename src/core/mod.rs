pub mod backup;
pub mod calculator;
pub mod config;
pub mod day;
pub mod log;
pub mod logic;
pub mod resolver;
pub mod settings;
pub mod template;
pub mod week;
