pub mod alert;
pub mod calculator;
pub mod config;
pub mod entries;
pub mod export;
pub mod log;
pub mod logic;
