pub mod config;
pub mod generate;
pub mod quiz;
pub mod serve;
