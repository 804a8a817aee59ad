pub mod logger;
pub mod output;
pub mod ports;
