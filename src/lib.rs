pub mod check;
pub mod config;
pub mod error;
pub mod interface;
pub mod logger;
pub mod resolver;

pub use check::{ProcessSpec, TcpCheck};
pub use config::CheckConfig;
pub use error::CheckError;
pub use resolver::PortSpec;
