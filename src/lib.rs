pub mod cli;
pub mod config;
pub mod observability;
pub mod response;

pub use cli::{Cli, execute};
pub use config::Config;
pub use response::Envelope;
