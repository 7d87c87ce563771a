pub mod config;
pub mod error;
pub mod navigator;
pub mod parser;
pub mod paths;
pub mod phase;
pub mod render;
pub mod repository;
pub mod sync;

pub use config::Config;
pub use error::{ParseError, Result, StudioError};
pub use phase::Phase;
pub use repository::PhaseRepository;
