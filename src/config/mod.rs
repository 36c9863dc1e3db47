//! Configuration loading and management for the duty pay engine.
//!
//! This module loads the rule configuration and holiday calendars from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use duty_pay_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/nrw").unwrap();
//! println!("Weekend threshold: {}", config.rules().weekend_threshold);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayCalendarFile, RuleConfig};
