//! Command implementations.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod rules;
pub mod tag;

pub use self::catalog::execute_catalog;
pub use self::classify::execute_classify;
pub use self::config::execute_config;
pub use self::rules::execute_rules;
pub use self::tag::execute_tag;
