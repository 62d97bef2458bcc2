pub mod commands;
pub mod ui;
pub mod util;

pub use util::{ConfigOverrides, build_service, load_config, read_subject};
