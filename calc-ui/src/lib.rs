pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod logging;
pub mod prefs;
pub mod render;
pub mod theme;
pub mod utils;

pub use app::App;
pub use cli::Cli;
pub use config::Config;
