pub mod output;
pub mod runner;
pub mod settings;
pub mod sweep;
pub mod util;
