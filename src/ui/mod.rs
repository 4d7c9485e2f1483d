pub mod menu;
pub mod output;
pub mod progress;
pub mod signals;

pub use menu::{Menu, MenuChoice};
pub use output::{OutputFormatter, OutputMode};
pub use progress::ProgressManager;
pub use signals::GracefulShutdown;
