//! CLI commands module.

mod adjust;
mod background;
mod describe;
mod filter;
mod generate;
mod replace_text;
mod retouch_cmd;
mod util;

pub use adjust::AdjustCommand;
pub use background::BackgroundCommand;
pub use describe::DescribeCommand;
pub use filter::FilterCommand;
pub use generate::GenerateCommand;
pub use replace_text::ReplaceTextCommand;
pub use retouch_cmd::RetouchCommand;

// Re-export utils for use in commands
pub(crate) use util::*;
