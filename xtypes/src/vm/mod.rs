mod args;
mod dispatch;

pub use args::Args;
pub use dispatch::dispatch;
