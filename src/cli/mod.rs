mod args;
mod new;

pub use args::{Args, Command};
pub use new::run_new;
