//! Terminal output utilities

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use sls_secrets_lifecycle::HookOutcome;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Report what a hook did
pub fn outcome(outcome: &HookOutcome) {
    match outcome {
        HookOutcome::Written { keys, path } => {
            success(&format!("Wrote {} secret keys to {}", keys, path.display()))
        }
        HookOutcome::Removed { path } => success(&format!("Removed {}", path.display())),
        HookOutcome::NothingToRemove => info("No secrets file to remove"),
    }
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
