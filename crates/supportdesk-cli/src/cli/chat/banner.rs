//! Welcome and farewell output for chat sessions.

use console::style;

/// Width of the `=` rules framing the welcome banner.
pub const BANNER_WIDTH: usize = 60;

pub const BANNER_TITLE: &str = "🤖 Customer Support Chatbot";
pub const WELCOME_LINE: &str = "Welcome! I'm here to help. Type 'exit' to quit.";
pub const FAREWELL_LINE: &str = "Thank you for using our support! Goodbye! 👋";
pub const INTERRUPTED_LINE: &str = "Chatbot interrupted. Goodbye!";

pub fn rule() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Print the banner shown before the first prompt.
///
/// The session id is shortened to its first 8 characters.
pub fn print_welcome_banner(model: &str, session_id: &str) {
    println!("{}", rule());
    println!("{}", style(BANNER_TITLE).cyan().bold());
    println!("{}", rule());
    println!("{WELCOME_LINE}");
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
}
