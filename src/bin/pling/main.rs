//! pling - interactive sound-effects demo
//!
//! A small terminal mock of a page full of triggering surfaces: buttons
//! to click, a form to submit, a panel to slide open. Moving the cursor
//! hovers, Enter activates, `m` toggles the persisted sound preference.
//!
//! Run with: cargo run

mod app;
mod ui;

use app::Pling;
use tracing_subscriber::EnvFilter;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Logs go to stderr and only when asked for; unfiltered output would
    // fight the terminal UI for the screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut terminal = ratatui::init();
    let result = Pling::new().run(&mut terminal);
    ratatui::restore();
    result
}
