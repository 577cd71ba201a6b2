//! Birthday Wish - an interactive birthday card
//! Built with iced: light the candles, pop the balloons, then celebrate

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Run as a daemon; window close is routed through Message::RequestClose
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()?;

    Ok(())
}
