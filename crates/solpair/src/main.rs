//! Solpair: submit Solana signing intents through a pairing relay.

use eframe::egui;

mod app;
mod bridge;
mod state;
mod ui;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Solpair");

    let config = solpair_adapters::RelayConfig::from_env();
    let bridge = match bridge::RelayBridge::new(&config) {
        Ok(bridge) => bridge,
        Err(e) => {
            tracing::error!("failed to initialize http clients: {e}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Solpair")
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Solpair",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, bridge)))),
    )
}
