//! Knit Pattern Studio main entry point

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "knit_frontend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Knit Pattern Studio");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Knit Pattern Studio"),
        ..Default::default()
    };

    eframe::run_native(
        "knit-pattern-studio",
        native_options,
        Box::new(|cc| Ok(Box::new(knit_frontend::KnitStudioApp::new(cc)))),
    )
}
