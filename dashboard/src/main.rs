use dashboard::app::App;
use dashboard::{config, debug, utils};

const APP_TITLE: &str = "Lending Pool Dashboard";

fn main() -> eframe::Result<()> {
    debug::init();

    let config = match config::init_config() {
        Ok(config) => config.clone(),
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = utils::runtime::build_runtime().expect("Failed to create Tokio runtime");
    let _guard = runtime.enter();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(APP_TITLE, options, Box::new(|_cc| Ok(Box::new(App::new(config)))))
}
