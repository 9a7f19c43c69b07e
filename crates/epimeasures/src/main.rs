#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use epimeasures::{App, init_logging};
#[cfg(feature = "native")]
use std::path::PathBuf;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "epimeasures")]
#[command(about = "An interactive terminal explainer for epidemiological measures")]
struct Args {
    /// Path to the data directory holding keybindings and logs (default: ~/.epimeasures/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[cfg(feature = "native")]
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".epimeasures")
}

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_data_dir(data_dir);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // The browser build starts from `web::main` via wasm_bindgen
    panic!("This binary requires the 'native' feature. For web, build the WASM target with trunk.");
}
