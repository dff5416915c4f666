// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, resolve config and cookies, then hand
//   a client to the UI loop.
// - Returns `anyhow::Result` so setup failures print with context.

use anyhow::Context;
use lanzou_cli::{logging, ui, ApiClient, ClientConfig};

fn main() -> anyhow::Result<()> {
    logging::init();

    // Host and timeout come from `LANZOU_HOST` / `LANZOU_TIMEOUT_SECS`;
    // cookies from the environment or, failing that, a prompt.
    let config = ClientConfig::from_env();
    let credentials = ui::resolve_credentials()?;
    let api = ApiClient::with_config(credentials, config).context("Failed to build HTTP client")?;

    // Start the interactive menu. This call blocks until the user exits.
    ui::main_menu(&api)?;
    Ok(())
}
