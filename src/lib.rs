// Library root
// -----------
// Client for the Lanzou (woozooo) web disk, driven through the same two PHP
// scripts its web UI uses. The binary (`main.rs`) wraps it in an interactive
// menu.
//
// Module responsibilities:
// - `api`: the session client and every provider call.
// - `models`: result types and the provider's JSON shapes.
// - `util`: string coercion and URL joining helpers.
// - `error`: the typed error returned by every call.
// - `config`: base URL, timeout and session cookies.
// - `logging`: tracing subscriber setup for the binary.
// - `ui`: terminal menu flows that call into `api`.
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;
pub mod util;

pub use api::{ApiClient, ROOT_FOLDER_ID};
pub use config::{ClientConfig, Credentials};
pub use error::{Error, Result};
pub use models::{FileEntry, FolderEntry, ShareInfo, UploadResult};
