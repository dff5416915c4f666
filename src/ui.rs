// UI layer: a simple interactive menu using `dialoguer`.
// Each entry maps to one client call; results are printed and the menu
// comes back. Request failures are reported, not fatal.

use crate::api::{ApiClient, ROOT_FOLDER_ID};
use crate::config::Credentials;
use anyhow::Result;
use dialoguer::{Confirm, Input, Password, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Take the session cookies from the environment, prompting for them if
/// they are not set. Logging in is not handled here; copy both cookies from
/// a browser session on pc.woozooo.com.
pub fn resolve_credentials() -> Result<Credentials> {
    if let Some(creds) = Credentials::from_env() {
        return Ok(creds);
    }
    println!("LANZOU_YLOGIN / LANZOU_PHPDISK_INFO not set, enter the cookies manually.");
    let ylogin: String = Input::new().with_prompt("ylogin cookie").interact_text()?;
    // `Password` hides input since phpdisk_info is a session secret.
    let phpdisk_info: String = Password::new().with_prompt("phpdisk_info cookie").interact()?;
    Ok(Credentials::new(ylogin, phpdisk_info))
}

/// Main interactive menu. Runs a select loop until the user chooses "Exit".
///
/// Note: `Select::interact()` is keyboard-driven: use arrow keys and Enter.
pub fn main_menu(api: &ApiClient) -> Result<()> {
    let items = [
        "List files",
        "List folders",
        "Share link",
        "New folder",
        "Set share password",
        "Upload file",
        "Delete file",
        "Delete folder",
        "Exit",
    ];
    loop {
        let selection = Select::new().items(&items).default(0).interact()?;
        match selection {
            0 => handle_list_files(api)?,
            1 => handle_list_folders(api)?,
            2 => handle_share_info(api)?,
            3 => handle_mkdir(api)?,
            4 => handle_set_password(api)?,
            5 => handle_upload(api)?,
            6 => handle_delete(api, false)?,
            7 => handle_delete(api, true)?,
            _ => break,
        }
    }
    Ok(())
}

/// Show a spinner with `msg` while `f` runs.
fn with_spinner<T>(msg: &'static str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let out = f();
    spinner.finish_and_clear();
    out
}

/// Prompt for a folder id, defaulting to the disk root.
fn prompt_folder(prompt: &str) -> Result<String> {
    let id: String = Input::new()
        .with_prompt(prompt)
        .default(ROOT_FOLDER_ID.to_string())
        .interact_text()?;
    Ok(id)
}

fn prompt_id(prompt: &str) -> Result<String> {
    let id: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(id)
}

fn lock_mark(has_password: bool) -> &'static str {
    if has_password {
        "*"
    } else {
        " "
    }
}

fn handle_list_files(api: &ApiClient) -> Result<()> {
    let folder = prompt_folder("Folder id")?;
    match with_spinner("Listing files...", || api.list_files(&folder)) {
        Ok(files) if files.is_empty() => println!("No files."),
        Ok(files) => {
            for f in &files {
                println!("{} {:>12}  {:>10}  {}", lock_mark(f.has_password), f.id, f.size, f.name);
            }
            println!("{} file(s), * = password protected", files.len());
        }
        Err(e) => println!("Listing failed: {}", e),
    }
    Ok(())
}

fn handle_list_folders(api: &ApiClient) -> Result<()> {
    let folder = prompt_folder("Parent folder id")?;
    match with_spinner("Listing folders...", || api.list_folders(&folder)) {
        Ok(folders) if folders.is_empty() => println!("No folders."),
        Ok(folders) => {
            for f in &folders {
                println!("{} {:>12}  {}", lock_mark(f.has_password), f.id, f.name);
            }
        }
        Err(e) => println!("Listing failed: {}", e),
    }
    Ok(())
}

fn handle_share_info(api: &ApiClient) -> Result<()> {
    let id = prompt_id("File or folder id")?;
    match with_spinner("Fetching share link...", || api.share_info(&id)) {
        Ok(share) => {
            println!("Link: {}", share.url);
            if share.password.is_empty() {
                println!("No password");
            } else {
                println!("Password: {}", share.password);
            }
        }
        Err(e) => println!("Share lookup failed: {}", e),
    }
    Ok(())
}

fn handle_mkdir(api: &ApiClient) -> Result<()> {
    let parent = prompt_folder("Parent folder id")?;
    let name: String = Input::new().with_prompt("Folder name").interact_text()?;
    match with_spinner("Creating folder...", || api.mkdir(&parent, &name)) {
        Ok(id) => println!("Created folder {} (id {})", name, id),
        Err(e) => println!("Create failed: {}", e),
    }
    Ok(())
}

fn handle_set_password(api: &ApiClient) -> Result<()> {
    let id = prompt_id("File or folder id")?;
    let pass: String = Input::new().with_prompt("Share password").interact_text()?;
    match with_spinner("Setting password...", || api.set_password(&id, &pass)) {
        Ok(()) => println!("Password set"),
        Err(e) => println!("Set password failed: {}", e),
    }
    Ok(())
}

fn handle_upload(api: &ApiClient) -> Result<()> {
    let parent = prompt_folder("Target folder id")?;
    let path: String = Input::new().with_prompt("Local file path").interact_text()?;
    let path = PathBuf::from(path);
    match with_spinner("Uploading...", || api.upload_file(&parent, &path)) {
        Ok(up) => println!("Uploaded {} (id {})", path.display(), up.id),
        Err(e) => println!("Upload failed: {}", e),
    }
    Ok(())
}

fn handle_delete(api: &ApiClient, folder: bool) -> Result<()> {
    let kind = if folder { "folder" } else { "file" };
    let id = prompt_id(&format!("{kind} id"))?;
    let sure = Confirm::new()
        .with_prompt(format!("Delete {kind} {id}?"))
        .default(false)
        .interact()?;
    if !sure {
        return Ok(());
    }
    let res = with_spinner("Deleting...", || {
        if folder {
            api.delete_folder(&id)
        } else {
            api.delete_file(&id)
        }
    });
    match res {
        Ok(()) => println!("Deleted {kind} {id}"),
        Err(e) => println!("Delete failed: {}", e),
    }
    Ok(())
}
