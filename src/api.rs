// API client module: a small blocking HTTP client for the Lanzou web disk.
// Every call is one POST to one of two PHP scripts on the provider's host,
// answered with a JSON object whose shape depends on the `task` field.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use reqwest::blocking::{multipart, Client};
use reqwest::header::{COOKIE, REFERER, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, trace};

use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, Result};
use crate::models::{
    FileEntry, FileListResponse, FolderEntry, FolderListResponse, MkdirResponse, ShareInfo,
    ShareInfoResponse, StatusResponse, UploadResponse, UploadResult, UploadedItem,
};
use crate::util::{coerce_str, flag_equals, join_path};

/// Script serving every form-encoded task.
pub const SCRIPT_DO_UPLOAD: &str = "doupload.php";
/// Script accepting multipart uploads.
pub const SCRIPT_FILE_UP: &str = "fileup.php";

/// Folder id of the disk root.
pub const ROOT_FOLDER_ID: &str = "-1";

/// Multipart field name the provider expects for the file part.
const UPLOAD_FIELD: &str = "upload_file";
/// Placeholder item id the web uploader sends for a single-file upload.
const UPLOAD_ITEM_ID: &str = "WU_FILE_0";

/// Headers sent with every request. The provider rejects requests that do
/// not look like they come from its own web UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHeaders {
    pub user_agent: &'static str,
    pub referer: &'static str,
}

pub const WEB_HEADERS: RequestHeaders = RequestHeaders {
    user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/75.0.3770.100 Safari/537.36",
    referer: "https://pc.woozooo.com/mydisk.php",
};

/// Request body handed to [`ApiClient::post`]. Each variant sets its own
/// content type.
enum Payload<'a> {
    /// `application/x-www-form-urlencoded`
    Form(&'a [(&'a str, &'a str)]),
    /// `multipart/form-data` with a generated boundary
    Multipart(multipart::Form),
}

/// Client for one logged-in session. Holds the session cookies and the fixed
/// request headers; neither changes after construction, so one instance can
/// be shared between threads.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
    headers: RequestHeaders,
}

impl ApiClient {
    /// Create a client for the public provider host with no request timeout.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with an explicit base URL and timeout.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(ApiClient {
            client,
            base_url: config.base_url,
            credentials,
            headers: WEB_HEADERS,
        })
    }

    /// POST `payload` to `script` and decode the JSON answer into `T`.
    ///
    /// Fails on transport errors, on any status other than 200 and when the
    /// body does not decode. Nothing is retried.
    fn post<T: DeserializeOwned>(&self, script: &str, payload: Payload<'_>) -> Result<T> {
        let url = join_path(&self.base_url, script);
        debug!(%url, "POST");

        let req = self
            .client
            .post(&url)
            .header(USER_AGENT, self.headers.user_agent)
            .header(REFERER, self.headers.referer)
            .header(COOKIE, self.credentials.cookie_header());
        let req = match payload {
            Payload::Form(params) => req.form(params),
            Payload::Multipart(form) => req.multipart(form),
        };

        let started = Instant::now();
        let res = req.send()?;
        let status = res.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus(status.as_u16()));
        }
        let body = res.bytes()?;
        trace!(
            elapsed = ?started.elapsed(),
            body = %String::from_utf8_lossy(&body),
            "response"
        );

        Ok(serde_json::from_slice(&body)?)
    }

    /// URL-encode `params` and POST them to `script`.
    fn post_form<T: DeserializeOwned>(&self, script: &str, params: &[(&str, &str)]) -> Result<T> {
        self.post(script, Payload::Form(params))
    }

    /// Turn a `zt`/`info` answer into `Ok(())` or the provider's message.
    fn expect_ok(resp: &StatusResponse) -> Result<()> {
        if resp.is_ok() {
            Ok(())
        } else {
            Err(Error::Provider(resp.message()))
        }
    }

    /// List every file in `folder_id` (use [`ROOT_FOLDER_ID`] for the root).
    ///
    /// Pages are requested from 1 upwards until the provider reports
    /// `info == "0"` or returns an empty page.
    pub fn list_files(&self, folder_id: &str) -> Result<Vec<FileEntry>> {
        let mut files = Vec::new();
        let mut page: u32 = 1;

        loop {
            let pg = page.to_string();
            let resp: FileListResponse = self.post_form(
                SCRIPT_DO_UPLOAD,
                &[("task", "5"), ("folder_id", folder_id), ("pg", pg.as_str())],
            )?;

            let last = flag_equals(&resp.info, "0") || resp.text.is_empty();
            files.extend(resp.text.into_iter().map(FileEntry::from));
            if last {
                break;
            }
            page += 1;
        }

        debug!(folder_id, pages = page, count = files.len(), "listed files");
        Ok(files)
    }

    /// List the direct subfolders of `folder_id`.
    pub fn list_folders(&self, folder_id: &str) -> Result<Vec<FolderEntry>> {
        let resp: FolderListResponse =
            self.post_form(SCRIPT_DO_UPLOAD, &[("task", "47"), ("folder_id", folder_id)])?;
        Ok(resp.text.into_iter().map(FolderEntry::from).collect())
    }

    /// Share link and, if enabled, the share password of a file or folder.
    pub fn share_info(&self, id: &str) -> Result<ShareInfo> {
        let resp: ShareInfoResponse =
            self.post_form(SCRIPT_DO_UPLOAD, &[("task", "22"), ("file_id", id)])?;
        Ok(ShareInfo::from(resp.info))
    }

    /// Create a folder named `name` under `parent_id` and return its id.
    ///
    /// The provider happily creates duplicates; calling this twice with the
    /// same name yields two folders.
    pub fn mkdir(&self, parent_id: &str, name: &str) -> Result<String> {
        let resp: MkdirResponse = self.post_form(
            SCRIPT_DO_UPLOAD,
            &[
                ("task", "2"),
                ("parent_id", parent_id),
                ("folder_name", name),
                ("folder_description", ""),
            ],
        )?;

        let id = coerce_str(&resp.text);
        if id.is_empty() {
            return Err(Error::Provider(coerce_str(&resp.info)));
        }
        info!(parent_id, name, id = %id, "created folder");
        Ok(id)
    }

    /// Enable password protected sharing for `id` with `password`.
    pub fn set_password(&self, id: &str, password: &str) -> Result<()> {
        let resp: StatusResponse = self.post_form(
            SCRIPT_DO_UPLOAD,
            &[
                ("task", "23"),
                ("file_id", id),
                ("shownames", password),
                ("shows", "1"),
            ],
        )?;
        Self::expect_ok(&resp)
    }

    pub fn delete_file(&self, file_id: &str) -> Result<()> {
        let resp: StatusResponse =
            self.post_form(SCRIPT_DO_UPLOAD, &[("task", "6"), ("file_id", file_id)])?;
        Self::expect_ok(&resp)
    }

    /// Delete a folder. The provider refuses folders that still have content.
    pub fn delete_folder(&self, folder_id: &str) -> Result<()> {
        let resp: StatusResponse =
            self.post_form(SCRIPT_DO_UPLOAD, &[("task", "3"), ("folder_id", folder_id)])?;
        Self::expect_ok(&resp)
    }

    /// Upload the file at `path` into `parent_id`, named after its last
    /// path component.
    pub fn upload_file(&self, parent_id: &str, path: impl AsRef<Path>) -> Result<UploadResult> {
        let path = path.as_ref();
        let precondition = |source: std::io::Error| Error::Precondition {
            path: path.to_path_buf(),
            source,
        };

        let basename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                precondition(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "path has no file name",
                ))
            })?;
        let file = File::open(path).map_err(precondition)?;
        let size = file.metadata().map_err(precondition)?.len();

        self.upload_reader(parent_id, &basename, size, file)
    }

    /// Upload everything `reader` yields as a file called `basename`.
    ///
    /// `size` is informational. The whole source is buffered before sending
    /// and a mismatch with the bytes actually read is only logged.
    pub fn upload_reader<R: Read>(
        &self,
        parent_id: &str,
        basename: &str,
        size: u64,
        mut reader: R,
    ) -> Result<UploadResult> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(Error::Source)?;
        if data.len() as u64 != size {
            debug!(declared = size, actual = data.len(), "upload size differs from declared size");
        }
        info!(parent_id, name = basename, bytes = data.len(), "uploading");

        // File part first, then the scalar fields.
        let part = multipart::Part::bytes(data)
            .file_name(basename.to_string())
            .mime_str("application/octet-stream")?;
        let form = multipart::Form::new()
            .part(UPLOAD_FIELD, part)
            .text("task", "1")
            .text("id", UPLOAD_ITEM_ID)
            .text("folder_id", parent_id.to_string())
            .text("name", basename.to_string());

        let resp: UploadResponse = self.post(SCRIPT_FILE_UP, Payload::Multipart(form))?;
        Self::expect_ok(&resp.status)?;

        let items: Vec<UploadedItem> = serde_json::from_value(resp.text)?;
        let first = items
            .into_iter()
            .next()
            .ok_or_else(|| Error::Provider("upload response contained no files".to_string()))?;
        Ok(UploadResult {
            id: coerce_str(&first.id),
        })
    }
}
