//! Public result types and the provider's JSON response shapes.
//!
//! The provider is inconsistent about JSON types: ids, flags and the `info`
//! field arrive as numbers on some calls and strings on others. Those fields
//! decode into [`Loose`] and are normalised into `String`/`bool` before they
//! leave this module.

use serde::Deserialize;

use crate::util::{coerce_str, flag_equals, join_path};

/// A JSON scalar whose type the provider does not pin down.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(untagged)]
pub enum Loose {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
    #[default]
    Null,
}

/// A file as returned by [`ApiClient::list_files`](crate::api::ApiClient::list_files).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    /// Human readable size as the provider formats it, e.g. `"1.2 M"`.
    pub size: String,
    pub has_password: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub id: String,
    pub name: String,
    pub has_password: bool,
}

/// Share link of a file or folder.
///
/// `password` is empty when sharing is not password protected, even if the
/// provider still remembers an old password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareInfo {
    pub password: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub id: String,
}

// Task 5
#[derive(Deserialize, Debug)]
pub(crate) struct FileListResponse {
    #[serde(default)]
    pub info: Loose,
    #[serde(default)]
    pub text: Vec<RawFile>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawFile {
    #[serde(default)]
    id: Loose,
    #[serde(default)]
    name: String,
    #[serde(default)]
    size: String,
    #[serde(default)]
    onof: Loose,
}

impl From<RawFile> for FileEntry {
    fn from(raw: RawFile) -> Self {
        Self {
            id: coerce_str(&raw.id),
            name: raw.name,
            size: raw.size,
            has_password: flag_equals(&raw.onof, "1"),
        }
    }
}

// Task 47
#[derive(Deserialize, Debug)]
pub(crate) struct FolderListResponse {
    #[serde(default)]
    pub text: Vec<RawFolder>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawFolder {
    #[serde(default)]
    fol_id: Loose,
    #[serde(default)]
    name: String,
    #[serde(default)]
    onof: Loose,
}

impl From<RawFolder> for FolderEntry {
    fn from(raw: RawFolder) -> Self {
        Self {
            id: coerce_str(&raw.fol_id),
            name: raw.name,
            has_password: flag_equals(&raw.onof, "1"),
        }
    }
}

// Task 22
#[derive(Deserialize, Debug)]
pub(crate) struct ShareInfoResponse {
    pub info: RawShare,
}

#[derive(Deserialize, Debug)]
pub(crate) struct RawShare {
    #[serde(default)]
    pwd: String,
    #[serde(default)]
    f_id: String,
    /// Share domain, e.g. `https://wwi.lanzoup.com`
    #[serde(default)]
    is_newd: String,
    #[serde(default)]
    onof: Loose,
}

impl From<RawShare> for ShareInfo {
    fn from(raw: RawShare) -> Self {
        let password = if flag_equals(&raw.onof, "1") {
            raw.pwd
        } else {
            String::new()
        };
        Self {
            password,
            url: join_path(&raw.is_newd, &raw.f_id),
        }
    }
}

// Task 2
#[derive(Deserialize, Debug)]
pub(crate) struct MkdirResponse {
    #[serde(default)]
    pub info: Loose,
    #[serde(default)]
    pub text: Loose,
}

/// Shape shared by the mutating calls (tasks 23, 6, 3).
#[derive(Deserialize, Debug)]
pub(crate) struct StatusResponse {
    #[serde(default)]
    pub zt: Loose,
    #[serde(default)]
    pub info: Loose,
}

impl StatusResponse {
    pub fn is_ok(&self) -> bool {
        flag_equals(&self.zt, "1")
    }

    pub fn message(&self) -> String {
        coerce_str(&self.info)
    }
}

// Task 1 on fileup.php. `text` is a list on success but may be anything on
// failure, so it is only decoded once `zt` says the upload went through.
#[derive(Deserialize, Debug)]
pub(crate) struct UploadResponse {
    #[serde(flatten)]
    pub status: StatusResponse,
    #[serde(default)]
    pub text: serde_json::Value,
}

#[derive(Deserialize, Debug)]
pub(crate) struct UploadedItem {
    #[serde(default)]
    pub id: Loose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loose_accepts_strings_numbers_and_null() {
        let values: Vec<Loose> = serde_json::from_str(r#"["1", 1, null, true]"#).unwrap();
        assert_eq!(values[0], Loose::Str("1".into()));
        assert_eq!(values[1], Loose::Num(1i64.into()));
        assert_eq!(values[2], Loose::Null);
        assert_eq!(values[3], Loose::Bool(true));
    }

    #[test]
    fn file_entry_normalises_mixed_types() {
        let page: FileListResponse = serde_json::from_str(
            r#"{"info":1,"text":[
                {"id":110,"name":"a.zip","size":"1.0 M","onof":1,"downs":"3"},
                {"id":"111","name":"b.zip","size":"12 K","onof":"0"}
            ]}"#,
        )
        .unwrap();
        let files: Vec<FileEntry> = page.text.into_iter().map(FileEntry::from).collect();
        assert_eq!(files[0].id, "110");
        assert!(files[0].has_password);
        assert_eq!(files[1].id, "111");
        assert!(!files[1].has_password);
    }

    #[test]
    fn share_password_only_when_enabled() {
        let raw: ShareInfoResponse = serde_json::from_str(
            r#"{"zt":1,"info":{"pwd":"abcd","onof":"0","f_id":"iAbC","is_newd":"https://wwx.lanzoui.com"}}"#,
        )
        .unwrap();
        let share = ShareInfo::from(raw.info);
        assert_eq!(share.password, "");
        assert_eq!(share.url, "https://wwx.lanzoui.com/iAbC");
    }

    #[test]
    fn upload_failure_text_need_not_be_a_list() {
        let resp: UploadResponse =
            serde_json::from_str(r#"{"zt":0,"info":"文件类型不支持","text":""}"#).unwrap();
        assert!(!resp.status.is_ok());
        assert_eq!(resp.status.message(), "文件类型不支持");
    }
}
