use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilePermission {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

/// One child of a listed directory. `items_count` is set only for directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInfo {
    pub uri: String,
    pub is_directory: bool,
    pub is_hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_count: Option<u64>,
    pub size_in_bytes: u64,
    pub permission: FilePermission,
}

pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
