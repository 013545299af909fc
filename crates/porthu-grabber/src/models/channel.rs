use serde::{Deserialize, Serialize};

/// A channel as stored in the config file and emitted in the guide
///
/// `id` is always the XMLTV form (`5.port.hu`). `enabled` is user-controlled
/// and survives catalog refreshes by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Channel {
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N, enabled: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            enabled,
            icon: None,
            url: None,
        }
    }
}
