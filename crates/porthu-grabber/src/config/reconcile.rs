//! Merging of the stored channel list with a fresh provider catalog

use std::collections::HashMap;

use tracing::{debug, info};

use crate::models::Channel;

/// Carries user-controlled `enabled` flags over to a refreshed catalog
pub struct ConfigReconciler;

impl ConfigReconciler {
    /// Merge `stored` flags into `fresh`, keyed by channel id
    ///
    /// The result follows the order of `fresh`. Channels unknown to `stored`
    /// get `default_enabled`; stored channels missing from `fresh` are dropped.
    pub fn merge(stored: &[Channel], fresh: Vec<Channel>, default_enabled: bool) -> Vec<Channel> {
        let flags: HashMap<&str, bool> = stored
            .iter()
            .map(|ch| (ch.id.as_str(), ch.enabled))
            .collect();

        let merged: Vec<Channel> = fresh
            .into_iter()
            .map(|mut ch| {
                ch.enabled = match flags.get(ch.id.as_str()) {
                    Some(enabled) => *enabled,
                    None => {
                        debug!("New channel '{}' ({})", ch.name, ch.id);
                        default_enabled
                    }
                };
                ch
            })
            .collect();

        for gone in stored
            .iter()
            .filter(|old| !merged.iter().any(|ch| ch.id == old.id))
        {
            info!(
                "Channel '{}' ({}) is no longer offered by the provider",
                gone.name, gone.id
            );
        }

        merged
    }
}
