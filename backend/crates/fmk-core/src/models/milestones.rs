//! The nine progress flags of a quilt.

use crate::serde_flag;

use serde::{Deserialize, Serialize};

/// Independent progress flags. No order is enforced between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Milestones {
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub fabric_chosen: bool,
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub cut: bool,
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub pieced: bool,
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub assembled: bool,
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub back_prepped: bool,
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub basted: bool,
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub quilted: bool,
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub bound: bool,
    #[serde(deserialize_with = "serde_flag::deserialize")]
    pub photographed: bool,
}
