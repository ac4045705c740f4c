//! Wire shape of `data.json`, as written by the roster extractor.
//!
//! Indices are kept raw here; [`crate::core::Roster`] checks them against the
//! catalogs before anything is rendered.

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDatum {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub discord_name: String,
    pub profile: usize,
    pub level: u32,
    pub preferred_techniques: Vec<usize>,
    pub known_techniques: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    pub position: usize,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDatum {
    pub name: String,
    pub location: usize,
    pub link: String,
    pub time_interval: Option<TimeInterval>,
    pub members: Vec<MemberDatum>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeData {
    pub intro_duration: f64,
    pub group_interval_duration: f64,
    pub music_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    pub groups: Vec<GroupDatum>,
    pub profiles: Vec<String>,
    pub time: Option<TimeData>,
    pub with_music: bool,
    pub year: u32,
}
