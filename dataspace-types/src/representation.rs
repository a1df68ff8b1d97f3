use crate::artifact::Artifact;
use crate::subscription::Subscription;
use crate::update_field;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use typesafe_repository::async_ops::{Add, Get, List, Remove, Save, Select};
use typesafe_repository::macros::Id;
use typesafe_repository::{
    GetIdentity, Identity, IdentityOf, RefIdentity, Repository, SelectBy, Selector,
};
use uuid::Uuid;

pub mod service;

pub trait RepresentationRepository:
    Repository<Representation, Error = anyhow::Error>
    + Get<Representation>
    + List<Representation>
    + Add<Representation>
    + Save<Representation>
    + Remove<Representation>
    + Select<Representation, ByArtifact>
    + Send
    + Sync
{
}

/// Selects every representation whose artifact list contains the given id.
pub struct ByArtifact(pub IdentityOf<Artifact>);

impl Selector for ByArtifact {}
impl SelectBy<ByArtifact> for Representation {}

#[derive(Id, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[Id(ref_id, get_id)]
pub struct Representation {
    pub id: Uuid,
    #[serde(default = "default_time")]
    pub created: OffsetDateTime,
    #[serde(default = "default_time")]
    pub modified: OffsetDateTime,
    #[serde(default)]
    pub remote_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub standard: String,
    #[serde(default)]
    pub artifacts: Vec<IdentityOf<Artifact>>,
    #[serde(default)]
    pub subscriptions: Vec<IdentityOf<Subscription>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RepresentationDesc {
    #[serde(default)]
    pub remote_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub standard: Option<String>,
}

impl Representation {
    pub fn new(desc: RepresentationDesc) -> Self {
        let mut representation = Self {
            id: Uuid::new_v4(),
            created: default_time(),
            modified: default_time(),
            remote_id: None,
            title: String::new(),
            media_type: String::new(),
            language: String::new(),
            standard: String::new(),
            artifacts: Vec::new(),
            subscriptions: Vec::new(),
        };
        representation.update(desc);
        representation
    }

    /// Applies the given fields and reports whether anything changed.
    /// Absent fields keep their current value.
    pub fn update(&mut self, desc: RepresentationDesc) -> bool {
        let RepresentationDesc {
            remote_id,
            title,
            media_type,
            language,
            standard,
        } = desc;
        let mut changed = update_field(&mut self.remote_id, remote_id.map(Some));
        changed |= update_field(&mut self.title, title);
        changed |= update_field(&mut self.media_type, media_type);
        changed |= update_field(&mut self.language, language);
        changed |= update_field(&mut self.standard, standard);
        changed
    }
}

fn default_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_desc_fields() {
        let representation = Representation::new(RepresentationDesc {
            title: Some("Weather data".to_string()),
            media_type: Some("application/json".to_string()),
            ..Default::default()
        });
        assert_eq!("Weather data", representation.title);
        assert_eq!("application/json", representation.media_type);
        assert_eq!(None, representation.remote_id);
        assert!(representation.artifacts.is_empty());
        assert!(representation.subscriptions.is_empty());
    }

    #[test]
    fn update_reports_changes() {
        let mut representation = Representation::new(RepresentationDesc::default());
        let desc = RepresentationDesc {
            language: Some("EN".to_string()),
            ..Default::default()
        };
        assert!(representation.update(desc.clone()));
        assert!(!representation.update(desc));
        assert_eq!("EN", representation.language);
        assert_eq!("", representation.title);
    }

    #[test]
    fn deserializes_records_without_relations() {
        let id = Uuid::new_v4();
        let json = format!(r#"{{ "id": "{id}", "title": "Legacy" }}"#);
        let representation: Representation =
            serde_json::from_str(&json).expect("valid representation record");
        assert_eq!(id, representation.id);
        assert_eq!("Legacy", representation.title);
        assert!(representation.artifacts.is_empty());
        assert!(representation.subscriptions.is_empty());
    }
}
