use crate::subscription::Subscription;
use crate::update_field;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use typesafe_repository::async_ops::{Add, Get, List, Remove, Save};
use typesafe_repository::macros::Id;
use typesafe_repository::{GetIdentity, Identity, IdentityOf, RefIdentity, Repository};
use uuid::Uuid;

pub mod service;

pub trait ArtifactRepository:
    Repository<Artifact, Error = anyhow::Error>
    + Get<Artifact>
    + List<Artifact>
    + Add<Artifact>
    + Save<Artifact>
    + Remove<Artifact>
    + Send
    + Sync
{
}

#[derive(Id, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[Id(ref_id, get_id)]
pub struct Artifact {
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
    pub byte_size: u64,
    #[serde(default)]
    pub check_sum: u64,
    #[serde(default)]
    pub automated_download: bool,
    #[serde(default)]
    pub subscriptions: Vec<IdentityOf<Subscription>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtifactDesc {
    #[serde(default)]
    pub remote_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub byte_size: Option<u64>,
    #[serde(default)]
    pub check_sum: Option<u64>,
    #[serde(default)]
    pub automated_download: Option<bool>,
}

impl Artifact {
    pub fn new(desc: ArtifactDesc) -> Self {
        let mut artifact = Self {
            id: Uuid::new_v4(),
            created: default_time(),
            modified: default_time(),
            remote_id: None,
            title: String::new(),
            byte_size: 0,
            check_sum: 0,
            automated_download: false,
            subscriptions: Vec::new(),
        };
        artifact.update(desc);
        artifact
    }

    pub fn update(&mut self, desc: ArtifactDesc) -> bool {
        let ArtifactDesc {
            remote_id,
            title,
            byte_size,
            check_sum,
            automated_download,
        } = desc;
        let mut changed = update_field(&mut self.remote_id, remote_id.map(Some));
        changed |= update_field(&mut self.title, title);
        changed |= update_field(&mut self.byte_size, byte_size);
        changed |= update_field(&mut self.check_sum, check_sum);
        changed |= update_field(&mut self.automated_download, automated_download);
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
    fn new_starts_without_subscriptions() {
        let artifact = Artifact::new(ArtifactDesc {
            title: Some("Report".to_string()),
            byte_size: Some(42),
            ..Default::default()
        });
        assert_eq!("Report", artifact.title);
        assert_eq!(42, artifact.byte_size);
        assert!(!artifact.automated_download);
        assert!(artifact.subscriptions.is_empty());
    }

    #[test]
    fn update_ignores_absent_fields() {
        let mut artifact = Artifact::new(ArtifactDesc {
            title: Some("Report".to_string()),
            check_sum: Some(7),
            ..Default::default()
        });
        assert!(artifact.update(ArtifactDesc {
            automated_download: Some(true),
            ..Default::default()
        }));
        assert_eq!("Report", artifact.title);
        assert_eq!(7, artifact.check_sum);
        assert!(artifact.automated_download);
        assert!(!artifact.update(ArtifactDesc::default()));
    }
}
