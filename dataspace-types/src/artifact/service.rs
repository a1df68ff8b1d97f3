use crate::artifact::{Artifact, ArtifactDesc, ArtifactRepository};
use crate::NotFound;
use anyhow::Context as AnyhowContext;
use std::sync::Arc;
use time::OffsetDateTime;
use typesafe_repository::async_ops::{Add, Get, List, Remove, Save};
use typesafe_repository::IdentityOf;

pub struct ArtifactService {
    repo: Arc<dyn ArtifactRepository>,
}

impl ArtifactService {
    pub fn new(repo: Arc<dyn ArtifactRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: &IdentityOf<Artifact>) -> Result<Artifact, anyhow::Error> {
        let artifact = self
            .repo
            .get_one(id)
            .await
            .context("Unable to get artifact")?;
        Ok(artifact.ok_or(NotFound {
            kind: "artifact",
            id: *id,
        })?)
    }

    pub async fn list(&self) -> Result<Vec<Artifact>, anyhow::Error> {
        self.repo.list().await.context("Unable to list artifacts")
    }

    pub async fn exists(&self, id: &IdentityOf<Artifact>) -> Result<bool, anyhow::Error> {
        let artifact = self
            .repo
            .get_one(id)
            .await
            .context("Unable to get artifact")?;
        Ok(artifact.is_some())
    }

    pub async fn create(&self, desc: ArtifactDesc) -> Result<Artifact, anyhow::Error> {
        let artifact = Artifact::new(desc);
        self.repo
            .add(artifact.clone())
            .await
            .context("Unable to add artifact")?;
        log::debug!("Created artifact {}", artifact.id);
        Ok(artifact)
    }

    pub async fn update(
        &self,
        id: &IdentityOf<Artifact>,
        desc: ArtifactDesc,
    ) -> Result<Artifact, anyhow::Error> {
        let mut artifact = self.get(id).await?;
        if artifact.update(desc) {
            artifact = self.persist(artifact).await?;
        }
        Ok(artifact)
    }

    pub async fn persist(&self, mut artifact: Artifact) -> Result<Artifact, anyhow::Error> {
        artifact.modified = OffsetDateTime::now_utc();
        self.repo
            .save(artifact.clone())
            .await
            .context("Unable to save artifact")?;
        Ok(artifact)
    }

    pub async fn delete(&self, id: &IdentityOf<Artifact>) -> Result<(), anyhow::Error> {
        self.repo
            .remove(id)
            .await
            .context("Unable to remove artifact")?;
        log::debug!("Removed artifact {id}");
        Ok(())
    }
}
