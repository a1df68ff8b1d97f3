use crate::representation::{Representation, RepresentationDesc, RepresentationRepository};
use crate::NotFound;
use anyhow::Context as AnyhowContext;
use std::sync::Arc;
use time::OffsetDateTime;
use typesafe_repository::async_ops::{Add, Get, List, Remove, Save};
use typesafe_repository::IdentityOf;

pub struct RepresentationService {
    repo: Arc<dyn RepresentationRepository>,
}

impl RepresentationService {
    pub fn new(repo: Arc<dyn RepresentationRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(
        &self,
        id: &IdentityOf<Representation>,
    ) -> Result<Representation, anyhow::Error> {
        let representation = self
            .repo
            .get_one(id)
            .await
            .context("Unable to get representation")?;
        Ok(representation.ok_or(NotFound {
            kind: "representation",
            id: *id,
        })?)
    }

    pub async fn list(&self) -> Result<Vec<Representation>, anyhow::Error> {
        self.repo
            .list()
            .await
            .context("Unable to list representations")
    }

    pub async fn exists(&self, id: &IdentityOf<Representation>) -> Result<bool, anyhow::Error> {
        let representation = self
            .repo
            .get_one(id)
            .await
            .context("Unable to get representation")?;
        Ok(representation.is_some())
    }

    pub async fn create(
        &self,
        desc: RepresentationDesc,
    ) -> Result<Representation, anyhow::Error> {
        let representation = Representation::new(desc);
        self.repo
            .add(representation.clone())
            .await
            .context("Unable to add representation")?;
        log::debug!("Created representation {}", representation.id);
        Ok(representation)
    }

    pub async fn update(
        &self,
        id: &IdentityOf<Representation>,
        desc: RepresentationDesc,
    ) -> Result<Representation, anyhow::Error> {
        let mut representation = self.get(id).await?;
        if representation.update(desc) {
            representation = self.persist(representation).await?;
        }
        Ok(representation)
    }

    /// Stores the given state and refreshes its modification date.
    pub async fn persist(
        &self,
        mut representation: Representation,
    ) -> Result<Representation, anyhow::Error> {
        representation.modified = OffsetDateTime::now_utc();
        self.repo
            .save(representation.clone())
            .await
            .context("Unable to save representation")?;
        Ok(representation)
    }

    pub async fn delete(&self, id: &IdentityOf<Representation>) -> Result<(), anyhow::Error> {
        self.repo
            .remove(id)
            .await
            .context("Unable to remove representation")?;
        log::debug!("Removed representation {id}");
        Ok(())
    }
}
