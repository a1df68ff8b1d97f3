use crate::subscription::{ByTarget, Subscription, SubscriptionDesc, SubscriptionRepository};
use crate::NotFound;
use anyhow::Context as AnyhowContext;
use std::sync::Arc;
use time::OffsetDateTime;
use typesafe_repository::async_ops::{Add, Get, List, Remove, Save, Select};
use typesafe_repository::IdentityOf;
use uuid::Uuid;

pub struct SubscriptionService {
    repo: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionService {
    pub fn new(repo: Arc<dyn SubscriptionRepository>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: &IdentityOf<Subscription>) -> Result<Subscription, anyhow::Error> {
        let subscription = self
            .repo
            .get_one(id)
            .await
            .context("Unable to get subscription")?;
        Ok(subscription.ok_or(NotFound {
            kind: "subscription",
            id: *id,
        })?)
    }

    pub async fn list(&self) -> Result<Vec<Subscription>, anyhow::Error> {
        self.repo
            .list()
            .await
            .context("Unable to list subscriptions")
    }

    /// Every subscription registered for the given representation or artifact.
    pub async fn list_by_target(&self, target: &Uuid) -> Result<Vec<Subscription>, anyhow::Error> {
        self.repo
            .select(&ByTarget(*target))
            .await
            .context("Unable to list subscriptions by target")
    }

    pub async fn exists(&self, id: &IdentityOf<Subscription>) -> Result<bool, anyhow::Error> {
        let subscription = self
            .repo
            .get_one(id)
            .await
            .context("Unable to get subscription")?;
        Ok(subscription.is_some())
    }

    pub async fn create(&self, desc: SubscriptionDesc) -> Result<Subscription, anyhow::Error> {
        let subscription = Subscription::new(desc);
        self.repo
            .add(subscription.clone())
            .await
            .context("Unable to add subscription")?;
        log::debug!(
            "Created subscription {} for target {}",
            subscription.id,
            subscription.target
        );
        Ok(subscription)
    }

    pub async fn update(
        &self,
        id: &IdentityOf<Subscription>,
        desc: SubscriptionDesc,
    ) -> Result<Subscription, anyhow::Error> {
        let mut subscription = self.get(id).await?;
        if subscription.update(desc) {
            subscription = self.persist(subscription).await?;
        }
        Ok(subscription)
    }

    pub async fn persist(
        &self,
        mut subscription: Subscription,
    ) -> Result<Subscription, anyhow::Error> {
        subscription.modified = OffsetDateTime::now_utc();
        self.repo
            .save(subscription.clone())
            .await
            .context("Unable to save subscription")?;
        Ok(subscription)
    }

    pub async fn delete(&self, id: &IdentityOf<Subscription>) -> Result<(), anyhow::Error> {
        self.repo
            .remove(id)
            .await
            .context("Unable to remove subscription")?;
        log::debug!("Removed subscription {id}");
        Ok(())
    }
}
