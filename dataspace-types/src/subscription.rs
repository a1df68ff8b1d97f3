use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use typesafe_repository::async_ops::{Add, Get, List, Remove, Save, Select};
use typesafe_repository::macros::Id;
use typesafe_repository::{GetIdentity, Identity, RefIdentity, Repository, SelectBy, Selector};
use uuid::Uuid;

pub mod service;

pub trait SubscriptionRepository:
    Repository<Subscription, Error = anyhow::Error>
    + Get<Subscription>
    + List<Subscription>
    + Add<Subscription>
    + Save<Subscription>
    + Remove<Subscription>
    + Select<Subscription, ByTarget>
    + Send
    + Sync
{
}

/// Selects every subscription pointing at the given entity id.
pub struct ByTarget(pub Uuid);

impl Selector for ByTarget {}
impl SelectBy<ByTarget> for Subscription {}

#[derive(Id, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[Id(ref_id, get_id)]
pub struct Subscription {
    pub id: Uuid,
    #[serde(default = "default_time")]
    pub created: OffsetDateTime,
    #[serde(default = "default_time")]
    pub modified: OffsetDateTime,
    pub target: Uuid,
    pub location: String,
    pub subscriber: String,
    #[serde(default)]
    pub push_data: bool,
    #[serde(default)]
    pub ids_protocol: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionDesc {
    pub target: Uuid,
    pub location: String,
    pub subscriber: String,
    #[serde(default)]
    pub push_data: bool,
    #[serde(default)]
    pub ids_protocol: bool,
}

impl Subscription {
    pub fn new(desc: SubscriptionDesc) -> Self {
        let SubscriptionDesc {
            target,
            location,
            subscriber,
            push_data,
            ids_protocol,
        } = desc;
        Self {
            id: Uuid::new_v4(),
            created: default_time(),
            modified: default_time(),
            target,
            location,
            subscriber,
            push_data,
            ids_protocol,
        }
    }

    pub fn update(&mut self, desc: SubscriptionDesc) -> bool {
        let SubscriptionDesc {
            target,
            location,
            subscriber,
            push_data,
            ids_protocol,
        } = desc;
        let changed = self.target != target
            || self.location != location
            || self.subscriber != subscriber
            || self.push_data != push_data
            || self.ids_protocol != ids_protocol;
        self.target = target;
        self.location = location;
        self.subscriber = subscriber;
        self.push_data = push_data;
        self.ids_protocol = ids_protocol;
        changed
    }
}

fn default_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desc(target: Uuid) -> SubscriptionDesc {
        SubscriptionDesc {
            target,
            location: "https://localhost/notify".to_string(),
            subscriber: "https://localhost/subscriber".to_string(),
            push_data: false,
            ids_protocol: false,
        }
    }

    #[test]
    fn new_keeps_target() {
        let target = Uuid::new_v4();
        let subscription = Subscription::new(desc(target));
        assert_eq!(target, subscription.target);
        assert!(!subscription.push_data);
    }

    #[test]
    fn update_replaces_every_field() {
        let mut subscription = Subscription::new(desc(Uuid::new_v4()));
        let mut next = desc(subscription.target);
        next.push_data = true;
        assert!(subscription.update(next.clone()));
        assert!(subscription.push_data);
        assert!(!subscription.update(next));
    }
}
