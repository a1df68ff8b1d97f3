use derive_more::{Display, Error};
use uuid::Uuid;

pub mod artifact;
pub mod representation;
pub mod subscription;

/// Lookup failure for an entity id. Callers that need to react to it
/// downcast the [`anyhow::Error`] back to this type.
#[derive(Debug, Display, Error)]
#[display("{kind} {id} not found")]
pub struct NotFound {
    #[error(ignore)]
    pub kind: &'static str,
    #[error(ignore)]
    pub id: Uuid,
}

pub(crate) fn update_field<T: PartialEq>(field: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) if *field != value => {
            *field = value;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_kind_and_id() {
        let id = Uuid::new_v4();
        let err = NotFound {
            kind: "representation",
            id,
        };
        assert_eq!(format!("representation {id} not found"), err.to_string());
    }

    #[test]
    fn update_field_only_reports_real_changes() {
        let mut title = "old".to_string();
        assert!(!update_field(&mut title, None));
        assert!(!update_field(&mut title, Some("old".to_string())));
        assert!(update_field(&mut title, Some("new".to_string())));
        assert_eq!("new", title);
    }
}
