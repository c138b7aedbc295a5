//! Shared value types for the Rill streaming workspace.
//!
//! This crate holds the records that flow through the stream sources and the
//! ordered rosters they are derived from. It has no knowledge of how values
//! are produced or consumed; that lives in `rill-stream`.

mod catalog;
mod error;
mod event;

pub use catalog::{Catalog, DEFAULT_ACTIONS, DEFAULT_ACTORS};
pub use error::TypesError;
pub use event::{EventRecord, HIGH_LEVEL_THRESHOLD, MAX_LEVEL};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_matches_rosters() {
        let catalog = Catalog::default();
        assert_eq!(catalog.actors().len(), DEFAULT_ACTORS.len());
        assert_eq!(catalog.actions().len(), DEFAULT_ACTIONS.len());
        assert_eq!(catalog.actor(0), "alice");
        assert_eq!(catalog.actor(4), "youssef");
        assert_eq!(catalog.action(1), "found treasure");
    }

    #[test]
    fn catalog_lookup_wraps_around() {
        let catalog = Catalog::default();
        assert_eq!(catalog.actor(5), "alice");
        assert_eq!(catalog.actor(7), "charlie");
        assert_eq!(catalog.action(3), "killed monster");
    }

    #[test]
    fn empty_actor_set_is_rejected() {
        let err = Catalog::new(Vec::<String>::new(), vec!["jump".to_string()]).unwrap_err();
        assert!(matches!(err, TypesError::EmptyCatalog { which: "actors" }));
    }

    #[test]
    fn empty_action_set_is_rejected() {
        let err = Catalog::new(vec!["eve".to_string()], Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, TypesError::EmptyCatalog { which: "actions" }));
    }

    #[test]
    fn custom_catalog_preserves_order() {
        let catalog = Catalog::new(["x", "y"], ["run"]).expect("catalog should build");
        assert_eq!(catalog.actors(), ["x".to_string(), "y".to_string()]);
        assert_eq!(catalog.action(9), "run");
    }

    #[test]
    fn high_level_threshold_is_inclusive() {
        let record = |level| EventRecord {
            sequence_id: 1,
            actor: "alice".to_string(),
            level,
            action: "leveled up".to_string(),
        };
        assert!(!record(9).is_high_level());
        assert!(record(10).is_high_level());
        assert!(record(MAX_LEVEL).is_high_level());
    }

    #[test]
    fn event_record_json_shape() {
        let record = EventRecord {
            sequence_id: 2,
            actor: "bob".to_string(),
            level: 15,
            action: "found treasure".to_string(),
        };
        let value = serde_json::to_value(&record).expect("record should serialize");
        assert_eq!(value["sequence_id"], 2);
        assert_eq!(value["actor"], "bob");
        assert_eq!(value["level"], 15);
        assert_eq!(value["action"], "found treasure");
    }
}
