//! Persistence behavior of the engagement store across reopen cycles.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;
use ver_core::entities::AnalysisResult;
use ver_core::enums::ComplianceStatus;
use ver_store::{CORRUPT_SUFFIX, DEFAULT_ENGAGEMENT_NAME, EngagementStore, StoreError};

fn store_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("engagements.json")
}

#[test]
fn collection_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let (created, entry) = {
        let mut store = EngagementStore::open(&path).unwrap();
        let created = store.create("Q1 Review").unwrap();
        let entry = store
            .add_audit_entry(
                &created.id,
                AnalysisResult::failed("offline"),
                "We store user data indefinitely.",
                vec!["gdpr".into()],
            )
            .unwrap();
        (created, entry)
    };

    let reopened = EngagementStore::open(&path).unwrap();
    assert_eq!(reopened.list().len(), 2);
    assert_eq!(reopened.list()[0].name, DEFAULT_ENGAGEMENT_NAME);
    let engagement = reopened.get(&created.id).unwrap();
    assert_eq!(engagement.audit_trail, vec![entry]);
    // Selection is not persisted: the first engagement is active again.
    assert_eq!(reopened.active().unwrap().name, DEFAULT_ENGAGEMENT_NAME);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(5)]
fn reopen_preserves_every_engagement(#[case] extra: usize) {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    let mut store = EngagementStore::open(&path).unwrap();
    for i in 0..extra {
        store.create(&format!("Engagement {i}")).unwrap();
    }
    let expected = store.list().to_vec();

    let reopened = EngagementStore::open(&path).unwrap();
    assert_eq!(reopened.list(), expected.as_slice());
}

#[test]
fn corrupt_file_is_moved_aside_and_bootstrapped() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, "{ not json").unwrap();

    let store = EngagementStore::open(&path).unwrap();
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.active().unwrap().name, DEFAULT_ENGAGEMENT_NAME);

    let backup = dir.path().join(format!("engagements.json{CORRUPT_SUFFIX}"));
    assert_eq!(std::fs::read_to_string(backup).unwrap(), "{ not json");
}

#[test]
fn schema_mismatch_counts_as_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, r#"[{"id":"eng-1","name":42,"createdAt":"2026-01-01T00:00:00Z"}]"#)
        .unwrap();

    let store = EngagementStore::open(&path).unwrap();
    assert_eq!(store.list()[0].name, DEFAULT_ENGAGEMENT_NAME);
    assert!(dir.path().join(format!("engagements.json{CORRUPT_SUFFIX}")).exists());
}

#[test]
fn empty_collection_bootstraps_without_backup() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, "[]").unwrap();

    let store = EngagementStore::open(&path).unwrap();
    assert_eq!(store.list().len(), 1);
    assert!(!dir.path().join(format!("engagements.json{CORRUPT_SUFFIX}")).exists());
}

#[test]
fn legacy_file_without_trail_loads() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    std::fs::write(
        &path,
        r#"[{"id":"eng-legacy01","name":"Imported","createdAt":"2026-01-01T00:00:00Z"}]"#,
    )
    .unwrap();

    let store = EngagementStore::open(&path).unwrap();
    let active = store.active().unwrap();
    assert_eq!(active.id, "eng-legacy01");
    assert!(active.audit_trail.is_empty());
}

#[test]
fn write_failure_is_surfaced_and_memory_unchanged() {
    let dir = TempDir::new().unwrap();
    // A regular file where the store's directory should be.
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let path = blocker.join("engagements.json");

    let mut store = EngagementStore::open(&path).expect("bootstrap stays usable in memory");
    assert_eq!(store.list().len(), 1);
    let active_id = store.active().unwrap().id.clone();

    let err = store.create("Q1 Review").unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.active().unwrap().id, active_id);

    let err = store
        .add_audit_entry(&active_id, AnalysisResult::failed("x"), "text", vec![])
        .unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert!(store.active().unwrap().audit_trail.is_empty());
}

#[test]
fn stored_result_keeps_status() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    let mut store = EngagementStore::open(&path).unwrap();
    let id = store.active().unwrap().id.clone();
    let entry = store
        .add_audit_entry(&id, AnalysisResult::failed("no key"), "text", vec!["gdpr".into()])
        .unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"auditTrail\""));
    assert!(raw.contains("ANALYSIS_FAILED"));
    assert_eq!(
        entry.analysis_result.compliance_status,
        ComplianceStatus::AnalysisFailed
    );
}
