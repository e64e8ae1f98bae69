//! End-to-end wizard flow over the file-backed draft store.

use std::sync::{Arc, Once};
use std::time::Duration;

use da_app::{DraftConfig, DraftManager, WizardSession};
use da_core::requirements::PartialRequirements;
use da_infra::{FileDraftStore, SystemClock};
use tempfile::tempdir;

static TRACE_INIT: Once = Once::new();

fn init_tracing() {
    TRACE_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn manager_in(dir: &std::path::Path) -> DraftManager {
    DraftManager::new(
        Arc::new(FileDraftStore::new(dir)),
        Arc::new(SystemClock),
        DraftConfig {
            // Shrink the quiet period so the test does not sleep for seconds.
            autosave_delay: Duration::from_millis(20),
            ..Default::default()
        },
    )
}

fn step_one() -> PartialRequirements {
    PartialRequirements {
        project_type: Some("web".into()),
        target_platform: Some(vec!["desktop".into(), "mobile".into()]),
        ..Default::default()
    }
}

fn step_three() -> PartialRequirements {
    PartialRequirements {
        features: Some(vec!["authentication".into(), "full-text search".into()]),
        description: Some("a knowledge base with search across all teams".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn a_full_run_leaves_no_draft_behind() {
    init_tracing();
    let dir = tempdir().unwrap();
    let mut session = WizardSession::begin(manager_in(dir.path()));

    session.apply(step_one());
    assert!(session.advance());
    assert!(session.advance());
    session.apply(step_three());
    assert!(session.advance());
    assert_eq!(session.current_step(), 4);

    let requirements = session.submit().expect("wizard data is complete");
    assert_eq!(requirements.features.len(), 2);

    // Nothing pending, nothing stored.
    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(!dir.path().join("project_requirements_draft.json").exists());
}

#[tokio::test]
async fn an_interrupted_run_resumes_where_it_left_off() {
    init_tracing();
    let dir = tempdir().unwrap();

    {
        let mut session = WizardSession::begin(manager_in(dir.path()));
        session.apply(step_one());
        assert!(session.advance());

        // Let the debounced save land before walking away.
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(dir.path().join("project_requirements_draft.json").exists());
    }

    let session = WizardSession::begin(manager_in(dir.path()));
    assert!(session.resumed_from().is_some());
    assert_eq!(session.current_step(), 2);
    assert_eq!(
        session.state().data().target_platform.as_deref().map(|p| p.len()),
        Some(2)
    );
}

#[tokio::test]
async fn independent_keys_do_not_interfere() {
    init_tracing();
    let dir = tempdir().unwrap();
    let store = Arc::new(FileDraftStore::new(dir.path()));

    let mk = |key: &str| {
        DraftManager::new(
            store.clone(),
            Arc::new(SystemClock),
            DraftConfig {
                storage_key: key.to_string(),
                ..Default::default()
            },
        )
    };

    let first = mk("wizard_a");
    let second = mk("wizard_b");

    first.save(1, &step_one());
    second.save(3, &step_three());

    first.clear();
    assert!(!first.has_draft());
    assert_eq!(second.load().unwrap().step, 3);
}
