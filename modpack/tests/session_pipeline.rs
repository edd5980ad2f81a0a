//! End-to-end tests: descriptor text → prepared install → executed plan.
//!
//! Run with: `cargo test --test session_pipeline`

mod common;

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use modpack::codec::{self, Format};
use modpack::compat::ConflictKind;
use modpack::config::ConfigFile;
use modpack::descriptor::InstallType;
use modpack::installer::{
    FetchError, FetchedArchive, HandlerError, HandlerRegistry, InstallHandler, PlanExecutor,
};
use modpack::plan::{OverlapPolicy, Placement};
use modpack::resolver::{FirstChoice, ScriptedSelector};
use modpack::session::{InstallSession, SessionConfig, SessionError};

use common::full_mod;

// ============================================================================
// Helper Functions
// ============================================================================

fn installed(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(id, v)| (id.to_string(), v.to_string()))
        .collect()
}

/// Records the `To` paths it was asked to place.
struct RecordingHandler {
    placed: Rc<RefCell<Vec<String>>>,
}

impl InstallHandler for RecordingHandler {
    fn install(
        &self,
        _archive: &FetchedArchive,
        placements: &[&Placement],
    ) -> Result<usize, HandlerError> {
        let mut placed = self.placed.borrow_mut();
        placed.extend(placements.iter().map(|p| p.to().to_string()));
        Ok(placements.len())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

// ============================================================================
// Preparation
// ============================================================================

#[test]
fn test_prepare_from_xml_text() {
    let xml = codec::encode(&full_mod(), Format::Xml).unwrap();
    let descriptor = codec::decode(&xml, Format::Xml).unwrap();

    let session = InstallSession::new(SessionConfig::new().with_game("VI").with_game_version("1.0.3"));
    let mut selector = ScriptedSelector::new().answer("Style", "Modern").answer("Font", "Serif");
    let prepared = session
        .prepare(&descriptor, &installed(&[("ff6.loader", "1.0")]), &mut selector)
        .unwrap();

    assert!(prepared.can_proceed());
    assert_eq!(prepared.plan.order_hints.len(), 1);
    assert_eq!(prepared.plan.order_hints[0].mod_id, "ff6.loader");
    assert_eq!(prepared.plan.work_items_for(InstallType::Bundles).count(), 1);
}

#[test]
fn test_conflicts_are_reported_alongside_plan() {
    let view = installed(&[("ff6.loader", "0.9"), ("ff6.oldui", "3.0")]);
    let prepared = InstallSession::default()
        .prepare(&full_mod(), &view, &mut FirstChoice)
        .unwrap();

    let kinds: Vec<ConflictKind> = prepared.conflicts.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![ConflictKind::MissingRequirement, ConflictKind::ForbiddenCombination]
    );
    assert!(!prepared.can_proceed());
    assert!(!prepared.plan.is_empty());
}

#[test]
fn test_strict_config_file_refuses_invalid_descriptor() {
    let mut m = full_mod();
    m.mod_file_links = vec!["https://example.com/widescreen.zip".into()];

    let strict = InstallSession::new(ConfigFile::default().to_session_config());
    assert!(matches!(
        strict.prepare(&m, &HashMap::<String, String>::new(), &mut FirstChoice),
        Err(SessionError::Invalid { .. })
    ));

    let lenient = InstallSession::new(
        ConfigFile::default()
            .with_strict(false)
            .with_overlap_policy(OverlapPolicy::FirstWriteWins)
            .to_session_config(),
    );
    let prepared = lenient
        .prepare(&m, &HashMap::<String, String>::new(), &mut FirstChoice)
        .unwrap();
    assert_eq!(
        prepared.report.messages(),
        vec!["Mod File Link [https://example.com/widescreen.zip] must be json or xml"]
    );
    assert_eq!(prepared.plan.policy, OverlapPolicy::FirstWriteWins);
}

// ============================================================================
// Execution
// ============================================================================

#[test]
fn test_prepared_plan_executes_through_handlers() {
    let mut selector = ScriptedSelector::new().answer("Style", "Modern").answer("Font", "Sans");
    let prepared = InstallSession::default()
        .prepare(&full_mod(), &installed(&[("ff6.loader", "1.1")]), &mut selector)
        .unwrap();

    let placed = Rc::new(RefCell::new(Vec::new()));
    let registry = InstallType::ALL
        .into_iter()
        .fold(HandlerRegistry::new(), |registry, strategy| {
            registry.with_handler(
                strategy,
                RecordingHandler {
                    placed: Rc::clone(&placed),
                },
            )
        });
    assert!(registry.is_complete());

    let fetcher = |url: &str| -> Result<FetchedArchive, FetchError> {
        if url.starts_with("https://down.example/core") {
            Err(FetchError::new(url, "connection reset"))
        } else {
            Ok(FetchedArchive::new(url, &b"archive"[..]))
        }
    };

    let reports = PlanExecutor::new(fetcher, registry).execute(&prepared.plan);

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.is_success()));
    let core = reports.iter().find(|r| r.download == "core").unwrap();
    assert_eq!(
        core.outcome.as_ref().map(|s| s.source.as_str()),
        Ok("https://mirror.example/core.zip")
    );

    let placed = placed.borrow();
    assert!(placed.contains(&"StreamingAssets/style.bundle".to_string()));
    assert!(placed.contains(&"Fonts/menu.bundle".to_string()));
    assert!(placed.contains(&"Magicite".to_string()));
}
