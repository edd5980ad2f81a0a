//! `modpack plan`: the full install session without touching the game.

use std::path::Path;

use modpack::plan::{InstallPlan, Overlap, OverlapPolicy};
use modpack::resolver::ChoiceSelector;
use modpack::session::{InstallSession, PreparedInstall, SessionConfig};

use super::check::{print_conflicts, print_order_hints};
use super::common::{read_descriptor, read_installed};
use crate::error::CliError;
use crate::output::Output;

/// Prepare an install for `file` and print the plan.
///
/// Returns `Ok(false)` when compatibility conflicts were found.
pub fn run<S>(
    out: &dyn Output,
    config: SessionConfig,
    file: &Path,
    installed: Option<&Path>,
    selector: &mut S,
) -> Result<bool, CliError>
where
    S: ChoiceSelector + ?Sized,
{
    let descriptor = read_descriptor(file)?;
    let installed = installed.map(read_installed).transpose()?.unwrap_or_default();

    let prepared = InstallSession::new(config).prepare(&descriptor, &installed, selector)?;
    print_prepared(out, &prepared);
    Ok(prepared.can_proceed())
}

fn print_prepared(out: &dyn Output, prepared: &PreparedInstall) {
    if !prepared.report.is_valid() {
        out.header(&format!("Violations ({})", prepared.report.len()));
        for violation in &prepared.report {
            out.warning(&format!("  - {}", violation));
        }
        out.newline();
    }

    print_conflicts(out, &prepared.conflicts);
    if !prepared.plan.order_hints.is_empty() {
        out.newline();
        print_order_hints(out, &prepared.plan.order_hints);
    }

    out.newline();
    out.header("Choices");
    for step in &prepared.resolution.path {
        out.indented(&step.to_string());
    }
    if prepared.resolution.path.is_empty() {
        out.indented("(no configurations)");
    }

    out.newline();
    print_plan(out, &prepared.plan);
}

fn print_plan(out: &dyn Output, plan: &InstallPlan) {
    out.header("Work items");
    for item in &plan.work_items {
        let unused = if item.referenced { "" } else { " (unreferenced)" };
        out.indented(&format!("{} [{}]{}", item.download.name, item.strategy, unused));
    }
    if !plan.unclassified.is_empty() {
        out.warning(&format!(
            "  Unclassified downloads: {}",
            plan.unclassified.join(", ")
        ));
    }

    out.newline();
    out.header(&format!("Placements ({})", plan.policy));
    let effective = plan.effective_placements();
    if effective.is_empty() {
        out.indented("(nothing to install)");
    }
    for placement in effective {
        out.indented(&placement.to_string());
    }

    if !plan.overlaps.is_empty() {
        out.newline();
        out.header(&format!("Overlaps ({})", plan.overlaps.len()));
        for overlap in &plan.overlaps {
            out.warning(&format!("  {}", describe_overlap(plan, overlap)));
        }
    }
}

fn describe_overlap(plan: &InstallPlan, overlap: &Overlap) -> String {
    let earlier = &plan.placements[overlap.earlier];
    let later = &plan.placements[overlap.later];
    let (kept, dropped) = match plan.policy {
        OverlapPolicy::LastWriteWins => (later, earlier),
        OverlapPolicy::FirstWriteWins => (earlier, later),
    };
    format!("{}: {} wins over {}", overlap.target, kept, dropped)
}

#[cfg(test)]
mod tests {
    use modpack::resolver::{FirstChoice, ScriptedSelector};
    use tempfile::TempDir;

    use super::*;
    use crate::commands::common::fixtures::{write, DESCRIPTOR_JSON};
    use crate::output::BufferOutput;

    #[test]
    fn test_plan_lists_work_items_and_placements() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "fonts.json", DESCRIPTOR_JSON);
        let installed = write(&temp, "installed.json", r#"{"ff6.core": "2.0"}"#);
        let out = BufferOutput::new();

        let ok = run(
            &out,
            SessionConfig::default(),
            &path,
            Some(&installed),
            &mut FirstChoice,
        )
        .unwrap();

        assert!(ok);
        let lines = out.lines();
        assert!(lines.contains(&"  fonts [Bundles]".to_string()));
        assert!(lines.contains(&"  extra [Compressed] (unreferenced)".to_string()));
        assert!(lines.contains(&"  [fonts] base.bundle -> Fonts/base.bundle".to_string()));
        assert!(lines.contains(&"  [fonts] sans.bundle -> Fonts/menu.bundle".to_string()));
    }

    #[test]
    fn test_plan_reports_overlaps_by_policy() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "fonts.json", DESCRIPTOR_JSON);
        let mut selector = ScriptedSelector::new()
            .answer("Style", "Serif")
            .answer("Size", "Large");
        let out = BufferOutput::new();

        run(&out, SessionConfig::default(), &path, None, &mut selector).unwrap();

        let text = out.text();
        assert!(text.contains("Overlaps (1)"));
        assert!(text.contains(
            "Fonts/base.bundle: [fonts] large.bundle -> Fonts/base.bundle wins over [fonts] base.bundle -> Fonts/base.bundle"
        ));
        assert!(!out
            .lines()
            .contains(&"  [fonts] base.bundle -> Fonts/base.bundle".to_string()));
    }

    #[test]
    fn test_missing_requirement_fails_plan() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "fonts.json", DESCRIPTOR_JSON);
        let out = BufferOutput::new();

        let ok = run(&out, SessionConfig::default(), &path, None, &mut FirstChoice).unwrap();

        assert!(!ok);
        assert!(out
            .text()
            .contains("requires ff6.core (version 2.0) which is not installed"));
    }

    #[test]
    fn test_strict_rejects_invalid_descriptor() {
        let temp = TempDir::new().unwrap();
        let text = DESCRIPTOR_JSON.replace(r#""Author": "kupo","#, "");
        let path = write(&temp, "fonts.json", &text);

        let strict = run(
            &BufferOutput::new(),
            SessionConfig::default(),
            &path,
            None,
            &mut FirstChoice,
        );
        assert!(matches!(strict, Err(CliError::Session(_))));

        let out = BufferOutput::new();
        run(
            &out,
            SessionConfig::default().with_strict(false),
            &path,
            None,
            &mut FirstChoice,
        )
        .unwrap();
        assert!(out.text().contains("- Author is required"));
    }
}
