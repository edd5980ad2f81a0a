//! Install preparation facade.
//!
//! [`InstallSession::prepare`] runs the whole pipeline for one candidate
//! descriptor and returns everything an installer needs:
//!
//! 1. Validate the descriptor (strict mode refuses invalid ones)
//! 2. Optionally confirm the target game is supported
//! 3. Check compatibility against installed mods
//! 4. Resolve the configuration graph with the caller's selector
//! 5. Compile the install plan and attach order hints
//!
//! Nothing is fetched or written. Conflicts are reported, not enforced.

use thiserror::Error;
use tracing::{info, warn};

use crate::compat::{self, Conflict, InstalledMods};
use crate::descriptor::{Mod, UnsupportedGame};
use crate::plan::{InstallPlan, OverlapPolicy, PlanCompiler};
use crate::resolver::{self, ChoiceSelector, Resolution, ResolveError};
use crate::validator::{self, ValidationReport};

/// Errors that stop install preparation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Strict mode and the descriptor has violations.
    #[error("descriptor '{mod_id}' is invalid ({} violations)", report.len())]
    Invalid {
        mod_id: String,
        report: ValidationReport,
    },

    #[error(transparent)]
    UnsupportedGame(#[from] UnsupportedGame),

    #[error("configuration resolution failed: {0}")]
    Resolve(#[from] ResolveError),
}

/// Settings for an [`InstallSession`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Refuse descriptors with validation violations.
    pub strict: bool,

    /// Rule for overlapping placement targets.
    pub overlap_policy: OverlapPolicy,

    /// Game the install targets. `None` skips the support check.
    pub game: Option<String>,

    /// Installed game version, checked against the mod's accepted versions.
    pub game_version: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            strict: true,
            overlap_policy: OverlapPolicy::default(),
            game: None,
            game_version: None,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap_policy = policy;
        self
    }

    pub fn with_game(mut self, game: impl Into<String>) -> Self {
        self.game = Some(game.into());
        self
    }

    pub fn with_game_version(mut self, version: impl Into<String>) -> Self {
        self.game_version = Some(version.into());
        self
    }
}

/// Everything produced for one candidate.
#[derive(Debug, Clone)]
pub struct PreparedInstall {
    pub report: ValidationReport,
    pub conflicts: Vec<Conflict>,
    pub resolution: Resolution,
    pub plan: InstallPlan,
}

impl PreparedInstall {
    /// No compatibility conflicts. Callers may still choose to override.
    pub fn can_proceed(&self) -> bool {
        self.conflicts.is_empty()
    }
}

/// Runs validation, compatibility checking, resolution and compilation.
#[derive(Debug, Clone, Default)]
pub struct InstallSession {
    config: SessionConfig,
}

impl InstallSession {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn prepare<I, S>(
        &self,
        descriptor: &Mod,
        installed: &I,
        selector: &mut S,
    ) -> Result<PreparedInstall, SessionError>
    where
        I: InstalledMods + ?Sized,
        S: ChoiceSelector + ?Sized,
    {
        let report = validator::validate(descriptor);
        if !report.is_valid() {
            if self.config.strict {
                return Err(SessionError::Invalid {
                    mod_id: descriptor.id.clone(),
                    report,
                });
            }
            warn!(
                mod_id = %descriptor.id,
                violations = report.len(),
                "continuing with invalid descriptor"
            );
        }

        if let Some(game) = &self.config.game {
            match &self.config.game_version {
                Some(version) => descriptor.supports_version(game, version)?,
                None => descriptor.supports(game)?,
            }
        }

        let conflicts = compat::check(descriptor, installed);
        let resolution = resolver::resolve(descriptor, selector)?;
        let plan = PlanCompiler::new(self.config.overlap_policy)
            .compile(&resolution.files, &descriptor.downloadables)
            .with_order_hints(compat::order_hints(descriptor));

        info!(
            mod_id = %descriptor.id,
            conflicts = conflicts.len(),
            placements = plan.placements.len(),
            work_items = plan.work_items.len(),
            "install prepared"
        );

        Ok(PreparedInstall {
            report,
            conflicts,
            resolution,
            plan,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::compat::NothingInstalled;
    use crate::descriptor::{
        Choice, Configuration, Download, DownloadFiles, Game, InstallType, ModCompat,
        ModCompatibility, ModFile,
    };
    use crate::resolver::{FirstChoice, ScriptedSelector};

    fn candidate() -> Mod {
        Mod {
            id: "ff6.fonts".to_string(),
            author: "kupo".to_string(),
            release_date: "Jan 02 2024".to_string(),
            category: "Fonts".to_string(),
            description: "Font pack".to_string(),
            link: "https://example.com/fonts".to_string(),
            mod_file_links: vec!["https://example.com/fonts.xml".to_string()],
            ..Mod::new("ff6.fonts", "Fonts")
        }
        .with_download(Download::new("fonts", InstallType::Bundles).with_source("https://a/f.zip"))
        .with_game(Game::new("Final Fantasy VI").with_version("1.0.3"))
        .with_configuration(
            Configuration::new("Font")
                .with_description("Pick one")
                .with_choice(
                    Choice::new("Sans")
                        .with_files(DownloadFiles::new("fonts").with_file(ModFile::new("s", "F"))),
                )
                .with_choice(
                    Choice::new("Serif")
                        .with_files(DownloadFiles::new("fonts").with_file(ModFile::new("r", "F"))),
                ),
        )
        .with_compatibility(
            ModCompatibility::default().with_require(ModCompat::new("ff6.core").with_version("2")),
        )
    }

    #[test]
    fn test_prepare_full_pipeline() {
        let mut installed = HashMap::new();
        installed.insert("ff6.core".to_string(), "2".to_string());

        let mut selector = ScriptedSelector::new().answer("Font", "Serif");
        let prepared = InstallSession::default()
            .prepare(&candidate(), &installed, &mut selector)
            .unwrap();

        assert!(prepared.report.is_valid());
        assert!(prepared.can_proceed());
        assert_eq!(prepared.resolution.choice_for("Font"), Some("Serif"));
        assert_eq!(prepared.plan.placements.len(), 1);
        assert_eq!(prepared.plan.placements[0].from(), "r");
        assert!(prepared.plan.work_items[0].referenced);
    }

    #[test]
    fn test_conflicts_do_not_abort() {
        let prepared = InstallSession::default()
            .prepare(&candidate(), &NothingInstalled, &mut FirstChoice)
            .unwrap();
        assert!(!prepared.can_proceed());
        assert_eq!(prepared.conflicts.len(), 1);
        assert!(!prepared.plan.is_empty());
    }

    #[test]
    fn test_strict_mode_refuses_invalid() {
        let mut m = candidate();
        m.author.clear();

        match InstallSession::default().prepare(&m, &NothingInstalled, &mut FirstChoice) {
            Err(SessionError::Invalid { mod_id, report }) => {
                assert_eq!(mod_id, "ff6.fonts");
                assert_eq!(report.messages(), vec!["Author is required"]);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }

        let lenient = InstallSession::new(SessionConfig::new().with_strict(false));
        let prepared = lenient
            .prepare(&m, &NothingInstalled, &mut FirstChoice)
            .unwrap();
        assert_eq!(prepared.report.len(), 1);
    }

    #[test]
    fn test_game_support_check() {
        let config = SessionConfig::new().with_game("VI").with_game_version("1.0.3");
        assert!(InstallSession::new(config)
            .prepare(&candidate(), &NothingInstalled, &mut FirstChoice)
            .is_ok());

        let config = SessionConfig::new().with_game("VI").with_game_version("1.0.4");
        assert!(matches!(
            InstallSession::new(config).prepare(&candidate(), &NothingInstalled, &mut FirstChoice),
            Err(SessionError::UnsupportedGame(_))
        ));
    }

    #[test]
    fn test_resolution_failure_propagates() {
        let mut m = candidate();
        m.configurations[0].choices[0].next_configuration_name = Some("Gone".to_string());

        let lenient = InstallSession::new(SessionConfig::new().with_strict(false));
        assert!(matches!(
            lenient.prepare(&m, &NothingInstalled, &mut FirstChoice),
            Err(SessionError::Resolve(ResolveError::DanglingReference { .. }))
        ));
    }

    #[test]
    fn test_overlap_policy_flows_to_plan() {
        let config = SessionConfig::new().with_overlap_policy(OverlapPolicy::FirstWriteWins);
        let prepared = InstallSession::new(config)
            .prepare(&candidate(), &NothingInstalled, &mut FirstChoice)
            .unwrap();
        assert_eq!(prepared.plan.policy, OverlapPolicy::FirstWriteWins);
    }
}
