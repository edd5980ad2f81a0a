//! Configuration graph traversal.

use std::collections::HashSet;
use std::fmt;

use tracing::debug;

use super::error::{ResolveError, ResolveResult, SelectorError};
use super::graph::ConfigGraph;
use super::selector::{ChoiceRequest, ChoiceSelector};
use crate::descriptor::{DownloadFiles, Mod};

/// One visited node and the choice taken there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStep {
    pub configuration: String,
    pub choice: String,
}

impl fmt::Display for ResolvedStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.configuration, self.choice)
    }
}

/// Outcome of a successful resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Payloads in application order, "always install" first.
    pub files: Vec<DownloadFiles>,
    /// Configurations visited and the choice made at each.
    pub path: Vec<ResolvedStep>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Choice taken at `configuration`, if it was visited.
    pub fn choice_for(&self, configuration: &str) -> Option<&str> {
        self.path
            .iter()
            .find(|step| step.configuration == configuration)
            .map(|step| step.choice.as_str())
    }
}

/// Walk the configuration graph of `descriptor`, asking `selector` for a
/// choice at each node.
///
/// Resolution is fail-fast: a dangling reference, a revisited node or a
/// selector failure aborts and discards the partial result.
///
/// # Example
///
/// ```
/// use modpack::descriptor::{Choice, Configuration, DownloadFiles, ModFile, Mod};
/// use modpack::resolver::{resolve, FirstChoice};
///
/// let m = Mod::new("demo", "Demo").with_configuration(
///     Configuration::new("Font").with_choice(
///         Choice::new("Serif")
///             .with_files(DownloadFiles::new("fonts").with_file(ModFile::new("serif.ttf", "Fonts/ui.ttf"))),
///     ),
/// );
///
/// let resolution = resolve(&m, &mut FirstChoice).unwrap();
/// assert_eq!(resolution.files.len(), 1);
/// assert_eq!(resolution.choice_for("Font"), Some("Serif"));
/// ```
pub fn resolve<S>(descriptor: &Mod, selector: &mut S) -> ResolveResult<Resolution>
where
    S: ChoiceSelector + ?Sized,
{
    let mut resolution = Resolution::default();
    if let Some(always) = descriptor.always_install_files() {
        resolution.files.push(always.clone());
    }

    if descriptor.configurations.is_empty() {
        debug!(mod_id = %descriptor.id, "no configurations, always-install payload only");
        return Ok(resolution);
    }

    let graph = ConfigGraph::new(&descriptor.configurations)?;
    let mut current = graph.root()?;
    let mut visited: HashSet<&str> = HashSet::with_capacity(graph.len());
    let mut trail: Vec<String> = Vec::new();

    loop {
        trail.push(current.name.clone());
        if !visited.insert(current.name.as_str()) {
            return Err(ResolveError::CyclicConfiguration { path: trail });
        }
        if current.choices.is_empty() {
            return Err(ResolveError::EmptyConfiguration {
                name: current.name.clone(),
            });
        }

        let request = ChoiceRequest {
            configuration: current,
            selection_type: descriptor.selection_type,
            step: resolution.path.len(),
        };
        let index = selector
            .select(request)
            .and_then(|index| {
                if index < current.choices.len() {
                    Ok(index)
                } else {
                    Err(SelectorError::OutOfRange {
                        index,
                        available: current.choices.len(),
                    })
                }
            })
            .map_err(|source| ResolveError::SelectorFailure {
                configuration: current.name.clone(),
                source,
            })?;

        let choice = &current.choices[index];
        debug!(
            configuration = %current.name,
            choice = %choice.name,
            next = choice.next().unwrap_or("-"),
            "choice selected"
        );

        if let Some(files) = &choice.download_files {
            resolution.files.push(files.clone());
        }
        resolution.path.push(ResolvedStep {
            configuration: current.name.clone(),
            choice: choice.name.clone(),
        });

        match choice.next() {
            None => break,
            Some(target) => {
                current = graph
                    .get(target)
                    .ok_or_else(|| ResolveError::DanglingReference {
                        from: current.name.clone(),
                        choice: choice.name.clone(),
                        target: target.to_string(),
                    })?;
            }
        }
    }

    debug!(
        mod_id = %descriptor.id,
        steps = resolution.path.len(),
        payloads = resolution.files.len(),
        "configuration resolved"
    );
    Ok(resolution)
}
