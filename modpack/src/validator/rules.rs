//! Descriptor validation rules.

use std::collections::{HashMap, HashSet};

use super::report::{ValidationReport, ViolationKind};
use crate::descriptor::{Configuration, Mod};

const MOD_FILE_LINK_SUFFIXES: [&str; 2] = [".json", ".xml"];

/// Validate a descriptor, returning every violation found.
///
/// The descriptor is never modified and evaluation continues past the first
/// failure. An empty report means the descriptor is valid.
///
/// # Example
///
/// ```
/// use modpack::descriptor::Mod;
/// use modpack::validator::{validate, ViolationKind};
///
/// let report = validate(&Mod::default());
/// assert!(!report.is_valid());
/// assert!(report.contains(|k| matches!(k, ViolationKind::MissingField { field: "ID" })));
/// ```
pub fn validate(descriptor: &Mod) -> ValidationReport {
    let mut report = ValidationReport::new();

    check_required_fields(descriptor, &mut report);
    check_mod_file_links(descriptor, &mut report);
    check_preview(descriptor, &mut report);
    check_downloadables(descriptor, &mut report);
    check_payload(descriptor, &mut report);
    check_configurations(&descriptor.configurations, &mut report);
    check_roots(&descriptor.configurations, &mut report);
    check_graph_names(&descriptor.configurations, &mut report);

    report
}

/// Only the empty string counts as missing; whitespace is a value.
fn blank(value: &str) -> bool {
    value.is_empty()
}

fn check_required_fields(m: &Mod, report: &mut ValidationReport) {
    let required = [
        ("ID", &m.id),
        ("Name", &m.name),
        ("Author", &m.author),
        ("Release Date", &m.release_date),
        ("Category", &m.category),
        ("Description", &m.description),
        ("Link", &m.link),
    ];
    for (field, value) in required {
        report.check(blank(value), || ViolationKind::MissingField { field });
    }
    report.check(m.mod_file_links.is_empty(), || ViolationKind::MissingField {
        field: "ModFileLinks",
    });
}

fn check_mod_file_links(m: &Mod, report: &mut ValidationReport) {
    for link in &m.mod_file_links {
        let ok = MOD_FILE_LINK_SUFFIXES
            .iter()
            .any(|suffix| link.ends_with(suffix));
        report.check(!ok, || ViolationKind::InvalidModFileLink { link: link.clone() });
    }
}

fn check_preview(m: &Mod, report: &mut ValidationReport) {
    if let Some(preview) = &m.preview {
        report.check(!preview.size.is_large_enough(), || {
            ViolationKind::PreviewTooSmall { size: preview.size }
        });
    }
}

fn check_downloadables(m: &Mod, report: &mut ValidationReport) {
    report.check(m.downloadables.is_empty(), || ViolationKind::NoDownloadables);

    for download in &m.downloadables {
        report.check(blank(&download.name), || ViolationKind::DownloadMissingName);
        report.check(download.sources.is_empty(), || {
            ViolationKind::DownloadMissingSource {
                download: download.name.clone(),
            }
        });
        report.check(download.install_type.is_none(), || {
            ViolationKind::DownloadMissingInstallType {
                download: download.name.clone(),
            }
        });
    }
}

fn check_payload(m: &Mod, report: &mut ValidationReport) {
    let has_always_install = m.always_install_files().is_some();
    report.check(
        !has_always_install && m.configurations.is_empty(),
        || ViolationKind::NoInstallPayload,
    );

    if let Some(files) = &m.always_install {
        report.check(files.is_empty(), || ViolationKind::EmptyAlwaysInstall {
            download_name: files.download_name.clone(),
        });
    }
}

fn check_configurations(configurations: &[Configuration], report: &mut ValidationReport) {
    for config in configurations {
        report.check(blank(&config.name), || ViolationKind::ConfigurationMissingName);
        report.check(blank(&config.description), || {
            ViolationKind::ConfigurationMissingDescription {
                configuration: config.name.clone(),
            }
        });
        report.check(config.choices.is_empty(), || {
            ViolationKind::ConfigurationWithoutChoices {
                configuration: config.name.clone(),
            }
        });

        for choice in &config.choices {
            report.check(blank(&choice.name), || ViolationKind::ChoiceMissingName {
                configuration: config.name.clone(),
            });
            let self_loop = choice.next_configuration_name.as_deref() == Some(config.name.as_str());
            report.check(self_loop, || ViolationKind::SelfReferencingChoice {
                configuration: config.name.clone(),
                choice: choice.name.clone(),
            });
        }
    }
}

fn check_roots(configurations: &[Configuration], report: &mut ValidationReport) {
    let roots = configurations.iter().filter(|c| c.root).count();
    if configurations.len() > 1 && roots == 0 {
        report.push(ViolationKind::MissingRoot);
    } else if roots > 1 {
        report.push(ViolationKind::MultipleRoots { count: roots });
    }
}

/// Name uniqueness and dangling next-configuration references.
fn check_graph_names(configurations: &[Configuration], report: &mut ValidationReport) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for config in configurations.iter().filter(|c| !blank(&c.name)) {
        *seen.entry(config.name.as_str()).or_default() += 1;
    }

    let mut reported = HashSet::new();
    for config in configurations {
        let name = config.name.as_str();
        if seen.get(name).copied().unwrap_or(0) > 1 && reported.insert(name) {
            report.push(ViolationKind::DuplicateConfiguration {
                name: name.to_string(),
            });
        }
    }

    for config in configurations {
        for choice in &config.choices {
            let Some(target) = choice.next() else {
                continue;
            };
            if target != config.name && !seen.contains_key(target) {
                report.push(ViolationKind::UnknownNextConfiguration {
                    configuration: config.name.clone(),
                    choice: choice.name.clone(),
                    target: target.to_string(),
                });
            }
        }
    }
}
