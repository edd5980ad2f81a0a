//! Indexed lookup over a mod's configurations.
//!
//! Configurations are stored as a flat list; [`ConfigGraph`] borrows that
//! list and adds a name → index table so traversal never scans.

use std::collections::HashMap;

use super::error::{ResolveError, ResolveResult};
use crate::descriptor::Configuration;

/// Borrowed view of a configuration graph.
#[derive(Debug)]
pub struct ConfigGraph<'a> {
    nodes: &'a [Configuration],
    index: HashMap<&'a str, usize>,
}

impl<'a> ConfigGraph<'a> {
    /// Build the lookup table, rejecting duplicate names.
    pub fn new(nodes: &'a [Configuration]) -> ResolveResult<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.name.as_str(), i).is_some() {
                return Err(ResolveError::DuplicateConfiguration {
                    name: node.name.clone(),
                });
            }
        }
        Ok(Self { nodes, index })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&'a Configuration> {
        self.index.get(name).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The node resolution starts from.
    ///
    /// The single root-flagged node, or the sole node when exactly one exists
    /// and none is flagged.
    pub fn root(&self) -> ResolveResult<&'a Configuration> {
        let roots: Vec<&'a Configuration> = self.nodes.iter().filter(|c| c.root).collect();
        match roots.as_slice() {
            [root] => Ok(*root),
            [] if self.nodes.len() == 1 => Ok(&self.nodes[0]),
            [] => Err(ResolveError::MissingRoot {
                count: self.nodes.len(),
            }),
            many => Err(ResolveError::MultipleRoots {
                names: many.iter().map(|c| c.name.clone()).collect(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Configuration> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(names: &[(&str, bool)]) -> Vec<Configuration> {
        names
            .iter()
            .map(|(name, root)| {
                let c = Configuration::new(*name);
                if *root {
                    c.as_root()
                } else {
                    c
                }
            })
            .collect()
    }

    #[test]
    fn test_lookup_by_name() {
        let list = nodes(&[("A", true), ("B", false)]);
        let graph = ConfigGraph::new(&list).unwrap();

        assert_eq!(graph.len(), 2);
        assert!(graph.contains("B"));
        assert_eq!(graph.get("A").map(|c| c.root), Some(true));
        assert!(graph.get("C").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let list = nodes(&[("A", true), ("A", false)]);
        assert_eq!(
            ConfigGraph::new(&list).unwrap_err(),
            ResolveError::DuplicateConfiguration { name: "A".into() }
        );
    }

    #[test]
    fn test_root_selection() {
        let single = nodes(&[("Only", false)]);
        assert_eq!(ConfigGraph::new(&single).unwrap().root().unwrap().name, "Only");

        let flagged = nodes(&[("A", false), ("B", true)]);
        assert_eq!(ConfigGraph::new(&flagged).unwrap().root().unwrap().name, "B");

        let none = nodes(&[("A", false), ("B", false)]);
        assert_eq!(
            ConfigGraph::new(&none).unwrap().root().unwrap_err(),
            ResolveError::MissingRoot { count: 2 }
        );

        let many = nodes(&[("A", true), ("B", true)]);
        assert_eq!(
            ConfigGraph::new(&many).unwrap().root().unwrap_err(),
            ResolveError::MultipleRoots {
                names: vec!["A".into(), "B".into()]
            }
        );
    }
}
