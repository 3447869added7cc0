use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::error::CompositionError;
use crate::types::{Contract, ParentEntry};

/// Inheritance graph over a contract's declared parents.
///
/// Edge semantics: if `B` lists `A` among its bases, `A` must precede `B` in
/// the linearization. Bases that are not themselves declared parents are ignored.
#[derive(Debug, Clone, Default)]
pub struct InheritanceGraph {
    /// Key: parent name in declaration order, Value: declared bases
    nodes: IndexMap<String, Vec<String>>,
}

impl InheritanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for every parent of `contract`.
    pub fn from_contract(contract: &Contract) -> Self {
        let mut graph = Self::new();
        for parent in contract.parents() {
            graph.add_node(parent.name(), parent.bases().iter().cloned());
        }
        graph
    }

    /// Add a parent and the names of the contracts it extends.
    pub fn add_node(&mut self, name: impl Into<String>, bases: impl IntoIterator<Item = String>) {
        let entry = self.nodes.entry(name.into()).or_default();
        for base in bases {
            if !entry.contains(&base) {
                entry.push(base);
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges between declared parents.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .values()
            .flatten()
            .filter(|b| self.nodes.contains_key(*b))
            .count()
    }

    /// Stable topological order, most-base first.
    ///
    /// Kahn's algorithm: at every step the earliest-declared parent whose
    /// bases are all placed is emitted next.
    pub fn topological_order(&self) -> Result<Vec<String>, CompositionError> {
        let names: Vec<&String> = self.nodes.keys().collect();
        let index: HashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();

        let mut pending = vec![0usize; names.len()];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); names.len()];
        for (i, bases) in self.nodes.values().enumerate() {
            for base in bases {
                if let Some(&b) = index.get(base.as_str()) {
                    pending[i] += 1;
                    dependents[b].push(i);
                }
            }
        }

        let mut placed = vec![false; names.len()];
        let mut order = Vec::with_capacity(names.len());
        while let Some(next) = (0..names.len()).find(|&i| !placed[i] && pending[i] == 0) {
            placed[next] = true;
            order.push(names[next].clone());
            for &d in &dependents[next] {
                pending[d] -= 1;
            }
        }

        if order.len() < names.len() {
            let cycle = self.find_cycle().unwrap_or_else(|| {
                names
                    .iter()
                    .zip(&placed)
                    .filter(|(_, p)| !**p)
                    .map(|(n, _)| (*n).clone())
                    .collect()
            });
            return Err(CompositionError::CyclicInheritance { cycle });
        }
        Ok(order)
    }

    /// Find one inheritance cycle, returned as a closed path (`A -> B -> A`).
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        let mut visited = HashSet::new();
        let mut in_stack = HashSet::new();
        let mut path = Vec::new();

        for node in self.nodes.keys() {
            if !visited.contains(node.as_str()) {
                if let Some(cycle) = self.dfs_find_cycle(node, &mut visited, &mut in_stack, &mut path) {
                    return Some(cycle);
                }
            }
        }
        None
    }

    fn dfs_find_cycle<'a>(
        &'a self,
        node: &'a str,
        visited: &mut HashSet<&'a str>,
        in_stack: &mut HashSet<&'a str>,
        path: &mut Vec<&'a str>,
    ) -> Option<Vec<String>> {
        visited.insert(node);
        in_stack.insert(node);
        path.push(node);

        if let Some(bases) = self.nodes.get(node) {
            for base in bases.iter().filter(|b| self.nodes.contains_key(*b)) {
                if !visited.contains(base.as_str()) {
                    if let Some(cycle) = self.dfs_find_cycle(base, visited, in_stack, path) {
                        return Some(cycle);
                    }
                } else if in_stack.contains(base.as_str()) {
                    let start = path.iter().position(|n| *n == base.as_str()).unwrap_or(0);
                    let mut cycle: Vec<String> = path[start..].iter().map(|n| n.to_string()).collect();
                    cycle.push(base.clone());
                    return Some(cycle);
                }
            }
        }

        in_stack.remove(node);
        path.pop();
        None
    }
}

/// A contract's parents in linearized order.
#[derive(Debug, Clone)]
pub struct Linearization<'a> {
    parents: Vec<&'a ParentEntry>,
    rank: HashMap<&'a str, usize>,
}

impl<'a> Linearization<'a> {
    /// Parents, most-base first.
    pub fn parents(&self) -> &[&'a ParentEntry] {
        &self.parents
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.parents.iter().map(|p| p.name()).collect()
    }

    /// Position of `name` in the linearization.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.rank.get(name).copied()
    }

    /// Order a set of parent names by linearized position.
    ///
    /// Names that are not parents sort last, keeping their relative order.
    pub fn sort<'n, I>(&self, names: I) -> Vec<&'n str>
    where
        I: IntoIterator<Item = &'n String>,
    {
        let mut sorted: Vec<&'n str> = names.into_iter().map(String::as_str).collect();
        sorted.sort_by_key(|n| self.position(n).unwrap_or(usize::MAX));
        sorted
    }
}

/// Linearize the parents of a finished contract.
pub fn linearize(contract: &Contract) -> Result<Linearization<'_>, CompositionError> {
    let order = InheritanceGraph::from_contract(contract).topological_order()?;

    let parents: Vec<&ParentEntry> = order
        .iter()
        .filter_map(|name| contract.parent(name))
        .collect();
    let rank = parents
        .iter()
        .enumerate()
        .map(|(i, p)| (p.name(), i))
        .collect();

    Ok(Linearization { parents, rank })
}
