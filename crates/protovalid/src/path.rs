use std::fmt;

use indexmap::IndexMap;
use protovalid_types::Level;

use crate::finding::Finding;

/// Findings of one validation, arranged as a tree that mirrors the fields of
/// the validated message.
///
/// The root node has an empty full name. Every other node is named after its
/// path from the root, joined with dots, e.g. `coordinate.latitude`. Elements
/// of repeated fields are siblings of the field's own node and carry an index
/// suffix, e.g. `coordinates[2]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPath {
    full_name: String,
    findings: Vec<Finding>,
    children: IndexMap<String, FieldPath>,
}

impl FieldPath {
    /// Creates an empty root node.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Dot-joined path of this node from the root.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Findings recorded on this node, in evaluation order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Child nodes keyed by local name, in the order they were created.
    #[must_use]
    pub fn children(&self) -> &IndexMap<String, FieldPath> {
        &self.children
    }

    /// Returns the child with the given local name, if it was created.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&FieldPath> {
        self.children.get(name)
    }

    /// Gets the child with the given local name, creating it if it doesn't exist.
    pub fn get_or_create_child(&mut self, name: &str) -> &mut FieldPath {
        if !self.children.contains_key(name) {
            let child = FieldPath {
                full_name: self.child_full_name(name),
                ..Self::default()
            };
            self.children.insert(name.to_string(), child);
        }
        &mut self.children[name]
    }

    /// Appends a finding with the given details, level and message.
    pub fn add_finding(&mut self, details: impl Into<String>, level: Level, message: impl Into<String>) {
        self.findings.push(Finding::new(details, level, message));
    }

    /// Iterates over every finding in the tree together with the node holding
    /// it, depth first, a node's own findings before those of its children.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![self],
            current: None,
        }
    }

    /// Total number of findings in the tree.
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.findings.len()
            + self
                .children
                .values()
                .map(FieldPath::finding_count)
                .sum::<usize>()
    }

    /// Returns true if no node of the tree holds a finding.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty() && self.children.values().all(FieldPath::is_empty)
    }

    /// Highest severity among all findings of the tree.
    #[must_use]
    pub fn highest_level(&self) -> Option<Level> {
        self.iter().map(|(_, finding)| finding.level()).max()
    }

    fn child_full_name(&self, name: &str) -> String {
        if self.full_name.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.full_name)
        }
    }
}

/// Depth-first iterator over the findings of a [`FieldPath`] tree.
pub struct Iter<'a> {
    stack: Vec<&'a FieldPath>,
    current: Option<(&'a FieldPath, std::slice::Iter<'a, Finding>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a FieldPath, &'a Finding);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((node, findings)) = self.current.as_mut() {
                if let Some(finding) = findings.next() {
                    return Some((*node, finding));
                }
            }
            let node = self.stack.pop()?;
            // Reversed so the first child is visited first.
            self.stack.extend(node.children.values().rev());
            self.current = Some((node, node.findings.iter()));
        }
    }
}

impl<'a> IntoIterator for &'a FieldPath {
    type Item = (&'a FieldPath, &'a Finding);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (node, finding)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {finding}", node.full_name)?;
        }
        Ok(())
    }
}
