#![deny(unsafe_code)]

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;
use trellis_map::{extract, NodeKeyMap};
use trellis_model::{Ident, Node, Record, Tree};

use crate::fields;
use crate::ShapeError;

/// Reconciles flat records into a [`Tree`].
///
/// Parent links come from two kinds of hints, applied in record order:
/// a record's own parent field, then each entry of its children field
/// (claiming that entry's id as a child of this record). When hints
/// disagree, the one applied last wins.
///
/// Children lists on the resulting nodes are the inverse of the final
/// parent links, ordered by when a child was first assigned to that
/// parent. Ids referenced only by hints do not become nodes, but they
/// can still appear in parent links and children lists.
pub fn build_tree(records: &[Record], keys: &NodeKeyMap) -> Result<Tree, ShapeError> {
    let mut parents = ParentMap::new();
    let mut ids = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let id = fields::require_ident(record, &keys.id, index)?;

        if let Some(parent) = fields::optional_ident(record, &keys.parent, index)? {
            parents.assign(id.clone(), parent);
        }

        if let Some(value) = extract::field(record, &keys.children) {
            let Some(entries) = value.as_list() else {
                return Err(ShapeError::InvalidChildren {
                    field: keys.children.as_str().to_string(),
                    index,
                });
            };
            for entry in entries {
                if entry.is_blank() {
                    continue;
                }
                let Some(child) = entry.as_ident() else {
                    return Err(ShapeError::InvalidIdentifier {
                        field: keys.children.as_str().to_string(),
                        index,
                    });
                };
                parents.assign(child, id.clone());
            }
        }

        ids.push(id);
    }

    let mut tree = Tree::new();
    for (record, id) in records.iter().zip(ids) {
        let node = Node {
            parent: parents.parent_of(&id).cloned(),
            children: parents.children_of(&id),
            attributes: extract::attributes(record, &keys.attributes),
            id,
        };
        tree.insert(node);
    }

    debug!(records = records.len(), nodes = tree.len(), "built tree");
    Ok(tree)
}

/// Parent-hint accumulator.
///
/// Tracks the latest parent per child plus the point at which each
/// child/parent pairing was first seen, which fixes child ordering even
/// when a hint is overwritten and later restored.
struct ParentMap {
    resolved: IndexMap<Ident, (Ident, usize)>,
    first_seen: HashMap<(Ident, Ident), usize>,
    next_seq: usize,
}

impl ParentMap {
    fn new() -> Self {
        Self {
            resolved: IndexMap::new(),
            first_seen: HashMap::new(),
            next_seq: 0,
        }
    }

    fn assign(&mut self, child: Ident, parent: Ident) {
        if let Some((previous, _)) = self.resolved.get(&child) {
            if *previous != parent {
                debug!(child = %child, previous = %previous, parent = %parent, "parent hint overwritten");
            }
        }
        let seq = *self
            .first_seen
            .entry((child.clone(), parent.clone()))
            .or_insert(self.next_seq);
        self.next_seq += 1;
        self.resolved.insert(child, (parent, seq));
    }

    fn parent_of(&self, id: &Ident) -> Option<&Ident> {
        self.resolved.get(id).map(|(parent, _)| parent)
    }

    fn children_of(&self, id: &Ident) -> Vec<Ident> {
        let mut children: Vec<(usize, &Ident)> = self
            .resolved
            .iter()
            .filter(|(_, (parent, _))| parent == id)
            .map(|(child, (_, seq))| (*seq, child))
            .collect();
        children.sort_unstable_by_key(|(seq, _)| *seq);
        children.into_iter().map(|(_, child)| child.clone()).collect()
    }
}
