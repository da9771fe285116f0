//! Process tree construction
//!
//! Rebuilds the parent/child forest from a flat snapshot of
//! [`ProcessRecord`]s. The tree owns every record in a single flat store;
//! child links are indices into that store, so no record is aliased and the
//! whole structure is torn down together.

use crate::models::{ProcessRecord, SortMode};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from tree construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// No record carries the "no parent" sentinel ppid
    #[error("no root process found in snapshot")]
    NoRootFound,
}

/// A process forest built from one snapshot.
///
/// `records` keeps the ingestion order; `children[i]` holds the indices of
/// the records whose `ppid` equals `records[i].pid`. Built once by
/// [`ProcessTree::build`]; the only later mutation is
/// [`ProcessTree::sort_children`].
#[derive(Debug, Clone)]
pub struct ProcessTree {
    records: Vec<ProcessRecord>,
    children: Vec<Vec<usize>>,
    root: usize,
}

impl ProcessTree {
    /// Build the forest from a snapshot.
    ///
    /// The first record in input order whose `ppid` is the "no parent"
    /// sentinel becomes the displayed root; subtrees under any later
    /// sentinel-parented records stay unreachable, as do records whose
    /// `ppid` matches no pid in the snapshot. A record is never linked as
    /// its own child.
    ///
    /// Uniqueness of pids within the snapshot is the caller's contract.
    pub fn build(records: Vec<ProcessRecord>) -> Result<Self, TreeError> {
        let root = records
            .iter()
            .position(ProcessRecord::is_root)
            .ok_or(TreeError::NoRootFound)?;

        // Group child indices by ppid, preserving input order within each
        // group. Sentinel-parented records are root candidates, never
        // children; a self-parented record must not close a loop on itself.
        let mut by_ppid: HashMap<u32, Vec<usize>> = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            if record.is_root() || record.is_self_parented() {
                continue;
            }
            by_ppid.entry(record.ppid).or_default().push(index);
        }

        let children = records
            .iter()
            .map(|record| by_ppid.remove(&record.pid).unwrap_or_default())
            .collect();

        Ok(Self {
            records,
            children,
            root,
        })
    }

    /// The displayed root record.
    pub fn root(&self) -> &ProcessRecord {
        &self.records[self.root]
    }

    /// Index of the displayed root in the flat store.
    pub fn root_index(&self) -> usize {
        self.root
    }

    /// The record at `index` in the flat store.
    pub fn record(&self, index: usize) -> &ProcessRecord {
        &self.records[index]
    }

    /// Child indices of the record at `index`, in sibling order.
    pub fn children_of(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    /// Number of records in the snapshot, reachable or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort every sibling set according to `mode`.
    ///
    /// Each parent's child list is ordered on its own; ties under
    /// [`SortMode::ByName`] carry no guaranteed order.
    pub fn sort_children(&mut self, mode: SortMode) {
        let records = &self.records;
        for siblings in &mut self.children {
            match mode {
                SortMode::ByName => {
                    siblings.sort_unstable_by(|&a, &b| records[a].name.cmp(&records[b].name));
                }
                SortMode::ByPid => {
                    siblings.sort_unstable_by_key(|&index| records[index].pid);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_PARENT;

    fn rec(pid: u32, ppid: u32, name: &str) -> ProcessRecord {
        ProcessRecord::new(pid, ppid, name)
    }

    fn child_pids(tree: &ProcessTree, index: usize) -> Vec<u32> {
        tree.children_of(index)
            .iter()
            .map(|&c| tree.record(c).pid)
            .collect()
    }

    #[test]
    fn test_build_links_children_to_parents() {
        let tree = ProcessTree::build(vec![
            rec(1, NO_PARENT, "init"),
            rec(10, 1, "bash"),
            rec(11, 10, "vim"),
            rec(12, 1, "sshd"),
        ])
        .expect("snapshot has a root");

        assert_eq!(tree.root().pid, 1);
        assert_eq!(child_pids(&tree, tree.root_index()), vec![10, 12]);

        let bash = tree.children_of(tree.root_index())[0];
        assert_eq!(child_pids(&tree, bash), vec![11]);
    }

    #[test]
    fn test_no_root_is_an_error() {
        let result = ProcessTree::build(vec![rec(10, 1, "bash"), rec(11, 10, "vim")]);
        assert_eq!(result.unwrap_err(), TreeError::NoRootFound);
    }

    #[test]
    fn test_empty_snapshot_has_no_root() {
        assert_eq!(
            ProcessTree::build(Vec::new()).unwrap_err(),
            TreeError::NoRootFound
        );
    }

    #[test]
    fn test_first_sentinel_record_wins_as_root() {
        let tree = ProcessTree::build(vec![
            rec(5, NO_PARENT, "first"),
            rec(9, NO_PARENT, "second"),
            rec(20, 9, "under-second"),
        ])
        .expect("snapshot has a root");

        assert_eq!(tree.root().name, "first");
        // The later sentinel record is never attached as anyone's child.
        assert!(tree
            .children_of(tree.root_index())
            .iter()
            .all(|&c| tree.record(c).pid != 9));
    }

    #[test]
    fn test_dangling_parent_never_attached() {
        let tree = ProcessTree::build(vec![
            rec(1, NO_PARENT, "init"),
            rec(10, 1, "bash"),
            rec(99, 404, "ghost"),
        ])
        .expect("snapshot has a root");

        let attached: usize = (0..tree.len()).map(|i| tree.children_of(i).len()).sum();
        assert_eq!(attached, 1, "only bash should be attached");
    }

    #[test]
    fn test_self_parented_record_not_its_own_child() {
        let tree = ProcessTree::build(vec![rec(1, NO_PARENT, "init"), rec(7, 7, "loop")])
            .expect("snapshot has a root");

        for index in 0..tree.len() {
            assert!(
                !tree.children_of(index).contains(&index),
                "no record may be its own child"
            );
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let records = vec![
            rec(1, NO_PARENT, "init"),
            rec(30, 1, "b"),
            rec(20, 1, "a"),
            rec(40, 20, "c"),
        ];
        let first = ProcessTree::build(records.clone()).expect("snapshot has a root");
        let second = ProcessTree::build(records).expect("snapshot has a root");

        for index in 0..first.len() {
            assert_eq!(
                child_pids(&first, index),
                child_pids(&second, index),
                "child sets must match per node"
            );
        }
    }

    #[test]
    fn test_sort_by_name_orders_each_sibling_set() {
        let mut tree = ProcessTree::build(vec![
            rec(1, NO_PARENT, "init"),
            rec(20, 1, "zsh"),
            rec(21, 1, "awk"),
            rec(30, 20, "vim"),
            rec(31, 20, "cat"),
        ])
        .expect("snapshot has a root");
        tree.sort_children(SortMode::ByName);

        assert_eq!(child_pids(&tree, tree.root_index()), vec![21, 20]);
        let zsh = tree.children_of(tree.root_index())[1];
        assert_eq!(child_pids(&tree, zsh), vec![31, 30]);
    }

    #[test]
    fn test_sort_by_pid_orders_numerically() {
        let mut tree = ProcessTree::build(vec![
            rec(1, NO_PARENT, "init"),
            rec(300, 1, "a"),
            rec(2, 1, "z"),
            rec(45, 1, "m"),
        ])
        .expect("snapshot has a root");
        tree.sort_children(SortMode::ByPid);

        assert_eq!(child_pids(&tree, tree.root_index()), vec![2, 45, 300]);
    }
}
