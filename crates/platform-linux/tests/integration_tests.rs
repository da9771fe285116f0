//! Integration tests for rstree-platform-linux
//!
//! These tests spawn real processes to verify snapshot contents against
//! known parent/child relationships.

#![cfg(target_os = "linux")]

use rstree_core::{render, ProcessTree, SortMode};
use rstree_platform_linux::list_processes;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// Test that a spawned child shows up in the snapshot under our pid
#[test]
fn test_spawned_child_has_our_ppid() {
    let mut child = Command::new("sleep")
        .arg("10")
        .stdout(Stdio::null())
        .spawn()
        .expect("Should spawn child process");

    let child_pid = child.id();
    let our_pid = std::process::id();

    // Give /proc a moment to expose the entry
    thread::sleep(Duration::from_millis(100));

    let records = list_processes().expect("Should list processes");
    let entry = records.iter().find(|r| r.pid == child_pid);

    let found = entry.cloned();
    let _ = child.kill();
    let _ = child.wait();

    let record = found.expect("Spawned child should appear in the snapshot");
    assert_eq!(record.ppid, our_pid, "Child's ppid should be this process");
    assert_eq!(record.name, "sleep");
}

/// Test that a live snapshot builds and renders end to end
#[test]
fn test_snapshot_builds_and_renders() {
    let records = list_processes().expect("Should list processes");
    let mut tree = ProcessTree::build(records).expect("Live snapshot should have a root");
    tree.sort_children(SortMode::ByPid);

    let output = render::render_tree(&tree, true);

    // The root renders unindented; every line names one process.
    assert!(!output.is_empty());
    let first = output.lines().next().expect("output has a root line");
    assert!(!first.starts_with('|'));
    assert!(first.ends_with(&format!("({})", tree.root().pid)));
}
