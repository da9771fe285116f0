//! Process snapshot via the /proc filesystem
//!
//! Provides a point-in-time snapshot of all processes as flat
//! (pid, ppid, name) records, in the order the kernel lists them.

use crate::error::{SnapshotError, SnapshotResult};
use procfs::process::Process;
use rstree_core::ProcessRecord;

/// Create a snapshot of all running processes.
///
/// Names come from the kernel `comm` field, with the parentheses that
/// surround it in `/proc/<pid>/stat` already stripped by procfs. A process
/// that exits between the directory scan and the stat read is skipped;
/// only failing to open /proc at all is an error.
pub fn list_processes() -> SnapshotResult<Vec<ProcessRecord>> {
    let procs = procfs::process::all_processes()
        .map_err(|e| SnapshotError::SnapshotFailed(e.to_string()))?;

    let mut records = Vec::new();
    for proc in procs {
        let Ok(proc) = proc else {
            continue;
        };
        let Ok(stat) = proc.stat() else {
            continue;
        };
        records.push(ProcessRecord {
            pid: stat.pid as u32,
            ppid: stat.ppid as u32,
            name: stat.comm,
        });
    }

    Ok(records)
}

/// Get a single process record by pid.
pub fn get_process_record(pid: u32) -> SnapshotResult<ProcessRecord> {
    let proc = Process::new(pid as i32).map_err(|e| match e {
        procfs::ProcError::NotFound(_) => SnapshotError::ProcessNotFound { pid },
        other => SnapshotError::SnapshotFailed(other.to_string()),
    })?;
    let stat = proc
        .stat()
        .map_err(|e| SnapshotError::SnapshotFailed(e.to_string()))?;

    Ok(ProcessRecord {
        pid: stat.pid as u32,
        ppid: stat.ppid as u32,
        name: stat.comm,
    })
}
