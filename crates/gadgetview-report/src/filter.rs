//! Thread filtering for the process collector.

use gadgetview_common::types::ProcessRecord;

/// Keeps one row per process unless `all_threads` is set.
///
/// A process is represented by its main thread, the record whose `pid`
/// equals its `tgid`.
pub fn retain_processes(
    mut records: Vec<ProcessRecord>,
    all_threads: bool,
) -> Vec<ProcessRecord> {
    if !all_threads {
        records.retain(ProcessRecord::is_main_thread);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thread(tgid: u32, pid: u32) -> ProcessRecord {
        ProcessRecord {
            tgid,
            pid,
            comm: "app".into(),
            ..ProcessRecord::default()
        }
    }

    #[test]
    fn main_thread_is_kept() {
        let kept = retain_processes(vec![thread(4, 4)], false);
        assert_eq!(kept, vec![thread(4, 4)]);
    }

    #[test]
    fn secondary_thread_is_dropped() {
        assert!(retain_processes(vec![thread(4, 5)], false).is_empty());
    }

    #[test]
    fn keeps_exactly_main_threads() {
        let input = vec![thread(1, 1), thread(1, 2), thread(7, 7), thread(7, 8), thread(7, 9)];
        let expected: Vec<_> = input.iter().filter(|p| p.tgid == p.pid).cloned().collect();
        assert_eq!(retain_processes(input, false), expected);
    }

    #[test]
    fn all_threads_is_identity() {
        let input = vec![thread(1, 2), thread(1, 1), thread(3, 4)];
        assert_eq!(retain_processes(input.clone(), true), input);
    }
}
