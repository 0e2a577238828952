//! Candidate selection under a total order.
//!
//! Ordering is `(rule key, arrival_time, input index)`. The input index
//! is unique within a run, so no two candidates ever compare equal.

use std::cmp::Ordering;

use super::DispatchingRule;
use crate::models::ProcessState;

/// Compares two processes under `rule` with the standard tie-breakers.
pub fn compare<R>(rule: &R, a: &ProcessState, b: &ProcessState) -> Ordering
where
    R: DispatchingRule + ?Sized,
{
    rule.key(a)
        .cmp(&rule.key(b))
        .then_with(|| a.arrival_time.cmp(&b.arrival_time))
        .then_with(|| a.index.cmp(&b.index))
}

/// Returns the position in `processes` of the best candidate.
///
/// Only processes for which `is_candidate` holds are considered.
/// Returns `None` if there are no candidates.
pub fn select_next<R, F>(rule: &R, processes: &[ProcessState], is_candidate: F) -> Option<usize>
where
    R: DispatchingRule + ?Sized,
    F: Fn(&ProcessState) -> bool,
{
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| is_candidate(p))
        .min_by(|(_, a), (_, b)| compare(rule, a, b))
        .map(|(i, _)| i)
}

/// Returns positions of all candidates, best first.
pub fn sorted_candidates<R, F>(rule: &R, processes: &[ProcessState], is_candidate: F) -> Vec<usize>
where
    R: DispatchingRule + ?Sized,
    F: Fn(&ProcessState) -> bool,
{
    let mut indices: Vec<usize> = processes
        .iter()
        .enumerate()
        .filter(|(_, p)| is_candidate(p))
        .map(|(i, _)| i)
        .collect();
    indices.sort_by(|&a, &b| compare(rule, &processes[a], &processes[b]));
    indices
}
