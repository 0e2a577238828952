//! Property tests shared by all schedulers.

use proptest::prelude::*;

use super::*;
use crate::models::SimulationOutcome;

const QUANTUM: i64 = 3;

prop_compose! {
    /// Processes sorted by arrival, with priorities, named P1..Pn.
    fn arb_processes()(
        rows in prop::collection::vec((0i64..30, 1i64..10, 0i32..5), 1..10),
    ) -> Vec<ProcessSpec> {
        let mut rows = rows;
        rows.sort_by_key(|&(arrival, _, _)| arrival);
        rows.into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessSpec::new(format!("P{}", i + 1), arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

fn all_schedulers(idle_policy: IdlePolicy) -> Vec<Box<dyn Scheduler>> {
    vec![
        Box::new(Fcfs::new()),
        Box::new(SjfNonPreemptive::new().with_idle_policy(idle_policy)),
        Box::new(SjfPreemptive::new().with_idle_policy(idle_policy)),
        Box::new(RoundRobin::new(QUANTUM).with_idle_policy(idle_policy)),
        Box::new(PriorityScheduler::non_preemptive().with_idle_policy(idle_policy)),
        Box::new(PriorityScheduler::preemptive().with_idle_policy(idle_policy)),
    ]
}

fn waiting(outcome: &SimulationOutcome, pid: &str) -> i64 {
    outcome
        .get(pid)
        .and_then(|p| p.waiting_time)
        .unwrap_or(i64::MAX)
}

proptest! {
    /// Invariant: turnaround = completion - arrival, waiting = turnaround - burst >= 0
    #[test]
    fn invariant_timing_identities(processes in arb_processes()) {
        for scheduler in all_schedulers(IdlePolicy::Jump) {
            let outcome = scheduler.schedule(&processes).unwrap();
            prop_assert_eq!(outcome.len(), processes.len());
            for p in &outcome.completed {
                let completion = p.completion_time.unwrap();
                let turnaround = p.turnaround_time.unwrap();
                let waiting = p.waiting_time.unwrap();
                prop_assert_eq!(turnaround, completion - p.arrival_time);
                prop_assert_eq!(waiting, turnaround - p.burst_time);
                prop_assert!(waiting >= 0, "{} {}", scheduler.name(), p.pid);
                prop_assert!(completion >= p.arrival_time + p.burst_time);
            }
        }
    }

    /// Invariant: sum(burst) + idle = max(completion) - min(arrival)
    #[test]
    fn invariant_work_conservation(processes in arb_processes()) {
        let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
        let min_arrival = processes.iter().map(|p| p.arrival_time).min().unwrap();

        for scheduler in all_schedulers(IdlePolicy::Jump) {
            let outcome = scheduler.schedule(&processes).unwrap();
            prop_assert_eq!(outcome.timeline.busy_time(), total_burst);
            prop_assert_eq!(
                total_burst + outcome.idle_time(),
                outcome.makespan() - min_arrival,
                "{}", scheduler.name()
            );
        }
    }

    /// Jumping over idle gaps gives the same result as stepping through them.
    #[test]
    fn invariant_idle_policies_agree(processes in arb_processes()) {
        let jumps = all_schedulers(IdlePolicy::Jump);
        let steps = all_schedulers(IdlePolicy::UnitStep);
        for (jump, step) in jumps.iter().zip(steps.iter()) {
            prop_assert_eq!(
                jump.schedule(&processes).unwrap(),
                step.schedule(&processes).unwrap()
            );
        }
    }

    /// Re-running on the same input yields identical output.
    #[test]
    fn invariant_idempotent(processes in arb_processes()) {
        for scheduler in all_schedulers(IdlePolicy::Jump) {
            let first = scheduler.schedule(&processes).unwrap();
            let second = scheduler.schedule(&processes.clone()).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    /// FCFS completes processes in arrival order.
    #[test]
    fn fcfs_preserves_arrival_order(processes in arb_processes()) {
        let outcome = Fcfs::new().schedule(&processes).unwrap();
        let expected: Vec<&str> = processes.iter().map(|p| p.pid.as_str()).collect();
        prop_assert_eq!(outcome.completion_order(), expected);
    }

    /// SRTF: first execution never comes after the process waited in full.
    #[test]
    fn srtf_response_bounded_by_waiting(processes in arb_processes()) {
        let outcome = SjfPreemptive::new().schedule(&processes).unwrap();
        for p in &outcome.completed {
            prop_assert!(p.response_time.unwrap() <= p.waiting_time.unwrap());
        }
    }

    /// Round Robin: bounded slices and bounded waiting.
    #[test]
    fn round_robin_fairness(processes in arb_processes()) {
        let outcome = RoundRobin::new(QUANTUM).schedule(&processes).unwrap();
        prop_assert!(outcome.timeline.slices.iter().all(|s| s.duration() <= QUANTUM));

        let n = processes.len() as i64;
        let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
        for p in &processes {
            let bound = (n - 1) * QUANTUM + (total_burst - p.burst_time);
            prop_assert!(waiting(&outcome, &p.pid) <= bound);
        }
    }

    /// SJF with distinct arrivals does not depend on input order.
    #[test]
    fn sjf_independent_of_input_order(processes in arb_processes()) {
        let distinct: Vec<ProcessSpec> = processes
            .into_iter()
            .enumerate()
            .map(|(i, p)| ProcessSpec {
                arrival_time: p.arrival_time * 16 + i as i64,
                ..p
            })
            .collect();
        let mut reversed = distinct.clone();
        reversed.reverse();

        let forward = SjfNonPreemptive::new().schedule(&distinct).unwrap();
        let backward = SjfNonPreemptive::new().schedule(&reversed).unwrap();
        prop_assert_eq!(forward.completion_order(), backward.completion_order());
        prop_assert_eq!(forward.makespan(), backward.makespan());
    }
}
