//! Greedy list scheduling.
//!
//! Assigns each task, in input order, to the machine that becomes free
//! first, breaking ties toward the lowest machine index. O(n · k) for n
//! tasks over k machines; the makespan is within a factor 2 - 1/k of
//! optimal (Graham, 1966). A snapshot of all machine timelines is recorded
//! after every task for step-by-step replay.

use serde::Serialize;
use thiserror::Error;

/// Rejected scheduling input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScheduleError {
    /// At least one machine is required.
    #[error("at least one machine is required")]
    NoMachines,
    /// A task duration is negative or non-finite.
    #[error("task {index} has invalid duration {duration}")]
    InvalidDuration {
        /// Index of the task in the input.
        index: usize,
        /// The rejected duration.
        duration: f64,
    },
}

/// A task placed on a machine's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduledTask {
    /// Index of the task in the input order.
    pub task: usize,
    /// Start time on the machine.
    pub start: f64,
    /// Task duration.
    pub duration: f64,
}

impl ScheduledTask {
    /// Time the task finishes.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Load statistics for a finished schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleStats {
    /// Number of tasks scheduled.
    pub total_tasks: usize,
    /// Number of machines.
    pub machines: usize,
    /// Time the last machine finishes.
    pub makespan: f64,
    /// Total work divided by machine count.
    pub average_load: f64,
    /// `100 * total work / (machines * makespan)`; 100 for an empty
    /// schedule.
    pub efficiency_percent: f64,
}

/// The result of a list-scheduling run: per-machine timelines plus a
/// snapshot per task.
///
/// # Examples
///
/// ```
/// use greedy_spanner::scheduling::list_schedule;
///
/// let run = list_schedule(&[4.0, 6.0, 3.0, 5.0, 2.0, 7.0, 4.0, 3.0], 3).unwrap();
/// assert_eq!(run.makespan(), 13.0);
/// assert_eq!(run.snapshots().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRun {
    machines: Vec<Vec<ScheduledTask>>,
    snapshots: Vec<Vec<Vec<ScheduledTask>>>,
}

impl ScheduleRun {
    /// Per-machine timelines, each in execution order.
    pub fn machines(&self) -> &[Vec<ScheduledTask>] {
        &self.machines
    }

    /// Number of machines.
    pub fn num_machines(&self) -> usize {
        self.machines.len()
    }

    /// Machine states after each task, in input order.
    pub fn snapshots(&self) -> &[Vec<Vec<ScheduledTask>>] {
        &self.snapshots
    }

    /// Time the busiest machine finishes; 0 for an empty schedule.
    pub fn makespan(&self) -> f64 {
        self.machines
            .iter()
            .filter_map(|timeline| timeline.last())
            .map(ScheduledTask::end)
            .fold(0.0, f64::max)
    }

    /// Computes load statistics over the final schedule.
    pub fn stats(&self) -> ScheduleStats {
        let total_tasks = self.snapshots.len();
        let total_work: f64 = self
            .machines
            .iter()
            .flatten()
            .map(|t| t.duration)
            .sum();
        let makespan = self.makespan();
        let busy = self.machines.len() as f64 * makespan;
        let efficiency_percent = if busy == 0.0 {
            100.0
        } else {
            100.0 * total_work / busy
        };
        ScheduleStats {
            total_tasks,
            machines: self.machines.len(),
            makespan,
            average_load: total_work / self.machines.len() as f64,
            efficiency_percent,
        }
    }
}

/// Schedules task durations onto machines with the greedy list rule.
///
/// Each task, in input order, goes to the machine with the smallest end
/// time so far; ties resolve to the lowest machine index. Rejects a zero
/// machine count and negative or non-finite durations up front.
pub fn list_schedule(durations: &[f64], machines: usize) -> Result<ScheduleRun, ScheduleError> {
    if machines == 0 {
        return Err(ScheduleError::NoMachines);
    }
    if let Some((index, &duration)) = durations
        .iter()
        .enumerate()
        .find(|&(_, &d)| !d.is_finite() || d < 0.0)
    {
        return Err(ScheduleError::InvalidDuration { index, duration });
    }

    let mut assigned: Vec<Vec<ScheduledTask>> = vec![Vec::new(); machines];
    let mut end_times = vec![0.0_f64; machines];
    let mut snapshots = Vec::with_capacity(durations.len());

    for (task, &duration) in durations.iter().enumerate() {
        let machine = end_times
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.partial_cmp(b).expect("end times should not be NaN"))
            .map(|(i, _)| i)
            .expect("at least one machine");
        assigned[machine].push(ScheduledTask {
            task,
            start: end_times[machine],
            duration,
        });
        end_times[machine] += duration;
        snapshots.push(assigned.clone());
    }

    Ok(ScheduleRun {
        machines: assigned,
        snapshots,
    })
}
