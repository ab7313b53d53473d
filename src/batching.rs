//! Greedy print-job batching.
//!
//! Independent of the DP core. Jobs are stable-sorted by priority (lower
//! value first, so `1` is the most urgent) and packed in that order into
//! batches bounded by total volume and item count. A batch takes as long as
//! its slowest job; the schedule's total time is the sum over batches.
//!
//! A job that does not fit closes the current batch and opens the next one,
//! even if it alone exceeds `max_volume`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    pub id: String,
    pub volume: f64,
    pub priority: i64,
    pub print_time: u64,
}

impl PrintJob {
    pub fn new(id: impl Into<String>, volume: f64, priority: i64, print_time: u64) -> Self {
        Self {
            id: id.into(),
            volume,
            priority,
            print_time,
        }
    }
}

/// Capacity of a single printer run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrinterConstraints {
    pub max_volume: f64,
    pub max_items: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSchedule {
    /// Job ids in print order, batch by batch.
    pub print_order: Vec<String>,
    pub total_time: u64,
}

#[derive(Default)]
struct Batch<'a> {
    jobs: Vec<&'a PrintJob>,
    volume: f64,
}

impl<'a> Batch<'a> {
    fn admits(&self, job: &PrintJob, constraints: &PrinterConstraints) -> bool {
        self.volume + job.volume <= constraints.max_volume && self.jobs.len() < constraints.max_items
    }

    fn push(&mut self, job: &'a PrintJob) {
        self.volume += job.volume;
        self.jobs.push(job);
    }

    fn flush_into(&mut self, schedule: &mut BatchSchedule) {
        if self.jobs.is_empty() {
            return;
        }
        let batch_time = self.jobs.iter().map(|j| j.print_time).max().unwrap_or(0);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            items = self.jobs.len(),
            volume = self.volume,
            batch_time,
            "flushing print batch"
        );

        schedule.total_time += batch_time;
        schedule
            .print_order
            .extend(self.jobs.iter().map(|j| j.id.clone()));
        self.jobs.clear();
        self.volume = 0.0;
    }
}

/// Group `jobs` into printer runs and report the order and total time.
pub fn optimize_printing(jobs: &[PrintJob], constraints: &PrinterConstraints) -> BatchSchedule {
    let mut sorted: Vec<&PrintJob> = jobs.iter().collect();
    sorted.sort_by_key(|j| j.priority);

    let mut schedule = BatchSchedule {
        print_order: Vec::with_capacity(jobs.len()),
        total_time: 0,
    };
    let mut batch = Batch::default();

    for job in sorted {
        if !batch.admits(job, constraints) {
            batch.flush_into(&mut schedule);
        }
        batch.push(job);
    }
    batch.flush_into(&mut schedule);

    schedule
}
