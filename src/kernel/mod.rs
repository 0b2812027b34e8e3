// Cooperative main-loop plumbing: wake flags and the job queue.
// Single core, no preemption. WFI idles the CPU between events.

pub mod scheduler;
pub mod wake;

pub use scheduler::{Job, Scheduler};
