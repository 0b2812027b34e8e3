// Two-tier job queue for the cooperative main loop
// NOTE: No dynamic allocation, fixed-size ring buffers

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    /// Sample and debounce the physical buttons.
    PollPad,
    /// Drain the host UART fifo.
    DrainHost,
    /// Periodic status line.
    LogStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Priority {
    High,
    Low,
}

impl Job {
    const fn priority(self) -> Priority {
        match self {
            Job::PollPad | Job::DrainHost => Priority::High,
            Job::LogStatus => Priority::Low,
        }
    }
}

// ring buffer for jobs
struct JobQueue<const N: usize> {
    buf: [Option<Job>; N],
    head: usize,
    len: usize,
}

impl<const N: usize> JobQueue<N> {
    const fn new() -> Self {
        Self {
            buf: [None; N],
            head: 0,
            len: 0,
        }
    }

    fn push(&mut self, job: Job) -> bool {
        if self.len >= N {
            return false;
        }
        self.buf[(self.head + self.len) % N] = Some(job);
        self.len += 1;
        true
    }

    fn pop(&mut self) -> Option<Job> {
        if self.len == 0 {
            return None;
        }
        let job = self.buf[self.head].take();
        self.head = (self.head + 1) % N;
        self.len -= 1;
        job
    }

    fn contains(&self, job: Job) -> bool {
        let mut i = self.head;
        for _ in 0..self.len {
            if self.buf[i] == Some(job) {
                return true;
            }
            i = (i + 1) % N;
        }
        false
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

pub struct Scheduler {
    high: JobQueue<4>,
    low: JobQueue<4>,
}

impl Scheduler {
    pub const fn new() -> Self {
        Self {
            high: JobQueue::new(),
            low: JobQueue::new(),
        }
    }

    /// Queue a job unless it is already pending; returns false if the
    /// tier is full and the job was dropped.
    pub fn push_unique(&mut self, job: Job) -> bool {
        let queue = match job.priority() {
            Priority::High => &mut self.high,
            Priority::Low => &mut self.low,
        };
        if queue.contains(job) {
            return true;
        }
        queue.push(job)
    }

    /// Next job to execute, high tier first, FIFO within a tier.
    pub fn pop(&mut self) -> Option<Job> {
        self.high.pop().or_else(|| self.low.pop())
    }

    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.low.is_empty()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
