use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Wall-clock durations of the pipeline stages, in execution order.
#[derive(Debug, Default)]
pub struct PipelineTimings {
    steps: Vec<StepTiming>,
}

impl PipelineTimings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(&mut self, name: &'static str, duration: Duration) {
        self.steps.push(StepTiming { name, duration });
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn get_step(&self, name: &str) -> Option<Duration> {
        self.steps.iter().find(|s| s.name == name).map(|s| s.duration)
    }

    pub fn steps(&self) -> &[StepTiming] {
        &self.steps
    }

    /// Emits one debug event per stage with its share of the total.
    pub fn log_breakdown(&self) {
        let total = self.total_duration().as_secs_f64();
        for step in &self.steps {
            let secs = step.duration.as_secs_f64();
            let share = if total > 0.0 { secs / total * 100.0 } else { 0.0 };
            debug!(stage = step.name, ms = secs * 1000.0, share, "stage timing");
        }
    }
}

/// Measures one stage; `stop` yields the stage name with its elapsed time.
pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    pub fn stop(self) -> (&'static str, Duration) {
        (self.name, self.start.elapsed())
    }
}
