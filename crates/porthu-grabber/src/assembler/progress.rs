use tracing::info;

/// Logs enrichment progress whenever it advances by a whole percent
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    total: usize,
    done: usize,
    last_percent: usize,
}

impl ProgressReporter {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            done: 0,
            last_percent: 0,
        }
    }

    /// Record `count` finished items, returns the percentage when it was logged
    pub fn advance(&mut self, count: usize) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        self.done = (self.done + count).min(self.total);
        let percent = self.done * 100 / self.total;
        if percent <= self.last_percent {
            return None;
        }
        self.last_percent = percent;
        info!("{percent}% completed ({}/{})", self.done, self.total);
        Some(percent)
    }
}
