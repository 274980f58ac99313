/// Counts multiplier invocations across one top-level multiplication.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: u64,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn increment(&mut self) {
        self.calls += 1;
    }
    pub fn finish(self) -> u64 {
        self.calls
    }
}
