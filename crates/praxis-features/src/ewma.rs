/// Exponential moving average over a chronological sample stream.
///
/// Formula: `new = alpha·sample + (1 − alpha)·old`, seeded with the first
/// observed sample. `alpha ∈ (0, 1]`; later samples weigh more. A constant
/// input sequence is a fixpoint: the average equals the constant from the
/// first sample on.
#[derive(Debug, Clone)]
pub struct Ewma {
    alpha: f64,
    state: Option<f64>,
}

impl Ewma {
    pub fn new(alpha: f64) -> Self {
        Self { alpha, state: None }
    }

    /// Fold one sample in and return the updated average.
    pub fn update(&mut self, sample: f64) -> f64 {
        let next = match self.state {
            None => sample,
            Some(old) => self.alpha * sample + (1.0 - self.alpha) * old,
        };
        self.state = Some(next);
        next
    }

    /// Current average, `None` before the first sample.
    pub fn value(&self) -> Option<f64> {
        self.state
    }
}
