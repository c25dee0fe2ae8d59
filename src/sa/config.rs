//! SA configuration.

/// Configuration for the knapsack annealer.
///
/// # Examples
///
/// ```
/// use knapsack_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(250.0)
///     .with_cooling_rate(0.97)
///     .with_stopping_temperature(0.01)
///     .with_max_iterations(20_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied once per iteration:
    /// `T_{k+1} = cooling_rate * T_k`. Higher = slower cooling.
    pub cooling_rate: f64,

    /// Stopping temperature. The loop exits once T drops to this level.
    pub stopping_temperature: f64,

    /// Hard iteration budget. 0 means the loop body never runs and the
    /// result reflects the initial solution.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            stopping_temperature: 0.1,
            max_iterations: 10_000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_stopping_temperature(mut self, t: f64) -> Self {
        self.stopping_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err("initial_temperature must be positive".into());
        }
        if !(self.stopping_temperature.is_finite() && self.stopping_temperature > 0.0) {
            return Err("stopping_temperature must be positive".into());
        }
        if self.stopping_temperature >= self.initial_temperature {
            return Err("stopping_temperature must be less than initial_temperature".into());
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        Ok(())
    }
}
