//! Settings for the fixed-step integrators

use bon::Builder;

#[derive(Builder, Clone, Debug)]
/// Settings for the fixed-step integrators
pub struct Settings {
    /// Maximum number of allowed steps. Default is 100,000.
    #[builder(default = 100_000)]
    pub nmax: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::builder().build()
    }
}
