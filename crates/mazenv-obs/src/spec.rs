//! Declarative window configuration.

use crate::error::WindowError;
use crate::window::WindowPlan;

/// How far an agent sees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSpec {
    /// Cells visible in each direction along every axis. Default: 1.
    pub horizon: u32,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self { horizon: 1 }
    }
}

impl WindowSpec {
    /// Compile this spec into a plan for `ndim`-dimensional mazes.
    ///
    /// # Errors
    ///
    /// See [`WindowPlan::new`].
    pub fn compile(&self, ndim: usize) -> Result<WindowPlan, WindowError> {
        WindowPlan::new(ndim, self.horizon)
    }
}
