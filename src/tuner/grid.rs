//! Exhaustive grid search over a finite discretization

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::state::{requested_count, BuiltinState};
use super::{Asked, Tuner, TunerContext, TunerKind};
use crate::error::{Result, TunerError};
use crate::evaluation::Evaluation;
use crate::front::EquivalencePolicy;
use crate::space::{Configuration, GridSearch, HyperparameterSpace, ObjectiveSpace};

/// Hands out every point of a hyperparameter grid exactly once.
///
/// Continuous axes are discretized to `points_per_axis` values. Once the grid
/// is used up, `ask` returns an empty batch rather than failing.
#[derive(Debug)]
pub struct GridTuner {
    context: TunerContext,
    state: BuiltinState<Evaluation>,
    grid: Vec<Configuration>,
    cursor: usize,
    rng: StdRng,
    default_ask: usize,
}

impl GridTuner {
    pub fn new(
        name: &str,
        space: HyperparameterSpace,
        objective_space: Arc<dyn ObjectiveSpace>,
        points_per_axis: usize,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(TunerError::InvalidValue("tuner name must not be empty".to_string()));
        }
        if points_per_axis < 2 {
            return Err(TunerError::InvalidValue(format!(
                "grid needs at least 2 points per axis, got {points_per_axis}"
            )));
        }
        let grid = GridSearch::new(space.clone(), points_per_axis).configurations()?;
        let state = BuiltinState::new(objective_space.as_ref())?;
        Ok(Self {
            context: TunerContext::new(name, Arc::new(space), objective_space),
            state,
            grid,
            cursor: 0,
            rng: StdRng::from_os_rng(),
            default_ask: 1,
        })
    }

    /// Seed used to pick among optimums in `suggest`
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_equivalence_policy(mut self, policy: EquivalencePolicy) -> Self {
        self.state.set_policy(policy);
        self
    }

    pub fn with_default_ask(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(TunerError::InvalidValue(
                "default ask count must be at least 1".to_string(),
            ));
        }
        self.default_ask = count;
        Ok(self)
    }

    /// Total number of grid points
    pub fn grid_size(&self) -> usize {
        self.grid.len()
    }

    /// Grid points not handed out yet
    pub fn remaining(&self) -> usize {
        self.grid.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl Tuner for GridTuner {
    fn context(&self) -> &TunerContext {
        &self.context
    }

    fn kind(&self) -> TunerKind {
        TunerKind::Grid
    }

    fn ask(&mut self, count: Option<usize>) -> Result<Asked> {
        let requested = requested_count(count, self.default_ask)?;
        let end = self.cursor.saturating_add(requested).min(self.grid.len());
        let configurations = self.grid[self.cursor..end].to_vec();
        self.cursor = end;
        debug!(tuner = %self.context.name(), requested, produced = configurations.len(), "ask");
        if configurations.len() < requested {
            info!(tuner = %self.context.name(), grid = self.grid.len(), "grid exhausted");
        }
        Ok(Asked { configurations, requested })
    }

    fn tell(&mut self, evaluations: &[Evaluation]) -> Result<()> {
        let joined = self.state.tell(self.context.objective_space().as_ref(), evaluations)?;
        debug!(tuner = %self.context.name(), told = evaluations.len(), joined, "tell");
        Ok(())
    }

    fn history(&self) -> Result<Vec<Evaluation>> {
        Ok(self.state.history().to_vec())
    }

    fn optimums(&self) -> Result<Vec<Evaluation>> {
        Ok(self.state.front().snapshot())
    }

    fn suggest(&mut self) -> Result<Configuration> {
        if let Some(config) = self.state.pick(&mut self.rng, |_| true) {
            return Ok(config);
        }
        self.ask(Some(1))?
            .configurations
            .into_iter()
            .next()
            .ok_or(TunerError::SpaceExhausted(self.grid.len()))
    }
}
