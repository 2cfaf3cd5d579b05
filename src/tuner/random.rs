//! Uniform random search

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::state::{requested_count, BuiltinState};
use super::{Asked, Tuner, TunerContext, TunerKind};
use crate::error::{Result, TunerError};
use crate::evaluation::Evaluation;
use crate::front::EquivalencePolicy;
use crate::space::{Configuration, ConfigurationSpace, ObjectiveSpace};

/// Samples the configuration space uniformly and keeps the Pareto front of
/// everything it is told.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use autotune::space::{HyperparameterSpace, Objectives, ParameterDomain};
/// use autotune::tuner::{RandomTuner, Tuner};
/// use autotune::Evaluation;
///
/// let mut space = HyperparameterSpace::new("cspace");
/// space.add("x", ParameterDomain::continuous(-5.0, 5.0))?;
/// let objectives = Arc::new(Objectives::new("ospace").minimize("loss")?);
///
/// let mut tuner = RandomTuner::new("demo", Arc::new(space), objectives.clone())?.with_seed(42);
/// let asked = tuner.ask(Some(10))?;
/// let evaluations = asked
///     .configurations
///     .into_iter()
///     .map(|c| {
///         let x = c.get("x").and_then(|v| v.as_float()).unwrap_or(0.0);
///         Evaluation::new(objectives.as_ref(), c, vec![(x - 2.0).powi(2)])
///     })
///     .collect::<Result<Vec<_>, _>>()?;
/// tuner.tell(&evaluations)?;
///
/// assert_eq!(tuner.history()?.len(), 10);
/// assert_eq!(tuner.optimums()?.len(), 1);
/// # Ok::<(), autotune::TunerError>(())
/// ```
#[derive(Debug)]
pub struct RandomTuner {
    context: TunerContext,
    state: BuiltinState<Evaluation>,
    rng: StdRng,
    default_ask: usize,
}

impl RandomTuner {
    pub fn new(
        name: &str,
        configuration_space: Arc<dyn ConfigurationSpace>,
        objective_space: Arc<dyn ObjectiveSpace>,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(TunerError::InvalidValue("tuner name must not be empty".to_string()));
        }
        let state = BuiltinState::new(objective_space.as_ref())?;
        Ok(Self {
            context: TunerContext::new(name, configuration_space, objective_space),
            state,
            rng: StdRng::from_os_rng(),
            default_ask: 1,
        })
    }

    /// Reproducible sampling
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_equivalence_policy(mut self, policy: EquivalencePolicy) -> Self {
        self.state.set_policy(policy);
        self
    }

    /// Count produced by `ask(None)`
    pub fn with_default_ask(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(TunerError::InvalidValue(
                "default ask count must be at least 1".to_string(),
            ));
        }
        self.default_ask = count;
        Ok(self)
    }

    pub fn equivalence_policy(&self) -> EquivalencePolicy {
        self.state.front().policy()
    }
}

impl Tuner for RandomTuner {
    fn context(&self) -> &TunerContext {
        &self.context
    }

    fn kind(&self) -> TunerKind {
        TunerKind::Random
    }

    fn ask(&mut self, count: Option<usize>) -> Result<Asked> {
        let requested = requested_count(count, self.default_ask)?;
        let mut configurations =
            self.context.configuration_space().samples(&mut self.rng, requested)?;
        configurations.truncate(requested);
        debug!(tuner = %self.context.name(), requested, produced = configurations.len(), "ask");
        Ok(Asked { configurations, requested })
    }

    fn tell(&mut self, evaluations: &[Evaluation]) -> Result<()> {
        let joined = self.state.tell(self.context.objective_space().as_ref(), evaluations)?;
        debug!(
            tuner = %self.context.name(),
            told = evaluations.len(),
            joined,
            front = self.state.front().len(),
            "tell"
        );
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
        debug!(tuner = %self.context.name(), "front empty, suggesting a fresh sample");
        self.ask(Some(1))?
            .configurations
            .into_iter()
            .next()
            .ok_or(TunerError::SpaceExhausted(self.state.history().len()))
    }
}
