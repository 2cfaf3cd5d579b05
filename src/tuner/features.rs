//! Feature-aware tuning
//!
//! A features tuner keeps one history and one front across every feature
//! context. Evaluations measured under different features never dominate
//! each other, so the front naturally holds the optimums of each context.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use super::state::{requested_count, BuiltinState};
use super::{Asked, TunerContext, TunerKind};
use crate::error::{Result, TunerError};
use crate::evaluation::FeaturesEvaluation;
use crate::front::EquivalencePolicy;
use crate::space::{Configuration, ConfigurationSpace, Features, ObjectiveSpace};

/// Tuning protocol with a features context on every call.
///
/// A `filter` of `None` means every feature context.
pub trait FeaturesTuner: Send {
    fn context(&self) -> &TunerContext;

    fn kind(&self) -> TunerKind;

    /// Name of the features space the tuner accepts
    fn features_space(&self) -> &str;

    fn name(&self) -> &str {
        self.context().name()
    }

    /// Propose configurations to evaluate under `features`
    fn ask(&mut self, features: &Features, count: Option<usize>) -> Result<Asked>;

    fn tell(&mut self, evaluations: &[FeaturesEvaluation]) -> Result<()>;

    fn history(&self, filter: Option<&Features>) -> Result<Vec<FeaturesEvaluation>>;

    fn history_size(&self, filter: Option<&Features>) -> Result<usize> {
        Ok(self.history(filter)?.len())
    }

    fn optimums(&self, filter: Option<&Features>) -> Result<Vec<FeaturesEvaluation>>;

    /// A currently-best configuration for `features`
    fn suggest(&mut self, features: &Features) -> Result<Configuration>;
}

/// Random search over the configuration space, ignoring features when sampling
#[derive(Debug)]
pub struct RandomFeaturesTuner {
    context: TunerContext,
    features_space: String,
    state: BuiltinState<FeaturesEvaluation>,
    rng: StdRng,
    default_ask: usize,
}

impl RandomFeaturesTuner {
    pub fn new(
        name: &str,
        features_space: &str,
        configuration_space: Arc<dyn ConfigurationSpace>,
        objective_space: Arc<dyn ObjectiveSpace>,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(TunerError::InvalidValue("tuner name must not be empty".to_string()));
        }
        let state = BuiltinState::new(objective_space.as_ref())?;
        Ok(Self {
            context: TunerContext::new(name, configuration_space, objective_space),
            features_space: features_space.to_string(),
            state,
            rng: StdRng::from_os_rng(),
            default_ask: 1,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_equivalence_policy(mut self, policy: EquivalencePolicy) -> Self {
        self.state.set_policy(policy);
        self
    }

    fn check_features(&self, features: &Features) -> Result<()> {
        if features.space_name() != self.features_space {
            return Err(TunerError::InvalidValue(format!(
                "features from space '{}' given to tuner over '{}'",
                features.space_name(),
                self.features_space
            )));
        }
        Ok(())
    }
}

fn matches(evaluation: &FeaturesEvaluation, filter: Option<&Features>) -> bool {
    filter.map_or(true, |f| evaluation.features() == f)
}

impl FeaturesTuner for RandomFeaturesTuner {
    fn context(&self) -> &TunerContext {
        &self.context
    }

    fn kind(&self) -> TunerKind {
        TunerKind::Random
    }

    fn features_space(&self) -> &str {
        &self.features_space
    }

    fn ask(&mut self, features: &Features, count: Option<usize>) -> Result<Asked> {
        self.check_features(features)?;
        let requested = requested_count(count, self.default_ask)?;
        let mut configurations =
            self.context.configuration_space().samples(&mut self.rng, requested)?;
        configurations.truncate(requested);
        debug!(tuner = %self.context.name(), requested, produced = configurations.len(), "ask");
        Ok(Asked { configurations, requested })
    }

    fn tell(&mut self, evaluations: &[FeaturesEvaluation]) -> Result<()> {
        for e in evaluations {
            self.check_features(e.features())?;
        }
        let joined = self.state.tell(self.context.objective_space().as_ref(), evaluations)?;
        debug!(tuner = %self.context.name(), told = evaluations.len(), joined, "tell");
        Ok(())
    }

    fn history(&self, filter: Option<&Features>) -> Result<Vec<FeaturesEvaluation>> {
        Ok(self.state.history().iter().filter(|e| matches(e, filter)).cloned().collect())
    }

    fn history_size(&self, filter: Option<&Features>) -> Result<usize> {
        Ok(self.state.history().iter().filter(|e| matches(e, filter)).count())
    }

    fn optimums(&self, filter: Option<&Features>) -> Result<Vec<FeaturesEvaluation>> {
        Ok(self.state.front().iter().filter(|e| matches(e, filter)).cloned().collect())
    }

    fn suggest(&mut self, features: &Features) -> Result<Configuration> {
        self.check_features(features)?;
        if let Some(config) = self.state.pick(&mut self.rng, |e| e.features() == features) {
            return Ok(config);
        }
        self.ask(features, Some(1))?
            .configurations
            .into_iter()
            .next()
            .ok_or(TunerError::SpaceExhausted(self.state.history().len()))
    }
}
