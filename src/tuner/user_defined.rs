//! Tuner whose strategy is supplied by the caller

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use super::state::requested_count;
use super::{Asked, Tuner, TunerContext, TunerKind};
use crate::error::{Operation, Result, StrategyError, StrategyResult, TunerError};
use crate::evaluation::Evaluation;
use crate::space::{Configuration, ConfigurationSpace, ObjectiveSpace};

/// Produces `count` configurations
pub type AskFn<T> =
    Box<dyn FnMut(&TunerContext, &mut T, usize) -> StrategyResult<Vec<Configuration>> + Send>;
/// Absorbs evaluations already checked against the objective space
pub type TellFn<T> =
    Box<dyn FnMut(&TunerContext, &mut T, &[Evaluation]) -> StrategyResult<()> + Send>;
pub type HistoryFn<T> = Box<dyn Fn(&TunerContext, &T) -> StrategyResult<Vec<Evaluation>> + Send>;
pub type OptimumsFn<T> = Box<dyn Fn(&TunerContext, &T) -> StrategyResult<Vec<Evaluation>> + Send>;
pub type SuggestFn<T> =
    Box<dyn FnMut(&TunerContext, &mut T) -> StrategyResult<Configuration> + Send>;

/// Tuner delegating all five protocol operations to closures.
///
/// The closures share a strategy state `T` owned by the tuner. The engine
/// keeps no history or front of its own for this strategy; whatever the
/// closures return is the answer. Closure errors come back as
/// [`TunerError::StrategyFailure`] with the original error as source.
pub struct UserDefinedTuner<T> {
    context: TunerContext,
    state: T,
    default_ask: usize,
    ask: AskFn<T>,
    tell: TellFn<T>,
    history: HistoryFn<T>,
    optimums: OptimumsFn<T>,
    suggest: SuggestFn<T>,
}

/// Builder for [`UserDefinedTuner`]; every operation must be provided
pub struct UserDefinedTunerBuilder<T> {
    context: TunerContext,
    state: T,
    default_ask: usize,
    ask: Option<AskFn<T>>,
    tell: Option<TellFn<T>>,
    history: Option<HistoryFn<T>>,
    optimums: Option<OptimumsFn<T>>,
    suggest: Option<SuggestFn<T>>,
}

impl<T: Send> UserDefinedTuner<T> {
    pub fn builder(
        name: &str,
        configuration_space: Arc<dyn ConfigurationSpace>,
        objective_space: Arc<dyn ObjectiveSpace>,
        state: T,
    ) -> UserDefinedTunerBuilder<T> {
        UserDefinedTunerBuilder {
            context: TunerContext::new(name, configuration_space, objective_space),
            state,
            default_ask: 1,
            ask: None,
            tell: None,
            history: None,
            optimums: None,
            suggest: None,
        }
    }

    /// Strategy state
    pub fn state(&self) -> &T {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut T {
        &mut self.state
    }

    pub fn into_state(self) -> T {
        self.state
    }

    fn failure(&self, operation: Operation, source: StrategyError) -> TunerError {
        warn!(tuner = %self.context.name(), %operation, error = %source, "strategy failed");
        TunerError::strategy(operation, source)
    }
}

impl<T: Send> UserDefinedTunerBuilder<T> {
    pub fn ask<F>(mut self, f: F) -> Self
    where
        F: FnMut(&TunerContext, &mut T, usize) -> StrategyResult<Vec<Configuration>>
            + Send
            + 'static,
    {
        self.ask = Some(Box::new(f));
        self
    }

    pub fn tell<F>(mut self, f: F) -> Self
    where
        F: FnMut(&TunerContext, &mut T, &[Evaluation]) -> StrategyResult<()> + Send + 'static,
    {
        self.tell = Some(Box::new(f));
        self
    }

    pub fn history<F>(mut self, f: F) -> Self
    where
        F: Fn(&TunerContext, &T) -> StrategyResult<Vec<Evaluation>> + Send + 'static,
    {
        self.history = Some(Box::new(f));
        self
    }

    pub fn optimums<F>(mut self, f: F) -> Self
    where
        F: Fn(&TunerContext, &T) -> StrategyResult<Vec<Evaluation>> + Send + 'static,
    {
        self.optimums = Some(Box::new(f));
        self
    }

    pub fn suggest<F>(mut self, f: F) -> Self
    where
        F: FnMut(&TunerContext, &mut T) -> StrategyResult<Configuration> + Send + 'static,
    {
        self.suggest = Some(Box::new(f));
        self
    }

    /// Count passed to the ask closure for `ask(None)`
    pub fn default_ask(mut self, count: usize) -> Self {
        self.default_ask = count;
        self
    }

    pub fn build(self) -> Result<UserDefinedTuner<T>> {
        fn required<F>(f: Option<F>, operation: Operation) -> Result<F> {
            f.ok_or_else(|| TunerError::InvalidValue(format!("missing {operation} callable")))
        }

        if self.context.name().is_empty() {
            return Err(TunerError::InvalidValue("tuner name must not be empty".to_string()));
        }
        if self.default_ask == 0 {
            return Err(TunerError::InvalidValue(
                "default ask count must be at least 1".to_string(),
            ));
        }
        Ok(UserDefinedTuner {
            ask: required(self.ask, Operation::Ask)?,
            tell: required(self.tell, Operation::Tell)?,
            history: required(self.history, Operation::History)?,
            optimums: required(self.optimums, Operation::Optimums)?,
            suggest: required(self.suggest, Operation::Suggest)?,
            context: self.context,
            state: self.state,
            default_ask: self.default_ask,
        })
    }
}

impl<T: Send> Tuner for UserDefinedTuner<T> {
    fn context(&self) -> &TunerContext {
        &self.context
    }

    fn kind(&self) -> TunerKind {
        TunerKind::UserDefined
    }

    fn ask(&mut self, count: Option<usize>) -> Result<Asked> {
        let requested = requested_count(count, self.default_ask)?;
        let configurations = match (self.ask)(&self.context, &mut self.state, requested) {
            Ok(configurations) => configurations,
            Err(e) => return Err(self.failure(Operation::Ask, e)),
        };
        if configurations.len() > requested {
            return Err(TunerError::InvalidValue(format!(
                "ask strategy returned {} configurations for a request of {requested}",
                configurations.len()
            )));
        }
        debug!(tuner = %self.context.name(), requested, produced = configurations.len(), "ask");
        Ok(Asked { configurations, requested })
    }

    fn tell(&mut self, evaluations: &[Evaluation]) -> Result<()> {
        for e in evaluations {
            e.check(self.context.objective_space().as_ref())?;
        }
        if let Err(e) = (self.tell)(&self.context, &mut self.state, evaluations) {
            return Err(self.failure(Operation::Tell, e));
        }
        debug!(tuner = %self.context.name(), told = evaluations.len(), "tell");
        Ok(())
    }

    fn history(&self) -> Result<Vec<Evaluation>> {
        (self.history)(&self.context, &self.state).map_err(|e| self.failure(Operation::History, e))
    }

    fn optimums(&self) -> Result<Vec<Evaluation>> {
        (self.optimums)(&self.context, &self.state)
            .map_err(|e| self.failure(Operation::Optimums, e))
    }

    fn suggest(&mut self) -> Result<Configuration> {
        match (self.suggest)(&self.context, &mut self.state) {
            Ok(configuration) => Ok(configuration),
            Err(e) => Err(self.failure(Operation::Suggest, e)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for UserDefinedTuner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDefinedTuner")
            .field("context", &self.context)
            .field("state", &self.state)
            .field("default_ask", &self.default_ask)
            .finish_non_exhaustive()
    }
}
