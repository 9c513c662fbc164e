//! The ordered rule registry and its first-error-wins evaluator.

use crate::error::{BoxError, Error, ErrorInfo};
use futures_util::future::{self, BoxFuture, FutureExt};
use std::collections::HashSet;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[cfg(feature = "tracing")]
use tracing::Instrument;

/// Outcome of running one rule.
pub type RuleResult = Result<Option<ErrorInfo>, BoxError>;

type RuleFn<'a> = Arc<dyn Fn() -> BoxFuture<'a, RuleResult> + Send + Sync + 'a>;

#[derive(Clone)]
struct Entry<'a> {
    property_path: Arc<str>,
    rule: RuleFn<'a>,
}

/// Ordered registry of `(property path, rule)` pairs.
///
/// Rules run strictly one after another in registration order. Once a path
/// produced an error, later rules registered for that path are skipped
/// without being invoked. A path whose rules all pass does not appear in the
/// result.
///
/// One command is owned by a root [`Validator`](crate::Validator) and shared
/// by every nested validator derived from it, so a single
/// [`validate`](Self::validate) covers the whole object graph.
///
/// ```
/// use objval::{ErrorInfo, ValidationCommand};
///
/// # async fn example() {
///
/// let subject = "";
/// let command = ValidationCommand::new();
/// command.add("Subject", || {
///     subject.trim().is_empty().then(|| {
///         ErrorInfo::new("Subject", "Subject", "required", "'Subject' should not be empty.")
///     })
/// });
///
/// let errors = command.validate().await.unwrap();
/// assert_eq!(errors[0].property_path, "Subject");
/// # }
/// ```
pub struct ValidationCommand<'a> {
    entries: Mutex<Vec<Entry<'a>>>,
}

impl<'a> ValidationCommand<'a> {
    /// Create an empty command.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Register a synchronous rule for `property_path`.
    ///
    /// The rule is not evaluated here. It is treated as an already completed
    /// asynchronous rule during evaluation.
    pub fn add<F>(&self, property_path: impl Into<String>, rule: F)
    where
        F: Fn() -> Option<ErrorInfo> + Send + Sync + 'a,
    {
        let rule: RuleFn<'a> = Arc::new(move || -> BoxFuture<'a, RuleResult> {
            future::ready(Ok(rule())).boxed()
        });
        self.push(property_path.into(), rule);
    }

    /// Register an asynchronous rule for `property_path`.
    pub fn add_async<F, Fut>(&self, property_path: impl Into<String>, rule: F)
    where
        F: Fn() -> Fut + Send + Sync + 'a,
        Fut: Future<Output = Option<ErrorInfo>> + Send + 'a,
    {
        let rule: RuleFn<'a> = Arc::new(move || -> BoxFuture<'a, RuleResult> {
            rule().map(Ok::<_, BoxError>).boxed()
        });
        self.push(property_path.into(), rule);
    }

    /// Register a synchronous rule that may fault.
    ///
    /// A fault aborts the whole evaluation pass.
    pub fn try_add<F, E>(&self, property_path: impl Into<String>, rule: F)
    where
        F: Fn() -> Result<Option<ErrorInfo>, E> + Send + Sync + 'a,
        E: Into<BoxError>,
    {
        let rule: RuleFn<'a> = Arc::new(move || -> BoxFuture<'a, RuleResult> {
            future::ready(rule().map_err(Into::into)).boxed()
        });
        self.push(property_path.into(), rule);
    }

    /// Register an asynchronous rule that may fault.
    pub fn try_add_async<F, Fut, E>(&self, property_path: impl Into<String>, rule: F)
    where
        F: Fn() -> Fut + Send + Sync + 'a,
        Fut: Future<Output = Result<Option<ErrorInfo>, E>> + Send + 'a,
        E: Into<BoxError>,
    {
        let rule: RuleFn<'a> = Arc::new(move || -> BoxFuture<'a, RuleResult> {
            rule().map(|result| result.map_err(Into::into)).boxed()
        });
        self.push(property_path.into(), rule);
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no rule was registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Property paths of all registered rules, in registration order.
    pub fn property_paths(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|entry| entry.property_path.to_string())
            .collect()
    }

    /// Run every registered rule and collect the errors.
    ///
    /// Errors are ordered by the moment their path first failed. Every call
    /// re-runs all rules against the current object state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rule`] when a rule faults; evaluation stops at that
    /// rule and no partial result is returned.
    pub async fn validate(&self) -> Result<Vec<ErrorInfo>, Error> {
        let entries = self.lock().clone();

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("validate", entries = entries.len());
        let pass = run(entries);
        #[cfg(feature = "tracing")]
        let pass = pass.instrument(span);

        pass.await
    }

    fn push(&self, property_path: String, rule: RuleFn<'a>) {
        trace_debug!(path = %property_path, "registering rule");
        self.lock().push(Entry {
            property_path: property_path.into(),
            rule,
        });
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entry<'a>>> {
        // Entries are only ever appended, so a poisoned list is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn run(entries: Vec<Entry<'_>>) -> Result<Vec<ErrorInfo>, Error> {
    let mut errors = Vec::new();
    let mut decided: HashSet<Arc<str>> = HashSet::new();

    for entry in &entries {
        if decided.contains(&entry.property_path) {
            trace_debug!(path = %entry.property_path, "skipping rule, path already failed");
            continue;
        }

        trace_trace!(path = %entry.property_path, "running rule");
        match (entry.rule)().await {
            Ok(Some(error)) => {
                decided.insert(Arc::clone(&entry.property_path));
                errors.push(error);
            }
            Ok(None) => {}
            Err(source) => {
                trace_debug!(path = %entry.property_path, "rule faulted, aborting");
                return Err(Error::rule(entry.property_path.as_ref(), source));
            }
        }
    }

    trace_debug!(errors = errors.len(), "validation pass complete");
    Ok(errors)
}

impl Default for ValidationCommand<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidationCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationCommand")
            .field("property_paths", &self.property_paths())
            .finish()
    }
}
