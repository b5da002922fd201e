//! User-registered derived metrics.
//!
//! A custom metric is a named closure over the computed finance metrics and
//! the values of the custom metrics it declares as dependencies. Registration
//! keeps the set topologically ordered and rejects dependency cycles.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::errors::{MetricsError, Result};
use crate::metrics::FinanceMetrics;

/// Values of already-computed custom metrics, keyed by metric id.
pub type MetricValues = BTreeMap<String, Value>;

type ComputeFn = Box<dyn Fn(&FinanceMetrics, &MetricValues) -> Result<Value> + Send + Sync>;

/// A user-defined metric derived from the core finance metrics.
pub struct CustomMetric {
    pub id: String,
    /// Ids of other custom metrics this one reads from
    pub dependencies: Vec<String>,
    compute: ComputeFn,
}

impl CustomMetric {
    pub fn new<F>(id: impl Into<String>, dependencies: Vec<String>, compute: F) -> Self
    where
        F: Fn(&FinanceMetrics, &MetricValues) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            dependencies,
            compute: Box::new(compute),
        }
    }

    pub fn evaluate(&self, finance: &FinanceMetrics, values: &MetricValues) -> Result<Value> {
        (self.compute)(finance, values)
    }
}

impl std::fmt::Debug for CustomMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomMetric")
            .field("id", &self.id)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, PartialEq)]
enum VisitState {
    Unvisited,
    Visiting,
    Done,
}

/// Orders metrics so every metric comes after its dependencies.
///
/// Dependencies on ids not present in the set are ignored here; the engine
/// deals with them at evaluation time. A cycle yields
/// [`MetricsError::CircularDependency`] naming one metric on the cycle.
pub(crate) fn topological_order(metrics: &[CustomMetric]) -> Result<Vec<usize>> {
    let index_by_id: HashMap<&str, usize> = metrics
        .iter()
        .enumerate()
        .map(|(i, m)| (m.id.as_str(), i))
        .collect();

    let mut state = vec![VisitState::Unvisited; metrics.len()];
    let mut order = Vec::with_capacity(metrics.len());

    fn visit(
        index: usize,
        metrics: &[CustomMetric],
        index_by_id: &HashMap<&str, usize>,
        state: &mut [VisitState],
        order: &mut Vec<usize>,
    ) -> Result<()> {
        match state[index] {
            VisitState::Done => return Ok(()),
            VisitState::Visiting => {
                return Err(
                    MetricsError::CircularDependency(metrics[index].id.clone()).into()
                );
            }
            VisitState::Unvisited => {}
        }
        state[index] = VisitState::Visiting;
        for dependency in &metrics[index].dependencies {
            if let Some(&dep_index) = index_by_id.get(dependency.as_str()) {
                visit(dep_index, metrics, index_by_id, state, order)?;
            }
        }
        state[index] = VisitState::Done;
        order.push(index);
        Ok(())
    }

    for index in 0..metrics.len() {
        visit(index, metrics, &index_by_id, &mut state, &mut order)?;
    }
    Ok(order)
}
