//! Scenario runner.

use mimedex_registry::MimeRegistry;

use crate::error::{ScenarioError, ScenarioResult};
use crate::logging::init_test_logging;
use crate::scenario::Scenario;

/// Runs a scenario against a registry.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    registry: MimeRegistry,
}

impl<'s> Runner<'s> {
    /// Create a new runner for a scenario, building its registry.
    pub fn new(scenario: &'s Scenario) -> ScenarioResult<Self> {
        init_test_logging();

        if scenario.steps().is_empty() {
            return Err(ScenarioError::no_steps(scenario.name()));
        }

        let registry = scenario.build_registry()?;
        Ok(Self { scenario, registry })
    }

    /// Run the scenario.
    pub fn run(&self) -> ScenarioResult<()> {
        tracing::debug!(
            scenario = self.scenario.name(),
            types = self.registry.len(),
            steps = self.scenario.steps().len(),
            "running scenario"
        );

        for step in self.scenario.steps() {
            let name = step.query.to_string();
            let result = step.query.execute(&self.registry);
            tracing::trace!(step = %name, ?result, "executed step");
            step.assertion.verify(&name, &result)?;
        }

        Ok(())
    }

    /// Get the registry the scenario runs against.
    pub fn registry(&self) -> &MimeRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Query;
    use mimedex_core::MimeEntry;

    #[test]
    fn test_runner_with_custom_only_registry() {
        let scenario = Scenario::new("runner")
            .without_builtin()
            .entry("text/x-a", MimeEntry::new().with_extensions(["a"]))
            .step(Query::types("a"), |a| a.exactly(&["text/x-a"]));

        let runner = Runner::new(&scenario).unwrap();

        assert_eq!(runner.registry().len(), 1);
        runner.run().unwrap();
    }

    #[test]
    fn test_runner_rejects_empty_scenario() {
        let scenario = Scenario::new("empty");

        let result = Runner::new(&scenario);

        assert!(matches!(result, Err(ScenarioError::NoSteps { .. })));
    }

    #[test]
    fn test_runner_reports_failed_step() {
        let scenario = Scenario::new("failing")
            .without_builtin()
            .step(Query::types("a"), |a| a.some());

        let result = scenario.run();

        assert!(matches!(
            result,
            Err(ScenarioError::AssertionFailed { ref step, .. }) if step == "get_types_by_extension(\"a\")"
        ));
    }
}
