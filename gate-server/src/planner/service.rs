//! Gate and route queries over a gate source.

use tracing::info;

use crate::domain::{Gate, GateCode, ValidationError};
use crate::graph::{GateGraph, RouteResult, decode_gate, find_cheapest_route};
use crate::store::GateSource;

use super::PlannerError;

/// Parse a user-supplied gate code, naming `field` on failure.
fn parse_code(field: &'static str, raw: &str) -> Result<GateCode, ValidationError> {
    GateCode::parse_normalized(raw).map_err(|e| ValidationError::new(field, e.to_string()))
}

/// Answers gate queries against a [`GateSource`].
///
/// Every query fetches the records afresh and builds its own graph, so a
/// planner can be shared freely between concurrent requests.
pub struct Planner<'a, S> {
    source: &'a S,
}

impl<'a, S: GateSource> Planner<'a, S> {
    /// Create a new planner.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// All gates, decoded, in stored order.
    pub async fn list_gates(&self) -> Result<Vec<Gate>, PlannerError> {
        let records = self.source.fetch_gates().await?;
        let gates = records
            .iter()
            .map(decode_gate)
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = gates.len(), "retrieved gates");
        Ok(gates)
    }

    /// One gate by code. The code is case-normalized first.
    pub async fn gate(&self, gate_code: &str) -> Result<Option<Gate>, PlannerError> {
        let code = parse_code("gateCode", gate_code)?;
        let Some(record) = self.source.fetch_gate(&code).await? else {
            info!(gate = %code, "gate not found");
            return Ok(None);
        };
        let gate = decode_gate(&record)?;
        info!(gate = %gate.code, name = %gate.name, "retrieved gate");
        Ok(Some(gate))
    }

    /// Cheapest route between two gates. Codes are case-normalized first.
    ///
    /// An unreachable target yields `Ok` with an empty path.
    pub async fn cheapest_route(
        &self,
        gate_code: &str,
        target_gate_code: &str,
    ) -> Result<RouteResult, PlannerError> {
        let start = parse_code("gateCode", gate_code)?;
        let end = parse_code("targetGateCode", target_gate_code)?;

        info!(%start, %end, "finding route");
        let records = self.source.fetch_gates().await?;
        let graph = GateGraph::build(&records)?;
        let result = find_cheapest_route(&graph, &start, &end);

        if result.is_reachable() {
            info!(%start, %end, cost = result.cost, hops = result.hops(), "cheapest route found");
        } else {
            info!(%start, %end, "no route found");
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GateRecord;
    use crate::store::{DataAccessError, InMemoryGateStore};

    /// Source that always fails, like an unreachable database.
    struct FailingSource;

    impl GateSource for FailingSource {
        async fn fetch_gates(&self) -> Result<Vec<GateRecord>, DataAccessError> {
            Err(DataAccessError::Unavailable("connection refused".into()))
        }
    }

    fn store() -> InMemoryGateStore {
        InMemoryGateStore::new(vec![
            GateRecord::new("A", "GateA", r#"[{"id":"B","hu":"10"}]"#),
            GateRecord::new("B", "GateB", r#"[{"id":"C","hu":"5"}]"#),
            GateRecord::new("C", "GateC", "[]"),
        ])
    }

    #[tokio::test]
    async fn route_with_normalized_codes() {
        let store = store();
        let planner = Planner::new(&store);

        let result = planner.cheapest_route(" a", "c ").await.unwrap();

        let path: Vec<_> = result.path.iter().map(GateCode::as_str).collect();
        assert_eq!(path, vec!["A", "B", "C"]);
        assert_eq!(result.cost, 15.0);
    }

    #[tokio::test]
    async fn unreachable_route_is_ok() {
        let store = store();
        let planner = Planner::new(&store);

        let result = planner.cheapest_route("C", "A").await.unwrap();
        assert!(!result.is_reachable());
        assert_eq!(result.cost, f64::INFINITY);

        let result = planner.cheapest_route("A", "ZZZ").await.unwrap();
        assert!(!result.is_reachable());
    }

    #[tokio::test]
    async fn invalid_codes_name_the_field() {
        let store = store();
        let planner = Planner::new(&store);

        let err = planner.cheapest_route("", "A").await.unwrap_err();
        assert!(matches!(err, PlannerError::Validation(ref v) if v.field() == "gateCode"));

        let err = planner.cheapest_route("A", "no!").await.unwrap_err();
        assert!(matches!(err, PlannerError::Validation(ref v) if v.field() == "targetGateCode"));
    }

    #[tokio::test]
    async fn data_access_failure_propagates() {
        let planner = Planner::new(&FailingSource);

        let err = planner.cheapest_route("A", "B").await.unwrap_err();
        assert!(matches!(err, PlannerError::DataAccess(DataAccessError::Unavailable(_))));

        let err = planner.list_gates().await.unwrap_err();
        assert!(matches!(err, PlannerError::DataAccess(_)));

        let err = planner.gate("A").await.unwrap_err();
        assert!(matches!(err, PlannerError::DataAccess(_)));
    }

    #[tokio::test]
    async fn malformed_records_fail_route_queries() {
        let store = InMemoryGateStore::new(vec![GateRecord::new("A", "GateA", "oops")]);
        let planner = Planner::new(&store);

        let err = planner.cheapest_route("A", "A").await.unwrap_err();
        assert!(matches!(err, PlannerError::GraphParse(_)));
    }

    #[tokio::test]
    async fn lists_and_fetches_gates() {
        let store = store();
        let planner = Planner::new(&store);

        let gates = planner.list_gates().await.unwrap();
        assert_eq!(gates.len(), 3);
        assert_eq!(gates[0].name, "GateA");
        assert_eq!(gates[0].connections[0].weight, 10.0);

        let gate = planner.gate("b").await.unwrap().unwrap();
        assert_eq!(gate.code.as_str(), "B");

        assert!(planner.gate("Q").await.unwrap().is_none());
    }
}
