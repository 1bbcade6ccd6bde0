//! Assignment problem instances.

use rand::Rng;
use serde::{Deserialize, Serialize};
use u_assign_core::generator::random_cost_matrix;
use u_assign_core::CostMatrix;

/// Summary information about an instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceInfo {
    /// Instance name
    pub name: String,
    /// Matrix dimension
    pub dim: usize,
    /// Number of zero costs
    pub zero_count: usize,
    /// Known optimal cost, if any
    pub optimal_cost: Option<u64>,
}

/// A square cost matrix with a name and an optional known optimum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    /// Instance name
    pub name: String,
    /// Cost rows (validated square by the parser)
    pub costs: Vec<Vec<u32>>,
    /// Known optimal total cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_cost: Option<u64>,
}

impl Instance {
    /// Generates a random instance with costs in `0..=max_cost`.
    pub fn random<R: Rng>(
        name: impl Into<String>,
        dim: usize,
        max_cost: u32,
        rng: &mut R,
    ) -> u_assign_core::Result<Self> {
        let matrix = random_cost_matrix(dim, max_cost, rng)?;
        let costs = matrix
            .rows()
            .map(|row| row.iter().map(|&v| v as u32).collect())
            .collect();
        Ok(Self {
            name: name.into(),
            costs,
            optimal_cost: None,
        })
    }

    pub fn dim(&self) -> usize {
        self.costs.len()
    }

    /// Builds the validated cost matrix.
    pub fn cost_matrix(&self) -> u_assign_core::Result<CostMatrix> {
        CostMatrix::from_rows(self.costs.clone())
    }

    /// Returns instance information.
    pub fn info(&self) -> InstanceInfo {
        InstanceInfo {
            name: self.name.clone(),
            dim: self.dim(),
            zero_count: self.costs.iter().flatten().filter(|&&c| c == 0).count(),
            optimal_cost: self.optimal_cost,
        }
    }
}
