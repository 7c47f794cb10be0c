use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::FlockResult;
use crate::trajectory::loader::Trajectory;

/// Rectangular `[step][agent]` trajectory stored time-major in flat buffers.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseTrajectory {
    steps: usize,
    agents: usize,
    positions: Vec<Point>,
    velocities: Vec<Vec2>,
}

impl DenseTrajectory {
    /// Number of steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of agents per step.
    pub fn agents(&self) -> usize {
        self.agents
    }

    /// Positions and velocities of every agent at `step`.
    pub fn frame(&self, step: usize) -> Option<(&[Point], &[Vec2])> {
        if step >= self.steps {
            return None;
        }
        let span = step * self.agents..(step + 1) * self.agents;
        Some((&self.positions[span.clone()], &self.velocities[span]))
    }

    /// Position of `agent` at `step`.
    pub fn position(&self, step: usize, agent: usize) -> Option<Point> {
        self.frame(step)?.0.get(agent).copied()
    }

    /// Velocity of `agent` at `step`.
    pub fn velocity(&self, step: usize, agent: usize) -> Option<Vec2> {
        self.frame(step)?.1.get(agent).copied()
    }
}

impl Trajectory {
    /// Convert the first `steps` rows into a rectangular tensor.
    ///
    /// The agent count is fixed by step 0. Every step must hold exactly agents
    /// `0..agents`; the first violation in step-major order is returned as
    /// [`crate::FlockError::SparsePopulation`].
    pub fn densify(&self, steps: usize) -> FlockResult<DenseTrajectory> {
        let agents = self.agents();
        let mut positions = Vec::with_capacity(steps * agents);
        let mut velocities = Vec::with_capacity(steps * agents);
        for step in 0..steps {
            let (p, v) = self.frame(step, agents)?;
            positions.extend(p);
            velocities.extend(v);
        }
        Ok(DenseTrajectory {
            steps,
            agents,
            positions,
            velocities,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/dense.rs"]
mod tests;
