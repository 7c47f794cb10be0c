use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{FlockError, FlockResult};
use crate::trajectory::record::{Record, parse_record};
use std::io::BufRead;
use std::path::Path;

/// Position and velocity of one agent at one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentState {
    /// Arrow tail.
    pub position: Point,
    /// Arrow direction and magnitude.
    pub velocity: Vec2,
}

/// How the step count is derived from the parsed records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepCount {
    /// One plus the step of the last matching line in input order.
    ///
    /// On input not sorted by step this can be smaller than the number of populated rows.
    #[default]
    LastRecord,
    /// One plus the largest step seen (the number of step rows).
    MaxStep,
}

/// Line counters collected while loading. Informational only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines that matched the record pattern.
    pub records: u64,
    /// Lines that did not match and were dropped.
    pub skipped_lines: u64,
}

/// Ragged trajectory tensor built from a record log.
///
/// Rows are indexed by step, cells within a row by agent id. Rows grow on demand and never
/// shrink; each row's agent dimension grows independently, and cells never written stay `None`.
/// Positions and velocities live in the same cell so their population is always identical.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    rows: Vec<Vec<Option<AgentState>>>,
    last_step: Option<usize>,
    stats: LoadStats,
}

impl Trajectory {
    /// Load a trajectory log from a file.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> FlockResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            FlockError::resource(format!("failed to open '{}': {e}", path.display()))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Load a trajectory log from any line source in a single pass.
    pub fn from_reader(reader: impl BufRead) -> FlockResult<Self> {
        let mut out = Self::default();
        for line in reader.lines() {
            let line =
                line.map_err(|e| FlockError::resource(format!("failed to read line: {e}")))?;
            out.push_line(&line);
        }
        out.log_stats();
        Ok(out)
    }

    /// Load a trajectory log held in memory.
    pub fn parse_str(text: &str) -> Self {
        let mut out = Self::default();
        for line in text.lines() {
            out.push_line(line);
        }
        out.log_stats();
        out
    }

    fn push_line(&mut self, line: &str) {
        match parse_record(line) {
            Some(rec) => self.insert(rec),
            None => self.stats.skipped_lines += 1,
        }
    }

    /// Write one record, growing the step and agent dimensions as needed.
    ///
    /// A later record for the same `(step, agent)` overwrites an earlier one. A record whose ids
    /// cannot be addressed (index overflow, or storage for them cannot be allocated) is counted
    /// as a skipped line and leaves the tensor untouched.
    pub fn insert(&mut self, rec: Record) {
        if self.place(&rec).is_none() {
            tracing::debug!(step = rec.step, agent = rec.agent, "record out of range, skipped");
            self.stats.skipped_lines += 1;
        }
    }

    fn place(&mut self, rec: &Record) -> Option<()> {
        let step = usize::try_from(rec.step).ok()?;
        let agent = usize::try_from(rec.agent).ok()?;
        let rows_len = step.checked_add(1)?;
        let row_len = agent.checked_add(1)?;

        // Reserve everything before growing so a failed allocation changes nothing.
        if self.rows.len() < rows_len {
            let mut row: Vec<Option<AgentState>> = Vec::new();
            row.try_reserve_exact(row_len).ok()?;
            self.rows.try_reserve_exact(rows_len - self.rows.len()).ok()?;
            self.rows.resize_with(step, Vec::new);
            self.rows.push(row);
        }
        let row = &mut self.rows[step];
        if row.len() < row_len {
            row.try_reserve_exact(row_len - row.len()).ok()?;
            row.resize(row_len, None);
        }
        row[agent] = Some(AgentState {
            position: rec.position,
            velocity: rec.velocity,
        });

        self.last_step = Some(step);
        self.stats.records += 1;
        Some(())
    }

    fn log_stats(&self) {
        tracing::debug!(
            records = self.stats.records,
            skipped_lines = self.stats.skipped_lines,
            rows = self.rows.len(),
            steps = self.steps(),
            "loaded trajectory"
        );
    }

    /// Step count under the default [`StepCount::LastRecord`] policy.
    pub fn steps(&self) -> usize {
        self.steps_with(StepCount::LastRecord)
    }

    /// Step count under `policy`. Zero when no line matched.
    pub fn steps_with(&self, policy: StepCount) -> usize {
        match policy {
            StepCount::LastRecord => self.last_step.map_or(0, |s| s + 1),
            StepCount::MaxStep => self.rows.len(),
        }
    }

    /// Number of step rows (largest step seen plus one).
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Agent dimension length of `step`'s row (zero for missing rows).
    pub fn row_len(&self, step: usize) -> usize {
        self.rows.get(step).map_or(0, Vec::len)
    }

    /// Number of agents at step 0. This is the glyph count of a rendered field.
    pub fn agents(&self) -> usize {
        self.row_len(0)
    }

    /// Cell at `(step, agent)`, if it was populated.
    pub fn get(&self, step: usize, agent: usize) -> Option<AgentState> {
        self.rows.get(step)?.get(agent).copied().flatten()
    }

    /// Position at `(step, agent)`, if it was populated.
    pub fn position(&self, step: usize, agent: usize) -> Option<Point> {
        self.get(step, agent).map(|s| s.position)
    }

    /// Velocity at `(step, agent)`, if it was populated.
    pub fn velocity(&self, step: usize, agent: usize) -> Option<Vec2> {
        self.get(step, agent).map(|s| s.velocity)
    }

    /// Positions as a ragged `[step][agent][axis]` tensor; absent cells are `None`.
    pub fn positions(&self) -> Vec<Vec<Option<[f64; 2]>>> {
        self.map_cells(|s| [s.position.x, s.position.y])
    }

    /// Velocities as a ragged `[step][agent][axis]` tensor; absent cells are `None`.
    pub fn velocities(&self) -> Vec<Vec<Option<[f64; 2]>>> {
        self.map_cells(|s| [s.velocity.x, s.velocity.y])
    }

    fn map_cells(&self, f: impl Fn(&AgentState) -> [f64; 2]) -> Vec<Vec<Option<[f64; 2]>>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.as_ref().map(&f)).collect())
            .collect()
    }

    /// Counters collected while loading.
    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Gather the state of agents `0..agents` at `step`.
    ///
    /// Fails with [`FlockError::SparsePopulation`] on the first missing agent. A row holding an
    /// agent outside `0..agents` fails too, reported against step 0 where that agent is absent.
    pub fn frame(&self, step: usize, agents: usize) -> FlockResult<(Vec<Point>, Vec<Vec2>)> {
        let row = self.rows.get(step).map_or(&[][..], Vec::as_slice);

        if let Some(extra) = row
            .iter()
            .enumerate()
            .skip(agents)
            .find_map(|(agent, cell)| cell.is_some().then_some(agent))
        {
            return Err(FlockError::sparse(0, extra));
        }

        let mut positions = Vec::with_capacity(agents);
        let mut velocities = Vec::with_capacity(agents);
        for agent in 0..agents {
            let Some(state) = row.get(agent).copied().flatten() else {
                return Err(FlockError::sparse(step, agent));
            };
            positions.push(state.position);
            velocities.push(state.velocity);
        }
        Ok((positions, velocities))
    }
}

impl std::str::FromStr for Trajectory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_str(s))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trajectory/loader.rs"]
mod tests;
