use derive_more::Display;
use thiserror::Error;

use crate::heuristic::Heuristic;
use crate::problem::IllegalActionError;
use crate::problem::SearchProblem;
use crate::problem::replay_actions;
use crate::space::Action;
use crate::space::State;
use crate::space::Successor;

const MAX_ELEMENTS_DISPLAYED: usize = 80;

pub type Coord = u32;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("({x},{y})")]
pub struct Maze2DState {
    pub x: Coord,
    pub y: Coord,
}

impl Maze2DState {
    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
    /// `None` when a coordinate doesn't fit in a `Coord`.
    fn from_usize(x: usize, y: usize) -> Option<Self> {
        Some(Self::new(Coord::try_from(x).ok()?, Coord::try_from(y).ok()?))
    }
}
impl State for Maze2DState {}

/// A move on the grid. Rows grow downwards, so North is `y - 1`.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maze2DAction {
    #[display("↑")]
    North,
    #[display("↓")]
    South,
    #[display("→")]
    East,
    #[display("←")]
    West,
    #[display("↗")]
    NorthEast,
    #[display("↖")]
    NorthWest,
    #[display("↘")]
    SouthEast,
    #[display("↙")]
    SouthWest,
}
impl Action for Maze2DAction {}

impl Maze2DAction {
    /// Moves in the order successors list them.
    pub const ALL: [Maze2DAction; 8] = [
        Maze2DAction::North,
        Maze2DAction::South,
        Maze2DAction::East,
        Maze2DAction::West,
        Maze2DAction::NorthEast,
        Maze2DAction::NorthWest,
        Maze2DAction::SouthEast,
        Maze2DAction::SouthWest,
    ];

    pub fn is_diagonal(&self) -> bool {
        *self >= Maze2DAction::NorthEast
    }

    #[rustfmt::skip]
    fn delta(&self) -> (i64, i64) {
        match self {
            Maze2DAction::North     => ( 0, -1),
            Maze2DAction::South     => ( 0,  1),
            Maze2DAction::East      => ( 1,  0),
            Maze2DAction::West      => (-1,  0),
            Maze2DAction::NorthEast => ( 1, -1),
            Maze2DAction::NorthWest => (-1, -1),
            Maze2DAction::SouthEast => ( 1,  1),
            Maze2DAction::SouthWest => (-1,  1),
        }
    }

    pub fn cost(&self) -> Maze2DCost {
        if self.is_diagonal() {
            DIAGONAL_COST
        } else {
            ORTHOGONAL_COST
        }
    }
}

pub type Maze2DCost = u32;

pub const ORTHOGONAL_COST: Maze2DCost = 100u32;
pub const DIAGONAL_COST: Maze2DCost = 141u32; // 1.414213562373095

/// Which neighbours a cell can move to.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq)]
pub enum Connectivity {
    /// North, South, East and West.
    #[default]
    #[display("4-connected")]
    Four,
    /// Diagonals too.
    #[display("8-connected")]
    Eight,
}

impl Connectivity {
    pub fn actions(&self) -> &'static [Maze2DAction] {
        match self {
            Connectivity::Four => &Maze2DAction::ALL[..4],
            Connectivity::Eight => &Maze2DAction::ALL,
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq)]
pub enum Maze2DCell {
    #[display("░")]
    Empty,
    #[display("█")]
    Wall,
}

#[derive(Debug, Error, PartialEq)]
pub enum Maze2DCellParseError {
    #[error("Invalid character '{0}' found.")]
    InvalidCharacter(char),
}

impl std::convert::TryFrom<char> for Maze2DCell {
    type Error = Maze2DCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            ' ' | '.' => Ok(Maze2DCell::Empty),
            '#' | '%' | '█' => Ok(Maze2DCell::Wall),
            ch => Err(Maze2DCellParseError::InvalidCharacter(ch)),
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq)]
pub enum Maze2DProblemCell {
    Cell(Maze2DCell),
    #[display("S")]
    Start,
    #[display("G")]
    Goal,
}

#[derive(Debug, Error, PartialEq)]
pub enum Maze2DProblemCellParseError {
    #[error("Invalid cell {e}")]
    InvalidCell { e: Maze2DCellParseError },
}

impl std::convert::TryFrom<char> for Maze2DProblemCell {
    type Error = Maze2DProblemCellParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'S' => Ok(Maze2DProblemCell::Start),
            'G' => Ok(Maze2DProblemCell::Goal),
            ch => {
                let cell = Maze2DCell::try_from(ch)
                    .map_err(|e| Maze2DProblemCellParseError::InvalidCell { e })?;
                Ok(Maze2DProblemCell::Cell(cell))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum Maze2DProblemParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Invalid cell {e} found at ({x},{y})")]
    InvalidCell {
        e: Maze2DProblemCellParseError,
        x: usize,
        y: usize,
    },
    #[error("Cell ({x},{y}) is out of the coordinate range")]
    TooLarge { x: usize, y: usize },
    #[error("Row {y} has {len} cells, expected {expected}")]
    UnevenRows { y: usize, len: usize, expected: usize },
    #[error("No start ('S') found")]
    MissingStart,
    #[error("Found a second start at {second}, the first one is at {first}")]
    MultipleStarts {
        first: Maze2DState,
        second: Maze2DState,
    },
    #[error("I/O error when loading '{p}': {e}")]
    IOError {
        p: std::path::PathBuf,
        e: std::io::Error,
    },
}

/// A grid maze with a single start and any number of goals.
#[derive(Clone, Debug)]
pub struct Maze2DProblem {
    map: Vec<Vec<Maze2DCell>>,
    start: Maze2DState,
    goals: Vec<Maze2DState>,
    connectivity: Connectivity,
}

impl Maze2DProblem {
    #[must_use]
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn dimensions(&self) -> (usize, usize) {
        if self.map.is_empty() {
            return (0, 0);
        }
        (self.map[0].len(), self.map.len())
    }

    pub fn goals(&self) -> &[Maze2DState] {
        &self.goals
    }

    /// The cell at `(x, y)`, if it's inside the maze.
    pub fn at(&self, x: i64, y: i64) -> Option<Maze2DCell> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.map.get(y)?.get(x).copied()
    }

    fn apply(&self, state: &Maze2DState, action: &Maze2DAction) -> Option<Maze2DState> {
        let (dx, dy) = action.delta();
        let x = i64::from(state.x) + dx;
        let y = i64::from(state.y) + dy;
        match self.at(x, y)? {
            Maze2DCell::Empty => Some(Maze2DState::new(
                Coord::try_from(x).ok()?,
                Coord::try_from(y).ok()?,
            )),
            Maze2DCell::Wall => None,
        }
    }
}

impl SearchProblem<Maze2DState, Maze2DAction, Maze2DCost> for Maze2DProblem {
    fn start_state(&self) -> Maze2DState {
        self.start
    }

    fn is_goal_state(&self, s: &Maze2DState) -> bool {
        self.goals.contains(s)
    }

    /// Gets the free neighbours of a given position.
    fn successors(
        &self,
        state: &Maze2DState,
    ) -> Vec<Successor<Maze2DState, Maze2DAction, Maze2DCost>> {
        let actions = self.connectivity.actions();
        let mut v = Vec::with_capacity(actions.len());
        for action in actions {
            if let Some(s) = self.apply(state, action) {
                v.push(Successor::new(s, *action, action.cost()));
            }
        }
        v
    }

    fn cost_of_actions(
        &self,
        actions: &[Maze2DAction],
    ) -> Result<Maze2DCost, IllegalActionError<Maze2DState, Maze2DAction>> {
        replay_actions(self, actions).map(|(_end, cost)| cost)
    }
}

impl std::convert::TryFrom<&str> for Maze2DProblem {
    type Error = Maze2DProblemParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut lines: Vec<&str> = s.lines().collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        if lines.is_empty() || lines[0].is_empty() {
            return Err(Maze2DProblemParseError::EmptyInput);
        }

        let max_x = lines[0].chars().count();
        let mut map = Vec::with_capacity(lines.len());
        let mut start: Option<Maze2DState> = None;
        let mut goals = vec![];

        for (y, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(max_x);
            for (x, ch) in line.chars().enumerate() {
                let cell = Maze2DProblemCell::try_from(ch)
                    .map_err(|e| Maze2DProblemParseError::InvalidCell { e, x, y })?;
                let state = Maze2DState::from_usize(x, y)
                    .ok_or(Maze2DProblemParseError::TooLarge { x, y })?;

                row.push(match cell {
                    Maze2DProblemCell::Start => {
                        if let Some(first) = start {
                            return Err(Maze2DProblemParseError::MultipleStarts {
                                first,
                                second: state,
                            });
                        }
                        start = Some(state);
                        Maze2DCell::Empty
                    }
                    Maze2DProblemCell::Goal => {
                        goals.push(state);
                        Maze2DCell::Empty
                    }
                    Maze2DProblemCell::Cell(c) => c,
                });
            }
            if row.len() != max_x {
                return Err(Maze2DProblemParseError::UnevenRows {
                    y,
                    len: row.len(),
                    expected: max_x,
                });
            }
            map.push(row);
        }

        Ok(Maze2DProblem {
            map,
            start: start.ok_or(Maze2DProblemParseError::MissingStart)?,
            goals,
            connectivity: Connectivity::default(),
        })
    }
}

impl std::convert::TryFrom<&std::path::Path> for Maze2DProblem {
    type Error = Maze2DProblemParseError;

    fn try_from(p: &std::path::Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(p).map_err(|e| Maze2DProblemParseError::IOError {
            p: p.to_path_buf(),
            e,
        })?;
        Maze2DProblem::try_from(text.as_str())
    }
}

impl std::fmt::Display for Maze2DProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.dimensions();
        writeln!(
            f,
            "Maze2DProblem({}x{}, {}) (s:{}, g:{:?}):",
            d.0, d.1, self.connectivity, self.start, self.goals
        )?;
        for (y, line) in self.map.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
            for (x, cell) in line.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
                let s = Maze2DState::from_usize(x, y);

                let is_start = s == Some(self.start);
                let is_goal = s.is_some_and(|s| self.goals.contains(&s));

                match (is_start, is_goal) {
                    (true, true) => write!(f, "!")?,
                    (true, false) => write!(f, "S")?,
                    (false, true) => write!(f, "G")?,
                    (false, false) => write!(f, "{cell}")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

fn deltas(a: &Maze2DState, b: &Maze2DState) -> (Maze2DCost, Maze2DCost) {
    (a.x.abs_diff(b.x), a.y.abs_diff(b.y))
}

/// The distance of following straight lines to the nearest goal.
///
/// Only admissible on `Connectivity::Four` mazes.
#[derive(Copy, Clone, Debug, Default)]
pub struct ManhattanDistance;

impl Heuristic<Maze2DProblem, Maze2DState, Maze2DAction, Maze2DCost> for ManhattanDistance {
    fn estimate(&self, s: &Maze2DState, problem: &Maze2DProblem) -> Maze2DCost {
        problem
            .goals
            .iter()
            .map(|goal| {
                let (delta_x, delta_y) = deltas(s, goal);
                (delta_x + delta_y) * ORTHOGONAL_COST
            })
            .min()
            .unwrap_or(0)
    }
}

/// The distance of maximising useful diagonals to the nearest goal.
///
/// Admissible on any `Connectivity`.
#[derive(Copy, Clone, Debug, Default)]
pub struct OctileDistance;

impl Heuristic<Maze2DProblem, Maze2DState, Maze2DAction, Maze2DCost> for OctileDistance {
    fn estimate(&self, s: &Maze2DState, problem: &Maze2DProblem) -> Maze2DCost {
        problem
            .goals
            .iter()
            .map(|goal| {
                let (delta_x, delta_y) = deltas(s, goal);
                let (delta_min, delta_max) = (delta_x.min(delta_y), delta_x.max(delta_y));
                match problem.connectivity {
                    Connectivity::Four => (delta_x + delta_y) * ORTHOGONAL_COST,
                    Connectivity::Eight => {
                        delta_min * DIAGONAL_COST + (delta_max - delta_min) * ORTHOGONAL_COST
                    }
                }
            })
            .min()
            .unwrap_or(0)
    }
}
