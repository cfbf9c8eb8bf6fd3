//! Seed tokens: compact, copy-pasteable board snapshots.
//!
//! A token is `base64("{rows}x{cols}&{runs}")` where `runs` is the
//! `.`-joined list of run lengths of equal life values in row-major order.
//! Runs alternate dead/alive starting with dead, unless the list starts
//! with the marker `A`, in which case the first run is alive. A trailing
//! dead run is never written; cells not covered by any run stay dead.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::debug;

use super::error::{Result, SeedError};
use super::{Coord, GridState};

const ALIVE_MARKER: &str = "A";

/// Parsed, validated form of a seed token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seed {
    pub rows: usize,
    pub cols: usize,
    /// Whether the first run is a live run
    pub first_alive: bool,
    pub runs: Vec<usize>,
}

impl Seed {
    /// Run-length encode a grid, walking row-major
    pub fn from_grid(grid: &GridState) -> Self {
        let (rows, cols) = grid.dimensions();
        let mut cells = grid.iter_cells().map(|(_, cell)| cell.is_alive());

        let Some(first) = cells.next() else {
            return Self { rows, cols, first_alive: false, runs: Vec::new() };
        };

        let mut runs = Vec::new();
        let mut previous = first;
        let mut run = 1;
        for alive in cells {
            if alive != previous {
                runs.push(run);
                run = 0;
            }
            previous = alive;
            run += 1;
        }
        if previous {
            runs.push(run);
        }

        Self { rows, cols, first_alive: first, runs }
    }

    /// Decode and validate a token without touching any grid
    pub fn parse(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SeedError::malformed("empty token"));
        }

        let bytes = STANDARD
            .decode(token)
            .map_err(|e| SeedError::malformed(format!("invalid base64: {e}")))?;
        let raw = String::from_utf8(bytes)
            .map_err(|_| SeedError::malformed("decoded seed is not UTF-8"))?;

        let (header, run_list) = raw
            .split_once('&')
            .ok_or_else(|| SeedError::malformed("missing '&' between size and runs"))?;
        let (rows, cols) = parse_header(header)?;
        let area = rows
            .checked_mul(cols)
            .ok_or_else(|| SeedError::malformed(format!("size {header} is too large")))?;

        let mut parts = run_list.split('.').filter(|part| !part.is_empty()).peekable();
        let first_alive = parts.next_if_eq(&ALIVE_MARKER).is_some();

        let mut covered: usize = 0;
        let runs = parts
            .map(|part| -> Result<usize> {
                let run = part
                    .parse::<usize>()
                    .ok()
                    .filter(|&run| run > 0)
                    .ok_or_else(|| SeedError::malformed(format!("invalid run length '{part}'")))?;
                covered = covered
                    .checked_add(run)
                    .filter(|&total| total <= area)
                    .ok_or_else(|| SeedError::malformed(format!("runs cover more than {rows}x{cols} cells")))?;
                Ok(run)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows, cols, first_alive, runs })
    }

    /// The undecorated `{rows}x{cols}&{runs}` text
    pub fn to_raw(&self) -> String {
        let marker = self.first_alive.then_some(ALIVE_MARKER.to_string());
        let runs: Vec<String> = marker
            .into_iter()
            .chain(self.runs.iter().map(|run| run.to_string()))
            .collect();
        format!("{}x{}&{}", self.rows, self.cols, runs.join("."))
    }

    pub fn to_token(&self) -> String {
        STANDARD.encode(self.to_raw())
    }

    /// Replace the contents of `grid` with this seed, anchored at the
    /// top-left corner. Fails without mutating if the seed does not fit or
    /// holds an empty run.
    pub fn apply_to(&self, grid: &mut GridState) -> Result<()> {
        let (rows, cols) = grid.dimensions();
        if self.rows > rows || self.cols > cols {
            return Err(SeedError::Oversize {
                seed_rows: self.rows,
                seed_cols: self.cols,
                rows,
                cols,
            });
        }
        if self.runs.contains(&0) {
            return Err(SeedError::malformed("run lengths must be positive"));
        }

        grid.clear();

        let mut runs = self.runs.iter().copied();
        let Some(mut remaining) = runs.next() else {
            return Ok(());
        };
        let mut alive = self.first_alive;

        'walk: for row in 0..self.rows {
            for col in 0..self.cols {
                if alive {
                    grid.set(Coord::new(row, col), true);
                }
                remaining -= 1;
                if remaining == 0 {
                    match runs.next() {
                        Some(run) => {
                            remaining = run;
                            alive = !alive;
                        }
                        None => break 'walk,
                    }
                }
            }
        }

        Ok(())
    }
}

fn parse_header(header: &str) -> Result<(usize, usize)> {
    let (rows, cols) = header
        .split_once('x')
        .ok_or_else(|| SeedError::malformed(format!("bad size '{header}'")))?;
    let parse = |value: &str| {
        value
            .parse::<usize>()
            .map_err(|_| SeedError::malformed(format!("bad size '{header}'")))
    };
    Ok((parse(rows)?, parse(cols)?))
}

/// Serialize `grid` to a seed token
pub fn encode(grid: &GridState) -> String {
    let seed = Seed::from_grid(grid);
    debug!("encoded seed {}", seed.to_raw());
    seed.to_token()
}

/// Load `token` into `grid`. On error the grid is left as it was.
pub fn decode(token: &str, grid: &mut GridState) -> Result<()> {
    let seed = Seed::parse(token)?;
    seed.apply_to(grid)?;
    debug!("loaded {}x{} seed with {} runs", seed.rows, seed.cols, seed.runs.len());
    Ok(())
}
