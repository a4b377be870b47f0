//! Command-line front end for `gridpath`.
//!
//! Reads a tile map, resolves the start and goal (explicit coordinates or
//! marker tiles), runs the chosen search and reports the step count.

use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use gridpath_core::{Coord, Grid, TileMap};
use gridpath_paths::{Algorithm, Heuristic, PathSearch, PushPolicy, SearchConfig, SearchStats};

#[derive(Debug, Parser)]
#[command(
    name = "gridpath",
    version,
    about = "Shortest step count between two cells of a tile map"
)]
pub struct Cli {
    /// Map file. Reads stdin when absent or `-`.
    pub map: Option<PathBuf>,

    /// Start coordinate; defaults to the start marker's position.
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub from: Option<Coord>,

    /// Goal coordinate; defaults to the goal marker's position.
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub to: Option<Coord>,

    #[arg(long, default_value = "P")]
    pub start_marker: String,

    #[arg(long, default_value = "Q")]
    pub goal_marker: String,

    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Bfs)]
    pub algorithm: AlgorithmArg,

    /// A* distance estimate.
    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    pub heuristic: HeuristicArg,

    /// When A* pushes successors onto its frontier.
    #[arg(long, value_enum, default_value_t = PushPolicyArg::Always)]
    pub push_policy: PushPolicyArg,

    /// Print search counters after the result.
    #[arg(long)]
    pub stats: bool,

    /// More log output (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Bfs,
    Astar,
    /// Run both and check that they agree.
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeuristicArg {
    Manhattan,
    Chebyshev,
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PushPolicyArg {
    Always,
    OnImprovement,
}

impl From<HeuristicArg> for Heuristic {
    fn from(h: HeuristicArg) -> Self {
        match h {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Chebyshev => Heuristic::Chebyshev,
            HeuristicArg::Zero => Heuristic::Zero,
        }
    }
}

impl From<PushPolicyArg> for PushPolicy {
    fn from(p: PushPolicyArg) -> Self {
        match p {
            PushPolicyArg::Always => PushPolicy::Always,
            PushPolicyArg::OnImprovement => PushPolicy::OnImprovement,
        }
    }
}

impl Cli {
    /// Algorithms to run, in order.
    pub fn algorithms(&self) -> &'static [Algorithm] {
        match self.algorithm {
            AlgorithmArg::Bfs => &[Algorithm::Bfs],
            AlgorithmArg::Astar => &[Algorithm::Astar],
            AlgorithmArg::Both => &[Algorithm::Bfs, Algorithm::Astar],
        }
    }

    /// Search options for `algorithm`, taking the rest from the flags.
    pub fn search_config(&self, algorithm: Algorithm) -> SearchConfig {
        SearchConfig::new(algorithm)
            .with_heuristic(self.heuristic.into())
            .with_push_policy(self.push_policy.into())
    }
}

/// Result of a run: the step count and per-algorithm counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub start: Coord,
    pub goal: Coord,
    pub steps: usize,
    pub runs: Vec<(Algorithm, SearchStats)>,
}

impl Outcome {
    /// Text printed to stdout.
    pub fn render(&self, with_stats: bool) -> String {
        let mut out = format!("{}\n", self.steps);
        if with_stats {
            for (algorithm, s) in &self.runs {
                let _ = writeln!(
                    out,
                    "{algorithm:?}: expanded={} pushed={} stale={}",
                    s.expanded, s.pushed, s.stale
                );
            }
        }
        out
    }
}

/// Read the map from `path`, or from stdin for `None` / `-`.
pub fn load_map(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read map {}", p.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read map from stdin")?;
            Ok(raw)
        }
    }
}

fn resolve(
    tiles: &TileMap,
    given: Option<Coord>,
    marker: &str,
    what: &str,
) -> anyhow::Result<Coord> {
    if let Some(c) = given {
        return Ok(c);
    }
    tiles.find(marker).with_context(|| {
        format!("no {what} given and marker `{marker}` not on the map")
    })
}

/// Resolve endpoints in `raw` and run the selected searches.
pub fn solve(cli: &Cli, raw: &str) -> anyhow::Result<Outcome> {
    let tiles = TileMap::parse(raw);
    let start = resolve(&tiles, cli.from, &cli.start_marker, "start")?;
    let goal = resolve(&tiles, cli.to, &cli.goal_marker, "goal")?;
    let grid = Grid::from_tiles(tiles, start, goal)?;
    log::info!("searching from {start} to {goal}");

    let mut steps = None;
    let mut runs = Vec::new();
    for &algorithm in cli.algorithms() {
        let mut search = PathSearch::new(cli.search_config(algorithm));
        let n = search.search(&grid)?;
        log::info!("{algorithm:?}: {n} steps");
        if let Some(prev) = steps {
            if prev != n {
                bail!("search strategies disagree: {prev} vs {n} ({algorithm:?})");
            }
        }
        steps = Some(n);
        runs.push((algorithm, search.stats()));
    }

    let steps = steps.context("no algorithm selected")?;
    Ok(Outcome {
        start,
        goal,
        steps,
        runs,
    })
}
