//! Command-line arguments and their mapping onto [`SimConfig`].

use clap::{Parser, ValueEnum};
use sway_core::Coord;
use sway_engine::{Clock, InitConfig, SimConfig, StrategyKind};
use sway_propagators::{NeighbourRule, VisitOrder};
use sway_space::EdgeBehavior;

/// Parse `ROW,COL` into a coordinate.
pub fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column {col:?}: {e}"))?;
    Ok((row, col))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EdgeArg {
    Absorb,
    Wrap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClockArg {
    Fixed,
    Elapsed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Neighbour,
    FieldDecay,
    Gullible,
    MonteCarlo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    Decrement,
    Replace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Sequential,
    Accumulated,
}

/// Sway influence-diffusion simulator
#[derive(Parser, Debug)]
#[command(name = "sway")]
#[command(about = "Simulate influence spreading from seed agents across a square lattice", long_about = None)]
pub struct Args {
    /// Grid side length
    #[arg(short = 'n', long, default_value = "100")]
    pub side: usize,

    /// Boundary handling
    #[arg(long, value_enum, default_value = "absorb")]
    pub edge: EdgeArg,

    /// Seed source as ROW,COL (repeatable; default: grid centre)
    #[arg(long = "source", value_parser = parse_coord)]
    pub sources: Vec<Coord>,

    /// Fraction of cells made gullible
    #[arg(short, long, default_value = "0.1")]
    pub coverage: f64,

    /// Influence strength at t = 0
    #[arg(long, default_value = "1.0")]
    pub strength: f64,

    /// Decay time constant
    #[arg(long, default_value = "1.0")]
    pub decay: f64,

    /// Source fraction at which the run stops
    #[arg(long, default_value = "0.9")]
    pub stop_fraction: f64,

    /// Step cap
    #[arg(long, default_value = "10000")]
    pub max_steps: u64,

    /// How t advances between steps
    #[arg(long, value_enum, default_value = "fixed")]
    pub clock: ClockArg,

    /// The t used by the fixed clock
    #[arg(long, default_value = "1")]
    pub time_index: u64,

    /// RNG seed
    #[arg(short, long, default_value = "0")]
    pub seed: u64,

    /// Update strategy
    #[arg(long, value_enum, default_value = "neighbour")]
    pub strategy: StrategyArg,

    /// Neighbour rule for the neighbour strategy
    #[arg(long, value_enum, default_value = "decrement")]
    pub rule: RuleArg,

    /// Visit order for the neighbour strategy
    #[arg(long, value_enum, default_value = "sequential")]
    pub order: OrderArg,

    /// Fixed anchor ROW,COL for the field-decay strategy
    #[arg(long, value_parser = parse_coord)]
    pub anchor: Option<Coord>,

    /// Consecutive rejected draws before the initializer mirrors values
    #[arg(long, default_value = "1000")]
    pub fallback_after: u64,

    /// Initializer cell picks allowed per cell
    #[arg(long, default_value = "1000")]
    pub attempts_per_cell: u64,

    /// Write CSV snapshots into this directory
    #[arg(short, long)]
    pub out: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Build the run configuration. Validation is left to the engine.
    pub fn to_config(&self) -> SimConfig {
        let sources = if self.sources.is_empty() {
            vec![(self.side / 2, self.side / 2)]
        } else {
            self.sources.clone()
        };
        let strategy = match self.strategy {
            StrategyArg::Neighbour => StrategyKind::Neighbour {
                rule: match self.rule {
                    RuleArg::Decrement => NeighbourRule::Decrement,
                    RuleArg::Replace => NeighbourRule::ReplaceFromSource,
                },
                order: match self.order {
                    OrderArg::Sequential => VisitOrder::Sequential,
                    OrderArg::Accumulated => VisitOrder::Accumulated,
                },
            },
            StrategyArg::FieldDecay => StrategyKind::FieldDecay {
                anchor: self.anchor,
            },
            StrategyArg::Gullible => StrategyKind::Gullible,
            StrategyArg::MonteCarlo => StrategyKind::MonteCarlo,
        };

        SimConfig {
            side: self.side,
            edge: match self.edge {
                EdgeArg::Absorb => EdgeBehavior::Absorb,
                EdgeArg::Wrap => EdgeBehavior::Wrap,
            },
            sources,
            coverage: self.coverage,
            source_strength: self.strength,
            decay_constant: self.decay,
            stop_fraction: self.stop_fraction,
            max_steps: self.max_steps,
            clock: match self.clock {
                ClockArg::Fixed => Clock::Fixed(self.time_index),
                ClockArg::Elapsed => Clock::Elapsed,
            },
            seed: self.seed,
            strategy,
            init: InitConfig {
                fallback_after: self.fallback_after,
                attempts_per_cell: self.attempts_per_cell,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sway").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_engine_defaults() {
        let config = parse(&[]).to_config();
        let expected = SimConfig::default();
        assert_eq!(config, expected);
    }

    #[test]
    fn repeated_sources() {
        let config = parse(&["-n", "10", "--source", "1,2", "--source", "7, 8"]).to_config();
        assert_eq!(config.side, 10);
        assert_eq!(config.sources, vec![(1, 2), (7, 8)]);
    }

    #[test]
    fn default_source_is_centre() {
        assert_eq!(parse(&["-n", "11"]).to_config().sources, vec![(5, 5)]);
    }

    #[test]
    fn strategy_flags() {
        let config = parse(&["--clock", "elapsed", "--rule", "replace", "--order", "accumulated"])
            .to_config();
        assert_eq!(config.clock, Clock::Elapsed);
        assert_eq!(
            config.strategy,
            StrategyKind::Neighbour {
                rule: NeighbourRule::ReplaceFromSource,
                order: VisitOrder::Accumulated,
            }
        );

        let config = parse(&["--strategy", "field-decay", "--anchor", "3,4"]).to_config();
        assert_eq!(
            config.strategy,
            StrategyKind::FieldDecay {
                anchor: Some((3, 4))
            }
        );
    }

    #[test]
    fn bad_coord_rejected() {
        assert!(parse_coord("3").is_err());
        assert!(parse_coord("a,1").is_err());
        assert_eq!(parse_coord(" 2 ,9"), Ok((2, 9)));
        assert!(Args::try_parse_from(["sway", "--source", "1;2"]).is_err());
    }
}
