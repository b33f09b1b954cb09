//! Test utilities and scripted randomness for Sway development.
//!
//! Provides a [`ScriptedRandom`] implementation of [`RandomSource`] that
//! replays fixed draw sequences, plus small lattice fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{filled_lattice, lattice_from_rows};

use sway_core::RandomSource;

/// Scripted implementation of [`RandomSource`].
///
/// Each draw kind has its own queue. Queued values are returned in order;
/// once a queue is exhausted the matching fallback is returned forever.
/// Index draws are reduced modulo the requested length so a script never
/// produces an out-of-range index.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    triangular: Vec<f64>,
    uniform: Vec<f64>,
    index: Vec<usize>,
    t_pos: usize,
    u_pos: usize,
    i_pos: usize,
    fallback_triangular: f64,
    fallback_uniform: f64,
    fallback_index: usize,
}

impl ScriptedRandom {
    /// Every continuous draw returns `value`; every index draw returns 0.
    pub fn constant(value: f64) -> Self {
        Self {
            triangular: Vec::new(),
            uniform: Vec::new(),
            index: Vec::new(),
            t_pos: 0,
            u_pos: 0,
            i_pos: 0,
            fallback_triangular: value,
            fallback_uniform: value,
            fallback_index: 0,
        }
    }

    /// Queue triangular draws.
    pub fn with_triangular(mut self, values: Vec<f64>) -> Self {
        self.triangular = values;
        self
    }

    /// Queue uniform draws.
    pub fn with_uniform(mut self, values: Vec<f64>) -> Self {
        self.uniform = values;
        self
    }

    /// Queue index draws.
    pub fn with_index(mut self, values: Vec<usize>) -> Self {
        self.index = values;
        self
    }

    /// Set the index returned once the index queue runs dry.
    pub fn with_fallback_index(mut self, value: usize) -> Self {
        self.fallback_index = value;
        self
    }

    /// Number of triangular draws made so far.
    pub fn triangular_draws(&self) -> usize {
        self.t_pos
    }

    /// Number of uniform draws made so far.
    pub fn uniform_draws(&self) -> usize {
        self.u_pos
    }

    /// Number of index draws made so far.
    pub fn index_draws(&self) -> usize {
        self.i_pos
    }
}

impl RandomSource for ScriptedRandom {
    fn triangular(&mut self) -> f64 {
        let v = self
            .triangular
            .get(self.t_pos)
            .copied()
            .unwrap_or(self.fallback_triangular);
        self.t_pos += 1;
        v
    }

    fn uniform(&mut self) -> f64 {
        let v = self
            .uniform
            .get(self.u_pos)
            .copied()
            .unwrap_or(self.fallback_uniform);
        self.u_pos += 1;
        v
    }

    fn index(&mut self, len: usize) -> usize {
        let v = self
            .index
            .get(self.i_pos)
            .copied()
            .unwrap_or(self.fallback_index);
        self.i_pos += 1;
        v % len
    }
}
