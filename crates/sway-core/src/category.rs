//! Value bands, the [`classify`] rule, and per-category tallies.
//!
//! A cell's category is never stored. It is derived from the cell's
//! current scalar each time it is needed:
//!
//! | value `v`        | category                     |
//! |------------------|------------------------------|
//! | `v == 0`         | [`Category::Source`]         |
//! | `0 < v <= 0.5`   | [`Category::Gullible`]       |
//! | `0.5 < v <= 1`   | [`Category::Tolerant`]       |
//! | `v > 1`          | [`Category::Neutral`]        |
//! | `v < 0` or NaN   | [`Category::Invalid`]        |

use std::fmt;

/// The source marker. A cell is a source iff its value equals this exactly.
pub const SOURCE: f64 = 0.0;

/// Upper (inclusive) bound of the gullible band.
pub const GULLIBLE_MAX: f64 = 0.5;

/// Upper (inclusive) bound of the tolerant band.
pub const TOLERANT_MAX: f64 = 1.0;

/// Sentinel for a cell not yet visited by initialization. Classifies as
/// [`Category::Neutral`].
pub const UNASSIGNED: f64 = 10000.0;

/// Population category of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Value exactly `0.0`; emits influence to its neighbours.
    Source,
    /// Value in `(0, 0.5]`.
    Gullible,
    /// Value in `(0.5, 1]`.
    Tolerant,
    /// Value above `1`, including [`UNASSIGNED`].
    Neutral,
    /// Negative or NaN. Never survives a completed step.
    Invalid,
}

impl Category {
    /// Every category, in band order.
    pub const ALL: [Category; 5] = [
        Category::Source,
        Category::Gullible,
        Category::Tolerant,
        Category::Neutral,
        Category::Invalid,
    ];

    /// Lower-case label used in logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Gullible => "gullible",
            Self::Tolerant => "tolerant",
            Self::Neutral => "neutral",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a cell value to its category. Pure and total.
pub fn classify(value: f64) -> Category {
    if value == SOURCE {
        Category::Source
    } else if value > SOURCE && value <= GULLIBLE_MAX {
        Category::Gullible
    } else if value > GULLIBLE_MAX && value <= TOLERANT_MAX {
        Category::Tolerant
    } else if value > TOLERANT_MAX {
        Category::Neutral
    } else {
        Category::Invalid
    }
}

/// Cell counts per [`Category`] for one lattice scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    /// Cells at exactly `0.0`.
    pub source: usize,
    /// Cells in the gullible band.
    pub gullible: usize,
    /// Cells in the tolerant band.
    pub tolerant: usize,
    /// Cells above `1.0`, unassigned cells included.
    pub neutral: usize,
    /// Negative or NaN cells.
    pub invalid: usize,
}

impl CategoryCounts {
    /// Count one cell of the given category.
    pub fn record(&mut self, category: Category) {
        *self.slot_mut(category) += 1;
    }

    /// Count for a single category.
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Source => self.source,
            Category::Gullible => self.gullible,
            Category::Tolerant => self.tolerant,
            Category::Neutral => self.neutral,
            Category::Invalid => self.invalid,
        }
    }

    /// Sum over all categories. Equals the cell count of the scanned lattice.
    pub fn total(&self) -> usize {
        self.source + self.gullible + self.tolerant + self.neutral + self.invalid
    }

    /// Iterate `(category, count)` pairs in band order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    fn slot_mut(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Source => &mut self.source,
            Category::Gullible => &mut self.gullible,
            Category::Tolerant => &mut self.tolerant,
            Category::Neutral => &mut self.neutral,
            Category::Invalid => &mut self.invalid,
        }
    }
}

impl fmt::Display for CategoryCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source={} tolerant={} gullible={} neutral={} total={}",
            self.source,
            self.tolerant,
            self.gullible,
            self.neutral,
            self.total()
        )?;
        if self.invalid > 0 {
            write!(f, " invalid={}", self.invalid)?;
        }
        Ok(())
    }
}
