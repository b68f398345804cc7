//! The three LUQO performance axes and a per-dimension value triple.

/// One of the three performance dimensions tracked per worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    /// Learning / skill uptake.
    Lu,
    /// Quality / contribution.
    Q,
    /// Originality / innovation.
    O,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 3] = [Dimension::Lu, Dimension::Q, Dimension::O];

    /// Stable short label (matches the wire spelling).
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Lu => "lu",
            Dimension::Q => "q",
            Dimension::O => "o",
        }
    }
}

/// One `f64` per dimension.
///
/// Used for every per-dimension quantity the weight engine produces:
/// weights, raw values, correlations, and growth room.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionTriple {
    pub lu: f64,
    pub q: f64,
    pub o: f64,
}

impl DimensionTriple {
    /// All-zero triple.
    pub fn zero() -> Self {
        Self::splat(0.0)
    }

    /// The uniform probability triple (1/3 each).
    pub fn uniform() -> Self {
        Self::splat(1.0 / 3.0)
    }

    /// Same value in every slot.
    pub fn splat(x: f64) -> Self {
        Self { lu: x, q: x, o: x }
    }

    pub fn get(&self, d: Dimension) -> f64 {
        match d {
            Dimension::Lu => self.lu,
            Dimension::Q => self.q,
            Dimension::O => self.o,
        }
    }

    pub fn set(&mut self, d: Dimension, x: f64) {
        match d {
            Dimension::Lu => self.lu = x,
            Dimension::Q => self.q = x,
            Dimension::O => self.o = x,
        }
    }

    /// Values in canonical `[lu, q, o]` order.
    pub fn to_array(self) -> [f64; 3] {
        [self.lu, self.q, self.o]
    }

    /// Build from canonical `[lu, q, o]` order.
    pub fn from_array(a: [f64; 3]) -> Self {
        Self {
            lu: a[0],
            q: a[1],
            o: a[2],
        }
    }

    pub fn sum(self) -> f64 {
        self.lu + self.q + self.o
    }
}
