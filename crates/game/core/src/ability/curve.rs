//! Per-level bonus curves.

/// Amount an enhancer grants at a given ability level.
///
/// Level 0 (untrained) and levels past the end of a table grant nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmountCurve {
    /// Grants nothing at any level.
    #[default]
    Zero,

    /// `level * n`.
    PerLevel(i32),

    /// Explicit amounts; entry `i` is the amount at level `i + 1`.
    Table(Vec<i32>),
}

impl AmountCurve {
    /// Amount at `level`.
    pub fn amount_for_level(&self, level: u8) -> i32 {
        if level == 0 {
            return 0;
        }

        match self {
            Self::Zero => 0,
            Self::PerLevel(step) => step * i32::from(level),
            Self::Table(amounts) => amounts.get(usize::from(level) - 1).copied().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_one_based_and_bounded() {
        let curve = AmountCurve::Table(vec![3, 6, 9]);
        assert_eq!(curve.amount_for_level(0), 0);
        assert_eq!(curve.amount_for_level(1), 3);
        assert_eq!(curve.amount_for_level(3), 9);
        assert_eq!(curve.amount_for_level(4), 0);
    }

    #[test]
    fn per_level_scales_linearly() {
        let curve = AmountCurve::PerLevel(4);
        assert_eq!(curve.amount_for_level(1), 4);
        assert_eq!(curve.amount_for_level(5), 20);
    }
}
