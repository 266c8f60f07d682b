//! Tone separation constraints between two roles.

use crate::dynamic_color::DynamicColor;

/// Which side of a [`ToneDeltaPair`] ends up lighter or darker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TonePolarity {
    /// Role A is darker than role B, in both light and dark mode.
    Darker,
    /// Role A is lighter than role B, in both light and dark mode.
    Lighter,
    /// Role A is closer to the surface than role B. In light mode that makes
    /// A lighter; in dark mode it makes A darker.
    Nearer,
    /// Role A is further from the surface than role B.
    Farther,
    /// Role A is darker in light mode and lighter in dark mode.
    RelativeDarker,
    /// Role A is lighter in light mode and darker in dark mode.
    RelativeLighter,
}

/// How strictly the delta is held by the current rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeltaConstraint {
    /// The tones differ by exactly the delta.
    #[default]
    Exact,
    /// The tones differ by at most the delta.
    Nearer,
    /// The tones differ by at least the delta.
    Farther,
}

/// Two roles whose tones must stay `delta` apart.
///
/// The older rule set reconciles a pair with `stay_together`; the newer one
/// with `constraint`. Each constructor fills in the field the other rule set
/// uses with its default.
#[derive(Debug, Clone)]
pub struct ToneDeltaPair {
    role_a: DynamicColor,
    role_b: DynamicColor,
    delta: f64,
    polarity: TonePolarity,
    stay_together: bool,
    constraint: DeltaConstraint,
}

impl ToneDeltaPair {
    /// A pair for the older rule set.
    ///
    /// `stay_together` moves both roles out of the awkward 50..60 tone band
    /// when only the farther one lands in it.
    pub fn new(
        role_a: DynamicColor,
        role_b: DynamicColor,
        delta: f64,
        polarity: TonePolarity,
        stay_together: bool,
    ) -> Self {
        Self {
            role_a,
            role_b,
            delta,
            polarity,
            stay_together,
            constraint: DeltaConstraint::Exact,
        }
    }

    /// A pair for the newer rule set.
    pub fn with_constraint(
        role_a: DynamicColor,
        role_b: DynamicColor,
        delta: f64,
        polarity: TonePolarity,
        constraint: DeltaConstraint,
    ) -> Self {
        Self {
            role_a,
            role_b,
            delta,
            polarity,
            stay_together: true,
            constraint,
        }
    }

    pub fn role_a(&self) -> &DynamicColor {
        &self.role_a
    }

    pub fn role_b(&self) -> &DynamicColor {
        &self.role_b
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn polarity(&self) -> TonePolarity {
        self.polarity
    }

    pub fn stay_together(&self) -> bool {
        self.stay_together
    }

    pub fn constraint(&self) -> DeltaConstraint {
        self.constraint
    }
}
