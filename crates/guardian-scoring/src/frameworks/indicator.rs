use guardian_core::text::count_present;

/// A keyword indicator scoring one framework dimension in [0, 1]:
/// `primary_hits·primary_weight + secondary_hits·secondary_weight
///  − negative_hits·negative_weight + baseline`, clamped.
#[derive(Debug, Clone, Copy)]
pub struct Indicator {
    pub primary: &'static [&'static str],
    pub primary_weight: f64,
    pub secondary: &'static [&'static str],
    pub secondary_weight: f64,
    pub negative: &'static [&'static str],
    pub negative_weight: f64,
    pub baseline: f64,
}

/// Score of one indicator against one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorScore {
    pub score: f64,
    /// Primary plus secondary terms found.
    pub hits: usize,
}

impl Indicator {
    pub const fn new(
        primary: &'static [&'static str],
        primary_weight: f64,
        secondary: &'static [&'static str],
        secondary_weight: f64,
        baseline: f64,
    ) -> Self {
        Self {
            primary,
            primary_weight,
            secondary,
            secondary_weight,
            negative: &[],
            negative_weight: 0.0,
            baseline,
        }
    }

    pub const fn with_negative(mut self, negative: &'static [&'static str], weight: f64) -> Self {
        self.negative = negative;
        self.negative_weight = weight;
        self
    }

    /// `text` must already be lowercased.
    pub fn evaluate(&self, text: &str) -> IndicatorScore {
        let p = count_present(text, self.primary);
        let s = count_present(text, self.secondary);
        let n = count_present(text, self.negative);
        let raw = p as f64 * self.primary_weight + s as f64 * self.secondary_weight
            - n as f64 * self.negative_weight
            + self.baseline;
        IndicatorScore {
            score: raw.clamp(0.0, 1.0),
            hits: p + s,
        }
    }
}

/// A named, weighted dimension of a framework.
#[derive(Debug, Clone, Copy)]
pub struct Dimension {
    pub name: &'static str,
    pub weight: f64,
    pub indicator: Indicator,
}
