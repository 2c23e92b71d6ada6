//! Access-pattern schedule.
//!
//! The active pattern is a pure function of elapsed simulation time: the
//! schedule advances every half second and repeats every two seconds. No
//! transition state is stored anywhere.

/// Seconds each pattern stays active.
pub const PATTERN_INTERVAL: f32 = 0.5;

/// Seconds for one full trip through all four patterns.
pub const CYCLE_PERIOD: f32 = 2.0;

/// The four canonical access patterns, in schedule order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessPattern {
    Sequential,
    Random,
    Block,
    Stride,
}

impl AccessPattern {
    pub const ALL: [AccessPattern; 4] = [
        AccessPattern::Sequential,
        AccessPattern::Random,
        AccessPattern::Block,
        AccessPattern::Stride,
    ];

    /// Pattern active at elapsed time `t`.
    pub fn from_time(t: f32) -> Self {
        let slot = ((t * 2.0).floor() as u64 % 4) as usize;
        Self::ALL[slot]
    }

    /// Human-readable name, published to the title label on change.
    pub fn name(self) -> &'static str {
        match self {
            AccessPattern::Sequential => "Sequential",
            AccessPattern::Random => "Random",
            AccessPattern::Block => "Block",
            AccessPattern::Stride => "Stride",
        }
    }
}
