//! Travel directions on the line.

use std::fmt;

use super::ScheduleRecord;

/// One of the two directions trains run in.
///
/// Display labels are fixed and do not come from the upstream feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards Lebak Bulus.
    LebakBulus,
    /// Towards Bundaran HI.
    BundaranHi,
}

impl Direction {
    /// Both directions, in response order.
    pub const ALL: [Direction; 2] = [Direction::LebakBulus, Direction::BundaranHi];

    /// Terminus name shown to riders.
    pub fn label(self) -> &'static str {
        match self {
            Direction::LebakBulus => "Stasiun Lebak Bulus Grab",
            Direction::BundaranHi => "Stasiun Bundaran Hi Bank DKI",
        }
    }

    /// The raw time list for this direction.
    pub fn times(self, record: &ScheduleRecord) -> &str {
        match self {
            Direction::LebakBulus => &record.lebak_bulus_times,
            Direction::BundaranHi => &record.bundaran_hi_times,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
