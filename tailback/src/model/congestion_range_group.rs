use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CongestionLevel {
    Low,
    Moderate,
    Heavy,
    Severe,
}

/// partitions the 0-100 congestion numeric scale into the four levels shown
/// to the user.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CongestionRangeGroup {
    pub low: RangeInclusive<u8>,
    pub moderate: RangeInclusive<u8>,
    pub heavy: RangeInclusive<u8>,
    pub severe: RangeInclusive<u8>,
}

impl Default for CongestionRangeGroup {
    fn default() -> Self {
        Self {
            low: 0..=39,
            moderate: 40..=59,
            heavy: 60..=79,
            severe: 80..=100,
        }
    }
}

impl CongestionRangeGroup {
    pub fn level(&self, congestion: u8) -> Option<CongestionLevel> {
        if self.low.contains(&congestion) {
            Some(CongestionLevel::Low)
        } else if self.moderate.contains(&congestion) {
            Some(CongestionLevel::Moderate)
        } else if self.heavy.contains(&congestion) {
            Some(CongestionLevel::Heavy)
        } else if self.severe.contains(&congestion) {
            Some(CongestionLevel::Severe)
        } else {
            None
        }
    }

    /// the value a segment takes when live speed shows traffic flowing freely:
    /// severe drops to the top of moderate, heavy and moderate drop to the
    /// bottom of low, low is kept.
    pub fn decreased(&self, congestion: u8) -> u8 {
        match self.level(congestion) {
            Some(CongestionLevel::Severe) => *self.moderate.end(),
            Some(CongestionLevel::Heavy) | Some(CongestionLevel::Moderate) => *self.low.start(),
            Some(CongestionLevel::Low) | None => congestion,
        }
    }

    /// ranges must be ascending, contiguous and cover 0 through 100.
    pub fn validate(&self) -> Result<(), String> {
        let ranges = [&self.low, &self.moderate, &self.heavy, &self.severe];
        if *self.low.start() != 0 {
            return Err(format!("low range must start at 0, found {}", self.low.start()));
        }
        if *self.severe.end() != 100 {
            return Err(format!(
                "severe range must end at 100, found {}",
                self.severe.end()
            ));
        }
        for range in ranges.iter() {
            if range.start() > range.end() {
                return Err(format!(
                    "empty congestion range {}..={}",
                    range.start(),
                    range.end()
                ));
            }
        }
        for pair in ranges.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if u16::from(*prev.end()) + 1 != u16::from(*next.start()) {
                return Err(format!(
                    "congestion ranges {}..={} and {}..={} are not contiguous",
                    prev.start(),
                    prev.end(),
                    next.start(),
                    next.end()
                ));
            }
        }
        Ok(())
    }
}
