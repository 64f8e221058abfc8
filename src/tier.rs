/// Fill colors for each tier
pub const BLUE: &str = "#0000FF";
pub const RED: &str = "#FF4500";
pub const YELLOW: &str = "#FFFF00";
pub const GREEN: &str = "#26B81C";

/// Citation-count bucket used to pick a fill color.
/// A country absent from the input has no tier at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorTier {
    Low,        // <= 5
    MediumLow,  // 6..=10
    MediumHigh, // 11..=50
    High,       // > 50
}

impl ColorTier {
    /// Legend order, highest first
    pub const ALL: [ColorTier; 4] = [
        ColorTier::High,
        ColorTier::MediumHigh,
        ColorTier::MediumLow,
        ColorTier::Low,
    ];

    /// Classify a count. Total over every integer.
    pub fn from_count(count: i64) -> Self {
        if count > 50 {
            ColorTier::High
        } else if count > 10 {
            ColorTier::MediumHigh
        } else if count > 5 {
            ColorTier::MediumLow
        } else {
            ColorTier::Low
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ColorTier::High => BLUE,
            ColorTier::MediumHigh => RED,
            ColorTier::MediumLow => YELLOW,
            ColorTier::Low => GREEN,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorTier::High => "Citations > 50",
            ColorTier::MediumHigh => "10 < Citations <= 50",
            ColorTier::MediumLow => "5 < Citations <= 10",
            ColorTier::Low => "Citations <= 5",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(ColorTier::from_count(51), ColorTier::High);
        assert_eq!(ColorTier::from_count(50), ColorTier::MediumHigh);
        assert_eq!(ColorTier::from_count(11), ColorTier::MediumHigh);
        assert_eq!(ColorTier::from_count(10), ColorTier::MediumLow);
        assert_eq!(ColorTier::from_count(6), ColorTier::MediumLow);
        assert_eq!(ColorTier::from_count(5), ColorTier::Low);
        assert_eq!(ColorTier::from_count(0), ColorTier::Low);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(ColorTier::from_count(i64::MIN), ColorTier::Low);
        assert_eq!(ColorTier::from_count(-1), ColorTier::Low);
        assert_eq!(ColorTier::from_count(i64::MAX), ColorTier::High);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = ColorTier::from_count(-100);
        for c in -99..200 {
            let t = ColorTier::from_count(c);
            assert!(t >= prev);
            prev = t;
        }
    }

    #[test]
    fn test_colors() {
        assert_eq!(ColorTier::High.color(), BLUE);
        assert_eq!(ColorTier::MediumHigh.color(), RED);
        assert_eq!(ColorTier::MediumLow.color(), YELLOW);
        assert_eq!(ColorTier::Low.color(), GREEN);
    }
}
