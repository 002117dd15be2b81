//! Canonical size bins
//!
//! Sixteen numeric chest-size bins plus the `Min`/`Max` sentinel bins that hold
//! user-adjustable slack rather than body sizes. Display order is always the
//! numeric bins ascending, then `Min`, then `Max`.

use serde::{Deserialize, Serialize};

/// One of the 18 canonical size bins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeRange {
    S50_53,
    S54_57,
    S58_61,
    S62_65,
    S66_69,
    S70_73,
    S74_79,
    S80_84,
    S85_89,
    S90_94,
    S95_99,
    S100_104,
    S105_109,
    S110_114,
    S115_120,
    S121_129,
    Min,
    Max,
}

/// Size bin graded charts are authored against
pub const BASE_SIZE: SizeRange = SizeRange::S74_79;

impl SizeRange {
    /// All bins in canonical display order
    pub const ALL: [SizeRange; 18] = [
        SizeRange::S50_53,
        SizeRange::S54_57,
        SizeRange::S58_61,
        SizeRange::S62_65,
        SizeRange::S66_69,
        SizeRange::S70_73,
        SizeRange::S74_79,
        SizeRange::S80_84,
        SizeRange::S85_89,
        SizeRange::S90_94,
        SizeRange::S95_99,
        SizeRange::S100_104,
        SizeRange::S105_109,
        SizeRange::S110_114,
        SizeRange::S115_120,
        SizeRange::S121_129,
        SizeRange::Min,
        SizeRange::Max,
    ];

    /// Display label ("74-79", "min", "max")
    pub fn label(&self) -> &'static str {
        match self {
            SizeRange::S50_53 => "50-53",
            SizeRange::S54_57 => "54-57",
            SizeRange::S58_61 => "58-61",
            SizeRange::S62_65 => "62-65",
            SizeRange::S66_69 => "66-69",
            SizeRange::S70_73 => "70-73",
            SizeRange::S74_79 => "74-79",
            SizeRange::S80_84 => "80-84",
            SizeRange::S85_89 => "85-89",
            SizeRange::S90_94 => "90-94",
            SizeRange::S95_99 => "95-99",
            SizeRange::S100_104 => "100-104",
            SizeRange::S105_109 => "105-109",
            SizeRange::S110_114 => "110-114",
            SizeRange::S115_120 => "115-120",
            SizeRange::S121_129 => "121-129",
            SizeRange::Min => "min",
            SizeRange::Max => "max",
        }
    }

    /// Parse a display label back into a bin
    pub fn from_label(label: &str) -> Option<SizeRange> {
        SizeRange::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Whether this is one of the `min`/`max` slack bins
    pub fn is_sentinel(&self) -> bool {
        matches!(self, SizeRange::Min | SizeRange::Max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(SizeRange::ALL.len(), 18);
        assert_eq!(SizeRange::ALL[0], SizeRange::S50_53);
        assert_eq!(SizeRange::ALL[15], SizeRange::S121_129);
        assert_eq!(SizeRange::ALL[16], SizeRange::Min);
        assert_eq!(SizeRange::ALL[17], SizeRange::Max);
    }

    #[test]
    fn test_label_round_trip() {
        for size in SizeRange::ALL {
            assert_eq!(SizeRange::from_label(size.label()), Some(size));
        }
        assert_eq!(SizeRange::from_label("74-79"), Some(SizeRange::S74_79));
        assert_eq!(SizeRange::from_label("banana"), None);
    }

    #[test]
    fn test_sentinels() {
        assert!(SizeRange::Min.is_sentinel());
        assert!(SizeRange::Max.is_sentinel());
        assert!(!BASE_SIZE.is_sentinel());
    }
}
