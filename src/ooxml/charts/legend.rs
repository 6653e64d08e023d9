//! Chart legend models.

use crate::ooxml::charts::spec::LegendSpec;
use crate::ooxml::charts::types::LegendPosition;

/// Chart legend configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legend {
    /// Legend position
    pub position: LegendPosition,
    /// Overlay on chart area
    pub overlay: bool,
}

impl Legend {
    /// Create a new legend that does not overlay the plot area.
    #[inline]
    pub fn new(position: LegendPosition) -> Self {
        Self {
            position,
            overlay: false,
        }
    }

    /// The legend a chart asks for; `None` when its position is `none`.
    pub fn from_spec(spec: &LegendSpec) -> Option<Self> {
        match spec.position {
            LegendPosition::None => None,
            position => Some(Self::new(position)),
        }
    }
}

impl Default for Legend {
    #[inline]
    fn default() -> Self {
        Self::new(LegendPosition::default())
    }
}
