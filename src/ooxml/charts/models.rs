//! Chart data models.
//!
//! Building blocks shared by series, axes and the chart space: data source
//! references, number formats, and the DrawingML shape and text properties
//! the compiler emits.

/// Width of axis lines, gridlines and the chart-space border.
pub const THIN_LINE_EMU: i64 = 9525;

/// Outline width of scatter markers.
pub const MARKER_LINE_EMU: i64 = 9252;

/// A reference to a data source (cell range formula).
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Text cells (`c:strRef`)
    StrRef(String),
    /// Numeric cells (`c:numRef`)
    NumRef(String),
}

impl DataSource {
    #[inline]
    pub fn str_ref(formula: impl Into<String>) -> Self {
        Self::StrRef(formula.into())
    }

    #[inline]
    pub fn num_ref(formula: impl Into<String>) -> Self {
        Self::NumRef(formula.into())
    }

    /// Formula reference (e.g., "Sheet1!$A$1:$A$10")
    pub fn formula(&self) -> &str {
        match self {
            Self::StrRef(f) | Self::NumRef(f) => f,
        }
    }

    /// Returns the XML element name for this reference kind.
    #[inline]
    pub const fn xml_element_name(&self) -> &'static str {
        match self {
            Self::StrRef(_) => "strRef",
            Self::NumRef(_) => "numRef",
        }
    }
}

/// Number format specification.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    /// Format code (e.g., "General", "0%")
    pub format_code: String,
    /// Whether the format is linked to source data
    pub source_linked: bool,
}

impl NumberFormat {
    /// Create a new number format linked to the source data.
    #[inline]
    pub fn new(format_code: impl Into<String>) -> Self {
        Self {
            format_code: format_code.into(),
            source_linked: true,
        }
    }

    /// Create a General format.
    #[inline]
    pub fn general() -> Self {
        Self::new("General")
    }
}

impl Default for NumberFormat {
    #[inline]
    fn default() -> Self {
        Self::general()
    }
}

/// Theme color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeColor {
    /// `accent1` .. `accent6`
    Accent(u32),
    Background1,
    Light1,
    Text1,
}

impl SchemeColor {
    /// Returns the XML value for this color, e.g. "accent3".
    pub fn xml_value(&self) -> String {
        match self {
            Self::Accent(n) => format!("accent{}", n),
            Self::Background1 => "bg1".to_string(),
            Self::Light1 => "lt1".to_string(),
            Self::Text1 => "tx1".to_string(),
        }
    }

    /// Accent color for the zero-based index `i`, if the theme has one.
    #[inline]
    pub fn accent_for(i: u32) -> Option<Self> {
        (i < 6).then_some(Self::Accent(i + 1))
    }
}

/// A scheme color with optional luminance modulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRef {
    pub color: SchemeColor,
    pub lum_mod: Option<i32>,
    pub lum_off: Option<i32>,
}

impl ColorRef {
    #[inline]
    pub const fn new(color: SchemeColor) -> Self {
        Self {
            color,
            lum_mod: None,
            lum_off: None,
        }
    }

    /// Text color lightened by a luminance modulation/offset pair.
    #[inline]
    pub const fn text_tint(lum_mod: i32, lum_off: i32) -> Self {
        Self {
            color: SchemeColor::Text1,
            lum_mod: Some(lum_mod),
            lum_off: Some(lum_off),
        }
    }
}

/// Fill of a shape or line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Solid(ColorRef),
    NoFill,
}

/// Line (`a:ln`) properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineProperties {
    /// Width in EMU
    pub width: i64,
    /// Cap type: "rnd", "sq" or "flat"
    pub cap: Option<&'static str>,
    /// Compound type, e.g. "sng"
    pub compound: Option<&'static str>,
    /// Pen alignment, e.g. "ctr"
    pub align: Option<&'static str>,
    pub fill: Option<Fill>,
}

impl LineProperties {
    #[inline]
    pub fn new(width: i64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    #[inline]
    pub fn with_cap(mut self, cap: &'static str) -> Self {
        self.cap = Some(cap);
        self
    }

    #[inline]
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Thin light-grey line used for axes, gridlines and the chart border.
    pub fn hairline() -> Self {
        Self {
            width: THIN_LINE_EMU,
            cap: Some("flat"),
            compound: Some("sng"),
            align: Some("ctr"),
            fill: Some(Fill::Solid(ColorRef::text_tint(15000, 85000))),
        }
    }
}

/// 3-D shape properties (`a:sp3d`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape3D {
    pub contour_width: i64,
    pub contour_color: ColorRef,
}

/// Shape properties (`c:spPr`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShapeProperties {
    pub fill: Option<Fill>,
    pub line: Option<LineProperties>,
    pub shape_3d: Option<Shape3D>,
}

impl ShapeProperties {
    #[inline]
    pub fn line(line: LineProperties) -> Self {
        Self {
            line: Some(line),
            ..Default::default()
        }
    }

    /// Outline-only properties of axes and gridlines.
    #[inline]
    pub fn hairline() -> Self {
        Self::line(LineProperties::hairline())
    }
}

/// Run properties written to `a:defRPr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunProperties {
    /// Font size in hundredths of a point
    pub size: u32,
    pub kern: u32,
    pub fill: Option<ColorRef>,
    /// Whether the theme minor fonts are referenced
    pub theme_fonts: bool,
}

/// Text properties of axis labels (`c:txPr`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextProperties {
    /// Rotation in 60000ths of a degree
    pub rotation: i32,
    pub run: RunProperties,
}

impl TextProperties {
    /// 9 pt grey labels with rotation left to the application.
    pub fn axis_labels() -> Self {
        Self {
            rotation: -60_000_000,
            run: RunProperties {
                size: 900,
                kern: 1200,
                fill: Some(ColorRef::text_tint(15000, 85000)),
                theme_fonts: true,
            },
        }
    }
}

/// Chart title with a literal text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub text: String,
    pub run: RunProperties,
}

impl Title {
    /// A 14 pt title in the dark theme text tint.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            run: RunProperties {
                size: 1400,
                kern: 1200,
                fill: Some(ColorRef::text_tint(65000, 35000)),
                theme_fonts: true,
            },
        }
    }
}
