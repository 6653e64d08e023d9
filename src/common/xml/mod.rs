//! XML text helpers shared by the chart and drawing writers.

mod escape;

pub use escape::{escape_xml, strict_to_transitional, unescape_xml};
