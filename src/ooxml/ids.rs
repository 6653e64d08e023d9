//! Derived ID allocation.
//!
//! No counter is stored anywhere. Every ID is computed from the size of the
//! collection it numbers at the moment it is needed, so a deletion makes the
//! freed number available again on the next allocation.

use crate::ooxml::opc::packuri;

/// Next 1-based ID after `existing` items.
#[inline]
pub fn next_id(existing: usize) -> u32 {
    u32::try_from(existing).unwrap_or(u32::MAX).saturating_add(1)
}

/// Index for the next `xl/charts/chartN.xml` part.
pub fn next_chart_index<'a>(part_names: impl IntoIterator<Item = &'a str>) -> u32 {
    next_id(count_numbered(part_names, "xl/charts/chart", ".xml"))
}

/// Index for the next `xl/drawings/drawingN.xml` part.
///
/// `part_names` must include drawings that are only resident in memory and
/// have not been flushed to the package yet; duplicates are counted once.
pub fn next_drawing_index<'a>(part_names: impl IntoIterator<Item = &'a str>) -> u32 {
    next_id(count_numbered(part_names, "xl/drawings/drawing", ".xml"))
}

/// Index for the next `xl/media/imageN.*` part.
pub fn next_image_index<'a>(part_names: impl IntoIterator<Item = &'a str>) -> u32 {
    next_id(count_numbered(part_names, "xl/media/image", ""))
}

/// Index for the next `xl/worksheets/sheetN.xml` part.
pub fn next_worksheet_index<'a>(part_names: impl IntoIterator<Item = &'a str>) -> u32 {
    next_id(count_numbered(part_names, "xl/worksheets/sheet", ".xml"))
}

/// Index for the next `xl/chartsheets/sheetN.xml` part.
pub fn next_chartsheet_index<'a>(part_names: impl IntoIterator<Item = &'a str>) -> u32 {
    next_id(count_numbered(part_names, "xl/chartsheets/sheet", ".xml"))
}

/// Number of the next relationship ID in a `.rels` part holding `existing` entries.
#[inline]
pub fn next_rel_id(existing: usize) -> u32 {
    next_id(existing)
}

/// `cNvPr` ID for the next graphic frame in a drawing holding `anchors` anchors.
///
/// ID 1 is never handed out, so the first frame gets 2.
#[inline]
pub fn next_frame_id(anchors: usize) -> u32 {
    next_id(anchors).saturating_add(1)
}

fn count_numbered<'a>(
    part_names: impl IntoIterator<Item = &'a str>,
    prefix: &str,
    suffix: &str,
) -> usize {
    let mut seen: Vec<&str> = part_names
        .into_iter()
        .filter(|name| {
            name.strip_prefix(prefix)
                .and_then(|rest| {
                    if suffix.is_empty() {
                        Some(rest)
                    } else {
                        rest.strip_suffix(suffix)
                    }
                })
                .is_some()
                && packuri::index_of(name).is_some()
        })
        .collect();
    seen.sort_unstable();
    seen.dedup();
    seen.len()
}
