//! Chart plot area models.
//!
//! A [`PlotAreaFragment`] is a plot area with one optional slot per chart
//! element (`barChart`, `lineChart`, ...) and one per axis kind. A builder
//! fills exactly one chart-element slot; combo charts are made by merging
//! fragments slot by slot.

use crate::ooxml::charts::axis::{CategoryAxis, SeriesAxis, ValueAxis};
use crate::ooxml::charts::series::{DataLabels, Series};
use crate::ooxml::charts::types::{
    BarDirection, BarShape, ChartElement, Grouping, OfPieType, RadarStyle, ScatterStyle,
};
use crate::ooxml::error::{OoxmlError, Result};
use smallvec::SmallVec;
use tracing::trace;

/// A group of series with the same chart type (one chart element).
///
/// Only the fields meaningful for `element` are populated; the writer emits
/// whatever is set in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGroup {
    pub element: ChartElement,
    pub bar_direction: Option<BarDirection>,
    pub of_pie_type: Option<OfPieType>,
    pub radar_style: Option<RadarStyle>,
    pub scatter_style: Option<ScatterStyle>,
    pub wireframe: Option<bool>,
    pub grouping: Option<Grouping>,
    /// Vary colors by point
    pub vary_colors: Option<bool>,
    /// Series in this group
    pub series: Vec<Series>,
    pub data_labels: Option<DataLabels>,
    /// Doughnut hole size in percent
    pub hole_size: Option<u8>,
    pub overlap: Option<i32>,
    /// Empty `c:serLines` marker of pie-of-pie charts
    pub series_lines: bool,
    pub shape: Option<BarShape>,
    pub smooth: Option<bool>,
    /// IDs of the axes this group is plotted on
    pub axis_ids: SmallVec<[u32; 3]>,
}

impl TypeGroup {
    /// Create an empty group for a chart element.
    #[inline]
    pub fn new(element: ChartElement) -> Self {
        Self {
            element,
            bar_direction: None,
            of_pie_type: None,
            radar_style: None,
            scatter_style: None,
            wireframe: None,
            grouping: None,
            vary_colors: None,
            series: Vec::new(),
            data_labels: None,
            hole_size: None,
            overlap: None,
            series_lines: false,
            shape: None,
            smooth: None,
            axis_ids: SmallVec::new(),
        }
    }
}

/// A partial plot area.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotAreaFragment {
    /// Chart-element slots, indexed by [`ChartElement::index`]
    groups: [Option<TypeGroup>; ChartElement::ALL.len()],
    pub category_axis: Option<CategoryAxis>,
    pub value_axis: Option<ValueAxis>,
    pub series_axis: Option<SeriesAxis>,
}

impl PlotAreaFragment {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the slot of `group.element`.
    pub fn set_group(&mut self, group: TypeGroup) -> Result<()> {
        let slot = &mut self.groups[group.element.index()];
        if slot.is_some() {
            return Err(OoxmlError::ComboCollision {
                slot: group.element.xml_element_name(),
            });
        }
        *slot = Some(group);
        Ok(())
    }

    #[inline]
    pub fn group(&self, element: ChartElement) -> Option<&TypeGroup> {
        self.groups[element.index()].as_ref()
    }

    /// Populated chart-element groups, in element order.
    pub fn groups(&self) -> impl Iterator<Item = &TypeGroup> {
        self.groups.iter().flatten()
    }

    /// Total number of series across all chart elements.
    pub fn series_count(&self) -> usize {
        self.groups().map(|group| group.series.len()).sum()
    }

    /// Whether no slot is populated at all.
    pub fn is_empty(&self) -> bool {
        self.groups().next().is_none()
            && self.category_axis.is_none()
            && self.value_axis.is_none()
            && self.series_axis.is_none()
    }

    /// Merge `other` into this fragment.
    ///
    /// A slot is only ever written when it is empty. A chart-element slot that
    /// is populated on both sides is a collision unless both hold identical
    /// content. An axis slot populated on both sides is shared when both axes
    /// carry the same axis ID (this fragment's settings are kept) and is a
    /// collision otherwise. Nothing is modified when an error is returned.
    pub fn merge_from(&mut self, other: PlotAreaFragment) -> Result<()> {
        for (mine, theirs) in self.groups.iter().zip(other.groups.iter()) {
            if let (Some(mine), Some(theirs)) = (mine, theirs) {
                if mine != theirs {
                    return Err(OoxmlError::ComboCollision {
                        slot: mine.element.xml_element_name(),
                    });
                }
            }
        }
        check_axis("catAx", &self.category_axis, &other.category_axis, |ax| ax.common.axis_id)?;
        check_axis("valAx", &self.value_axis, &other.value_axis, |ax| ax.common.axis_id)?;
        check_axis("serAx", &self.series_axis, &other.series_axis, |ax| ax.common.axis_id)?;

        let PlotAreaFragment {
            groups,
            category_axis,
            value_axis,
            series_axis,
        } = other;
        for (slot, group) in self.groups.iter_mut().zip(groups) {
            if slot.is_none() {
                if let Some(group) = group {
                    trace!(element = %group.element, series = group.series.len(), "slot merged");
                    *slot = Some(group);
                }
            }
        }
        fill_empty(&mut self.category_axis, category_axis);
        fill_empty(&mut self.value_axis, value_axis);
        fill_empty(&mut self.series_axis, series_axis);
        Ok(())
    }

    /// Merge a primary fragment with its overlays, in order.
    pub fn merged(
        primary: PlotAreaFragment,
        overlays: impl IntoIterator<Item = PlotAreaFragment>,
    ) -> Result<Self> {
        let mut merged = primary;
        for overlay in overlays {
            merged.merge_from(overlay)?;
        }
        Ok(merged)
    }
}

fn check_axis<A>(
    slot: &'static str,
    mine: &Option<A>,
    theirs: &Option<A>,
    axis_id: impl Fn(&A) -> u32,
) -> Result<()> {
    match (mine, theirs) {
        (Some(mine), Some(theirs)) if axis_id(mine) != axis_id(theirs) => {
            Err(OoxmlError::ComboCollision { slot })
        },
        _ => Ok(()),
    }
}

#[inline]
fn fill_empty<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}
