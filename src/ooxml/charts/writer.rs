//! Chart XML writer.
//!
//! This module serializes a [`ChartSpace`] into a chart part. Elements are
//! written in schema order; optional model fields that are unset are skipped.

use crate::common::xml::escape_xml;
use crate::ooxml::charts::axis::{AxisCommon, CategoryAxis, SeriesAxis, ValueAxis};
use crate::ooxml::charts::chart::{ChartSpace, PageMargins, WallFloor};
use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::models::{
    ColorRef, DataSource, Fill, LineProperties, RunProperties, ShapeProperties, TextProperties,
    Title,
};
use crate::ooxml::charts::plot_area::{PlotAreaFragment, TypeGroup};
use crate::ooxml::charts::series::{DataLabels, DataPoint, Marker, Series};
use crate::ooxml::charts::types::View3D;
use crate::ooxml::opc::constants::namespace;
use std::io::Write;

#[inline]
const fn bool_val(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Write a chart space to XML.
pub fn write_chart_space<W: Write>(writer: &mut W, space: &ChartSpace) -> std::io::Result<()> {
    write!(
        writer,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#
    )?;
    write!(
        writer,
        r#"<c:chartSpace xmlns:c="{}" xmlns:a="{}" xmlns:r="{}" xmlns:c16r2="{}">"#,
        namespace::DML_CHART,
        namespace::DML_MAIN,
        namespace::OFC_RELATIONSHIPS,
        namespace::DML_CHART_2015
    )?;

    write!(writer, r#"<c:date1904 val="{}"/>"#, bool_val(space.date_1904))?;
    write!(writer, r#"<c:lang val="{}"/>"#, space.lang)?;
    write!(
        writer,
        r#"<c:roundedCorners val="{}"/>"#,
        bool_val(space.rounded_corners)
    )?;

    let chart = &space.chart;
    write!(writer, "<c:chart>")?;

    if let Some(ref title) = chart.title {
        write_title(writer, title)?;
    }
    write!(
        writer,
        r#"<c:autoTitleDeleted val="{}"/>"#,
        bool_val(chart.auto_title_deleted)
    )?;

    write_view_3d(writer, &chart.view_3d)?;
    write_wall_floor(writer, "c:floor", &chart.floor)?;
    write_wall_floor(writer, "c:sideWall", &chart.side_wall)?;
    write_wall_floor(writer, "c:backWall", &chart.back_wall)?;

    write_plot_area(writer, &chart.plot_area)?;

    if let Some(ref legend) = chart.legend {
        write_legend(writer, legend)?;
    }

    write!(
        writer,
        r#"<c:plotVisOnly val="{}"/>"#,
        bool_val(chart.plot_visible_only)
    )?;
    write!(
        writer,
        r#"<c:dispBlanksAs val="{}"/>"#,
        chart.display_blanks_as.xml_value()
    )?;
    write!(
        writer,
        r#"<c:showDLblsOverMax val="{}"/>"#,
        bool_val(chart.show_data_labels_over_max)
    )?;
    write!(writer, "</c:chart>")?;

    write_shape_properties(writer, "c:spPr", &space.shape_properties)?;
    write_print_settings(writer, &space.page_margins)?;

    write!(writer, "</c:chartSpace>")?;
    Ok(())
}

fn write_title<W: Write>(writer: &mut W, title: &Title) -> std::io::Result<()> {
    write!(writer, "<c:title><c:tx><c:rich>")?;
    write!(writer, "<a:bodyPr/><a:lstStyle/>")?;
    write!(writer, "<a:p><a:pPr>")?;
    write_def_run_properties(writer, &title.run)?;
    write!(writer, "</a:pPr>")?;
    write!(
        writer,
        r#"<a:r><a:rPr lang="en-US" altLang="en-US"/><a:t>{}</a:t></a:r>"#,
        escape_xml(&title.text)
    )?;
    write!(writer, "</a:p></c:rich></c:tx>")?;
    write!(writer, r#"<c:overlay val="0"/>"#)?;

    write!(writer, "<c:txPr><a:bodyPr/><a:lstStyle/><a:p><a:pPr>")?;
    write!(
        writer,
        r#"<a:defRPr sz="{}" kern="{}" u="none" strike="noStrike"/>"#,
        title.run.size, title.run.kern
    )?;
    write!(writer, r#"</a:pPr><a:endParaRPr lang="en-US"/></a:p></c:txPr>"#)?;

    write!(writer, "</c:title>")?;
    Ok(())
}

fn write_view_3d<W: Write>(writer: &mut W, view: &View3D) -> std::io::Result<()> {
    write!(writer, "<c:view3D>")?;
    write!(writer, r#"<c:rotX val="{}"/>"#, view.rot_x)?;
    write!(writer, r#"<c:rotY val="{}"/>"#, view.rot_y)?;
    write!(writer, r#"<c:rAngAx val="{}"/>"#, view.right_angle_axes)?;
    write!(writer, r#"<c:perspective val="{}"/>"#, view.perspective)?;
    write!(writer, "</c:view3D>")?;
    Ok(())
}

fn write_wall_floor<W: Write>(writer: &mut W, tag: &str, wall: &WallFloor) -> std::io::Result<()> {
    write!(
        writer,
        r#"<{0}><c:thickness val="{1}"/></{0}>"#,
        tag, wall.thickness
    )
}

fn write_plot_area<W: Write>(writer: &mut W, plot_area: &PlotAreaFragment) -> std::io::Result<()> {
    write!(writer, "<c:plotArea>")?;
    write!(writer, "<c:layout/>")?;

    for group in plot_area.groups() {
        write_type_group(writer, group)?;
    }

    if let Some(ref axis) = plot_area.category_axis {
        write_category_axis(writer, axis)?;
    }
    if let Some(ref axis) = plot_area.value_axis {
        write_value_axis(writer, axis)?;
    }
    if let Some(ref axis) = plot_area.series_axis {
        write_series_axis(writer, axis)?;
    }

    write!(writer, "</c:plotArea>")?;
    Ok(())
}

fn write_type_group<W: Write>(writer: &mut W, group: &TypeGroup) -> std::io::Result<()> {
    let tag = group.element.xml_element_name();
    write!(writer, "<c:{}>", tag)?;

    if let Some(dir) = group.bar_direction {
        write!(writer, r#"<c:barDir val="{}"/>"#, dir.xml_value())?;
    }
    if let Some(of_pie_type) = group.of_pie_type {
        write!(writer, r#"<c:ofPieType val="{}"/>"#, of_pie_type.xml_value())?;
    }
    if let Some(style) = group.radar_style {
        write!(writer, r#"<c:radarStyle val="{}"/>"#, style.xml_value())?;
    }
    if let Some(style) = group.scatter_style {
        write!(writer, r#"<c:scatterStyle val="{}"/>"#, style.xml_value())?;
    }
    if let Some(wireframe) = group.wireframe {
        write!(writer, r#"<c:wireframe val="{}"/>"#, bool_val(wireframe))?;
    }
    if let Some(grouping) = group.grouping {
        write!(writer, r#"<c:grouping val="{}"/>"#, grouping.xml_value())?;
    }
    if let Some(vary) = group.vary_colors {
        write!(writer, r#"<c:varyColors val="{}"/>"#, bool_val(vary))?;
    }

    for series in &group.series {
        write_series(writer, series)?;
    }

    if let Some(ref labels) = group.data_labels {
        write_data_labels(writer, labels)?;
    }
    if let Some(hole_size) = group.hole_size {
        write!(writer, r#"<c:holeSize val="{}"/>"#, hole_size)?;
    }
    if let Some(overlap) = group.overlap {
        write!(writer, r#"<c:overlap val="{}"/>"#, overlap)?;
    }
    if group.series_lines {
        write!(writer, "<c:serLines/>")?;
    }
    if let Some(shape) = group.shape {
        write!(writer, r#"<c:shape val="{}"/>"#, shape.xml_value())?;
    }
    if let Some(smooth) = group.smooth {
        write!(writer, r#"<c:smooth val="{}"/>"#, bool_val(smooth))?;
    }
    for axis_id in &group.axis_ids {
        write!(writer, r#"<c:axId val="{}"/>"#, axis_id)?;
    }

    write!(writer, "</c:{}>", tag)?;
    Ok(())
}

fn write_series<W: Write>(writer: &mut W, series: &Series) -> std::io::Result<()> {
    write!(writer, "<c:ser>")?;
    write!(writer, r#"<c:idx val="{}"/>"#, series.index)?;
    write!(writer, r#"<c:order val="{}"/>"#, series.order)?;
    write_data_ref(writer, "c:tx", &series.name)?;

    if let Some(ref sp_pr) = series.shape_properties {
        write_shape_properties(writer, "c:spPr", sp_pr)?;
    }
    if let Some(ref marker) = series.marker {
        write_marker(writer, marker)?;
    }
    for point in &series.data_points {
        write_data_point(writer, point)?;
    }
    if let Some(ref labels) = series.data_labels {
        write_data_labels(writer, labels)?;
    }

    let refs = [
        ("c:cat", &series.categories),
        ("c:val", &series.values),
        ("c:xVal", &series.x_values),
        ("c:yVal", &series.y_values),
        ("c:bubbleSize", &series.bubble_sizes),
    ];
    for (tag, source) in refs {
        if let Some(source) = source {
            write_data_ref(writer, tag, source)?;
        }
    }

    if series.bubble_3d {
        write!(writer, r#"<c:bubble3D val="1"/>"#)?;
    }

    write!(writer, "</c:ser>")?;
    Ok(())
}

fn write_data_ref<W: Write>(writer: &mut W, tag: &str, source: &DataSource) -> std::io::Result<()> {
    let kind = source.xml_element_name();
    write!(
        writer,
        "<{0}><c:{1}><c:f>{2}</c:f></c:{1}></{0}>",
        tag,
        kind,
        escape_xml(source.formula())
    )
}

fn write_marker<W: Write>(writer: &mut W, marker: &Marker) -> std::io::Result<()> {
    write!(writer, "<c:marker>")?;
    write!(writer, r#"<c:symbol val="{}"/>"#, marker.symbol.xml_value())?;
    write!(writer, r#"<c:size val="{}"/>"#, marker.size)?;
    if let Some(ref sp_pr) = marker.shape_properties {
        write_shape_properties(writer, "c:spPr", sp_pr)?;
    }
    write!(writer, "</c:marker>")?;
    Ok(())
}

fn write_data_point<W: Write>(writer: &mut W, point: &DataPoint) -> std::io::Result<()> {
    write!(writer, "<c:dPt>")?;
    write!(writer, r#"<c:idx val="{}"/>"#, point.index)?;
    write!(writer, r#"<c:bubble3D val="{}"/>"#, bool_val(point.bubble_3d))?;
    write_shape_properties(writer, "c:spPr", &point.shape_properties)?;
    write!(writer, "</c:dPt>")?;
    Ok(())
}

fn write_data_labels<W: Write>(writer: &mut W, labels: &DataLabels) -> std::io::Result<()> {
    write!(writer, "<c:dLbls>")?;
    write!(writer, r#"<c:showLegendKey val="{}"/>"#, bool_val(labels.show_legend_key))?;
    write!(writer, r#"<c:showVal val="{}"/>"#, bool_val(labels.show_value))?;
    write!(writer, r#"<c:showCatName val="{}"/>"#, bool_val(labels.show_category_name))?;
    write!(writer, r#"<c:showSerName val="{}"/>"#, bool_val(labels.show_series_name))?;
    write!(writer, r#"<c:showPercent val="{}"/>"#, bool_val(labels.show_percent))?;
    write!(writer, r#"<c:showBubbleSize val="{}"/>"#, bool_val(labels.show_bubble_size))?;
    write!(writer, r#"<c:showLeaderLines val="{}"/>"#, bool_val(labels.show_leader_lines))?;
    write!(writer, "</c:dLbls>")?;
    Ok(())
}

fn write_shape_properties<W: Write>(
    writer: &mut W,
    tag: &str,
    sp_pr: &ShapeProperties,
) -> std::io::Result<()> {
    write!(writer, "<{}>", tag)?;
    if let Some(ref fill) = sp_pr.fill {
        write_fill(writer, fill)?;
    }
    if let Some(ref line) = sp_pr.line {
        write_line(writer, line)?;
    }
    if let Some(ref shape_3d) = sp_pr.shape_3d {
        write!(writer, r#"<a:sp3d contourW="{}"><a:contourClr>"#, shape_3d.contour_width)?;
        write_color(writer, &shape_3d.contour_color)?;
        write!(writer, "</a:contourClr></a:sp3d>")?;
    }
    write!(writer, "</{}>", tag)?;
    Ok(())
}

fn write_fill<W: Write>(writer: &mut W, fill: &Fill) -> std::io::Result<()> {
    match fill {
        Fill::Solid(color) => {
            write!(writer, "<a:solidFill>")?;
            write_color(writer, color)?;
            write!(writer, "</a:solidFill>")
        },
        Fill::NoFill => write!(writer, "<a:noFill/>"),
    }
}

fn write_line<W: Write>(writer: &mut W, line: &LineProperties) -> std::io::Result<()> {
    write!(writer, r#"<a:ln w="{}""#, line.width)?;
    if let Some(cap) = line.cap {
        write!(writer, r#" cap="{}""#, cap)?;
    }
    if let Some(compound) = line.compound {
        write!(writer, r#" cmpd="{}""#, compound)?;
    }
    if let Some(align) = line.align {
        write!(writer, r#" algn="{}""#, align)?;
    }
    match line.fill {
        Some(ref fill) => {
            write!(writer, ">")?;
            write_fill(writer, fill)?;
            write!(writer, "</a:ln>")
        },
        None => write!(writer, "/>"),
    }
}

fn write_color<W: Write>(writer: &mut W, color: &ColorRef) -> std::io::Result<()> {
    let val = color.color.xml_value();
    if color.lum_mod.is_none() && color.lum_off.is_none() {
        return write!(writer, r#"<a:schemeClr val="{}"/>"#, val);
    }
    write!(writer, r#"<a:schemeClr val="{}">"#, val)?;
    if let Some(lum_mod) = color.lum_mod {
        write!(writer, r#"<a:lumMod val="{}"/>"#, lum_mod)?;
    }
    if let Some(lum_off) = color.lum_off {
        write!(writer, r#"<a:lumOff val="{}"/>"#, lum_off)?;
    }
    write!(writer, "</a:schemeClr>")
}

fn write_def_run_properties<W: Write>(writer: &mut W, run: &RunProperties) -> std::io::Result<()> {
    write!(
        writer,
        r#"<a:defRPr sz="{}" b="0" i="0" u="none" strike="noStrike" kern="{}" baseline="0">"#,
        run.size, run.kern
    )?;
    if let Some(ref color) = run.fill {
        write!(writer, "<a:solidFill>")?;
        write_color(writer, color)?;
        write!(writer, "</a:solidFill>")?;
    }
    if run.theme_fonts {
        write!(
            writer,
            r#"<a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/>"#
        )?;
    }
    write!(writer, "</a:defRPr>")
}

fn write_text_properties<W: Write>(writer: &mut W, tx_pr: &TextProperties) -> std::io::Result<()> {
    write!(writer, "<c:txPr>")?;
    write!(
        writer,
        r#"<a:bodyPr rot="{}" spcFirstLastPara="1" vertOverflow="ellipsis" vert="horz" wrap="square" anchor="ctr" anchorCtr="1"/>"#,
        tx_pr.rotation
    )?;
    write!(writer, "<a:lstStyle/><a:p><a:pPr>")?;
    write_def_run_properties(writer, &tx_pr.run)?;
    write!(writer, r#"</a:pPr><a:endParaRPr lang="en-US"/></a:p>"#)?;
    write!(writer, "</c:txPr>")?;
    Ok(())
}

fn write_axis_common<W: Write>(writer: &mut W, common: &AxisCommon) -> std::io::Result<()> {
    write!(writer, r#"<c:axId val="{}"/>"#, common.axis_id)?;

    write!(writer, "<c:scaling>")?;
    write!(
        writer,
        r#"<c:orientation val="{}"/>"#,
        common.orientation.xml_value()
    )?;
    if let Some(max) = common.max {
        write!(writer, r#"<c:max val="{}"/>"#, max)?;
    }
    if let Some(min) = common.min {
        write!(writer, r#"<c:min val="{}"/>"#, min)?;
    }
    write!(writer, "</c:scaling>")?;

    write!(writer, r#"<c:delete val="{}"/>"#, bool_val(common.deleted))?;
    write!(writer, r#"<c:axPos val="{}"/>"#, common.position.xml_value())?;

    if let Some(ref sp_pr) = common.major_gridlines {
        write!(writer, "<c:majorGridlines>")?;
        write_shape_properties(writer, "c:spPr", sp_pr)?;
        write!(writer, "</c:majorGridlines>")?;
    }
    if let Some(ref sp_pr) = common.minor_gridlines {
        write!(writer, "<c:minorGridlines>")?;
        write_shape_properties(writer, "c:spPr", sp_pr)?;
        write!(writer, "</c:minorGridlines>")?;
    }

    if let Some(ref num_fmt) = common.number_format {
        write!(
            writer,
            r#"<c:numFmt formatCode="{}" sourceLinked="{}"/>"#,
            escape_xml(&num_fmt.format_code),
            bool_val(num_fmt.source_linked)
        )?;
    }
    if let Some(mark) = common.major_tick_mark {
        write!(writer, r#"<c:majorTickMark val="{}"/>"#, mark.xml_value())?;
    }
    if let Some(mark) = common.minor_tick_mark {
        write!(writer, r#"<c:minorTickMark val="{}"/>"#, mark.xml_value())?;
    }
    write!(
        writer,
        r#"<c:tickLblPos val="{}"/>"#,
        common.tick_label_position.xml_value()
    )?;

    write_shape_properties(writer, "c:spPr", &common.shape_properties)?;
    write_text_properties(writer, &common.text_properties)?;

    write!(writer, r#"<c:crossAx val="{}"/>"#, common.cross_axis_id)?;
    if let Some(crosses) = common.crosses {
        write!(writer, r#"<c:crosses val="{}"/>"#, crosses.xml_value())?;
    }

    Ok(())
}

fn write_category_axis<W: Write>(writer: &mut W, axis: &CategoryAxis) -> std::io::Result<()> {
    write!(writer, "<c:catAx>")?;
    write_axis_common(writer, &axis.common)?;
    write!(writer, r#"<c:auto val="{}"/>"#, bool_val(axis.auto))?;
    write!(writer, r#"<c:lblAlgn val="{}"/>"#, axis.label_align.xml_value())?;
    write!(writer, r#"<c:lblOffset val="{}"/>"#, axis.label_offset)?;
    if let Some(skip) = axis.tick_label_skip {
        write!(writer, r#"<c:tickLblSkip val="{}"/>"#, skip)?;
    }
    write!(
        writer,
        r#"<c:noMultiLvlLbl val="{}"/>"#,
        bool_val(axis.no_multi_level)
    )?;
    write!(writer, "</c:catAx>")?;
    Ok(())
}

fn write_value_axis<W: Write>(writer: &mut W, axis: &ValueAxis) -> std::io::Result<()> {
    write!(writer, "<c:valAx>")?;
    write_axis_common(writer, &axis.common)?;
    write!(
        writer,
        r#"<c:crossBetween val="{}"/>"#,
        axis.cross_between.xml_value()
    )?;
    if let Some(major_unit) = axis.major_unit {
        write!(writer, r#"<c:majorUnit val="{}"/>"#, major_unit)?;
    }
    write!(writer, "</c:valAx>")?;
    Ok(())
}

fn write_series_axis<W: Write>(writer: &mut W, axis: &SeriesAxis) -> std::io::Result<()> {
    write!(writer, "<c:serAx>")?;
    write_axis_common(writer, &axis.common)?;
    write!(writer, "</c:serAx>")?;
    Ok(())
}

fn write_legend<W: Write>(writer: &mut W, legend: &Legend) -> std::io::Result<()> {
    write!(writer, "<c:legend>")?;
    if let Some(position) = legend.position.xml_value() {
        write!(writer, r#"<c:legendPos val="{}"/>"#, position)?;
    }
    write!(writer, r#"<c:overlay val="{}"/>"#, bool_val(legend.overlay))?;
    write!(writer, "</c:legend>")?;
    Ok(())
}

fn write_print_settings<W: Write>(writer: &mut W, margins: &PageMargins) -> std::io::Result<()> {
    write!(writer, "<c:printSettings>")?;
    write!(writer, "<c:headerFooter/>")?;
    write!(
        writer,
        r#"<c:pageMargins b="{}" l="{}" r="{}" t="{}" header="{}" footer="{}"/>"#,
        margins.bottom, margins.left, margins.right, margins.top, margins.header, margins.footer
    )?;
    write!(writer, "<c:pageSetup/>")?;
    write!(writer, "</c:printSettings>")?;
    Ok(())
}
