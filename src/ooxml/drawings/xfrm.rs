use std::fmt;
use std::fmt::Write as _;

/// Write a transform with offset and extent in EMU. `tag` is `a:xfrm` inside
/// shape properties and `xdr:xfrm` on graphic frames.
pub fn write_xfrm_off_ext(
    xml: &mut String,
    tag: &str,
    x: i64,
    y: i64,
    cx: i64,
    cy: i64,
) -> fmt::Result {
    write!(xml, "<{}>", tag)?;
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, x, y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, cx, cy)?;
    write!(xml, "</{}>", tag)
}
