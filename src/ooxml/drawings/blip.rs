use crate::ooxml::opc::constants::namespace;
use std::fmt;
use std::fmt::Write as _;

pub fn write_a_blip_embed(xml: &mut String, rid_num: u32, include_xmlns_r: bool) -> fmt::Result {
    if include_xmlns_r {
        write!(
            xml,
            r#"<a:blip xmlns:r="{}" r:embed="rId{}"/>"#,
            namespace::OFC_RELATIONSHIPS,
            rid_num
        )
    } else {
        write!(xml, r#"<a:blip r:embed="rId{}"/>"#, rid_num)
    }
}

pub fn write_a_stretch_fill_rect(xml: &mut String) {
    xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blip_fill_parts() {
        let mut xml = String::from("<xdr:blipFill>");
        write_a_blip_embed(&mut xml, 4, true).unwrap();
        write_a_stretch_fill_rect(&mut xml);
        xml.push_str("</xdr:blipFill>");
        assert_eq!(
            xml,
            concat!(
                r#"<xdr:blipFill><a:blip xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" r:embed="rId4"/>"#,
                "<a:stretch><a:fillRect/></a:stretch></xdr:blipFill>"
            )
        );

        let mut bare = String::new();
        write_a_blip_embed(&mut bare, 2, false).unwrap();
        assert_eq!(bare, r#"<a:blip r:embed="rId2"/>"#);
    }
}
