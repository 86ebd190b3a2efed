//! SVG font output, the vector intermediate of every compile.

use crate::{UNITS_PER_EM, glyph::Glyph};

pub(crate) fn render_svg_font(font_name: &str, glyphs: &[Glyph]) -> String {
    let name = escape(font_name);
    let upm = UNITS_PER_EM;

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" standalone=\"no\"?>\n");
    out.push_str(
        "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \
         \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
    );
    out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\">\n");
    out.push_str("<defs>\n");
    out.push_str(&format!("  <font id=\"{name}\" horiz-adv-x=\"{upm}\">\n"));
    out.push_str(&format!(
        "    <font-face font-family=\"{name}\" units-per-em=\"{upm}\" ascent=\"{upm}\" descent=\"0\" />\n"
    ));
    out.push_str(&format!("    <missing-glyph horiz-adv-x=\"{upm}\" />\n"));

    for glyph in glyphs {
        out.push_str(&format!(
            "    <glyph glyph-name=\"{}\" unicode=\"&#x{:X};\" horiz-adv-x=\"{}\" d=\"{}\" />\n",
            escape(&glyph.name),
            glyph.codepoint,
            glyph.advance,
            glyph.path.to_svg(),
        ));
    }

    out.push_str("  </font>\n");
    out.push_str("</defs>\n");
    out.push_str("</svg>\n");
    out
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use kurbo::BezPath;

    use super::*;

    #[test]
    fn test_svg_font_structure() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((0.0, 1024.0));
        path.close_path();
        let glyphs = vec![Glyph {
            name: "book".to_string(),
            codepoint: 0xF101,
            path,
            advance: 1024,
            lsb: 0,
            x_max: 1024,
        }];

        let svg = render_svg_font("collecticons", &glyphs);
        assert!(svg.contains("<font id=\"collecticons\""));
        assert!(svg.contains("units-per-em=\"1024\""));
        assert!(svg.contains("glyph-name=\"book\""));
        assert!(svg.contains("unicode=\"&#xF101;\""));
    }

    #[test]
    fn test_names_are_escaped() {
        let glyphs = vec![Glyph {
            name: "black&white".to_string(),
            codepoint: 0xF101,
            path: BezPath::new(),
            advance: 1024,
            lsb: 0,
            x_max: 0,
        }];

        let svg = render_svg_font("collecticons", &glyphs);
        assert!(svg.contains("glyph-name=\"black&amp;white\""));
    }
}
