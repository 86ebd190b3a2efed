//! Preview page rendering.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use super::require;
use crate::{error::Result, icons::Icon};

/// Context for [`render_preview`]. The preview is always self-contained:
/// it embeds the woff2 binary no matter which formats were requested.
#[derive(Debug)]
pub struct PreviewContext<'a> {
    pub font_name: &'a str,
    pub class_name: &'a str,
    pub icons: &'a [Icon],
    pub woff2: &'a [u8],
}

/// Renders a single-file HTML page showing every icon with its name and
/// codepoint.
pub fn render_preview(ctx: &PreviewContext) -> Result<String> {
    require(!ctx.font_name.is_empty(), "fontName")?;
    require(!ctx.class_name.is_empty(), "className")?;
    require(!ctx.icons.is_empty(), "icons")?;
    require(!ctx.woff2.is_empty(), "woff2")?;

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{} preview</title>\n", ctx.font_name));
    out.push_str("<style>\n");
    out.push_str(&format!(
        "@font-face {{\n  font-family: \"{}\";\n  src: url(\"data:font/woff2;base64,{}\") \
         format(\"woff2\");\n}}\n",
        ctx.font_name,
        BASE64.encode(ctx.woff2)
    ));
    out.push_str(
        "body { font-family: sans-serif; color: #443f3f; margin: 2rem; }\n\
         ul { list-style: none; padding: 0; display: grid;\n  \
         grid-template-columns: repeat(auto-fill, minmax(10rem, 1fr)); gap: 1rem; }\n\
         li { border: 1px solid #ddd; border-radius: 0.25rem; padding: 1rem; text-align: center; }\n",
    );
    out.push_str(&format!(
        ".glyph {{ font-family: \"{}\"; font-size: 2rem; display: block; }}\n",
        ctx.font_name
    ));
    out.push_str(
        ".name { display: block; margin-top: 0.5rem; word-break: break-all; }\n\
         .code { color: #999; font-size: 0.75rem; }\n</style>\n</head>\n<body>\n",
    );
    out.push_str(&format!("<h1>{}</h1>\n<ul>\n", ctx.font_name));

    for icon in ctx.icons {
        out.push_str(&format!(
            "  <li><span class=\"glyph\">&#x{code:X};</span>\
             <span class=\"name\">{class}-{name}</span>\
             <span class=\"code\">U+{code:04X}</span></li>\n",
            code = icon.codepoint,
            class = ctx.class_name,
            name = icon.name,
        ));
    }

    out.push_str("</ul>\n</body>\n</html>\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn icons() -> Vec<Icon> {
        vec![
            Icon { file: "book.svg".into(), name: "book".to_string(), codepoint: 0xF101 },
            Icon { file: "pencil.svg".into(), name: "pencil".to_string(), codepoint: 0xF102 },
        ]
    }

    #[test]
    fn test_missing_woff2_is_an_error() {
        let icons = icons();
        let ctx = PreviewContext {
            font_name: "collecticons",
            class_name: "collecticons",
            icons: &icons,
            woff2: &[],
        };
        assert!(matches!(render_preview(&ctx), Err(Error::MissingField("woff2"))));
    }

    #[test]
    fn test_preview_embeds_woff2_and_lists_icons() {
        let icons = icons();
        let ctx = PreviewContext {
            font_name: "collecticons",
            class_name: "collecticons",
            icons: &icons,
            woff2: b"woff2 font",
        };
        let out = render_preview(&ctx).unwrap();

        assert!(out.contains("data:font/woff2;base64,d29mZjIgZm9udA=="));
        assert_eq!(out.matches("<li>").count(), 2);
        assert!(out.contains("collecticons-book"));
        assert!(out.contains("U+F101"));
        assert!(out.contains("&#xF102;"));
    }
}
