//! Sass and css stylesheet rendering.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use super::{StyleContext, require};
use crate::error::Result;

/// Renders the sass stylesheet: a mixin with the shared font properties
/// plus, per icon, a `%` placeholder and/or a css class depending on the
/// context toggles. At least one of the two must be enabled.
pub fn render_sass(ctx: &StyleContext) -> Result<String> {
    check_style_context(ctx)?;
    require(ctx.sass_placeholder || ctx.css_class, "sassPlaceholder or cssClass")?;

    let class = ctx.class_name;
    let mut out = header(ctx);
    out.push_str(&font_face(ctx));
    out.push_str(&format!(
        "\n@mixin {class}() {{\n  font-family: \"{}\";\n{COMMON_PROPS}}}\n",
        ctx.font_name
    ));

    for icon in ctx.icons {
        let code = format!("\\{:X}", icon.codepoint);
        if ctx.sass_placeholder {
            out.push_str(&format!(
                "\n%{class}-{name} {{\n  @include {class}();\n  content: \"{code}\";\n}}\n",
                name = icon.name
            ));
        }
        if ctx.css_class {
            out.push_str(&format!(
                "\n.{class}-{name}::before {{\n  @include {class}();\n  content: \"{code}\";\n}}\n",
                name = icon.name
            ));
        }
    }
    Ok(out)
}

/// Renders the css stylesheet. Plain css has no placeholder concept, so the
/// output always carries one class per icon regardless of the toggles.
pub fn render_css(ctx: &StyleContext) -> Result<String> {
    check_style_context(ctx)?;

    let class = ctx.class_name;
    let mut out = header(ctx);
    out.push_str(&font_face(ctx));
    out.push_str(&format!(
        "\n[class^=\"{class}-\"]::before,\n[class*=\" {class}-\"]::before {{\n  \
         font-family: \"{}\";\n{COMMON_PROPS}}}\n",
        ctx.font_name
    ));

    for icon in ctx.icons {
        out.push_str(&format!(
            "\n.{class}-{name}::before {{\n  content: \"\\{code:X}\";\n}}\n",
            name = icon.name,
            code = icon.codepoint
        ));
    }
    Ok(out)
}

/// Font properties shared by every icon selector.
const COMMON_PROPS: &str = "  speak: none;\n  font-style: normal;\n  font-weight: normal;\n  \
                            font-variant: normal;\n  text-transform: none;\n  line-height: 1;\n  \
                            -webkit-font-smoothing: antialiased;\n  \
                            -moz-osx-font-smoothing: grayscale;\n";

fn check_style_context(ctx: &StyleContext) -> Result<()> {
    require(!ctx.font_name.is_empty(), "fontName")?;
    require(!ctx.class_name.is_empty(), "className")?;
    require(!ctx.icons.is_empty(), "icons")?;
    require(!ctx.fonts.is_empty(), "fonts")
}

fn header(ctx: &StyleContext) -> String {
    format!(
        "/* {} icon font\n * Author: {} ({})\n * Generated on {}\n */\n\n",
        ctx.font_name, ctx.author_name, ctx.author_url, ctx.date_formatted
    )
}

fn font_face(ctx: &StyleContext) -> String {
    let sources: Vec<String> = ctx
        .fonts
        .iter()
        .map(|font| {
            let url = if ctx.embed {
                format!("data:{};base64,{}", font.format.mime(), BASE64.encode(&font.contents))
            } else {
                font.url.clone()
            };
            format!("url(\"{url}\") format(\"{}\")", font.format.extension())
        })
        .collect();

    format!(
        "@font-face {{\n  font-family: \"{}\";\n  src: {};\n  font-weight: normal;\n  \
         font-style: normal;\n}}\n",
        ctx.font_name,
        sources.join(",\n    ")
    )
}
