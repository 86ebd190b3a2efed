//! Catalog rendering: a JSON index of the compiled icon set.

use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::Serialize;

use super::{StyleFont, require};
use crate::{
    error::{Error, Result},
    icons::Icon,
};

/// Context for [`render_catalog`]. `fonts` is the experimental
/// font-on-catalog feature: when set, the document gains a map of base64
/// font binaries keyed by format name.
#[derive(Debug)]
pub struct CatalogContext<'a> {
    pub font_name: &'a str,
    pub class_name: &'a str,
    pub fonts: Option<&'a [StyleFont]>,
    pub icons: &'a [Icon],
}

#[derive(Serialize)]
struct CatalogDoc<'a> {
    name: &'a str,
    #[serde(rename = "className")]
    class_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fonts: Option<BTreeMap<String, String>>,
    icons: Vec<CatalogIcon>,
}

#[derive(Serialize)]
struct CatalogIcon {
    icon: String,
    #[serde(rename = "charCode")]
    char_code: String,
}

/// Renders the catalog JSON. Codepoints are written as `\HEX` with
/// uppercase letters and no padding beyond the natural hex width.
pub fn render_catalog(ctx: &CatalogContext) -> Result<String> {
    require(!ctx.font_name.is_empty(), "fontName")?;
    require(!ctx.class_name.is_empty(), "className")?;
    require(!ctx.icons.is_empty(), "icons")?;

    let fonts = ctx.fonts.map(|fonts| {
        fonts
            .iter()
            .map(|font| (font.format.extension().to_string(), BASE64.encode(&font.contents)))
            .collect()
    });

    let doc = CatalogDoc {
        name: ctx.font_name,
        class_name: ctx.class_name,
        fonts,
        icons: ctx
            .icons
            .iter()
            .map(|icon| CatalogIcon {
                icon: format!("{}-{}", ctx.class_name, icon.name),
                char_code: format!("\\{:X}", icon.codepoint),
            })
            .collect(),
    };

    serde_json::to_string(&doc).map_err(|err| Error::Io(err.into()))
}
