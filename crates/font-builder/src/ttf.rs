//! TrueType assembly from normalized glyphs.

use chrono::Utc;
use log::debug;
use write_fonts::{
    FontBuilder,
    tables::{
        cmap::Cmap,
        glyf::{GlyfLocaBuilder, SimpleGlyph},
        head::{Flags, Head, MacStyle},
        hhea::Hhea,
        hmtx::Hmtx,
        maxp::Maxp,
        name::{Name, NameRecord},
        os2::{Os2, SelectionFlags},
        post::Post,
        vmtx::LongMetric,
    },
    types::{FWord, Fixed, GlyphId, LongDateTime, NameId, UfWord, Version16Dot16},
};

use crate::{
    UNITS_PER_EM,
    error::{Error, Result},
    glyph::Glyph,
};

/// Seconds between the sfnt epoch (1904-01-01) and the Unix epoch.
const SFNT_EPOCH_OFFSET: i64 = 2_082_844_800;

/// Assembles a complete TrueType font: glyph 0 is `.notdef`, glyph `i + 1`
/// carries the `i`-th icon.
pub(crate) fn build_ttf(font_name: &str, glyphs: &[Glyph]) -> Result<Vec<u8>> {
    let mut glyf_builder = GlyfLocaBuilder::new();
    add_glyph(&mut glyf_builder, ".notdef", &SimpleGlyph::default())?;

    let mut metrics = vec![LongMetric { advance: UNITS_PER_EM, side_bearing: 0 }];
    for glyph in glyphs {
        debug!("building glyph {} (U+{:04X})", glyph.name, glyph.codepoint);
        let simple = if glyph.path.elements().is_empty() {
            SimpleGlyph::default()
        } else {
            SimpleGlyph::from_bezpath(&glyph.path)
                .map_err(|e| outline_error(&glyph.name, format!("{e:?}")))?
        };
        add_glyph(&mut glyf_builder, &glyph.name, &simple)?;
        metrics.push(LongMetric { advance: glyph.advance, side_bearing: glyph.lsb });
    }
    let (glyf, loca, loca_format) = glyf_builder.build();

    let num_glyphs = glyphs.len() as u16 + 1;
    let now = LongDateTime::new(Utc::now().timestamp() + SFNT_EPOCH_OFFSET);

    let head = build_head(loca_format as i16, now);
    let hhea = build_hhea(glyphs, num_glyphs);
    let hmtx = Hmtx::new(metrics, vec![]);
    let maxp = Maxp { num_glyphs, ..Default::default() };
    let cmap = build_cmap(glyphs)?;
    let name = build_name(font_name);
    let os2 = build_os2(glyphs);
    let post = Post { version: Version16Dot16::VERSION_3_0, ..Default::default() };

    let mut builder = FontBuilder::new();
    builder
        .add_table(&head)?
        .add_table(&hhea)?
        .add_table(&maxp)?
        .add_table(&os2)?
        .add_table(&hmtx)?
        .add_table(&cmap)?
        .add_table(&name)?
        .add_table(&post)?
        .add_table(&loca)?
        .add_table(&glyf)?;
    Ok(builder.build())
}

fn add_glyph(builder: &mut GlyfLocaBuilder, name: &str, glyph: &SimpleGlyph) -> Result<()> {
    builder.add_glyph(glyph).map_err(|e| outline_error(name, e.to_string()))?;
    Ok(())
}

fn outline_error(name: &str, detail: String) -> Error {
    Error::Outline { name: name.to_string(), detail }
}

fn build_cmap(glyphs: &[Glyph]) -> Result<Cmap> {
    let mut mappings = Vec::with_capacity(glyphs.len());
    for (index, glyph) in glyphs.iter().enumerate() {
        let c = char::from_u32(glyph.codepoint).ok_or(Error::InvalidCodepoint(glyph.codepoint))?;
        mappings.push((c, GlyphId::new(index as u32 + 1)));
    }
    Cmap::from_mappings(mappings).map_err(|e| Error::Cmap(format!("{e:?}")))
}

fn build_head(index_to_loc_format: i16, now: LongDateTime) -> Head {
    Head {
        font_revision: Fixed::from_f64(1.0),
        flags: Flags::from_bits_truncate(0x0B),
        units_per_em: UNITS_PER_EM,
        created: now,
        modified: now,
        mac_style: MacStyle::empty(),
        lowest_rec_ppem: 8,
        index_to_loc_format,
        ..Default::default()
    }
}

fn build_hhea(glyphs: &[Glyph], number_of_h_metrics: u16) -> Hhea {
    let advance_max = glyphs.iter().map(|g| g.advance).max().unwrap_or(UNITS_PER_EM);
    let lsb_min = glyphs.iter().map(|g| g.lsb).min().unwrap_or(0);
    let rsb_min = glyphs.iter().map(|g| g.advance as i16 - g.x_max).min().unwrap_or(0);
    let x_max_extent = glyphs.iter().map(|g| g.x_max).max().unwrap_or(0);

    Hhea {
        ascender: FWord::new(UNITS_PER_EM as i16),
        descender: FWord::new(0),
        line_gap: FWord::new(0),
        advance_width_max: UfWord::new(advance_max),
        min_left_side_bearing: FWord::new(lsb_min),
        min_right_side_bearing: FWord::new(rsb_min),
        x_max_extent: FWord::new(x_max_extent),
        caret_slope_rise: 1,
        caret_slope_run: 0,
        caret_offset: 0,
        number_of_h_metrics,
        ..Default::default()
    }
}

fn build_name(font_name: &str) -> Name {
    let mut name = Name::default();
    let mut add = |name_id, value: String| {
        name.name_record.push(NameRecord {
            platform_id: 3,    // Windows
            encoding_id: 1,    // Unicode BMP
            language_id: 0x409, // English (US)
            name_id,
            string: value.into(),
        });
    };

    add(NameId::FAMILY_NAME, font_name.to_string());
    add(NameId::SUBFAMILY_NAME, "Regular".to_string());
    add(NameId::UNIQUE_ID, format!("{font_name} icon font"));
    add(NameId::FULL_NAME, font_name.to_string());
    add(NameId::VERSION_STRING, "Version 1.0".to_string());
    add(NameId::POSTSCRIPT_NAME, font_name.replace(' ', ""));
    name
}

fn build_os2(glyphs: &[Glyph]) -> Os2 {
    let first = glyphs.first().map(|g| g.codepoint.min(0xFFFF) as u16).unwrap_or(0);
    let last = glyphs.last().map(|g| g.codepoint.min(0xFFFF) as u16).unwrap_or(0);
    let x_avg_char_width = if glyphs.is_empty() {
        UNITS_PER_EM as i16
    } else {
        (glyphs.iter().map(|g| u32::from(g.advance)).sum::<u32>() / glyphs.len() as u32) as i16
    };

    Os2 {
        x_avg_char_width,
        us_weight_class: 400,
        us_width_class: 5,
        fs_type: 0, // installable
        y_subscript_x_size: 650,
        y_subscript_y_size: 600,
        y_subscript_x_offset: 0,
        y_subscript_y_offset: 75,
        y_superscript_x_size: 650,
        y_superscript_y_size: 600,
        y_superscript_x_offset: 0,
        y_superscript_y_offset: 350,
        y_strikeout_size: 50,
        y_strikeout_position: 300,
        s_typo_ascender: UNITS_PER_EM as i16,
        s_typo_descender: 0,
        s_typo_line_gap: 0,
        us_win_ascent: UNITS_PER_EM,
        us_win_descent: 0,
        fs_selection: SelectionFlags::REGULAR,
        us_first_char_index: first,
        us_last_char_index: last,
        ul_unicode_range_1: 0,
        ul_unicode_range_2: 1 << 28, // bit 60, Private Use Area
        ul_unicode_range_3: 0,
        ul_unicode_range_4: 0,
        ul_code_page_range_1: Some(1), // Latin 1
        ul_code_page_range_2: Some(0),
        sx_height: Some(0),
        s_cap_height: Some(UNITS_PER_EM as i16),
        us_default_char: Some(0),
        us_break_char: Some(32),
        us_max_context: Some(0),
        ..Default::default()
    }
}
