//! WOFF 2.0 encoding (single Brotli-compressed table stream).

use brotli::enc::BrotliEncoderParams;
use bytes::{BufMut, BytesMut};
use read_fonts::types::Tag;

use crate::{
    error::Result,
    sfnt::{SfntTable, read_tables, total_sfnt_size},
};

const SIGNATURE: u32 = 0x774F_4632; // 'wOF2'
const HEADER_LEN: usize = 48;

/// Tags with a fixed index in the WOFF2 table directory, in flag order.
/// Any other tag is written out in full after an "arbitrary tag" flag byte.
#[rustfmt::skip]
const KNOWN_TAGS: [&[u8; 4]; 63] = [
    b"cmap", b"head", b"hhea", b"hmtx", b"maxp", b"name", b"OS/2", b"post",
    b"cvt ", b"fpgm", b"glyf", b"loca", b"prep", b"CFF ", b"VORG", b"EBDT",
    b"EBLC", b"gasp", b"hdmx", b"kern", b"LTSH", b"PCLT", b"VDMX", b"vhea",
    b"vmtx", b"BASE", b"GDEF", b"GPOS", b"GSUB", b"EBSC", b"JSTF", b"MATH",
    b"CBDT", b"CBLC", b"COLR", b"CPAL", b"SVG ", b"sbix", b"acnt", b"avar",
    b"bdat", b"bloc", b"bsln", b"cvar", b"fdsc", b"feat", b"fmtx", b"fvar",
    b"gvar", b"hsty", b"just", b"lcar", b"mort", b"morx", b"opbd", b"prop",
    b"trak", b"Zapf", b"Silf", b"Glat", b"Gloc", b"Feat", b"Sill",
];

const ARBITRARY_TAG: u8 = 63;

// glyf and loca signal "no transform applied" with version 3 in the flag
// bits; every other table signals it with version 0.
const GLYF_LOCA_NULL_TRANSFORM: u8 = 3;

/// Wraps TrueType font data into a WOFF 2.0 container.
///
/// Tables are stored untransformed (null transform for every table, glyf
/// and loca included) and compressed as one Brotli stream in directory
/// order.
pub fn encode_woff2(data: &[u8]) -> Result<Vec<u8>> {
    let (flavor, mut tables) = read_tables(data)?;
    move_loca_after_glyf(&mut tables);

    let mut directory = BytesMut::new();
    let mut stream = Vec::new();
    for table in &tables {
        let (flags, raw_tag) = directory_flags(table.tag);
        directory.put_u8(flags);
        if let Some(tag) = raw_tag {
            directory.put_slice(&tag);
        }
        put_base128(&mut directory, table.data.len() as u32);
        stream.extend_from_slice(table.data);
    }

    let mut compressed = Vec::new();
    let params = BrotliEncoderParams { quality: 11, lgwin: 22, ..Default::default() };
    let mut reader = stream.as_slice();
    brotli::BrotliCompress(&mut reader, &mut compressed, &params)?;

    let total_len = HEADER_LEN + directory.len() + compressed.len();
    let mut out = BytesMut::with_capacity(total_len);
    out.put_u32(SIGNATURE);
    out.put_u32(flavor);
    out.put_u32(total_len as u32);
    out.put_u16(tables.len() as u16);
    out.put_u16(0); // reserved
    out.put_u32(total_sfnt_size(&tables));
    out.put_u32(compressed.len() as u32);
    out.put_u16(1); // majorVersion
    out.put_u16(0); // minorVersion
    out.put_u32(0); // metaOffset
    out.put_u32(0); // metaLength
    out.put_u32(0); // metaOrigLength
    out.put_u32(0); // privOffset
    out.put_u32(0); // privLength
    out.extend_from_slice(&directory);
    out.extend_from_slice(&compressed);
    Ok(out.to_vec())
}

/// Decoders reconstruct loca from the table that follows glyf, so the
/// physical order must keep the pair adjacent even when untransformed.
fn move_loca_after_glyf(tables: &mut Vec<SfntTable<'_>>) {
    let glyf = tables.iter().position(|t| t.tag == Tag::new(b"glyf"));
    let loca = tables.iter().position(|t| t.tag == Tag::new(b"loca"));
    if let (Some(glyf), Some(loca)) = (glyf, loca) {
        let table = tables.remove(loca);
        let glyf = if loca < glyf { glyf - 1 } else { glyf };
        tables.insert(glyf + 1, table);
    }
}

fn directory_flags(tag: Tag) -> (u8, Option<[u8; 4]>) {
    let transform = if tag == Tag::new(b"glyf") || tag == Tag::new(b"loca") {
        GLYF_LOCA_NULL_TRANSFORM
    } else {
        0
    };
    match KNOWN_TAGS.iter().position(|known| tag == Tag::new(known)) {
        Some(index) => ((transform << 6) | index as u8, None),
        None => ((transform << 6) | ARBITRARY_TAG, Some(tag.to_be_bytes())),
    }
}

/// Writes a UIntBase128: 7 bits per byte, most significant first, high bit
/// set on every byte but the last, no leading zero bytes.
fn put_base128(buf: &mut BytesMut, value: u32) {
    let mut size = 1;
    let mut shifted = value;
    while shifted >= 128 {
        shifted >>= 7;
        size += 1;
    }
    for i in (0..size).rev() {
        let mut byte = ((value >> (7 * i)) & 0x7F) as u8;
        if i != 0 {
            byte |= 0x80;
        }
        buf.put_u8(byte);
    }
}
