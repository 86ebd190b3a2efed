//! WOFF 1.0 encoding (per-table zlib compression).

use std::io::Write;

use bytes::{BufMut, BytesMut};
use flate2::{Compression, write::ZlibEncoder};

use crate::{
    error::Result,
    sfnt::{read_tables, total_sfnt_size},
};

const SIGNATURE: u32 = 0x774F_4646; // 'wOFF'
const HEADER_LEN: u32 = 44;
const DIR_ENTRY_LEN: u32 = 20;

/// Wraps TrueType font data into a WOFF 1.0 container.
///
/// Each table is deflated independently and kept compressed only when that
/// actually saves space, as the format requires.
pub fn encode_woff(data: &[u8]) -> Result<Vec<u8>> {
    let (flavor, tables) = read_tables(data)?;

    let mut compressed = Vec::with_capacity(tables.len());
    for table in &tables {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(table.data)?;
        let deflated = encoder.finish()?;
        compressed.push((deflated.len() < table.data.len()).then_some(deflated));
    }

    let data_start = HEADER_LEN + tables.len() as u32 * DIR_ENTRY_LEN;
    let mut directory = BytesMut::with_capacity(tables.len() * DIR_ENTRY_LEN as usize);
    let mut body = BytesMut::new();
    for (table, deflated) in tables.iter().zip(&compressed) {
        // Tables must start on a 4-byte boundary; data_start already is one.
        while body.len() % 4 != 0 {
            body.put_u8(0);
        }
        let stored = deflated.as_deref().unwrap_or(table.data);
        directory.put_slice(&table.tag.to_be_bytes());
        directory.put_u32(data_start + body.len() as u32);
        directory.put_u32(stored.len() as u32);
        directory.put_u32(table.data.len() as u32);
        directory.put_u32(table.checksum);
        body.put_slice(stored);
    }

    let total_len = data_start + body.len() as u32;
    let mut out = BytesMut::with_capacity(total_len as usize);
    out.put_u32(SIGNATURE);
    out.put_u32(flavor);
    out.put_u32(total_len);
    out.put_u16(tables.len() as u16);
    out.put_u16(0); // reserved
    out.put_u32(total_sfnt_size(&tables));
    out.put_u16(1); // majorVersion
    out.put_u16(0); // minorVersion
    out.put_u32(0); // metaOffset
    out.put_u32(0); // metaLength
    out.put_u32(0); // metaOrigLength
    out.put_u32(0); // privOffset
    out.put_u32(0); // privLength
    out.extend_from_slice(&directory);
    out.extend_from_slice(&body);
    Ok(out.to_vec())
}
