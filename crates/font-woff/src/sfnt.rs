//! Shared sfnt table extraction for the container encoders.

use read_fonts::{FontRef, types::Tag};

use crate::error::{Error, Result};

/// One table lifted out of the source font, directory metadata included.
pub(crate) struct SfntTable<'a> {
    pub tag: Tag,
    pub checksum: u32,
    pub data: &'a [u8],
}

impl SfntTable<'_> {
    /// Length of the table padded to the sfnt 4-byte boundary.
    pub fn padded_len(&self) -> u32 {
        (self.data.len() as u32 + 3) & !3
    }
}

/// Reads the sfnt version and all tables of `data`, sorted by tag.
pub(crate) fn read_tables(data: &[u8]) -> Result<(u32, Vec<SfntTable<'_>>)> {
    let font = FontRef::new(data)?;
    let flavor = font.table_directory.sfnt_version();

    let mut tables = Vec::with_capacity(font.table_directory.num_tables() as usize);
    for record in font.table_directory.table_records() {
        let tag = record.tag();
        let data = font.table_data(tag).ok_or(Error::MissingTable(tag))?;
        tables.push(SfntTable { tag, checksum: record.checksum(), data: data.as_bytes() });
    }

    if tables.is_empty() {
        return Err(Error::NoTables);
    }

    // The sfnt directory is already sorted, but both container formats
    // require ascending tag order, so enforce it here.
    tables.sort_by_key(|table| table.tag);
    Ok((flavor, tables))
}

/// Size of the sfnt file the container advertises it would unpack to.
pub(crate) fn total_sfnt_size(tables: &[SfntTable<'_>]) -> u32 {
    let directory = 12 + 16 * tables.len() as u32;
    tables.iter().fold(directory, |size, table| size + table.padded_len())
}
