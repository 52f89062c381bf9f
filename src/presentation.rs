// src/presentation.rs
use std::io::{self, Write};

use simple_ls_domain::{Listing, ResolvedEntry};

/// Writes one line per entry in the layout the listing was shaped for.
pub fn write_listing<W: Write>(out: &mut W, listing: &Listing) -> io::Result<()> {
    match listing {
        Listing::Short(names) => {
            for name in names {
                writeln!(out, " {name}")?;
            }
        }
        Listing::Long(entries) => {
            for entry in entries {
                writeln!(out, "{}", long_line(entry))?;
            }
        }
        Listing::SizeTable(entries) => {
            for entry in entries {
                writeln!(out, "{}", size_line(entry))?;
            }
        }
    }
    Ok(())
}

/// `drwxr-xr-x 2 owner group 4096 Jan 05 13:47 name`
pub fn long_line(entry: &ResolvedEntry) -> String {
    let meta = &entry.metadata;
    format!(
        "{} {} {} {} {} {} {}",
        meta.mode_string(),
        meta.link_count,
        meta.owner,
        meta.group,
        meta.size,
        meta.modified_at,
        entry.name
    )
}

/// `name 4096`
pub fn size_line(entry: &ResolvedEntry) -> String {
    format!("{} {}", entry.name, entry.metadata.size)
}
