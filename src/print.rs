//! Plain text dump of search results

use std::io::{self, Write};

use crate::model::Entry;

/// Write entries as `DN: ...` lines followed by indented `name: [values]` lines
pub fn pretty_print<W: Write>(entries: &[Entry], indent: usize, out: &mut W) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{:indent$}DN: {}", "", entry.dn, indent = indent)?;
        for attr in &entry.attributes {
            let values = attr.text_values().collect::<Vec<_>>().join(" ");
            writeln!(out, "{:indent$}{}: [{}]", "", attr.name, values, indent = indent + 2)?;
        }
    }
    Ok(())
}
