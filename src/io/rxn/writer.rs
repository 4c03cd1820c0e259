use crate::io::{error::Error, marker, mol};
use crate::model::reaction::Reaction;
use std::io::Write;

/// Writes a `$RXN` block. The agent count is only emitted when agents exist.
pub fn write<W: Write>(mut writer: W, reaction: &Reaction) -> Result<(), Error> {
    writeln!(writer, "{}", marker::RXN)?;
    writeln!(writer, "{}", reaction.header.name)?;
    writeln!(writer, "{}", reaction.header.program)?;
    writeln!(writer, "{}", reaction.header.comment)?;

    write!(
        writer,
        "{:>3}{:>3}",
        reaction.reactants.len(),
        reaction.products.len()
    )?;
    if !reaction.agents.is_empty() {
        write!(writer, "{:>3}", reaction.agents.len())?;
    }
    writeln!(writer)?;

    for (_, molecule) in reaction.iter_templates() {
        writeln!(writer, "{}", marker::MOL)?;
        mol::writer::write(&mut writer, molecule)?;
    }
    Ok(())
}
