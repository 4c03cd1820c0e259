use crate::io::{error::Error, marker, rxn};
use crate::model::reaction::Reaction;
use std::io::Write;

/// Writes an RDF container: the `$RDFILE 1` header, an optional `$DATM`
/// stamp, then one `$RFMT` record per reaction with its data fields.
pub fn write<W: Write>(
    mut writer: W,
    reactions: &[Reaction],
    date_stamp: Option<&str>,
) -> Result<(), Error> {
    writeln!(writer, "{} 1", marker::RDFILE)?;
    if let Some(stamp) = date_stamp {
        writeln!(writer, "{} {stamp}", marker::DATM)?;
    }

    for reaction in reactions {
        writeln!(writer, "{}", marker::RFMT)?;
        rxn::writer::write(&mut writer, reaction)?;
        for field in &reaction.data {
            writeln!(writer, "{} {}", marker::DTYPE, field.name)?;
            writeln!(writer, "{} {}", marker::DATUM, field.value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::options::ParseOptions;
    use crate::io::rdf::{parse_reactions_from_block, scan};
    use crate::model::atom::Atom;
    use crate::model::molecule::Molecule;
    use crate::model::reaction::{DataField, ReactionHeader};

    fn single_atom(symbol: &str) -> Molecule {
        Molecule {
            atoms: vec![Atom::new(symbol, [0.0, 0.0, 0.0])],
            ..Molecule::default()
        }
    }

    #[test]
    fn written_container_reads_back() {
        let mut first = Reaction::assemble(
            ReactionHeader::default(),
            vec![single_atom("Na"), single_atom("Cl")],
            vec![single_atom("Na")],
            Vec::new(),
        );
        first.data.push(DataField {
            name: "RXN:NOTES".into(),
            value: "two\nlines".into(),
        });
        let second = Reaction::assemble(
            ReactionHeader::default(),
            vec![single_atom("H")],
            vec![single_atom("H")],
            Vec::new(),
        );

        let mut buf = Vec::new();
        write(&mut buf, &[first.clone(), second], Some("10/19/2026")).expect("write rdf");
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("$RDFILE 1\n$DATM 10/19/2026\n$RFMT\n$RXN\n"));
        assert!(scan::is_reaction_block(&text));

        let parsed = parse_reactions_from_block(&text, &ParseOptions::strict()).expect("read rdf");
        assert_eq!(parsed.date_stamp.as_deref(), Some("10/19/2026"));
        assert_eq!(parsed.reactions.len(), 2);
        assert_eq!(parsed.reactions[0].data, first.data);
        assert_eq!(parsed.reactions[0].reactants[1].atoms[0].symbol, "Cl");
    }

    #[test]
    fn empty_container_has_only_the_header() {
        let mut buf = Vec::new();
        write(&mut buf, &[], None).expect("write rdf");
        assert_eq!(String::from_utf8(buf).unwrap(), "$RDFILE 1\n");
    }
}
