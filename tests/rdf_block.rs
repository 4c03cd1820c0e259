use rdf_forge::io::{ErrorKind, rdf};
use rdf_forge::{
    BondType, ParseOptions, RdfReader, Reaction, Role, is_reaction_block, parse_molecule,
    parse_reaction, parse_reactions_from_block,
};

const SAMPLE: &str = include_str!("data/three_molecule.rdf");

/// The sample's `$RFMT` record without the container header.
fn sample_record() -> &'static str {
    &SAMPLE[SAMPLE.find("$RFMT").expect("sample has a record")..]
}

fn header() -> String {
    String::from("$RDFILE 1\n$DATM 10/19/2026 09:30\n")
}

#[test]
fn classifies_sample_and_prose() {
    assert!(is_reaction_block(SAMPLE));
    assert!(!is_reaction_block("not an RDF block"));
    assert!(!is_reaction_block(""));
}

#[test]
fn extracts_sample_reaction() {
    let container = parse_reactions_from_block(SAMPLE, &ParseOptions::default()).expect("parse");
    assert!(container.is_reaction);
    assert_eq!(container.date_stamp.as_deref(), Some("12/9/2025, 1:46:53 PM"));
    assert_eq!(container.reactions.len(), 1);
    assert!(container.diagnostics.is_clean());

    let reaction = &container.reactions[0];
    assert_eq!(reaction.header.program, "RDKit");
    assert_eq!(reaction.num_reactant_templates(), 2);
    assert_eq!(reaction.num_product_templates(), 1);
    assert_eq!(reaction.num_agent_templates(), 0);

    let sizes: Vec<_> = reaction
        .iter_templates()
        .map(|(role, m)| (role, m.atom_count(), m.bond_count()))
        .collect();
    assert_eq!(
        sizes,
        vec![
            (Role::Reactant, 10, 10),
            (Role::Reactant, 5, 4),
            (Role::Product, 15, 15),
        ]
    );

    let acid = &reaction.reactants[1];
    assert_eq!(acid.program, "RDKit          2D");
    assert_eq!(acid.atoms[3].symbol, "O");
    assert_eq!(acid.atoms[0].position, [6.6267, 1.2014, 0.0]);
    assert_eq!(acid.bonds[2].bond_type, BondType::Double);
    assert_eq!((acid.bonds[2].begin, acid.bonds[2].end), (3, 4));

    let product = &reaction.products[0];
    assert_eq!(product.atoms.iter().filter(|a| a.symbol == "O").count(), 2);
    assert_eq!((product.bonds[14].begin, product.bonds[14].end), (15, 5));
}

#[test]
fn bond_endpoints_are_within_their_molecule() {
    let container = parse_reactions_from_block(SAMPLE, &ParseOptions::default()).expect("parse");
    for (_, molecule) in container.reactions[0].iter_templates() {
        for bond in &molecule.bonds {
            assert!((1..=molecule.atom_count()).contains(&bond.begin));
            assert!((1..=molecule.atom_count()).contains(&bond.end));
            assert_ne!(bond.begin, bond.end);
        }
    }
}

#[test]
fn parsing_is_repeatable() {
    let first = parse_reactions_from_block(SAMPLE, &ParseOptions::default()).expect("parse");
    let second = parse_reactions_from_block(SAMPLE, &ParseOptions::default()).expect("parse");
    assert_eq!(first.reactions, second.reactions);
    assert_eq!(first.date_stamp, second.date_stamp);
}

#[test]
fn reaction_and_molecule_entry_points_agree_with_extraction() {
    let container = parse_reactions_from_block(SAMPLE, &ParseOptions::default()).expect("parse");
    let rxn_text = &SAMPLE[SAMPLE.find("$RXN").expect("rxn marker")..];

    let reaction = parse_reaction(rxn_text, &ParseOptions::default()).expect("parse rxn");
    assert_eq!(reaction, container.reactions[0]);

    let start = rxn_text.find("$MOL").expect("mol marker");
    let end = start + rxn_text[start..].find("M  END").expect("terminator") + "M  END\n".len();
    let molecule = parse_molecule(&rxn_text[start..end]).expect("parse mol");
    assert_eq!(molecule, container.reactions[0].reactants[0]);
}

#[test]
fn truncated_record_fails_strict_and_is_skipped_permissive() {
    let cut: String = SAMPLE.lines().take(80).map(|l| format!("{l}\n")).collect();

    let err = parse_reactions_from_block(&cut, &ParseOptions::strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedBlock);
    assert_eq!(err.record_index(), Some(0));
    assert_eq!(err.line(), Some(80));
    assert!(err.to_string().starts_with("reaction record 0 starting at line 4"));

    let container = parse_reactions_from_block(&cut, &ParseOptions::permissive()).expect("parse");
    assert!(container.reactions.is_empty());
    assert_eq!(container.diagnostics.skipped_count(), 1);
    assert_eq!(container.diagnostics.skipped[0].lines, 4..=80);
}

#[test]
fn record_cut_after_the_last_atom_line_is_truncated() {
    let cut: String = SAMPLE.lines().take(69).map(|l| format!("{l}\n")).collect();
    assert!(cut.ends_with("0  0  0  0  0  0  0  0  0  0  0  0\n"));

    let err = parse_reactions_from_block(&cut, &ParseOptions::strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedBlock);
    assert_eq!(err.record_index(), Some(0));
    assert_eq!(err.line(), Some(69));

    let container = parse_reactions_from_block(&cut, &ParseOptions::permissive()).expect("parse");
    assert!(container.reactions.is_empty());
    assert_eq!(container.diagnostics.skipped_count(), 1);
    assert_eq!(container.diagnostics.skipped[0].lines, 4..=69);
}

#[test]
fn permissive_extraction_keeps_good_records() {
    let broken = sample_record().replacen("  2  1\n", "  1  1\n", 1);
    let text = header() + sample_record() + &broken + sample_record();

    let err = parse_reactions_from_block(&text, &ParseOptions::strict()).unwrap_err();
    assert_eq!(err.record_index(), Some(1));
    assert_eq!(err.kind(), ErrorKind::CountMismatch);

    let container = parse_reactions_from_block(&text, &ParseOptions::permissive()).expect("parse");
    assert_eq!(container.reactions.len(), 2);
    assert_eq!(container.diagnostics.skipped_count(), 1);
    assert_eq!(container.diagnostics.skipped[0].index, 1);
    assert!(container.reactions.iter().all(|r| r.num_reactant_templates() == 2));
}

#[test]
fn reader_is_lazy_and_honors_record_limit() {
    let text = header() + &sample_record().repeat(5);

    let mut reader = RdfReader::new(&text, &ParseOptions::default());
    let first = reader.next().expect("one record").expect("valid record");
    assert_eq!(first.num_product_templates(), 1);
    assert_eq!(reader.date_stamp(), Some("10/19/2026 09:30"));

    let options = ParseOptions::default().with_max_records(3);
    let container = parse_reactions_from_block(&text, &options).expect("parse");
    assert_eq!(container.reactions.len(), 3);
}

#[test]
fn independent_texts_parse_in_parallel() {
    let texts: Vec<String> = (1..=4)
        .map(|n| header() + &sample_record().repeat(n))
        .collect();

    let counts: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = texts
            .iter()
            .map(|text| {
                s.spawn(move || {
                    parse_reactions_from_block(text, &ParseOptions::default())
                        .map(|c| c.reactions.len())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker").expect("parse"))
            .collect()
    });

    assert_eq!(counts, vec![1, 2, 3, 4]);
}

#[test]
fn reactions_serialize_to_json() {
    let container = parse_reactions_from_block(SAMPLE, &ParseOptions::default()).expect("parse");
    let reaction = &container.reactions[0];

    let json = serde_json::to_value(reaction).expect("serialize");
    assert_eq!(json["reactants"][1]["atoms"][3]["symbol"], "O");
    assert_eq!(json["products"][0]["bonds"].as_array().map(Vec::len), Some(15));

    let back: Reaction = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back.num_reactant_templates(), 2);
    assert_eq!(back.products[0].bonds, reaction.products[0].bonds);
}

#[test]
fn written_container_parses_to_the_same_structure() {
    let container = parse_reactions_from_block(SAMPLE, &ParseOptions::default()).expect("parse");

    let mut buf = Vec::new();
    rdf::writer::write(&mut buf, &container.reactions, container.date_stamp.as_deref())
        .expect("write");
    let text = String::from_utf8(buf).expect("utf-8");
    assert!(is_reaction_block(&text));

    let reparsed = parse_reactions_from_block(&text, &ParseOptions::default()).expect("reparse");
    assert_eq!(reparsed.date_stamp, container.date_stamp);

    let original = container.reactions[0].iter_templates();
    let written = reparsed.reactions[0].iter_templates();
    for ((role_a, a), (role_b, b)) in original.zip(written) {
        assert_eq!(role_a, role_b);
        assert_eq!(a.bonds, b.bonds);
        let symbols = |m: &rdf_forge::Molecule| m.atoms.iter().map(|x| x.symbol.clone()).collect::<Vec<_>>();
        assert_eq!(symbols(a), symbols(b));
    }
}
