//! Renders the resolved model into the fixed text layout consumed by the
//! flux simulation engine. The format is positional, field order is part of
//! the contract:
//!
//! ```text
//! <reaction_count>
//! then per reaction:
//! <id>
//! <name>
//! <is_flux: 0|1>
//! <is_reversed: 0|1>
//! <is_excluded: 0|1>
//! <left_count>
//! <id> <coefficient> <name> <size>      (left_count times)
//! <right_count>
//! <id> <coefficient> <name> <size>      (right_count times)
//! <transition_count>
//! <substrate_pos> <substrate_atom> <product_pos> <product_atom>
//! ```
//!
//! Coefficients always carry a decimal point ("1.0", not "1").

use crate::MetabolicModel::reaction_model::{AtomTransition, Reaction, Substrate};

pub fn serialize_substrate(substrate: &Substrate) -> String {
    format!(
        "{} {:?} {} {}",
        substrate.id, substrate.coefficient, substrate.name, substrate.size
    )
}

pub fn serialize_transition(transition: &AtomTransition) -> String {
    format!(
        "{} {} {} {}",
        transition.substrate_pos,
        transition.substrate_atom,
        transition.product_pos,
        transition.product_atom
    )
}

pub fn serialize_reaction(reaction: &Reaction) -> String {
    let mut res = String::new();
    res.push_str(&format!("{}\n", reaction.id));
    res.push_str(&format!("{}\n", reaction.name));
    res.push_str(&format!("{}\n", reaction.is_flux as u8));
    res.push_str(&format!("{}\n", reaction.is_reversed as u8));
    res.push_str(&format!("{}\n", reaction.is_excluded as u8));
    res.push_str(&format!("{}\n", reaction.chemical_reaction.left.len()));
    for sub in &reaction.chemical_reaction.left {
        res.push_str(&serialize_substrate(sub));
        res.push('\n');
    }
    res.push_str(&format!("{}\n", reaction.chemical_reaction.right.len()));
    for sub in &reaction.chemical_reaction.right {
        res.push_str(&serialize_substrate(sub));
        res.push('\n');
    }
    res.push_str(&format!(
        "{}\n",
        reaction.chemical_reaction.atom_transitions.len()
    ));
    for transition in &reaction.chemical_reaction.atom_transitions {
        res.push_str(&serialize_transition(transition));
        res.push('\n');
    }
    res
}

/// the full document: reaction count, then one block per reaction in id
/// order, blocks separated by a blank line
pub fn serialize_model(reactions: &[Reaction]) -> String {
    let mut result = format!("{}\n", reactions.len());
    for reaction in reactions {
        result.push_str(&serialize_reaction(reaction));
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MetabolicModel::reaction_assembler::parse_reaction;
    use crate::MetabolicModel::reaction_model::{RawReaction, ReactionIdCounter};

    #[test]
    fn test_serialize_substrate_keeps_decimal_point() {
        let mut sub = Substrate::new(0, "A".to_string());
        assert_eq!(serialize_substrate(&sub), "0 1.0 A 0");
        sub.coefficient = 2.5;
        sub.size = 3;
        sub.id = 4;
        assert_eq!(serialize_substrate(&sub), "4 2.5 A 3");
    }

    #[test]
    fn test_serialize_untraced_reaction_layout() {
        let mut counter = ReactionIdCounter::new();
        let mut raw = RawReaction::new("v1".to_string(), "A --> B".to_string());
        let reaction = parse_reaction(&mut raw, &mut counter).unwrap();
        let expected = "0\nv1\n0\n0\n0\n1\n0 1.0 A 0\n1\n0 1.0 B 0\n0\n";
        assert_eq!(serialize_reaction(&reaction), expected);
    }

    #[test]
    fn test_serialize_model_prepends_count_and_separates_blocks() {
        let mut counter = ReactionIdCounter::new();
        let mut raw1 = RawReaction::new("v1".to_string(), "A --> B".to_string());
        let mut raw2 = RawReaction::new("v2".to_string(), "B <==> C".to_string());
        let reactions = vec![
            parse_reaction(&mut raw1, &mut counter).unwrap(),
            parse_reaction(&mut raw2, &mut counter).unwrap(),
        ];
        let text = serialize_model(&reactions);
        assert!(text.starts_with("2\n0\nv1\n"));
        assert!(text.contains("\n\n1\nv2\n"));
        assert!(text.ends_with("0\n\n"));
    }

    #[test]
    fn test_serialized_model_roundtrips_counts() {
        // the format is a direct dump of the resolved model: reading the
        // counts back recovers the same shape
        let mut counter = ReactionIdCounter::new();
        let mut raw = RawReaction::new("v1".to_string(), "A --> B + C".to_string());
        raw.atoms
            .push(("A".to_string(), vec!["x".to_string(), "y".to_string()]));
        raw.atoms.push(("B".to_string(), vec!["x".to_string()]));
        raw.atoms.push(("C".to_string(), vec!["y".to_string()]));
        let reaction = parse_reaction(&mut raw, &mut counter).unwrap();
        let text = serialize_model(std::slice::from_ref(&reaction));

        let mut lines = text.lines();
        let reaction_count: usize = lines.next().unwrap().parse().unwrap();
        assert_eq!(reaction_count, 1);
        let id: usize = lines.next().unwrap().parse().unwrap();
        assert_eq!(id, reaction.id);
        assert_eq!(lines.next().unwrap(), "v1");
        assert_eq!(lines.next().unwrap(), "0"); // is_flux
        assert_eq!(lines.next().unwrap(), "0"); // is_reversed
        assert_eq!(lines.next().unwrap(), "0"); // is_excluded
        let left_count: usize = lines.next().unwrap().parse().unwrap();
        assert_eq!(left_count, reaction.chemical_reaction.left.len());
        for sub in &reaction.chemical_reaction.left {
            let line = lines.next().unwrap();
            let fields: Vec<&str> = line.split(' ').collect();
            assert_eq!(fields[0].parse::<usize>().unwrap(), sub.id);
            assert_eq!(fields[1].parse::<f64>().unwrap(), sub.coefficient);
            assert_eq!(fields[2], sub.name);
            assert_eq!(fields[3].parse::<usize>().unwrap(), sub.size);
        }
        let right_count: usize = lines.next().unwrap().parse().unwrap();
        assert_eq!(right_count, reaction.chemical_reaction.right.len());
        for _ in 0..right_count {
            lines.next().unwrap();
        }
        let transition_count: usize = lines.next().unwrap().parse().unwrap();
        assert_eq!(
            transition_count,
            reaction.chemical_reaction.atom_transitions.len()
        );
        for transition in &reaction.chemical_reaction.atom_transitions {
            let line = lines.next().unwrap();
            let fields: Vec<usize> = line
                .split(' ')
                .map(|f| f.parse::<usize>().unwrap())
                .collect();
            assert_eq!(
                fields,
                vec![
                    transition.substrate_pos,
                    transition.substrate_atom,
                    transition.product_pos,
                    transition.product_atom
                ]
            );
        }
    }
}
