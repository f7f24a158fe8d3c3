use crate::MetabolicModel::reaction_model::{
    AtomTransition, ModelParseError, RawReaction, Substrate,
};
use std::collections::HashMap;

// Maps substrate position to the number of atom slots already assigned on it;
// an absent key means 0.
type FillCounters = HashMap<usize, usize>;

/// finds the next substrate with the given name whose atom slots are not yet
/// fully assigned, scanning in position order. Several substrates may share a
/// name in one reaction; the first one with free slots wins, which is the
/// tie-break that assigns repeated-molecule instances deterministically.
/// On a match the fill counter is advanced; the returned pair is
/// (substrate position, 0-based atom index before the advance).
fn find_substrate(
    side: &[Substrate],
    substrate_name: &str,
    pos_to_fill: &mut FillCounters,
) -> Option<(usize, usize)> {
    for (sub_pos, sub) in side.iter().enumerate() {
        if sub.name == substrate_name {
            let filled = pos_to_fill.entry(sub_pos).or_insert(0);
            if *filled < sub.size {
                let atom_index = *filled;
                *filled += 1;
                return Some((sub_pos, atom_index));
            }
        }
    }
    None
}

// Every tracked substrate must end up with exactly `size` assigned slots;
// a mismatch means the source annotation rows are malformed.
fn check_atom_transitions(
    reaction_name: &str,
    side: &[Substrate],
    pos_to_fill: &FillCounters,
) -> Result<(), ModelParseError> {
    for (pos, sub) in side.iter().enumerate() {
        if sub.size > 0 {
            let filled = pos_to_fill.get(&pos).copied().unwrap_or(0);
            if filled != sub.size {
                return Err(ModelParseError::IncompleteAtomMapping {
                    reaction: reaction_name.to_string(),
                    substance: sub.name.clone(),
                    position: pos,
                    filled,
                    size: sub.size,
                });
            }
        }
    }
    Ok(())
}

/// consumes the raw reaction's atom observations and pairs every traced atom
/// with its destination on the opposite side.
///
/// The observations arrive as an unordered bag (the source table is
/// assembled per-row with no positional bookkeeping), so the resolver works
/// greedily: take the first observation with labels left, claim the next
/// unfilled substrate of that name (left side first, then right), pop its
/// first label and find the unique other observation still holding the same
/// label, which names the destination substance on the opposite side.
/// Each iteration removes exactly one label from the bag, so the loop
/// terminates after as many steps as there are traced atoms. The algorithm
/// never backtracks; input that would require it is rejected as malformed.
pub fn resolve_atom_transitions(
    raw: &mut RawReaction,
    left_side: &[Substrate],
    right_side: &[Substrate],
) -> Result<Vec<AtomTransition>, ModelParseError> {
    let mut atom_transitions = Vec::new();
    let mut left_pos_to_fill: FillCounters = HashMap::new();
    let mut right_pos_to_fill: FillCounters = HashMap::new();

    loop {
        if raw.atoms.is_empty() {
            break;
        }
        if raw.atoms[0].1.is_empty() {
            // fully drained as a destination of earlier transitions
            raw.atoms.remove(0);
            continue;
        }
        let substrate_name = raw.atoms[0].0.clone();
        let (is_left, sub_position, sub_atom) =
            match find_substrate(left_side, &substrate_name, &mut left_pos_to_fill) {
                Some((pos, atom)) => (true, pos, atom),
                None => match find_substrate(right_side, &substrate_name, &mut right_pos_to_fill) {
                    Some((pos, atom)) => (false, pos, atom),
                    None => {
                        return Err(ModelParseError::UnresolvableSubstance {
                            reaction: raw.name.clone(),
                            substance: substrate_name,
                        });
                    }
                },
            };

        let atom = raw.atoms[0].1.remove(0);
        // the popped label must survive in exactly one other observation,
        // which names the destination substance
        let matches: Vec<usize> = raw
            .atoms
            .iter()
            .enumerate()
            .filter(|(_, (_, labels))| labels.contains(&atom))
            .map(|(entry, _)| entry)
            .collect();
        if matches.len() != 1 {
            return Err(ModelParseError::AmbiguousAtomLabel {
                reaction: raw.name.clone(),
                label: atom,
                found: matches.len(),
            });
        }
        let product_entry = matches[0];
        let product_name = raw.atoms[product_entry].0.clone();
        if let Some(label_pos) = raw.atoms[product_entry].1.iter().position(|l| *l == atom) {
            raw.atoms[product_entry].1.remove(label_pos);
        }

        let opposite = if is_left {
            find_substrate(right_side, &product_name, &mut right_pos_to_fill)
        } else {
            find_substrate(left_side, &product_name, &mut left_pos_to_fill)
        };
        let (prod_position, prod_atom) = match opposite {
            Some(found) => found,
            None => {
                return Err(ModelParseError::UnresolvableSubstance {
                    reaction: raw.name.clone(),
                    substance: product_name,
                });
            }
        };

        atom_transitions.push(AtomTransition {
            substrate_pos: sub_position,
            substrate_atom: sub_atom,
            product_pos: prod_position,
            product_atom: prod_atom,
        });
    }

    check_atom_transitions(&raw.name, left_side, &left_pos_to_fill)?;
    check_atom_transitions(&raw.name, right_side, &right_pos_to_fill)?;
    Ok(atom_transitions)
}
