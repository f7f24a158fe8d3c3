use crate::MetabolicModel::atom_resolver::resolve_atom_transitions;
use crate::MetabolicModel::equation_parser::{parse_equation_side, split_equation};
use crate::MetabolicModel::reaction_model::{
    ChemicalEquation, ModelParseError, RawReaction, Reaction, ReactionIdCounter, Substrate,
};
use approx::relative_eq;
use log::debug;

/// parses one raw reaction into a fully resolved `Reaction`: splits the
/// equation, builds both sides, resolves the atom transitions (draining the
/// raw observation list) and assigns the next id from the counter.
/// Flux-only reactions are produced the same way; the caller marks them with
/// `is_flux` after parsing.
pub fn parse_reaction(
    raw: &mut RawReaction,
    counter: &mut ReactionIdCounter,
) -> Result<Reaction, ModelParseError> {
    debug!("parsing reaction '{}': {}", raw.name, raw.reaction);
    let (left, right, is_reversed, prefix) = split_equation(&raw.name, &raw.reaction)?;
    let (left_side, is_excluded) =
        parse_equation_side(&raw.name, &left, prefix.as_deref(), &raw.atoms)?;
    let (right_side, _) = parse_equation_side(&raw.name, &right, prefix.as_deref(), &raw.atoms)?;
    let atom_transitions = resolve_atom_transitions(raw, &left_side, &right_side)?;

    Ok(Reaction {
        id: counter.next_id(),
        name: raw.name.clone(),
        is_flux: false,
        is_reversed,
        is_excluded,
        chemical_reaction: ChemicalEquation {
            left: left_side,
            right: right_side,
            atom_transitions,
        },
    })
}

/// multiset comparison of two sides by (name, coefficient): every substrate
/// of the first side must claim a not-yet-claimed substrate of the second
/// with the same name and approximately equal coefficient; order does not
/// matter, cardinality must match exactly
pub fn is_sides_equal(first: &[Substrate], second: &[Substrate]) -> bool {
    if first.len() != second.len() {
        return false;
    }
    let mut is_found = vec![false; second.len()];
    for sub in first {
        let mut here = false;
        for (i, other) in second.iter().enumerate() {
            if !is_found[i]
                && other.name == sub.name
                && relative_eq!(sub.coefficient, other.coefficient, max_relative = 1e-9)
            {
                is_found[i] = true;
                here = true;
                break;
            }
        }
        if !here {
            return false;
        }
    }
    true
}

/// two reactions are the same if their sides match in the same orientation
/// or with both sides swapped (a reversible reaction written in either
/// direction is one reaction)
pub fn is_reactions_equal(first: &Reaction, second: &Reaction) -> bool {
    let normal = is_sides_equal(
        &first.chemical_reaction.left,
        &second.chemical_reaction.left,
    ) && is_sides_equal(
        &first.chemical_reaction.right,
        &second.chemical_reaction.right,
    );
    if normal {
        return true;
    }
    is_sides_equal(
        &first.chemical_reaction.left,
        &second.chemical_reaction.right,
    ) && is_sides_equal(
        &first.chemical_reaction.right,
        &second.chemical_reaction.left,
    )
}
