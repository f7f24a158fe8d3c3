use serde::{Deserialize, Serialize};
use thiserror::Error;

/// error types for parsing the metabolic model; every reaction-level error
/// carries the reaction name to aid diagnosis of the source tables
#[derive(Debug, Error)]
pub enum ModelParseError {
    #[error("reaction '{reaction}': malformed equation: {reason}")]
    MalformedEquation { reaction: String, reason: String },
    #[error(
        "reaction '{reaction}': two stoichiometric coefficients in a row (second one is '{token}')"
    )]
    DuplicateCoefficient { reaction: String, token: String },
    #[error("reaction '{reaction}': no unfilled substrate found for '{substance}'")]
    UnresolvableSubstance { reaction: String, substance: String },
    #[error(
        "reaction '{reaction}': atom label '{label}' must occur in exactly one other observation, found {found}"
    )]
    AmbiguousAtomLabel {
        reaction: String,
        label: String,
        found: usize,
    },
    #[error(
        "reaction '{reaction}': substrate '{substance}' at position {position} got {filled} of {size} atom transitions"
    )]
    IncompleteAtomMapping {
        reaction: String,
        substance: String,
        position: usize,
        filled: usize,
        size: usize,
    },
    #[error("reaction '{reaction}': atom observations for '{substance}' disagree on atom count")]
    InconsistentAtomCount { reaction: String, substance: String },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// one positional slot for a named substance on one side of a reaction.
/// `id` is the 0-based position within its side, `size` is the number of
/// traced atoms (0 when no isotope tracing data exists for the substance).
/// Repeated molecules of the same substance get distinct substrates, so
/// instead of 4 ATP the parsed side reads ATP + ATP + ATP + ATP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substrate {
    pub id: usize,
    pub name: String,
    pub coefficient: f64,
    pub size: usize,
}

impl Substrate {
    pub fn new(id: usize, name: String) -> Self {
        Self {
            id,
            name,
            coefficient: 1.0,
            size: 0,
        }
    }
}

/// states that the `substrate_atom`-th traced atom of the substrate at
/// `substrate_pos` becomes the `product_atom`-th atom of the substrate at
/// `product_pos` on the opposite side; all indices are 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomTransition {
    pub substrate_pos: usize,
    pub substrate_atom: usize,
    pub product_pos: usize,
    pub product_atom: usize,
}

/// fully resolved equation: ordered substrates on both sides plus the
/// complete pairing of every traced atom with its destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalEquation {
    pub left: Vec<Substrate>,
    pub right: Vec<Substrate>,
    pub atom_transitions: Vec<AtomTransition>,
}

/// reaction record for the downstream flux analysis engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: usize,
    pub name: String,
    pub is_flux: bool, // reaction from the flux-only table, stoichiometry without atom tracing
    pub is_reversed: bool,
    pub is_excluded: bool, // reactions with 0* substrates
    pub chemical_reaction: ChemicalEquation,
}

/// hands out reaction ids, strictly increasing in construction order and
/// never reset within one run; traced and flux-only reactions share one
/// sequence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReactionIdCounter {
    count: usize,
}

impl ReactionIdCounter {
    pub fn new() -> Self {
        Self { count: 0 }
    }
    pub fn next_id(&mut self) -> usize {
        let id = self.count;
        self.count += 1;
        id
    }
}

/// intermediate reaction record accumulated from the source rows.
/// `atoms` contains pairs (substrate name, its atom labels) in row order and
/// is drained by the atom transition resolver; a raw reaction is resolved
/// exactly once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawReaction {
    pub name: String,
    pub reaction: String,
    pub atoms: Vec<(String, Vec<String>)>,
}

impl RawReaction {
    pub fn new(name: String, reaction: String) -> Self {
        Self {
            name,
            reaction,
            atoms: Vec::new(),
        }
    }
}
