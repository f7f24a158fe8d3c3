/// Data model of the parsed metabolic network: substrates with their side
/// positions and traced atom counts, atom transitions, chemical equations,
/// reactions with run-wide monotonic ids, and the raw reaction records
/// accumulated from the source tables.
pub mod reaction_model;
/// eng
/// The module takes a raw equation string in the three-separator notation
/// ('-->', '->' for irreversible, '<==>' for reversible) and produces the
/// ordered substrate sequences of both sides: stoichiometric coefficients,
/// the '0*' excluded-metabolite marker, compartment-tag prefixes and the
/// expansion of repeated traced molecules are all handled here.
/// In case several molecules of a substrate with tracer atoms are used in a
/// reaction, each molecule is written as a separate substrate. So instead of
/// 4 ATP the parsed side reads: ATP + ATP + ATP + ATP.
/// ----------------------------------------------------------------
/// # Examples
/// ```
/// use MetFlux::MetabolicModel::equation_parser::{split_equation, parse_equation_side};
/// let (left, right, is_reversed, prefix) = split_equation("v1", "2 A + B --> C").unwrap();
/// assert!(!is_reversed);
/// let (substrates, is_excluded) = parse_equation_side("v1", &left, prefix.as_deref(), &[]).unwrap();
/// assert_eq!(substrates.len(), 2);
/// assert_eq!(substrates[0].coefficient, 2.0);
/// assert!(!is_excluded);
/// ```
pub mod equation_parser;
/// eng
/// The algorithmic core. The module takes the per-atom observations of one
/// reaction (an unordered bag assembled row by row from the source table)
/// and the two substrate sequences, and reconstructs the bijection between
/// source and destination atom positions: which atom of which substrate
/// instance ends up where. Repeated substrate names are disambiguated by the
/// next-unfilled-occurrence rule; ambiguous or incomplete annotations are
/// rejected, never guessed.
pub mod atom_resolver;
/// Combines the equation parser and the atom resolver into full `Reaction`
/// records and provides the orientation-invariant equivalence check between
/// reactions.
/// # Examples
/// ```
/// use MetFlux::MetabolicModel::reaction_assembler::parse_reaction;
/// use MetFlux::MetabolicModel::reaction_model::{RawReaction, ReactionIdCounter};
/// let mut counter = ReactionIdCounter::new();
/// let mut raw = RawReaction::new("v1".to_string(), "A --> B + C".to_string());
/// raw.atoms.push(("A".to_string(), vec!["x".to_string(), "y".to_string()]));
/// raw.atoms.push(("B".to_string(), vec!["x".to_string()]));
/// raw.atoms.push(("C".to_string(), vec!["y".to_string()]));
/// let reaction = parse_reaction(&mut raw, &mut counter).unwrap();
/// assert_eq!(reaction.chemical_reaction.atom_transitions.len(), 2);
/// ```
pub mod reaction_assembler;
/// Serialization of the resolved model into the fixed positional text layout
/// consumed by the downstream flux analysis engine.
pub mod model_serializer;
/// Row-oriented ingestion of the two source tables: model.csv with the
/// isotope tracing annotations and flux_model.csv with the whitelisted
/// flux-only reactions.
pub mod model_ingestion;
/// processing of a whole metabolic model.
/// So you point ModelData at the model directory (or feed raw reactions
/// directly) and it ingests, parses and serializes the model in one place.
#[allow(non_snake_case)]
pub mod User_model;
