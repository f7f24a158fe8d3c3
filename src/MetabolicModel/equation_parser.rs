use crate::MetabolicModel::reaction_model::{ModelParseError, Substrate};

/// splits a raw equation string into its left and right parts.
/// Separators are tried in fixed priority order: '-->' and '->' mark an
/// irreversible reaction, '<==>' a reversible one; first match by scan
/// position wins. A left side starting with '[' carries a compartment tag
/// ("[c] tag : A + B --> ..."): the tag is the substring up to the first
/// space, the true left content begins after the first ':'.
/// Returns (left, right, is_reversed, compartment prefix).
pub fn split_equation(
    reaction_name: &str,
    equation: &str,
) -> Result<(String, String, bool, Option<String>), ModelParseError> {
    let (separator_pos, separator_type) = if let Some(pos) = equation.find("-->") {
        (pos, "-->")
    } else if let Some(pos) = equation.find("->") {
        (pos, "->")
    } else if let Some(pos) = equation.find("<==>") {
        (pos, "<==>")
    } else {
        return Err(ModelParseError::MalformedEquation {
            reaction: reaction_name.to_string(),
            reason: "no reaction separator ('-->', '->' or '<==>') found".to_string(),
        });
    };

    let mut left = equation[..separator_pos].to_string();
    let right = equation[separator_pos + separator_type.len()..].to_string();
    let is_reversed = separator_type == "<==>";

    let mut prefix = None;
    if left.starts_with('[') {
        let tag = left.split(' ').next().unwrap_or("").to_string();
        let prefix_end = match left.find(':') {
            Some(pos) => pos,
            None => {
                return Err(ModelParseError::MalformedEquation {
                    reaction: reaction_name.to_string(),
                    reason: "compartment tag without ':' on the left side".to_string(),
                });
            }
        };
        left = left[prefix_end + 1..].to_string();
        prefix = Some(tag);
    }
    Ok((left, right, is_reversed, prefix))
}

/// turns one side of an equation into the ordered substrate sequence.
/// Tokens are split on single spaces; '+' and empty tokens are skipped; a
/// numeric token is held as the coefficient of the next substance; a '0*'
/// prefix marks an excluded metabolite (stripped from the name); the
/// compartment prefix, if any, is appended to every substance name.
/// A substance with atom observations is expanded into one substrate per
/// observed molecule with `size` set to the shared atom count; stoichiometric
/// coefficients and atom tracking are mutually exclusive, so the pending
/// coefficient is discarded for traced substances.
/// Returns the substrates and whether the side contains an excluded substrate.
pub fn parse_equation_side(
    reaction_name: &str,
    side: &str,
    prefix: Option<&str>,
    raw_atoms: &[(String, Vec<String>)],
) -> Result<(Vec<Substrate>, bool), ModelParseError> {
    let mut result: Vec<Substrate> = Vec::new();
    let mut is_excluded = false;
    let mut last_coefficient: Option<f64> = None;

    for token in side.split(' ') {
        if token == "+" || token.is_empty() {
            continue;
        }
        if let Ok(value) = token.parse::<f64>() {
            if last_coefficient.is_some() {
                return Err(ModelParseError::DuplicateCoefficient {
                    reaction: reaction_name.to_string(),
                    token: token.to_string(),
                });
            }
            last_coefficient = Some(value);
            continue;
        }

        let mut substance_name = token.to_string();
        if let Some(stripped) = substance_name.strip_prefix("0*") {
            substance_name = stripped.to_string();
            is_excluded = true;
        }
        if let Some(prefix) = prefix {
            substance_name.push_str(prefix);
        }

        let observed: Vec<&(String, Vec<String>)> = raw_atoms
            .iter()
            .filter(|(name, _)| *name == substance_name)
            .collect();
        if observed.is_empty() {
            let mut substrate = Substrate::new(result.len(), substance_name);
            if let Some(coefficient) = last_coefficient {
                substrate.coefficient = coefficient;
            }
            result.push(substrate);
        } else {
            let size = observed[0].1.len();
            if observed.iter().any(|(_, labels)| labels.len() != size) {
                return Err(ModelParseError::InconsistentAtomCount {
                    reaction: reaction_name.to_string(),
                    substance: substance_name,
                });
            }
            // one substrate per observed molecule, coefficient stays 1.0
            for _ in 0..observed.len() {
                let mut substrate = Substrate::new(result.len(), substance_name.clone());
                substrate.size = size;
                result.push(substrate);
            }
        }
        last_coefficient = None;
    }
    Ok((result, is_excluded))
}
