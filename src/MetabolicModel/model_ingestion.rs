use crate::MetabolicModel::reaction_model::{ModelParseError, RawReaction};
use csv::ReaderBuilder;
use log::{info, warn};
use std::path::Path;

/// reactions of the secondary flux table which enter the model with their
/// stoichiometry and direction only; no isotope tracing applies to them
pub const ONLY_FLUX_REACTIONS: &[&str] = &[
    "PPA",
    "DPCOAK",
    "NADK",
    "NADS1",
    "SULRi",
    "DM_4HBA",
    "DM_HMFURN",
    "biomass_out",
    "EX_ca2(e)",
    "EX_cl(e)",
    "EX_cobalt2(e)",
    "EX_cu2(e)",
    "EX_fe2(e)",
    "EX_h(e)",
    "EX_h2(e)",
    "EX_h2o(e)",
    "EX_k(e)",
    "EX_mg2(e)",
    "EX_mn2(e)",
    "EX_mobd(e)",
    "EX_nh4(e)",
    "o2_in",
    "EX_pi(e)",
    "EX_so4(e)",
    "EX_zn2(e)",
    "CAt6pp",
    "CLt3_2pp",
    "COBALT2tpp",
    "CU2tpp",
    "FE2tpp",
    "FEROpp",
    "Kt2pp",
    "MG2tpp",
    "MN2t3pp",
    "MN2tpp",
    "NAt3_1p5pp",
    "NAt3_2pp",
    "NAt3pp",
    "NH4tpp",
    "NI2t3pp",
    "NI2tpp",
    "O2tpp",
    "PIt2rpp",
    "ZN2t3pp",
    "ZN2tpp",
    "CYTBD2pp",
    "CYTBDpp",
    "CYTBO3_4pp",
    "NADH10",
    "NADH16pp",
    "NADH17pp",
    "NADH5",
    "NADPHQR2",
    "NADPHQR3",
    "NADTRHD",
    "THD2pp",
    "TRDR",
    "H2Otpp",
    "H2tpp",
    "MNt2pp",
    "H2Otex",
    "CA2tex",
    "CLtex",
    "COBALT2tex",
    "CU2tex",
    "FE2tex",
    "FE3tex",
    "H2tex",
    "Htex",
    "Ktex",
    "MG2tex",
    "MNtex",
    "MOBDtex",
    "NH4tex",
    "O2tex",
    "PItex",
    "SO4tex",
    "Zn2tex",
    "CAT",
];

pub fn check_path_exists(path: &Path) -> Result<(), ModelParseError> {
    if !path.exists() {
        warn!("no file found on: {}", path.display());
        return Err(ModelParseError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no file found on: {}", path.display()),
        )));
    }
    Ok(())
}

/// reads the primary model table and groups its rows into raw reactions.
/// Expected columns (header row skipped): 0 - comma-joined atom labels,
/// 2 - substrate name, 4 - equation string, 5 - reaction name. Rows sharing
/// a reaction name are one reaction: the first row fixes the equation
/// string, every row appends one (substrate, labels) atom observation.
/// First-seen order of reaction names is preserved.
pub fn read_traced_reactions(path: &Path) -> Result<Vec<RawReaction>, ModelParseError> {
    check_path_exists(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut raw_reactions: Vec<RawReaction> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let labels: Vec<String> = record
            .get(0)
            .unwrap_or("")
            .split(',')
            .map(|label| label.to_string())
            .collect();
        let substrate = record.get(2).unwrap_or("").to_string();
        let equation = record.get(4).unwrap_or("").to_string();
        let name = record.get(5).unwrap_or("").to_string();

        let index = match raw_reactions.iter().position(|raw| raw.name == name) {
            Some(index) => index,
            None => {
                raw_reactions.push(RawReaction::new(name, equation));
                raw_reactions.len() - 1
            }
        };
        raw_reactions[index].atoms.push((substrate, labels));
    }
    info!(
        "collected {} raw reactions from {}",
        raw_reactions.len(),
        path.display()
    );
    Ok(raw_reactions)
}

/// reads the secondary flux table (no header row) and keeps only the
/// whitelisted flux-only reactions. Expected columns: 0 - reaction name,
/// 2 - equation string. Kept reactions get a '_flux' name suffix and carry
/// no atom observations.
pub fn read_flux_reactions(path: &Path) -> Result<Vec<RawReaction>, ModelParseError> {
    check_path_exists(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut raw_reactions = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(0).unwrap_or("");
        if ONLY_FLUX_REACTIONS.contains(&name) {
            let equation = record.get(2).unwrap_or("").to_string();
            raw_reactions.push(RawReaction::new(format!("{}_flux", name), equation));
        }
    }
    info!(
        "collected {} flux-only reactions from {}",
        raw_reactions.len(),
        path.display()
    );
    Ok(raw_reactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_traced_reactions_groups_rows_by_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("model.csv");
        fs::write(
            &path,
            "atoms,unused,substrate,side,reaction,name\n\
             \"x,y\",,A,reactant,A --> B + C,v1\n\
             x,,B,product,A --> B + C,v1\n\
             y,,C,product,A --> B + C,v1\n\
             z,,D,reactant,D --> E,v2\n\
             z,,E,product,D --> E,v2\n",
        )
        .unwrap();

        let raw_reactions = read_traced_reactions(&path).unwrap();
        assert_eq!(raw_reactions.len(), 2);
        assert_eq!(raw_reactions[0].name, "v1");
        assert_eq!(raw_reactions[0].reaction, "A --> B + C");
        assert_eq!(
            raw_reactions[0].atoms,
            vec![
                (
                    "A".to_string(),
                    vec!["x".to_string(), "y".to_string()]
                ),
                ("B".to_string(), vec!["x".to_string()]),
                ("C".to_string(), vec!["y".to_string()]),
            ]
        );
        assert_eq!(raw_reactions[1].name, "v2");
        assert_eq!(raw_reactions[1].atoms.len(), 2);
    }

    #[test]
    fn test_read_flux_reactions_applies_whitelist_and_suffix() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flux_model.csv");
        fs::write(
            &path,
            "PPA,,A --> B\n\
             not_whitelisted,,C --> D\n\
             CAT,,E <==> F\n",
        )
        .unwrap();

        let raw_reactions = read_flux_reactions(&path).unwrap();
        assert_eq!(raw_reactions.len(), 2);
        assert_eq!(raw_reactions[0].name, "PPA_flux");
        assert_eq!(raw_reactions[0].reaction, "A --> B");
        assert!(raw_reactions[0].atoms.is_empty());
        assert_eq!(raw_reactions[1].name, "CAT_flux");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.csv");
        let err = read_traced_reactions(&path).unwrap_err();
        assert!(matches!(err, ModelParseError::IoError(_)));
    }
}
