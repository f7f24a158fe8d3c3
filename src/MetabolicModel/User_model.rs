use crate::MetabolicModel::model_ingestion::{read_flux_reactions, read_traced_reactions};
use crate::MetabolicModel::model_serializer::serialize_model;
use crate::MetabolicModel::reaction_assembler::parse_reaction;
use crate::MetabolicModel::reaction_model::{
    ModelParseError, RawReaction, Reaction, ReactionIdCounter,
};
use log::{error, info};
use prettytable::{Cell, Row, Table};
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// THE STRUCT ModelData COLLECTS ALL THE DATA OF ONE METABOLIC MODEL,
/// from the raw source tables to the fully resolved reactions.
/// So this is the API for the whole parsing pipeline:
///
/// 1) ingesting the two source tables (model.csv with isotope tracing
/// annotations, flux_model.csv with the whitelisted flux-only reactions)
/// 2) parsing every raw reaction into a position-indexed Reaction with its
/// atom transitions resolved
/// 3) serializing the resolved model into the text layout consumed by the
/// downstream flux analysis engine
///
/// The id counter is owned here and lives for the whole run: ids are never
/// reset between parses, traced and flux-only reactions share one sequence.
#[derive(Debug, Clone)]
pub struct ModelData {
    pub model_path: Option<PathBuf>, // directory with model.csv and flux_model.csv
    pub raw_reactions: Vec<RawReaction>, // traced reactions, first-seen order
    pub raw_flux_reactions: Vec<RawReaction>, // whitelisted flux-only reactions
    pub reactions: Vec<Reaction>,    // the resolved model
    pub counter: ReactionIdCounter,
}

impl ModelData {
    pub fn new() -> Self {
        Self {
            model_path: None,
            raw_reactions: Vec::new(),
            raw_flux_reactions: Vec::new(),
            reactions: Vec::new(),
            counter: ReactionIdCounter::new(),
        }
    }

    pub fn set_model_path(&mut self, path: PathBuf) {
        self.model_path = Some(path);
    }

    /////////////////////////////////INGESTION///////////////////////////////////////////
    /// reads model.csv and flux_model.csv from the model directory into raw
    /// reactions
    pub fn read_model(&mut self) -> Result<(), ModelParseError> {
        let Some(path) = &self.model_path else {
            error!("ModelData::read_model: model_path is None");
            return Err(ModelParseError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "model path is not set",
            )));
        };
        info!("______________READING MODEL TABLES________");
        self.raw_reactions = read_traced_reactions(&path.join("model.csv"))?;
        self.raw_flux_reactions = read_flux_reactions(&path.join("flux_model.csv"))?;
        info!("______________READING MODEL TABLES ENDED________");
        Ok(())
    }

    /// set raw reactions directly, bypassing the csv tables
    pub fn set_raw_reactions_directly(
        &mut self,
        raw_reactions: Vec<RawReaction>,
        raw_flux_reactions: Vec<RawReaction>,
    ) {
        self.raw_reactions = raw_reactions;
        self.raw_flux_reactions = raw_flux_reactions;
    }

    /////////////////////////////////PARSING///////////////////////////////////////////
    /// resolves every raw reaction into a Reaction; traced reactions first,
    /// then the flux-only ones. Any malformed reaction aborts the batch with
    /// its diagnosis, nothing is guessed
    pub fn parse_all_reactions(&mut self) -> Result<(), ModelParseError> {
        info!("______________PARSING REACTIONS________");
        let mut raw_reactions = std::mem::take(&mut self.raw_reactions);
        for raw in raw_reactions.iter_mut() {
            match parse_reaction(raw, &mut self.counter) {
                Ok(reaction) => self.reactions.push(reaction),
                Err(e) => {
                    error!("error parsing reaction '{}': {}", raw.name, e);
                    return Err(e);
                }
            }
        }
        let mut raw_flux_reactions = std::mem::take(&mut self.raw_flux_reactions);
        for raw in raw_flux_reactions.iter_mut() {
            match parse_reaction(raw, &mut self.counter) {
                Ok(mut reaction) => {
                    reaction.is_flux = true;
                    self.reactions.push(reaction);
                }
                Err(e) => {
                    error!("error parsing flux reaction '{}': {}", raw.name, e);
                    return Err(e);
                }
            }
        }
        info!(
            "______________PARSING REACTIONS ENDED: {} reactions________",
            self.reactions.len()
        );
        Ok(())
    }

    ///////////////////////////INPUT/OUTPUT/////////////////////////////////////////////////////////
    /// the serialized model in the fixed text layout of the downstream engine
    pub fn serialize_model(&self) -> String {
        serialize_model(&self.reactions)
    }

    pub fn write_model_to_file(&self, file_name: &str) -> Result<(), std::io::Error> {
        let mut file = File::create(file_name)?;
        file.write_all(self.serialize_model().as_bytes())?;
        println!("Resolved model has been written to {}", file_name);
        Ok(())
    }

    /// dumps the raw reactions as JSON for inspection of the ingested tables
    pub fn print_raw_reactions(&self, file_name: &str) -> Result<(), std::io::Error> {
        let json_array = json!({
            "traced": self.raw_reactions,
            "flux_only": self.raw_flux_reactions,
        });
        let mut file = File::create(file_name)?;
        file.write_all(serde_json::to_string_pretty(&json_array)?.as_bytes())?;
        println!("Raw reactions have been written to {}", file_name);
        Ok(())
    }

    /// prints the resolved reactions as a table to stdout
    pub fn pretty_print_model(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("id"),
            Cell::new("name"),
            Cell::new("flux"),
            Cell::new("reversed"),
            Cell::new("excluded"),
            Cell::new("left"),
            Cell::new("right"),
            Cell::new("transitions"),
        ]));
        for reaction in &self.reactions {
            let eq = &reaction.chemical_reaction;
            let fmt_side = |side: &Vec<crate::MetabolicModel::reaction_model::Substrate>| {
                side.iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<&str>>()
                    .join(" + ")
            };
            table.add_row(Row::new(vec![
                Cell::new(&reaction.id.to_string()),
                Cell::new(&reaction.name),
                Cell::new(if reaction.is_flux { "1" } else { "0" }),
                Cell::new(if reaction.is_reversed { "1" } else { "0" }),
                Cell::new(if reaction.is_excluded { "1" } else { "0" }),
                Cell::new(&fmt_side(&eq.left)),
                Cell::new(&fmt_side(&eq.right)),
                Cell::new(&eq.atom_transitions.len().to_string()),
            ]));
        }
        table.printstd();
    }
}

impl Default for ModelData {
    fn default() -> Self {
        Self::new()
    }
}
