pub fn parser_examples(task: usize) {
    //

    match task {
        0 => {
            // PARSING A SINGLE REACTION WITH ATOM TRACING
            use crate::MetabolicModel::model_serializer::serialize_reaction;
            use crate::MetabolicModel::reaction_assembler::parse_reaction;
            use crate::MetabolicModel::reaction_model::{RawReaction, ReactionIdCounter};
            let mut counter = ReactionIdCounter::new();
            let mut raw = RawReaction::new("AKGDH".to_string(), "AKG --> SucCoA + CO2".to_string());
            raw.atoms.push((
                "AKG".to_string(),
                vec!["C1", "C2", "C3", "C4", "C5"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ));
            raw.atoms.push((
                "SucCoA".to_string(),
                vec!["C2", "C3", "C4", "C5"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ));
            raw.atoms.push(("CO2".to_string(), vec!["C1".to_string()]));

            let reaction = parse_reaction(&mut raw, &mut counter).unwrap();
            println!("parsed reaction: {:#?}", reaction);
            println!("serialized:\n{}", serialize_reaction(&reaction));
            assert_eq!(reaction.chemical_reaction.atom_transitions.len(), 5);
        }
        1 => {
            // FULL MODEL PIPELINE: csv tables -> resolved model -> text dump
            use crate::MetabolicModel::User_model::ModelData;
            use std::path::PathBuf;
            let mut model = ModelData::new();
            model.set_model_path(PathBuf::from("modelMaranas/"));
            model.read_model().unwrap();
            model.parse_all_reactions().unwrap();
            model.pretty_print_model();
            model.write_model_to_file("parsed_model.txt").unwrap();
        }
        2 => {
            // EQUIVALENCE OF REACTIONS WRITTEN IN OPPOSITE DIRECTIONS
            use crate::MetabolicModel::reaction_assembler::{is_reactions_equal, parse_reaction};
            use crate::MetabolicModel::reaction_model::{RawReaction, ReactionIdCounter};
            let mut counter = ReactionIdCounter::new();
            let mut fwd = RawReaction::new("fwd".to_string(), "A + 2 B --> C".to_string());
            let mut rev = RawReaction::new("rev".to_string(), "C <==> A + 2 B".to_string());
            let fwd = parse_reaction(&mut fwd, &mut counter).unwrap();
            let rev = parse_reaction(&mut rev, &mut counter).unwrap();
            println!("equivalent: {}", is_reactions_equal(&fwd, &rev));
        }
        _ => {
            println!("there is no such task");
        }
    }
}
