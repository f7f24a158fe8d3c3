#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod MetabolicModel;

use Examples::parser_examples::parser_examples;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
    //
    let task: usize = 0;
    parser_examples(task);
}
