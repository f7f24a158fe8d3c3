pub mod parser_examples;
