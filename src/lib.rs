#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod MetabolicModel;
