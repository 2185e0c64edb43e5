pub mod generator;
pub mod graph;
pub mod teller;
