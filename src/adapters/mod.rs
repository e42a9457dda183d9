pub mod render;
pub mod tsv;
