pub mod casos_gen;
pub mod json_gen;
pub mod txt_gen;
