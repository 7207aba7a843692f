pub mod gate;
pub mod models;
