pub mod assets;
pub mod managed_outputs;
