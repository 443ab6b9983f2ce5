pub mod sets;
pub mod status;
