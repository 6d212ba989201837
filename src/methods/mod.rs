// Numerical methods

pub mod rk;
pub mod settings;
