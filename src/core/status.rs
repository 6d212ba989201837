//! Status codes for integrators

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Status {
    Success,
    Interrupted,
}
