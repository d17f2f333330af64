//! View functions, one module per surface.

pub mod roster;
pub mod user_form;
