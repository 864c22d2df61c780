//! API models

pub mod assessment;
pub mod resource;

pub use assessment::*;
pub use resource::*;
