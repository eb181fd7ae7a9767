mod geo;
pub use geo::*;
mod hash;
pub use hash::*;
mod json;
pub use json::*;
mod number;
pub use number::*;
