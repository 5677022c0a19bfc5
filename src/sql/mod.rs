//! Safe SQL builder: identifiers from resource constants only, values as parameters.

mod builder;
mod fields;
pub mod params;
pub use builder::*;
pub use fields::Fields;
pub use params::*;
