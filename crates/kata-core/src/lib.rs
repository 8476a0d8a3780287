pub mod error;
pub use error::CoreError;
pub mod delay;
pub mod motion;
pub use motion::{Car, Motion, Vehicle};
pub mod set;
pub use set::OrderedSet;
