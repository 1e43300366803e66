mod alphabet;
mod decimal;
mod interface;

pub use alphabet::*;
pub use decimal::*;
pub use interface::*;
