mod build;
mod lint;
mod load;
mod types;

pub use build::*;
pub use lint::*;
pub use load::*;
pub use types::*;
