mod browser;
mod filter;

pub use browser::*;
pub use filter::*;
