mod addresses;
mod bytecode;
mod roles;

pub use addresses::*;
pub use bytecode::*;
pub use roles::*;
