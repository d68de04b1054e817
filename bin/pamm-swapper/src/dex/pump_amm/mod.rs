pub mod instruction;
pub mod pda;
pub mod state;

pub use instruction::*;
pub use pda::*;
pub use state::*;
