mod outcome;
pub use outcome::{Outcome, Rejection};
mod quote;
pub use quote::Quote;
mod symbol;
pub use symbol::Symbol;
