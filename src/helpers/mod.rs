mod fnv;
mod mt19937;

pub use fnv::{fnv1a, xor_fold};
pub use mt19937::Mt19937;
