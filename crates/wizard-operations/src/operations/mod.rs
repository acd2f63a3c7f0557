mod register;

pub use register::{RegisterOperation, RegisterOutcome};
