mod interaction;

pub use interaction::{ConfirmChoice, FieldInput, InteractionProvider};
