pub mod apply;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod index;
pub mod kernel;
pub mod state;

pub use apply::{apply, apply_operation};
pub use dispatch::{construct_gate, param_count, LABELS};
pub use error::ApplyError;
pub use gate::Gate;
