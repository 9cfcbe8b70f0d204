pub mod binding;
pub mod errors;

pub use binding::{Binding, FieldTarget};
pub use errors::{BindingError, BindingResult};
