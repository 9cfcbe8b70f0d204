pub mod control;
pub mod form;
pub mod serialization;
pub mod table;
pub mod value;

pub use control::*;
pub use form::*;
pub use table::*;
pub use value::*;
