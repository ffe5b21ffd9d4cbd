pub mod check;
pub mod constants;
pub mod options;
pub mod path;
pub mod position;

pub use check::*;
pub use constants::*;
pub use options::*;
pub use path::{alias_for_import, is_relative_specifier, resolve_specifier};
pub use position::{column_of, indentation_at};
