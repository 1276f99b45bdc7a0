pub mod draft;
pub mod field;
pub mod session;
pub mod validator;

pub use draft::Draft;
pub use field::{FieldError, FieldErrors, FieldName};
pub use session::{EditSession, EditState};
pub use validator::validate;
