pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::bookmark::Bookmark;
pub use models::owned::Owned;
pub use models::user::User;
pub use validation::{validate_email, validate_optional_text, validate_required_text};
