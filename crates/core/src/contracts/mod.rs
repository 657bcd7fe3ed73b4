//! Request and response shapes for the portfolio backend.
//!
//! Wire names are camelCase throughout. Optional fields are skipped when
//! serializing so the backend only sees what the site actually set.

pub mod category;
pub mod contact;
pub mod education;
pub mod envelope;
pub mod user;

pub use category::{Category, CategoryInput};
pub use contact::{Contact, ContactMessage};
pub use education::{Education, EducationInput};
pub use envelope::{ApiResponse, Pagination, ResponseData};
pub use user::{LoginRequest, RegisterRequest, Role, SocialLinks, UploadedFile, User};
