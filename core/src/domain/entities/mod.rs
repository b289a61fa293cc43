//! Domain entities representing core business objects.

pub mod account;
pub mod movie;
pub mod token;


// Re-export commonly used types
pub use account::{Account, AccountChanges, AccountRole};
pub use movie::{Director, Genre, Movie, MovieId};
pub use token::{Claims, ACCESS_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER};
