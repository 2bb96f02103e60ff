pub mod claims;
pub mod middleware;
pub mod utils;
pub mod verifier;

pub use claims::{Audience, Claims};
pub use middleware::{extract_bearer_token, AuthenticatedUser};
pub use utils::require_permission;
pub use verifier::TokenVerifier;
