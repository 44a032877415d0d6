pub mod registration;
pub mod session;

pub use registration::{step_entry_redirect, use_registration, RegistrationContext};
pub use session::{use_auth, AuthContext, AuthProvider, SessionPolicy};
