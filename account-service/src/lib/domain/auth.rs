pub mod errors;
pub mod gate;
pub mod models;

pub use errors::GateError;
pub use gate::AuthorizationGate;
pub use models::AuthenticatedIdentity;
