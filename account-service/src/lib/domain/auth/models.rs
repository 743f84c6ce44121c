use crate::account::models::Account;
use crate::account::models::AccountId;

/// Identity attached to a request after successful admission.
///
/// Owned by the request lifecycle: inserted into the call context by
/// the authorization gate and discarded when the request completes.
/// Threaded as an explicit typed value, never a mutable property bag.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    pub id: AccountId,
    pub email: String,
    pub name: String,
}

impl From<&Account> for AuthenticatedIdentity {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.as_str().to_string(),
            name: account.name.as_str().to_string(),
        }
    }
}
