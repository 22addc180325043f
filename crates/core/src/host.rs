//! Capabilities a contract host exposes to an invocation.
//!
//! A contract invocation sees two things from its host:
//! - [`ObjectStore`]: flat get/put/delete of opaque byte values by byte key
//! - [`CallInfo`]: read-only metadata of the call (arguments, caller, amount)
//!
//! Anything implementing both is a [`Host`].

use crate::error::Result;
use num_bigint::BigUint;
use std::collections::HashMap;

/// Call arguments of one invocation, keyed by argument name.
pub type Args = HashMap<String, Vec<u8>>;

/// Raw key-value storage of the host.
///
/// Last write wins within one invocation. No other ordering or
/// transactional guarantee is assumed.
pub trait ObjectStore {
    /// Store `value` under `key`, replacing any previous value.
    fn put_object(&mut self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Fetch the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    fn get_object(&self, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete_object(&mut self, key: &[u8]) -> Result<()>;
}

/// Read-only metadata of the running invocation.
pub trait CallInfo {
    /// Call arguments, fixed for the invocation's lifetime.
    fn args(&self) -> &Args;

    /// Identity of the immediate caller.
    fn caller(&self) -> &str;

    /// Identity of the account that initiated the transaction.
    fn initiator(&self) -> &str;

    /// Accounts whose authorization the transaction carries.
    fn auth_require(&self) -> &[String];

    /// Native tokens transferred along with the call.
    fn transfer_amount(&self) -> BigUint;
}

/// A full contract host: storage plus invocation metadata.
pub trait Host: ObjectStore + CallInfo {}

impl<T: ObjectStore + CallInfo + ?Sized> Host for T {}

impl<S: ObjectStore + ?Sized> ObjectStore for &mut S {
    fn put_object(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        (**self).put_object(key, value)
    }

    fn get_object(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        (**self).get_object(key)
    }

    fn delete_object(&mut self, key: &[u8]) -> Result<()> {
        (**self).delete_object(key)
    }
}

impl<C: CallInfo + ?Sized> CallInfo for &mut C {
    fn args(&self) -> &Args {
        (**self).args()
    }

    fn caller(&self) -> &str {
        (**self).caller()
    }

    fn initiator(&self) -> &str {
        (**self).initiator()
    }

    fn auth_require(&self) -> &[String] {
        (**self).auth_require()
    }

    fn transfer_amount(&self) -> BigUint {
        (**self).transfer_amount()
    }
}

impl<S: ObjectStore + ?Sized> ObjectStore for Box<S> {
    fn put_object(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        (**self).put_object(key, value)
    }

    fn get_object(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        (**self).get_object(key)
    }

    fn delete_object(&mut self, key: &[u8]) -> Result<()> {
        (**self).delete_object(key)
    }
}

impl<C: CallInfo + ?Sized> CallInfo for Box<C> {
    fn args(&self) -> &Args {
        (**self).args()
    }

    fn caller(&self) -> &str {
        (**self).caller()
    }

    fn initiator(&self) -> &str {
        (**self).initiator()
    }

    fn auth_require(&self) -> &[String] {
        (**self).auth_require()
    }

    fn transfer_amount(&self) -> BigUint {
        (**self).transfer_amount()
    }
}
