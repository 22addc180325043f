//! Invocation metadata record.

use crate::host::{Args, CallInfo};
use num_bigint::BigUint;

/// Metadata of a single contract invocation.
///
/// Hosts build one of these per call and hand it to the store view
/// the contract runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    args: Args,
    caller: String,
    initiator: String,
    auth_require: Vec<String>,
    transfer_amount: BigUint,
}

impl Invocation {
    /// Create an invocation with no arguments and an empty caller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a call argument.
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Replace the whole argument map.
    pub fn with_args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    pub fn with_caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = caller.into();
        self
    }

    pub fn with_initiator(mut self, initiator: impl Into<String>) -> Self {
        self.initiator = initiator.into();
        self
    }

    pub fn with_auth_require(mut self, accounts: Vec<String>) -> Self {
        self.auth_require = accounts;
        self
    }

    pub fn with_transfer_amount(mut self, amount: impl Into<BigUint>) -> Self {
        self.transfer_amount = amount.into();
        self
    }
}

impl CallInfo for Invocation {
    fn args(&self) -> &Args {
        &self.args
    }

    fn caller(&self) -> &str {
        &self.caller
    }

    fn initiator(&self) -> &str {
        &self.initiator
    }

    fn auth_require(&self) -> &[String] {
        &self.auth_require
    }

    fn transfer_amount(&self) -> BigUint {
        self.transfer_amount.clone()
    }
}
