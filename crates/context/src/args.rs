//! Typed accessors over the invocation's call arguments.
//!
//! These decode like the state getters but read the argument map and never
//! touch the store. A missing argument yields the type's zero value.

use crate::context::Context;
use crate::json::JsonQuery;
use crate::value;
use num_bigint::BigInt;
use xcd_core::Host;

impl<H: Host> Context<H> {
    pub fn arg_to_int(&self, key: &str) -> BigInt {
        self.arg(key)
            .map_or_else(|| BigInt::from(0), value::decode_int)
    }

    pub fn arg_to_bool(&self, key: &str) -> bool {
        self.arg(key).is_some_and(value::decode_bool)
    }

    pub fn arg_to_string(&self, key: &str) -> String {
        self.arg_str(key).map(str::to_string).unwrap_or_default()
    }

    pub fn arg_to_strings(&self, key: &str) -> Vec<String> {
        self.arg_str(key)
            .map(value::decode_strings)
            .unwrap_or_default()
    }

    pub fn arg_to_bytes(&self, key: &str) -> Vec<u8> {
        self.arg(key).map(<[u8]>::to_vec).unwrap_or_default()
    }

    /// Parse an argument for path queries. `None` when it is missing.
    pub fn arg_to_json(&self, key: &str) -> Option<JsonQuery> {
        self.arg(key).map(JsonQuery::parse)
    }

    fn arg(&self, key: &str) -> Option<&[u8]> {
        self.args().get(key).map(Vec::as_slice)
    }

    fn arg_str(&self, key: &str) -> Option<&str> {
        self.arg(key).and_then(|bytes| std::str::from_utf8(bytes).ok())
    }
}

#[cfg(test)]
mod tests {
    use crate::context::Context;
    use num_bigint::BigInt;
    use xcd_core::{Invocation, SimulateHost};

    fn setup(invocation: Invocation) -> Context<SimulateHost> {
        Context::new(SimulateHost::with_invocation(invocation)).unwrap()
    }

    #[test]
    fn test_decode_arguments() {
        let ctx = setup(
            Invocation::new()
                .with_arg("amount", vec![0x12u8, 0xD6, 0x18])
                .with_arg("flag", vec![0x01u8])
                .with_arg("to", "heihei")
                .with_arg("holders", "bob*;*carol")
                .with_arg("memo", vec![0xAAu8, 0xBB])
                .with_arg("payload", r#"{"to": "qwer", "amount": 100}"#),
        );

        assert_eq!(ctx.arg_to_int("amount"), BigInt::from(1234456));
        assert!(ctx.arg_to_bool("flag"));
        assert_eq!(ctx.arg_to_string("to"), "heihei");
        assert_eq!(ctx.arg_to_strings("holders"), vec!["bob", "carol"]);
        assert_eq!(ctx.arg_to_bytes("memo"), vec![0xAA, 0xBB]);

        let payload = ctx.arg_to_json("payload").unwrap();
        assert_eq!(payload.get("to").as_str(), Some("qwer"));
        assert_eq!(payload.get("amount").as_u64(), Some(100));
    }

    #[test]
    fn test_missing_arguments_are_zero_values() {
        let ctx = setup(Invocation::new());

        assert_eq!(ctx.arg_to_int("amount"), BigInt::from(0));
        assert!(!ctx.arg_to_bool("flag"));
        assert_eq!(ctx.arg_to_string("to"), "");
        assert!(ctx.arg_to_strings("holders").is_empty());
        assert!(ctx.arg_to_bytes("memo").is_empty());
        assert!(ctx.arg_to_json("payload").is_none());
    }

    #[test]
    fn test_arguments_never_touch_store() {
        let mut ctx = setup(Invocation::new().with_arg("to", "bob"));
        ctx.set_string("to", "stored").unwrap();
        ctx.host_mut().fail_reads(true);

        assert_eq!(ctx.arg_to_string("to"), "bob");
    }

    #[test]
    fn test_empty_and_zero_arguments() {
        let ctx = setup(
            Invocation::new()
                .with_arg("zero", vec![0x00u8, 0x00])
                .with_arg("empty", Vec::<u8>::new()),
        );

        assert!(!ctx.arg_to_bool("zero"));
        assert_eq!(ctx.arg_to_int("zero"), BigInt::from(0));
        assert_eq!(ctx.arg_to_strings("empty"), vec![""]);
        assert!(ctx.arg_to_json("empty").is_some_and(|json| !json.exists()));
    }

    #[test]
    fn test_invalid_utf8_argument() {
        let ctx = setup(Invocation::new().with_arg("to", vec![0xFFu8]));
        assert_eq!(ctx.arg_to_string("to"), "");
        assert!(ctx.arg_to_strings("to").is_empty());
        assert_eq!(ctx.arg_to_bytes("to"), vec![0xFF]);
    }
}
