//! Contexts running against the sled-backed host.

use serde::Serialize;
use tempfile::TempDir;
use xcd_context::{impl_event, read_event_logs, BigInt, Context, Encoding, SlotKey};
use xcd_core::Invocation;
use xcd_storage::{ContractStore, Storage};

#[derive(Serialize)]
struct Issue {
    to: String,
    amount: u64,
}

impl_event!(Issue);

#[test]
fn test_state_and_log_persist_across_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let storage = Storage::open(dir.path()).unwrap();
        let store = ContractStore::new(&storage, "token", Invocation::new().with_caller("alice"));
        let mut ctx = Context::new(store).unwrap();

        ctx.set_int("supply", 100).unwrap();
        ctx.set_strings("holders", &["qwer"]).unwrap();
        ctx.emit(&Issue {
            to: "qwer".into(),
            amount: 100,
        })
        .unwrap();
        storage.flush().unwrap();
    }

    let storage = Storage::open(dir.path()).unwrap();
    let store = ContractStore::new(&storage, "token", Invocation::new());

    let logs = read_event_logs(&store, &SlotKey::default(), Encoding::Json).unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].name, "Issue");

    // A new invocation keeps state but starts with an empty log
    let ctx = Context::new(store).unwrap();
    assert_eq!(ctx.get_int("supply", 0), BigInt::from(100));
    assert_eq!(ctx.get_strings("holders", Vec::new()), vec!["qwer"]);
    assert!(ctx.event_logs().unwrap().is_empty());
}

#[test]
fn test_contracts_have_separate_logs() {
    let storage = Storage::open_temporary().unwrap();

    let mut a = Context::new(ContractStore::new(&storage, "a", Invocation::new())).unwrap();
    let mut b = Context::new(ContractStore::new(&storage, "b", Invocation::new())).unwrap();

    a.emit(&Issue {
        to: "x".into(),
        amount: 1,
    })
    .unwrap();
    b.emit(&Issue {
        to: "y".into(),
        amount: 2,
    })
    .unwrap();
    b.emit(&Issue {
        to: "z".into(),
        amount: 3,
    })
    .unwrap();

    assert_eq!(a.event_logs().unwrap().len(), 1);
    assert_eq!(b.event_logs().unwrap().len(), 2);
    assert_eq!(a.host().object_count().unwrap(), 1);
}
