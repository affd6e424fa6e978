//! End-to-end wallet flow: derive accounts, sign, enrich with node records,
//! and classify a submitted operation's lifecycle.

use pos_client::config::ConfirmationConfig;
use pos_client::confirmation::{ConfirmationTracker, OperationStatus};
use pos_client::keys::{codec, signing};
use pos_client::rpc::AddressInfo;
use pos_client::wallet::{Wallet, WalletError};

mod common;
use common::{record, FixedAddressBook, ScriptedProvider, Step};

fn private_key(tag: u8) -> String {
    codec::encode_base58_check(&[tag; 32], codec::KEY_VERSION)
}

fn info_for(address: &str, final_balance: &str) -> AddressInfo {
    AddressInfo {
        address: address.to_string(),
        candidate_balance: final_balance.to_string(),
        final_balance: final_balance.to_string(),
        candidate_roll_count: 0,
        final_roll_count: 0,
    }
}

#[tokio::test]
async fn test_wallet_sign_and_enrich() {
    common::init_tracing();
    let mut wallet = Wallet::new();
    let added = wallet
        .add_from_private_keys(&[private_key(1), private_key(2)])
        .unwrap();
    wallet.set_base_account(added[0].clone()).unwrap();

    let payload = b"serialized operation bytes";
    let signature = wallet.sign_with_base(payload).unwrap();
    let bytes = hex::decode(&signature.hex).unwrap();
    assert_eq!(bytes.len(), 64);
    assert!(signing::verify(&bytes, payload, &added[0].public_key).unwrap());

    let book = FixedAddressBook {
        infos: added
            .iter()
            .map(|a| info_for(&a.address, "100"))
            .collect(),
    };
    let views = wallet.wallet_info(&book).await.unwrap();
    assert_eq!(views.len(), 2);
    // views come back in insertion order, merged with the matching record
    for (view, account) in views.iter().zip(added.iter()) {
        assert_eq!(view.account.address, account.address);
        assert_eq!(view.info.final_balance, "100");
    }
}

#[tokio::test]
async fn test_wallet_info_rejects_partial_response() {
    common::init_tracing();
    let mut wallet = Wallet::new();
    let added = wallet
        .add_from_private_keys(&[private_key(1), private_key(2)])
        .unwrap();

    let short_book = FixedAddressBook {
        infos: vec![info_for(&added[0].address, "100")],
    };
    let err = wallet.wallet_info(&short_book).await.unwrap_err();
    assert!(matches!(
        err,
        WalletError::IncompleteResponse {
            expected: 2,
            actual: 1
        }
    ));

    // right count, wrong address: still incomplete
    let wrong_book = FixedAddressBook {
        infos: vec![
            info_for(&added[0].address, "100"),
            info_for("Asomebodyelse", "100"),
        ],
    };
    assert!(matches!(
        wallet.wallet_info(&wrong_book).await,
        Err(WalletError::IncompleteResponse { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_submitted_operation_lifecycle() {
    common::init_tracing();
    // a freshly submitted operation walks pool → block → final
    let provider = ScriptedProvider::new(
        vec![
            Step::Records(vec![record(false, &[], true)]),
            Step::Records(vec![record(false, &["b1"], false)]),
        ],
        Step::Records(vec![record(true, &["b1"], false)]),
    );
    let tracker = ConfirmationTracker::new(provider, ConfirmationConfig::default());

    assert_eq!(
        tracker.current_status("O1").await.unwrap(),
        OperationStatus::AwaitingInclusion
    );
    assert_eq!(
        tracker.current_status("O1").await.unwrap(),
        OperationStatus::IncludedPending
    );
    assert_eq!(
        tracker
            .await_status("O1", OperationStatus::Final)
            .await
            .unwrap(),
        OperationStatus::Final
    );
}
