use std::sync::Arc;
use wallet_store::{
    Error, OperationRequest, OperationType, WalletRecord, WalletStore,
};
use wallet_storage_mock::WalletStorageMock;

fn test_wallet_store() -> WalletStore {
    WalletStore::new(Arc::new(WalletStorageMock::new()))
}

async fn create_test_wallet(wallet_store: &WalletStore, balance: i64) -> uuid::Uuid {
    let wallet_id = uuid::Uuid::new_v4();
    wallet_store
        .create_wallet(None, &WalletRecord { wallet_id, balance })
        .await
        .expect("pass");
    wallet_id
}

#[tokio::test]
async fn test_deposit_increases_balance() {
    let wallet_store = test_wallet_store();
    let wallet_id = create_test_wallet(&wallet_store, 0).await;

    wallet_store
        .process_operation(&OperationRequest {
            wallet_id,
            operation_type: OperationType::Deposit,
            amount: 1000,
        })
        .await
        .expect("pass");

    let wallet_record = wallet_store.get_wallet(None, &wallet_id).await.expect("pass");
    assert_eq!(wallet_record.balance, 1000);
}

#[tokio::test]
async fn test_withdraw_decreases_balance() {
    let wallet_store = test_wallet_store();
    let wallet_id = create_test_wallet(&wallet_store, 1000).await;

    wallet_store
        .process_operation(&OperationRequest {
            wallet_id,
            operation_type: OperationType::Withdraw,
            amount: 500,
        })
        .await
        .expect("pass");

    let wallet_record = wallet_store.get_wallet(None, &wallet_id).await.expect("pass");
    assert_eq!(wallet_record.balance, 500);
}

#[tokio::test]
async fn test_withdraw_beyond_balance_is_rejected() {
    let wallet_store = test_wallet_store();
    let wallet_id = create_test_wallet(&wallet_store, 500).await;

    let result = wallet_store
        .process_operation(&OperationRequest {
            wallet_id,
            operation_type: OperationType::Withdraw,
            amount: 1000,
        })
        .await;
    assert!(matches!(result, Err(Error::NotEnoughBalance(id)) if id == wallet_id));

    // The rejected withdrawal must have had no effect.
    let wallet_record = wallet_store.get_wallet(None, &wallet_id).await.expect("pass");
    assert_eq!(wallet_record.balance, 500);
}

#[tokio::test]
async fn test_get_wallet_of_nonexistent_id_fails_with_wallet_not_found() {
    let wallet_store = test_wallet_store();
    let wallet_id = uuid::Uuid::new_v4();

    let result = wallet_store.get_wallet(None, &wallet_id).await;
    assert!(matches!(result, Err(Error::WalletNotFound(id)) if id == wallet_id));
}

#[tokio::test]
async fn test_operation_against_nonexistent_wallet_fails_with_wallet_not_found() {
    let wallet_store = test_wallet_store();
    let wallet_id = uuid::Uuid::new_v4();

    let result = wallet_store
        .process_operation(&OperationRequest {
            wallet_id,
            operation_type: OperationType::Deposit,
            amount: 100,
        })
        .await;
    assert!(matches!(result, Err(Error::WalletNotFound(id)) if id == wallet_id));
}

#[tokio::test]
async fn test_nil_wallet_id_is_rejected_before_any_store_access() {
    let wallet_store = test_wallet_store();

    let result = wallet_store
        .process_operation(&OperationRequest {
            wallet_id: uuid::Uuid::nil(),
            operation_type: OperationType::Deposit,
            amount: 100,
        })
        .await;
    assert!(matches!(result, Err(Error::InvalidWalletId(_))));
}

#[tokio::test]
async fn test_unknown_operation_type_is_rejected() {
    let wallet_store = test_wallet_store();
    let wallet_id = create_test_wallet(&wallet_store, 1000).await;

    let result = wallet_store
        .process_operation(&OperationRequest {
            wallet_id,
            operation_type: OperationType::Unknown,
            amount: 100,
        })
        .await;
    assert!(matches!(result, Err(Error::UnknownOperation)));

    let wallet_record = wallet_store.get_wallet(None, &wallet_id).await.expect("pass");
    assert_eq!(wallet_record.balance, 1000);
}

#[tokio::test]
async fn test_non_positive_amounts_are_rejected() {
    let wallet_store = test_wallet_store();
    let wallet_id = create_test_wallet(&wallet_store, 1000).await;

    for amount in [0, -1, -1000] {
        let result = wallet_store
            .process_operation(&OperationRequest {
                wallet_id,
                operation_type: OperationType::Deposit,
                amount,
            })
            .await;
        assert!(matches!(result, Err(Error::InvalidAmount(a)) if a == amount));
    }

    let wallet_record = wallet_store.get_wallet(None, &wallet_id).await.expect("pass");
    assert_eq!(wallet_record.balance, 1000);
}

#[tokio::test]
async fn test_transaction_threading_through_store_operations() {
    let wallet_store = test_wallet_store();
    let wallet_id = uuid::Uuid::new_v4();

    let mut transaction_b = wallet_store.begin_transaction().await.expect("pass");
    wallet_store
        .create_wallet(
            Some(transaction_b.as_mut()),
            &WalletRecord {
                wallet_id,
                balance: 42,
            },
        )
        .await
        .expect("pass");
    let wallet_record = wallet_store
        .get_wallet(Some(transaction_b.as_mut()), &wallet_id)
        .await
        .expect("pass");
    transaction_b.commit().await.expect("pass");
    assert_eq!(wallet_record.balance, 42);
}

#[tokio::test]
async fn test_creation_is_idempotent() {
    let wallet_store = test_wallet_store();
    let wallet_id = uuid::Uuid::new_v4();

    wallet_store
        .create_wallet(
            None,
            &WalletRecord {
                wallet_id,
                balance: 250,
            },
        )
        .await
        .expect("pass");
    // The second create must be a silent no-op; the existing balance is preserved
    // regardless of the requested initial balance.
    wallet_store
        .create_wallet(
            None,
            &WalletRecord {
                wallet_id,
                balance: 9999,
            },
        )
        .await
        .expect("pass");

    let wallet_record = wallet_store.get_wallet(None, &wallet_id).await.expect("pass");
    assert_eq!(wallet_record.balance, 250);
}

#[tokio::test]
async fn test_balance_conservation_over_operation_sequence() {
    let wallet_store = test_wallet_store();
    let wallet_id = create_test_wallet(&wallet_store, 100).await;

    let deposit_v = [300i64, 50, 700];
    let withdrawal_v = [200i64, 5000, 600, 1];
    let mut accepted_withdrawal_total = 0i64;

    for amount in deposit_v {
        wallet_store
            .process_operation(&OperationRequest {
                wallet_id,
                operation_type: OperationType::Deposit,
                amount,
            })
            .await
            .expect("pass");
    }
    for amount in withdrawal_v {
        let result = wallet_store
            .process_operation(&OperationRequest {
                wallet_id,
                operation_type: OperationType::Withdraw,
                amount,
            })
            .await;
        match result {
            Ok(()) => accepted_withdrawal_total += amount,
            Err(Error::NotEnoughBalance(_)) => {}
            Err(err) => panic!("unexpected error: {:?}", err),
        }
    }

    let wallet_record = wallet_store.get_wallet(None, &wallet_id).await.expect("pass");
    let deposit_total: i64 = deposit_v.iter().sum();
    assert_eq!(
        wallet_record.balance,
        100 + deposit_total - accepted_withdrawal_total
    );
    assert!(wallet_record.balance >= 0);
}

#[tokio::test]
async fn test_concurrent_withdrawals_accept_exactly_floor_of_balance_over_amount() {
    let wallet_store = test_wallet_store();
    // 10 concurrent withdrawals of 300 against a balance of 1000: exactly 3 may succeed.
    let wallet_id = create_test_wallet(&wallet_store, 1000).await;

    let handle_v = (0..10)
        .map(|_| {
            let wallet_store = wallet_store.clone();
            tokio::task::spawn(async move {
                wallet_store
                    .process_operation(&OperationRequest {
                        wallet_id,
                        operation_type: OperationType::Withdraw,
                        amount: 300,
                    })
                    .await
            })
        })
        .collect::<Vec<_>>();

    let mut accepted_count = 0;
    let mut rejected_count = 0;
    for handle in handle_v {
        match handle.await.expect("pass") {
            Ok(()) => accepted_count += 1,
            Err(Error::NotEnoughBalance(_)) => rejected_count += 1,
            Err(err) => panic!("unexpected error: {:?}", err),
        }
    }
    assert_eq!(accepted_count, 3);
    assert_eq!(rejected_count, 7);

    let wallet_record = wallet_store.get_wallet(None, &wallet_id).await.expect("pass");
    assert_eq!(wallet_record.balance, 100);
}

#[tokio::test]
async fn test_two_concurrent_withdrawals_exactly_one_succeeds() {
    let wallet_store = test_wallet_store();
    let wallet_id = create_test_wallet(&wallet_store, 1000).await;

    let handle_v = (0..2)
        .map(|_| {
            let wallet_store = wallet_store.clone();
            tokio::task::spawn(async move {
                wallet_store
                    .process_operation(&OperationRequest {
                        wallet_id,
                        operation_type: OperationType::Withdraw,
                        amount: 600,
                    })
                    .await
            })
        })
        .collect::<Vec<_>>();

    let mut result_v = Vec::new();
    for handle in handle_v {
        result_v.push(handle.await.expect("pass"));
    }
    let accepted_count = result_v.iter().filter(|result| result.is_ok()).count();
    let rejected_count = result_v
        .iter()
        .filter(|result| matches!(result, Err(Error::NotEnoughBalance(_))))
        .count();
    assert_eq!(accepted_count, 1);
    assert_eq!(rejected_count, 1);

    let wallet_record = wallet_store.get_wallet(None, &wallet_id).await.expect("pass");
    assert_eq!(wallet_record.balance, 400);
}
