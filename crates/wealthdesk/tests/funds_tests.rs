//! Deposits, withdrawals and the OTP-gated bank account flow.

mod common;

use wealthdesk::ops::{funds, sign_in};
use wealthdesk_core::db::models::TransactionKind;
use wealthdesk_core::error::ErrorCode;

async fn login(store: &wealthdesk::AppStore, identifier: &str) {
    sign_in::login(
        store,
        sign_in::LoginRequest {
            identifier: identifier.into(),
            password: "hunter22".into(),
            device: None,
        },
    )
    .await
    .expect("login succeeds");
}

/// Submit as the member, confirm as the admin, then act on the credited
/// account through impersonation.
async fn fund_account(store: &wealthdesk::AppStore, user_id: &str, amount: f64) {
    funds::submit_deposit(store, amount).await.unwrap();
    common::admin_login(store).await;
    funds::confirm_deposit(store).await.unwrap();
    sign_in::login_as_user(store, user_id).await.unwrap();
}

#[tokio::test]
async fn deposit_is_a_two_step_handshake() {
    let store = common::store().await;
    let user_id = common::register_user(&store, "+912222222221", "hunter22").await;
    login(&store, "+912222222221").await;

    funds::submit_deposit(&store, 500.0).await.unwrap();
    // Nothing credited until the admin confirms
    assert_eq!(store.user(&user_id).await.unwrap().balance, 30.0);

    common::admin_login(&store).await;
    funds::confirm_deposit(&store).await.unwrap();

    let user = store.user(&user_id).await.unwrap();
    assert_eq!(user.balance, 530.0);
    assert_eq!(user.recharge_amount, 500.0);
    assert_eq!(user.transactions[0].kind, TransactionKind::Deposit);

    // The pending document is consumed
    let second = funds::confirm_deposit(&store).await;
    assert_eq!(
        second.unwrap_err().code(),
        Some(ErrorCode::NoPendingDeposit)
    );
}

#[tokio::test]
async fn deposit_rejects_non_positive_amounts() {
    let store = common::store().await;
    common::register_user(&store, "+912222222222", "hunter22").await;
    login(&store, "+912222222222").await;

    let result = funds::submit_deposit(&store, 0.0).await;
    assert_eq!(result.unwrap_err().code(), Some(ErrorCode::InvalidAmount));
}

#[tokio::test]
async fn withdrawal_gating_and_exact_debit() {
    let store = common::store().await;
    let user_id = common::register_user(&store, "+912222222223", "hunter22").await;
    login(&store, "+912222222223").await;
    fund_account(&store, &user_id, 1000.0).await;

    // 1. No bank account on file
    let result = funds::make_withdrawal(&store, 400.0).await;
    assert_eq!(result.unwrap_err().code(), Some(ErrorCode::NoBankAccount));

    // Put one on file through the OTP flow
    funds::request_bank_update_otp(&store).await.unwrap();
    let otp = common::latest_sms_code(&store).await;
    funds::update_bank_account(
        &store,
        funds::BankAccountRequest {
            holder_name: "Asha".into(),
            bank_name: "State Bank".into(),
            account_number: "00112233".into(),
            otp,
        },
    )
    .await
    .unwrap();

    // 2. Below the minimum
    let result = funds::make_withdrawal(&store, 299.0).await;
    assert_eq!(
        result.unwrap_err().code(),
        Some(ErrorCode::BelowWithdrawalMinimum)
    );

    // 3. Above the balance
    let result = funds::make_withdrawal(&store, 5000.0).await;
    assert_eq!(
        result.unwrap_err().code(),
        Some(ErrorCode::AmountExceedsBalance)
    );

    // Nothing changed across the three rejections
    let balance_before = store.user(&user_id).await.unwrap().balance;
    assert_eq!(balance_before, 1030.0);

    // Success: balance drops by the gross amount; the tax is display-only
    let receipt = funds::make_withdrawal(&store, 400.0).await.unwrap();
    assert_eq!(receipt.amount, 400.0);
    assert_eq!(receipt.tax, 32.0);
    assert_eq!(receipt.net_payout, 368.0);

    let user = store.user(&user_id).await.unwrap();
    assert_eq!(user.balance, 630.0);
    assert_eq!(user.withdrawals, 400.0);
    assert_eq!(user.transactions[0].kind, TransactionKind::Withdrawal);
    assert_eq!(user.transactions[0].amount, -400.0);
    assert!(user.transactions[0].description.contains("32.00"));
}

#[tokio::test]
async fn bank_update_requires_a_valid_code() {
    let store = common::store().await;
    common::register_user(&store, "+912222222224", "hunter22").await;
    login(&store, "+912222222224").await;

    funds::request_bank_update_otp(&store).await.unwrap();
    let result = funds::update_bank_account(
        &store,
        funds::BankAccountRequest {
            holder_name: "Asha".into(),
            bank_name: "State Bank".into(),
            account_number: "00112233".into(),
            otp: "000000".into(),
        },
    )
    .await;
    assert_eq!(result.unwrap_err().code(), Some(ErrorCode::InvalidOtp));
}

#[tokio::test]
async fn fund_password_set_and_verify() {
    let store = common::store().await;
    common::register_user(&store, "+912222222225", "hunter22").await;
    login(&store, "+912222222225").await;

    // Not set yet
    let result = funds::verify_fund_password(&store, "654321").await;
    assert_eq!(
        result.unwrap_err().code(),
        Some(ErrorCode::FundPasswordNotSet)
    );

    funds::request_fund_password_otp(&store).await.unwrap();
    let otp = common::latest_sms_code(&store).await;
    funds::set_fund_password(&store, "654321", &otp).await.unwrap();

    assert!(funds::verify_fund_password(&store, "654321").await.is_ok());
    let wrong = funds::verify_fund_password(&store, "111111").await;
    assert_eq!(
        wrong.unwrap_err().code(),
        Some(ErrorCode::WrongFundPassword)
    );
}
