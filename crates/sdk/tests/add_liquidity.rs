//! Add-liquidity transaction building

mod common;

use common::{full_pool, loaded_context, token, RecordingCollector, RecordingSdk};
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;
use zap_sdk::services::{Wallet, WalletSnapshot};
use zap_sdk::zap_types::{
    quantum_sol_version_sol, CoinSlot, PoolSide, SplToken, ZapError, WSOL_MINT,
};
use zap_sdk::{tx_add_liquidity, AppContext};

struct Fixture {
    ctx: AppContext,
    sdk: RecordingSdk,
    collector: RecordingCollector,
    coin1: SplToken,
    coin2: SplToken,
    pool_id: String,
}

/// SOL/USDC pool selected with 1.5 SOL and 30 USDC entered
fn fixture(wallet_lamports: u64, wallet_usdc: u64) -> Fixture {
    let coin1 = quantum_sol_version_sol();
    let coin2 = token("USDC", 6);
    let pool_key = Pubkey::new_unique();
    let pool = full_pool(&pool_key, &coin1, &coin2);

    let owner = Pubkey::new_unique();
    let wallet = WalletSnapshot::new(owner, wallet_lamports).with_account(coin2.mint, wallet_usdc);
    let (ctx, _) = loaded_context(vec![coin2.clone()], vec![pool.clone()], wallet);

    ctx.liquidity.set(|s| {
        s.current_json_info = Some(pool);
        s.coin1 = Some(coin1.clone());
        s.coin2 = Some(coin2.clone());
        s.coin1_amount = Some(Decimal::new(15, 1));
        s.coin2_amount = Some(Decimal::from(30));
        s.is_add_dialog_open = true;
    });

    Fixture {
        ctx,
        sdk: RecordingSdk::default(),
        collector: RecordingCollector::default(),
        coin1,
        coin2,
        pool_id: pool_key.to_string(),
    }
}

fn rich() -> Fixture {
    fixture(10_000_000_000, 1_000_000_000)
}

async fn run(f: &Fixture, amm_id: Option<&str>) -> Result<(), ZapError> {
    tx_add_liquidity(&f.ctx, &f.sdk, &f.collector, amm_id)
        .await
        .map(|_| ())
}

fn assert_untouched(f: &Fixture) {
    assert_eq!(f.sdk.calls(), 0);
    assert_eq!(f.collector.calls(), 0);
    assert!(f.ctx.liquidity.get().is_add_dialog_open);
}

#[tokio::test]
async fn test_success_builds_and_submits() {
    let f = rich();
    let submitted = tx_add_liquidity(&f.ctx, &f.sdk, &f.collector, None)
        .await
        .unwrap();

    assert_eq!(submitted.info.title, "Add liquidity");
    assert_eq!(submitted.info.description, "Add 1.5 SOL and 30 USDC");

    let requests = f.sdk.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.pool_keys.id.to_string(), f.pool_id);
    assert_eq!(request.owner, f.ctx.wallet.owner());
    assert_eq!(request.token_accounts.len(), 1);
    // Native SOL is handed over as wrapped SOL
    assert_eq!(request.amount_in_a.token.mint, WSOL_MINT);
    assert_eq!(request.amount_in_a.raw, 1_500_000_000);
    assert_eq!(request.amount_in_b.token, f.coin2);
    assert_eq!(request.amount_in_b.raw, 30_000_000);
    assert_eq!(request.fixed_side, PoolSide::A);
    drop(requests);

    assert_eq!(f.collector.calls(), 1);
    let liquidity = f.ctx.liquidity.get();
    assert!(!liquidity.is_add_dialog_open);
    assert_eq!(liquidity.refresh_count, 1);
}

#[tokio::test]
async fn test_focus_on_coin2_fixes_side_b() {
    let f = rich();
    f.ctx.liquidity.set(|s| s.focus_side = CoinSlot::Coin2);
    run(&f, None).await.unwrap();
    assert_eq!(f.sdk.requests.lock().unwrap()[0].fixed_side, PoolSide::B);
}

#[tokio::test]
async fn test_explicit_amm_id_overrides_selection() {
    let f = rich();
    f.ctx.liquidity.set(|s| s.current_json_info = None);
    run(&f, Some(&f.pool_id)).await.unwrap();
    assert_eq!(f.sdk.calls(), 1);

    let f = rich();
    let err = run(&f, Some("missing")).await.unwrap_err();
    assert!(matches!(err, ZapError::PoolNotFound { .. }));
    assert_eq!(err.to_string(), "can't find liquidity pool");
    assert_untouched(&f);
}

#[tokio::test]
async fn test_rejects_missing_selection() {
    let f = rich();
    f.ctx.liquidity.set(|s| s.current_json_info = None);
    assert!(matches!(run(&f, None).await, Err(ZapError::PoolNotFound { .. })));
    assert_untouched(&f);

    let f = rich();
    f.ctx.liquidity.set(|s| s.coin2 = None);
    let err = run(&f, None).await.unwrap_err();
    assert_eq!(err.to_string(), "select a coin in lower box");
    assert_untouched(&f);
}

#[tokio::test]
async fn test_rejects_same_mint() {
    let f = rich();
    let coin1 = f.coin1.clone();
    f.ctx.liquidity.set(|s| s.coin2 = Some(coin1));
    assert!(matches!(run(&f, None).await, Err(ZapError::SameMint { .. })));
    assert_untouched(&f);
}

#[tokio::test]
async fn test_rejects_non_positive_amounts() {
    for amount in [None, Some(Decimal::ZERO), Some(Decimal::new(-1, 0))] {
        let f = rich();
        f.ctx.liquidity.set(|s| s.coin1_amount = amount);
        let err = run(&f, None).await.unwrap_err();
        assert_eq!(err, ZapError::NonPositiveAmount { slot: CoinSlot::Coin1 });
        assert_eq!(err.to_string(), "should input coin1 amount larger than 0");
        assert_untouched(&f);
    }

    let f = rich();
    f.ctx.liquidity.set(|s| s.coin2_amount = Some(Decimal::ZERO));
    assert_eq!(
        run(&f, None).await.unwrap_err(),
        ZapError::NonPositiveAmount { slot: CoinSlot::Coin2 }
    );
    assert_untouched(&f);
}

#[tokio::test]
async fn test_rejects_insufficient_balance_per_coin() {
    // 1 SOL held, 1.5 needed
    let f = fixture(1_000_000_000, 1_000_000_000);
    let err = run(&f, None).await.unwrap_err();
    assert_eq!(err.to_string(), "not enough SOL");
    assert_untouched(&f);

    // 29 USDC held, 30 needed
    let f = fixture(10_000_000_000, 29_000_000);
    let err = run(&f, None).await.unwrap_err();
    assert_eq!(
        err,
        ZapError::InsufficientBalance {
            symbol: "USDC".to_string(),
            required: 30_000_000
        }
    );
    assert!(err.is_precondition());
    assert_untouched(&f);
}

#[tokio::test]
async fn test_sdk_failure_skips_submission() {
    let mut f = rich();
    f.sdk = RecordingSdk::failing();
    let err = run(&f, None).await.unwrap_err();
    assert!(matches!(err, ZapError::TransactionBuild { .. }));
    assert!(!err.is_precondition());
    assert_eq!(f.sdk.calls(), 1);
    assert_eq!(f.collector.calls(), 0);
    assert!(f.ctx.liquidity.get().is_add_dialog_open);
}
