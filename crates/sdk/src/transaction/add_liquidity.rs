//! Add-liquidity transaction for the current liquidity selection

use rust_decimal::Decimal;
use solana_sdk::signature::Signature;
use tracing::{debug, info, instrument};
use zap_types::{
    de_ui_token_amount, is_positive, to_token_amount, CoinSlot, PoolJsonInfo, PoolSide, SplToken,
    TokenAmount, ZapError, ZapResult,
};

use crate::context::AppContext;
use crate::services::{AddLiquidityRequest, LiquiditySdk, TransactionCollector, TxHistoryInfo};

/// Handle returned once the collector has sent the transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedTransaction {
    pub signature: Signature,
    pub info: TxHistoryInfo,
}

/// Store values the transaction is built from, read once
struct AddLiquidityInputs {
    pool: PoolJsonInfo,
    coin1: SplToken,
    coin2: SplToken,
    coin1_amount: Decimal,
    coin2_amount: Decimal,
    fixed_side: PoolSide,
}

fn required_coin(coin: Option<&SplToken>, slot: CoinSlot) -> ZapResult<SplToken> {
    coin.cloned().ok_or(ZapError::CoinNotSelected { slot })
}

fn required_amount(amount: Option<Decimal>, slot: CoinSlot) -> ZapResult<Decimal> {
    amount
        .filter(is_positive)
        .ok_or(ZapError::NonPositiveAmount { slot })
}

/// Check everything that can be checked without touching the wallet
fn read_inputs(ctx: &AppContext, amm_id: Option<&str>) -> ZapResult<AddLiquidityInputs> {
    let liquidity = ctx.liquidity.get();

    let pool = match amm_id {
        Some(id) => liquidity.find_by_amm_id(id),
        None => liquidity.current_json_info.as_ref(),
    }
    .cloned()
    .ok_or_else(|| ZapError::pool_not_found(amm_id))?;

    let coin1 = required_coin(liquidity.coin1.as_ref(), CoinSlot::Coin1)?;
    let coin2 = required_coin(liquidity.coin2.as_ref(), CoinSlot::Coin2)?;
    if coin1.mint == coin2.mint {
        return Err(ZapError::SameMint {
            mint: coin1.mint_string(),
        });
    }

    let coin1_amount = required_amount(liquidity.coin1_amount, CoinSlot::Coin1)?;
    let coin2_amount = required_amount(liquidity.coin2_amount, CoinSlot::Coin2)?;

    Ok(AddLiquidityInputs {
        pool,
        coin1,
        coin2,
        coin1_amount,
        coin2_amount,
        fixed_side: PoolSide::from(liquidity.focus_side),
    })
}

fn ensure_balance(ctx: &AppContext, amount: &TokenAmount) -> ZapResult<()> {
    if ctx.wallet.has_enough_balance(amount) {
        Ok(())
    } else {
        Err(ZapError::insufficient_balance(&amount.token.symbol, amount.raw))
    }
}

/// Validate the liquidity store, build the add-liquidity transaction and
/// hand it to the collector.
///
/// Uses the pool `amm_id` when given, otherwise the current selection. Every
/// precondition is checked before the SDK is called; a failed precondition
/// means neither the SDK nor the collector saw anything. After a successful
/// send the add dialog is closed and the liquidity data refreshed.
#[instrument(skip(ctx, sdk, collector))]
pub async fn tx_add_liquidity(
    ctx: &AppContext,
    sdk: &dyn LiquiditySdk,
    collector: &dyn TransactionCollector,
    amm_id: Option<&str>,
) -> ZapResult<SubmittedTransaction> {
    let inputs = read_inputs(ctx, amm_id)?;

    let amount1 = to_token_amount(&inputs.coin1, inputs.coin1_amount, true)?;
    let amount2 = to_token_amount(&inputs.coin2, inputs.coin2_amount, true)?;

    ensure_balance(ctx, &amount1)?;
    ensure_balance(ctx, &amount2)?;

    let request = AddLiquidityRequest {
        pool_keys: inputs.pool.to_pool_keys()?,
        token_accounts: ctx.wallet.token_accounts(),
        owner: ctx.wallet.owner(),
        amount_in_a: de_ui_token_amount(&amount1),
        amount_in_b: de_ui_token_amount(&amount2),
        fixed_side: inputs.fixed_side,
    };
    debug!(
        pool = %inputs.pool.id,
        amount_a = request.amount_in_a.raw,
        amount_b = request.amount_in_b.raw,
        fixed_side = ?request.fixed_side,
        "building add-liquidity transaction"
    );
    let built = sdk.make_add_liquidity_transaction(request).await?;

    let info = TxHistoryInfo {
        title: "Add liquidity".to_string(),
        description: format!(
            "Add {} {} and {} {}",
            inputs.coin1_amount.normalize(),
            inputs.coin1.symbol,
            inputs.coin2_amount.normalize(),
            inputs.coin2.symbol
        ),
    };
    let signature = collector.submit(built, info.clone()).await?;
    info!(%signature, pool = %inputs.pool.id, "add-liquidity transaction sent");

    ctx.liquidity.set(|s| {
        s.is_add_dialog_open = false;
        s.refresh_liquidity();
    });

    Ok(SubmittedTransaction { signature, info })
}
