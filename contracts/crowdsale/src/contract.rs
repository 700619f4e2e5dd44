use crate::error::Error;
use crate::storage::*;
use crate::types::*;
use crate::window::SaleWindow;
use sale_common::{log_info, log_warn, storage::extend_instance, LedgerClient};
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, token, Address, Env};

contractmeta!(
    key = "Description",
    val = "Phased crowdsale feeding a stakeholder-voted escrow bank"
);

#[contract]
pub struct Crowdsale;

/// Config of a contract that is initialized and not killed.
fn load_live(env: &Env) -> Result<SaleConfig, Error> {
    let config = get_config(env)?;
    if !is_alive(env) {
        return Err(Error::ContractKilled);
    }
    extend_instance(env);
    Ok(config)
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_owner(env)? {
        return Err(Error::NotOwner);
    }
    Ok(())
}

/// Tokens the crowdsale can still move out of the general-sale wallet.
fn available_tokens(env: &Env, config: &SaleConfig) -> i128 {
    let ledger = LedgerClient::new(env, &config.token);
    let vested = ledger.vested_balance(&config.general_sale_wallet);
    let allowance = ledger.allowance(
        &config.general_sale_wallet,
        &env.current_contract_address(),
    );
    vested.min(allowance).max(0)
}

/// Token units sellable at `rate` before either the goal or the wallet runs out.
fn sellable_tokens(env: &Env, config: &SaleConfig, rate: i128) -> i128 {
    let remaining_goal = config
        .sale_goal
        .saturating_sub(get_total_collected(env))
        .max(0);
    remaining_goal
        .saturating_mul(rate)
        .min(available_tokens(env, config))
}

fn compute_status(env: &Env, config: &SaleConfig, now: u64) -> SaleStatus {
    if is_closed(env) {
        return SaleStatus::Closed;
    }
    let window = SaleWindow::from_config(config);
    if window.has_ended(now) {
        return SaleStatus::Ended;
    }
    if !window.has_started(now) {
        return SaleStatus::NotStarted;
    }
    let rate = window.phase_at(now).rate();
    // between phases the general-sale rate tells whether anything is left
    let next_rate = rate.unwrap_or(config.rate_general_sale);
    if sellable_tokens(env, config, next_rate) < next_rate {
        SaleStatus::GoalReached
    } else if rate.is_some() {
        SaleStatus::Active
    } else {
        SaleStatus::BetweenPhases
    }
}

#[contractimpl]
impl Crowdsale {
    /// Initialize the crowdsale. The general-sale wallet still has to approve
    /// this contract on the token before anything can be sold.
    pub fn initialize(env: Env, owner: Address, config: SaleConfig) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if !SaleWindow::from_config(&config).is_valid() || config.sale_goal <= 0 {
            return Err(Error::InvalidConfig);
        }

        set_config(&env, &config);
        set_owner(&env, &owner);
        set_total_collected(&env, 0);
        set_closed(&env, false);
        set_alive(&env, true);
        extend_instance(&env);

        env.events().publish(
            (symbol_short!("sale_init"),),
            (
                config.token,
                config.general_sale_start,
                config.general_sale_end,
                config.sale_goal,
            ),
        );
        log_info(&env, symbol_short!("init"), Some(owner), Some(config.sale_goal));
        Ok(())
    }

    /// Buy tokens with `amount` of the native asset at the current phase rate.
    ///
    /// When the remaining allocation cannot absorb the whole payment only the
    /// matching part is kept and the rest goes back to the buyer in the same
    /// invocation.
    pub fn purchase(env: Env, buyer: Address, amount: i128) -> Result<PurchaseReceipt, Error> {
        let config = load_live(&env)?;
        buyer.require_auth();

        if amount <= 0 {
            return Err(Error::ZeroPayment);
        }
        let now = env.ledger().timestamp();
        if is_closed(&env) {
            return Err(Error::InactiveSale);
        }
        let rate = SaleWindow::from_config(&config)
            .phase_at(now)
            .rate()
            .ok_or(Error::InactiveSale)?;

        let requested = amount.checked_mul(rate).ok_or(Error::Overflow)?;
        let sellable = sellable_tokens(&env, &config, rate);
        let (tokens, consumed) = if requested <= sellable {
            (requested, amount)
        } else {
            let consumed = sellable / rate;
            (consumed * rate, consumed)
        };
        if consumed == 0 {
            return Err(Error::SoldOut);
        }
        let change = amount - consumed;

        let collected = get_total_collected(&env)
            .checked_add(consumed)
            .ok_or(Error::Overflow)?;
        set_total_collected(&env, collected);

        let this = env.current_contract_address();
        let native = token::Client::new(&env, &config.native_asset);
        native.transfer(&buyer, &this, &amount);
        LedgerClient::new(&env, &config.token).transfer_from(
            &this,
            &config.general_sale_wallet,
            &buyer,
            &tokens,
        );
        if change > 0 {
            native.transfer(&this, &buyer, &change);
            log_warn(&env, symbol_short!("change"), Some(buyer.clone()), Some(change));
        }

        env.events().publish(
            (symbol_short!("purchase"), buyer.clone()),
            (amount, consumed, tokens, change),
        );
        log_info(&env, symbol_short!("purchase"), Some(buyer), Some(consumed));

        Ok(PurchaseReceipt {
            tokens,
            consumed,
            change,
        })
    }

    /// Move the unsold tokens the crowdsale may still sell to the players
    /// reserve once the sale is over. Returns the general-sale end date.
    pub fn close_sale(env: Env, caller: Address) -> Result<u64, Error> {
        let config = load_live(&env)?;
        require_owner(&env, &caller)?;

        if is_closed(&env) {
            return Err(Error::AlreadyClosed);
        }
        let now = env.ledger().timestamp();
        match compute_status(&env, &config, now) {
            SaleStatus::Ended | SaleStatus::GoalReached => {}
            _ => return Err(Error::SaleStillOpen),
        }

        set_closed(&env, true);

        // tokens sent into the wallet on top of the allowance stay there
        let rest = available_tokens(&env, &config);
        if rest > 0 {
            LedgerClient::new(&env, &config.token).transfer_from(
                &env.current_contract_address(),
                &config.general_sale_wallet,
                &config.players_reserve,
                &rest,
            );
        }

        env.events().publish(
            (symbol_short!("closed"),),
            (config.players_reserve, rest, config.general_sale_end),
        );
        log_info(&env, symbol_short!("close"), Some(caller), Some(rest));
        Ok(config.general_sale_end)
    }

    /// Send the whole native balance to the owner and tombstone the contract.
    pub fn kill(env: Env, caller: Address) -> Result<i128, Error> {
        let config = load_live(&env)?;
        require_owner(&env, &caller)?;

        let now = env.ledger().timestamp();
        match compute_status(&env, &config, now) {
            SaleStatus::Active | SaleStatus::BetweenPhases => {
                return Err(Error::SaleActiveAndUnderGoal)
            }
            SaleStatus::Ended => {
                if available_tokens(&env, &config) > 0 {
                    return Err(Error::UnsoldTokensRemain);
                }
            }
            _ => {}
        }

        set_alive(&env, false);

        let this = env.current_contract_address();
        let native = token::Client::new(&env, &config.native_asset);
        let balance = native.balance(&this);
        if balance > 0 {
            native.transfer(&this, &caller, &balance);
        }

        env.events()
            .publish((symbol_short!("killed"),), (caller.clone(), balance));
        log_warn(&env, symbol_short!("kill"), Some(caller), Some(balance));
        Ok(balance)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        load_live(&env)?;
        require_owner(&env, &caller)?;

        set_owner(&env, &new_owner);

        env.events()
            .publish((symbol_short!("owner"),), (caller.clone(), new_owner));
        log_info(&env, symbol_short!("owner"), Some(caller), None);
        Ok(())
    }

    /// Forward collected funds to the escrow bank.
    pub fn withdraw_to_bank(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        let config = load_live(&env)?;
        require_owner(&env, &caller)?;

        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }
        let this = env.current_contract_address();
        let native = token::Client::new(&env, &config.native_asset);
        if amount > native.balance(&this) {
            return Err(Error::InsufficientFunds);
        }

        native.transfer(&this, &config.bank, &amount);

        env.events()
            .publish((symbol_short!("to_bank"),), (config.bank, amount));
        log_info(&env, symbol_short!("to_bank"), Some(caller), Some(amount));
        Ok(())
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    pub fn total_collected(env: Env) -> i128 {
        get_total_collected(&env)
    }

    pub fn sale_goal(env: Env) -> Result<i128, Error> {
        Ok(get_config(&env)?.sale_goal)
    }

    pub fn sale_status(env: Env) -> Result<SaleStatus, Error> {
        let config = get_config(&env)?;
        Ok(compute_status(&env, &config, env.ledger().timestamp()))
    }

    pub fn is_sale_active(env: Env) -> Result<bool, Error> {
        Ok(Self::sale_status(env)? == SaleStatus::Active)
    }

    /// Rate of the phase running now, if any.
    pub fn current_rate(env: Env) -> Result<Option<i128>, Error> {
        let config = get_config(&env)?;
        Ok(SaleWindow::from_config(&config)
            .phase_at(env.ledger().timestamp())
            .rate())
    }

    pub fn is_closed(env: Env) -> bool {
        is_closed(&env)
    }

    pub fn is_alive(env: Env) -> bool {
        is_alive(&env)
    }
}
