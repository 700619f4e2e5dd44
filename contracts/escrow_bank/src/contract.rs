use crate::error::Error;
use crate::storage::*;
use crate::types::*;
use sale_common::{log_info, log_warn, storage::extend_instance, LedgerClient};
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, token, Address, Env};

contractmeta!(
    key = "Description",
    val = "Escrow bank releasing funds by token-weighted vote"
);

/// Seconds a round accepts votes after it opens.
pub const VOTING_PERIOD: u64 = 3 * 3600;

#[contract]
pub struct EscrowBank;

fn load(env: &Env) -> Result<BankConfig, Error> {
    let config = get_config(env)?;
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

fn voting_deadline(opened_at: u64) -> Result<u64, Error> {
    opened_at.checked_add(VOTING_PERIOD).ok_or(Error::Overflow)
}

#[contractimpl]
impl EscrowBank {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        native_asset: Address,
        refund_sink: Address,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        set_config(
            &env,
            &BankConfig {
                token,
                native_asset,
                refund_sink,
            },
        );
        set_owner(&env, &owner);
        set_allowed_withdraw(&env, 0);
        set_allowed_refund(&env, 0);
        extend_instance(&env);

        log_info(&env, symbol_short!("init"), Some(owner), None);
        Ok(())
    }

    /// Open a round proposing to release `amount` of the bank balance.
    pub fn open_voting(env: Env, caller: Address, amount: i128) -> Result<u32, Error> {
        let config = load(&env)?;
        require_owner(&env, &caller)?;

        let mut round = get_round(&env);
        if round.is_open() {
            return Err(Error::AlreadyVoting);
        }
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }
        let balance = token::Client::new(&env, &config.native_asset)
            .balance(&env.current_contract_address());
        if amount > balance {
            return Err(Error::InsufficientBalance);
        }

        round.id = round.id.checked_add(1).ok_or(Error::Overflow)?;
        round.opened_at = Some(env.ledger().timestamp());
        round.proposed_amount = amount;
        round.clear_tally();
        set_round(&env, &round);
        set_last_resolution(&env, &Resolution::Pending);

        env.events()
            .publish((symbol_short!("vote_open"), round.id), amount);
        log_info(&env, symbol_short!("vote_open"), Some(caller), Some(amount));
        Ok(round.id)
    }

    /// Vote with the voter's whole token balance. Returns the counted weight.
    pub fn cast_vote(env: Env, voter: Address, choice: VoteChoice) -> Result<i128, Error> {
        let config = load(&env)?;
        voter.require_auth();

        let mut round = get_round(&env);
        let opened_at = round.opened_at.ok_or(Error::NoActiveRound)?;
        if env.ledger().timestamp() > voting_deadline(opened_at)? {
            return Err(Error::VotingClosed);
        }
        if get_vote(&env, round.id, &voter).is_some() {
            return Err(Error::AlreadyVoted);
        }

        let ledger = LedgerClient::new(&env, &config.token);
        let weight = ledger.balance(&voter);
        if weight <= 0 {
            return Err(Error::NoVotingPower);
        }
        round.add_vote(choice, weight).ok_or(Error::Overflow)?;
        if round.total_weight().ok_or(Error::Overflow)? > ledger.total_supply() {
            return Err(Error::TallyExceedsSupply);
        }

        set_vote(&env, round.id, &voter, choice);
        set_round(&env, &round);

        env.events()
            .publish((symbol_short!("vote"), round.id, voter.clone()), (choice, weight));
        log_info(&env, symbol_short!("vote"), Some(voter), Some(weight));
        Ok(weight)
    }

    /// Close the round once its voting period is over and apply the result.
    pub fn end_voting(env: Env, caller: Address) -> Result<Resolution, Error> {
        load(&env)?;
        let mut round = get_round(&env);
        let opened_at = round.opened_at.ok_or(Error::NoActiveRound)?;
        require_owner(&env, &caller)?;
        if env.ledger().timestamp() <= voting_deadline(opened_at)? {
            return Err(Error::VotingStillOpen);
        }

        let resolution = round.resolve();
        set_allowed_withdraw(&env, 0);
        set_allowed_refund(&env, 0);
        match resolution {
            Resolution::Withdraw(amount) => set_allowed_withdraw(&env, amount),
            Resolution::Refund(amount) => set_allowed_refund(&env, amount),
            _ => {}
        }

        round.opened_at = None;
        round.clear_tally();
        set_round(&env, &round);
        set_last_resolution(&env, &resolution);

        env.events()
            .publish((symbol_short!("vote_end"), round.id), resolution.clone());
        if resolution == Resolution::Rejected {
            log_warn(&env, symbol_short!("rejected"), Some(caller), Some(round.proposed_amount));
        } else {
            log_info(&env, symbol_short!("vote_end"), Some(caller), Some(round.proposed_amount));
        }
        Ok(resolution)
    }

    /// Pay the amount a round allowed out to the owner.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, Error> {
        let config = load(&env)?;
        require_owner(&env, &caller)?;

        let amount = get_allowed_withdraw(&env);
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }
        let this = env.current_contract_address();
        let native = token::Client::new(&env, &config.native_asset);
        if amount > native.balance(&this) {
            return Err(Error::InsufficientBalance);
        }

        set_allowed_withdraw(&env, 0);
        native.transfer(&this, &caller, &amount);

        env.events()
            .publish((symbol_short!("withdraw"),), (caller.clone(), amount));
        log_info(&env, symbol_short!("withdraw"), Some(caller), Some(amount));
        Ok(amount)
    }

    /// Surrender the caller's whole token balance for a proportional share of
    /// the bank's native balance.
    ///
    /// The caller must have approved the bank for at least its balance. The
    /// share is `bank_balance * balance / total_supply`, capped by what the
    /// last round left to refund.
    pub fn refund(env: Env, caller: Address) -> Result<i128, Error> {
        let config = load(&env)?;
        caller.require_auth();

        let this = env.current_contract_address();
        let ledger = LedgerClient::new(&env, &config.token);
        let balance = ledger.balance(&caller);
        if balance <= 0 || ledger.allowance(&caller, &this) < balance {
            return Err(Error::NotApproved);
        }
        let allowed = get_allowed_refund(&env);
        if allowed == 0 {
            return Err(Error::NothingToRefund);
        }

        let native = token::Client::new(&env, &config.native_asset);
        let supply = ledger.total_supply();
        let share = native
            .balance(&this)
            .checked_mul(balance)
            .and_then(|v| v.checked_div(supply))
            .ok_or(Error::Overflow)?
            .min(allowed);
        if share <= 0 {
            return Err(Error::NothingToRefund);
        }

        set_allowed_refund(&env, allowed - share);
        ledger.transfer_from(&this, &caller, &config.refund_sink, &balance);
        native.transfer(&this, &caller, &share);

        env.events()
            .publish((symbol_short!("Refund"), caller.clone()), share);
        log_info(&env, symbol_short!("refund"), Some(caller), Some(share));
        Ok(share)
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        load(&env)?;
        require_owner(&env, &caller)?;

        set_owner(&env, &new_owner);

        env.events()
            .publish((symbol_short!("owner"),), (caller.clone(), new_owner));
        log_info(&env, symbol_short!("owner"), Some(caller), None);
        Ok(())
    }

    // View functions
    pub fn get_config(env: Env) -> Result<BankConfig, Error> {
        get_config(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        get_owner(&env)
    }

    /// The voter's choice in the latest round.
    pub fn vote_of(env: Env, voter: Address) -> Option<VoteChoice> {
        get_vote(&env, get_round(&env).id, &voter)
    }

    pub fn current_round(env: Env) -> EscrowRound {
        get_round(&env)
    }

    pub fn is_voting_open(env: Env) -> bool {
        get_round(&env).is_open()
    }

    pub fn to_allow(env: Env) -> i128 {
        get_round(&env).to_allow
    }

    pub fn to_cancel(env: Env) -> i128 {
        get_round(&env).to_cancel
    }

    pub fn to_refund(env: Env) -> i128 {
        get_round(&env).to_refund
    }

    pub fn allowed_withdraw(env: Env) -> i128 {
        get_allowed_withdraw(&env)
    }

    pub fn allowed_refund(env: Env) -> i128 {
        get_allowed_refund(&env)
    }

    pub fn last_resolution(env: Env) -> Resolution {
        get_last_resolution(&env)
    }

    pub fn voting_period(_env: Env) -> u64 {
        VOTING_PERIOD
    }
}
