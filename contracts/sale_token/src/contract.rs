use crate::error::Error;
use crate::storage::*;
use crate::types::*;
use crate::vesting::{validate_lockups, vested_amount};
use sale_common::{log_info, storage::extend_instance};
use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, Address, Env, String, Vec,
};

contractmeta!(
    key = "Description",
    val = "Fixed-supply sale token with pool allocations and vesting lockups"
);

#[contract]
pub struct SaleToken;

fn check_nonnegative_amount(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::NegativeAmount);
    }
    Ok(())
}

fn require_admin(env: &Env) -> Result<Address, Error> {
    let admin = get_admin(env).ok_or(Error::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

fn check_spendable(env: &Env, from: &Address, amount: i128) -> Result<i128, Error> {
    let balance = get_balance(env, from);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    let vested = vested_amount(balance, &get_lockups(env, from), env.ledger().timestamp());
    if vested < amount {
        return Err(Error::VestingLocked);
    }
    Ok(balance)
}

fn receive_balance(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let balance = get_balance(env, to);
    let updated = balance.checked_add(amount).ok_or(Error::Overflow)?;
    set_balance(env, to, updated);
    Ok(())
}

fn spend_allowance(env: &Env, from: &Address, spender: &Address, amount: i128) -> Result<(), Error> {
    let current = get_allowance(env, from, spender);
    if current < amount {
        return Err(Error::InsufficientAllowance);
    }
    if amount > 0 {
        if let Some(mut value) = get_allowance_value(env, from, spender) {
            value.amount = current - amount;
            set_allowance(env, from, spender, &value);
        }
    }
    Ok(())
}

fn write_approval(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), Error> {
    if amount > 0 && expiration_ledger < env.ledger().sequence() {
        return Err(Error::InvalidExpiration);
    }
    set_allowance(
        env,
        from,
        spender,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );
    env.events().publish(
        (symbol_short!("approve"), from.clone(), spender.clone()),
        (amount, expiration_ledger),
    );
    Ok(())
}

fn move_tokens(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let balance = check_spendable(env, from, amount)?;
    set_balance(env, from, balance - amount);
    receive_balance(env, to, amount)?;
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );
    Ok(())
}

#[contractimpl]
impl SaleToken {
    /// Mints the whole supply into the pool wallets. Nothing is minted later.
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        general_sale_wallet: Address,
        allocations: Vec<Allocation>,
    ) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let mut total: i128 = 0;
        for allocation in allocations.iter() {
            if allocation.amount < 0 {
                return Err(Error::InvalidAllocation);
            }
            validate_lockups(allocation.amount, &allocation.lockups)?;
            total = total
                .checked_add(allocation.amount)
                .ok_or(Error::Overflow)?;
        }

        set_admin(&env, &admin);
        set_metadata(
            &env,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );
        set_general_sale_wallet(&env, &general_sale_wallet);
        set_total_supply(&env, total);

        for allocation in allocations.iter() {
            receive_balance(&env, &allocation.wallet, allocation.amount)?;
            if !allocation.lockups.is_empty() {
                let mut lockups = get_lockups(&env, &allocation.wallet);
                lockups.append(&allocation.lockups);
                set_lockups(&env, &allocation.wallet, &lockups);
            }
            env.events().publish(
                (symbol_short!("mint"), admin.clone(), allocation.wallet.clone()),
                allocation.amount,
            );
        }
        extend_instance(&env);

        log_info(&env, symbol_short!("init"), Some(admin), Some(total));
        Ok(())
    }

    /// Lets the crowdsale sell the general-sale wallet's full balance.
    pub fn approve_crowdsale(env: Env, crowdsale: Address) -> Result<i128, Error> {
        let admin = require_admin(&env)?;
        extend_instance(&env);

        let wallet = get_general_sale_wallet(&env).ok_or(Error::NotInitialized)?;
        let amount = get_balance(&env, &wallet);
        write_approval(&env, &wallet, &crowdsale, amount, u32::MAX)?;

        log_info(&env, symbol_short!("appr_sale"), Some(admin), Some(amount));
        Ok(amount)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        extend_instance(&env);

        write_approval(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    pub fn vested_balance(env: Env, id: Address) -> i128 {
        let balance = get_balance(&env, &id);
        vested_amount(balance, &get_lockups(&env, &id), env.ledger().timestamp())
    }

    pub fn lockups(env: Env, id: Address) -> Vec<Lockup> {
        get_lockups(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        extend_instance(&env);

        move_tokens(&env, &from, &to, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        extend_instance(&env);

        check_spendable(&env, &from, amount)?;
        spend_allowance(&env, &from, &spender, amount)?;
        move_tokens(&env, &from, &to, amount)
    }

    pub fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    pub fn general_sale_wallet(env: Env) -> Result<Address, Error> {
        get_general_sale_wallet(&env).ok_or(Error::NotInitialized)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        get_admin(&env).ok_or(Error::NotInitialized)
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(get_metadata(&env).ok_or(Error::NotInitialized)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env).ok_or(Error::NotInitialized)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(get_metadata(&env).ok_or(Error::NotInitialized)?.symbol)
    }
}
