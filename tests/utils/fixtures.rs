/// Full deployment fixture: token pools, native asset, crowdsale and bank
use super::constants::*;
use crowdsale::{Crowdsale, CrowdsaleClient, PreSale, SaleConfig};
use escrow_bank::{EscrowBank, EscrowBankClient, VoteChoice, VOTING_PERIOD};
use sale_token::{Allocation, Lockup, SaleToken, SaleTokenClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, vec, Address, Env, String};

pub struct SaleSystem<'a> {
    pub env: &'a Env,
    pub token: SaleTokenClient<'a>,
    pub native: token::Client<'a>,
    pub native_admin: token::StellarAssetClient<'a>,
    pub sale: CrowdsaleClient<'a>,
    pub bank: EscrowBankClient<'a>,
    pub owner: Address,
    pub general_sale: Address,
    pub bounty: Address,
    pub partners: Address,
    pub team: Address,
    pub players_reserve: Address,
    pub refund_sink: Address,
}

impl<'a> SaleSystem<'a> {
    /// General sale only, clock one month before it opens.
    pub fn new(env: &'a Env) -> Self {
        Self::with_pre_sale(env, None)
    }

    pub fn with_pre_sale(env: &'a Env, pre_sale: Option<PreSale>) -> Self {
        env.mock_all_auths();
        env.ledger()
            .with_mut(|l| l.timestamp = GENERAL_SALE_START - 30 * 24 * 3600);

        let owner = Address::generate(env);
        let general_sale = Address::generate(env);
        let bounty = Address::generate(env);
        let partners = Address::generate(env);
        let team = Address::generate(env);
        let players_reserve = Address::generate(env);
        let refund_sink = Address::generate(env);

        let token_id = env.register_contract(None, SaleToken);
        let sale_id = env.register_contract(None, Crowdsale);
        let bank_id = env.register_contract(None, EscrowBank);
        let native_id = env
            .register_stellar_asset_contract_v2(Address::generate(env))
            .address();

        let token = SaleTokenClient::new(env, &token_id);
        token.initialize(
            &owner,
            &7u32,
            &String::from_str(env, "SBI Token"),
            &String::from_str(env, "SBI"),
            &general_sale,
            &vec![
                env,
                Allocation {
                    wallet: general_sale.clone(),
                    amount: GENERAL_SALE_TOKENS,
                    lockups: vec![env],
                },
                Allocation {
                    wallet: bounty.clone(),
                    amount: BOUNTY_TOKENS,
                    lockups: vec![env],
                },
                Allocation {
                    wallet: partners.clone(),
                    amount: PARTNERS_TOKENS,
                    lockups: vec![
                        env,
                        Lockup {
                            release_at: GENERAL_SALE_END + SIX_MONTHS,
                            amount: PARTNERS_TOKENS / 2,
                        },
                    ],
                },
                Allocation {
                    wallet: team.clone(),
                    amount: TEAM_TOKENS,
                    lockups: vec![
                        env,
                        Lockup {
                            release_at: GENERAL_SALE_END + 4 * SIX_MONTHS,
                            amount: TEAM_TOKENS,
                        },
                    ],
                },
            ],
        );

        let sale = CrowdsaleClient::new(env, &sale_id);
        sale.initialize(
            &owner,
            &SaleConfig {
                token: token_id.clone(),
                native_asset: native_id.clone(),
                general_sale_wallet: general_sale.clone(),
                players_reserve: players_reserve.clone(),
                bank: bank_id.clone(),
                pre_sale: pre_sale.into(),
                general_sale_start: GENERAL_SALE_START,
                general_sale_end: GENERAL_SALE_END,
                rate_general_sale: RATE,
                sale_goal: SALE_GOAL,
            },
        );
        token.approve_crowdsale(&sale_id);

        let bank = EscrowBankClient::new(env, &bank_id);
        bank.initialize(&owner, &token_id, &native_id, &refund_sink);

        SaleSystem {
            env,
            token,
            native: token::Client::new(env, &native_id),
            native_admin: token::StellarAssetClient::new(env, &native_id),
            sale,
            bank,
            owner,
            general_sale,
            bounty,
            partners,
            team,
            players_reserve,
            refund_sink,
        }
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().with_mut(|l| l.timestamp = timestamp);
    }

    pub fn advance(&self, seconds: u64) {
        self.env
            .ledger()
            .with_mut(|l| l.timestamp = l.timestamp + seconds);
    }

    /// Move the clock one day into the general sale.
    pub fn open_general_sale(&self) {
        self.set_time(GENERAL_SALE_START + 24 * 3600);
    }

    pub fn funded_buyer(&self, amount: i128) -> Address {
        let buyer = Address::generate(self.env);
        self.native_admin.mint(&buyer, &amount);
        buyer
    }

    /// A fresh buyer spending `amount` during the current phase.
    pub fn buyer_with_purchase(&self, amount: i128) -> Address {
        let buyer = self.funded_buyer(amount);
        self.sale.purchase(&buyer, &amount);
        buyer
    }

    /// Let the bank debit the holder's whole balance.
    pub fn approve_bank(&self, holder: &Address) {
        let balance = self.token.balance(holder);
        let expiration = self.env.ledger().sequence() + 1_000;
        self.token
            .approve(holder, &self.bank.address, &balance, &expiration);
    }

    /// Open a round, cast `votes`, wait out the voting period and close it.
    pub fn run_round(&self, amount: i128, votes: &[(&Address, VoteChoice)]) {
        self.bank.open_voting(&self.owner, &amount);
        for (voter, choice) in votes {
            self.bank.cast_vote(voter, choice);
        }
        self.advance(VOTING_PERIOD + 1);
        self.bank.end_voting(&self.owner);
    }
}
