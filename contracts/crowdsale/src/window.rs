//! Sale phases as a pure function of time.
//!
//! Both window ends are inclusive: a payment stamped exactly at the end
//! second still lands inside the phase.

use crate::types::SaleConfig;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    PreSale(i128),
    GeneralSale(i128),
    Closed,
}

impl Phase {
    pub fn rate(&self) -> Option<i128> {
        match self {
            Phase::PreSale(rate) | Phase::GeneralSale(rate) => Some(*rate),
            Phase::Closed => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
    pub rate: i128,
}

impl Interval {
    fn contains(&self, now: u64) -> bool {
        self.start <= now && now <= self.end
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SaleWindow {
    pub pre_sale: Option<Interval>,
    pub general_sale: Interval,
}

impl SaleWindow {
    pub fn from_config(config: &SaleConfig) -> Self {
        SaleWindow {
            pre_sale: config.pre_sale.as_pre_sale().map(|pre| Interval {
                start: pre.start,
                end: pre.end,
                rate: pre.rate,
            }),
            general_sale: Interval {
                start: config.general_sale_start,
                end: config.general_sale_end,
                rate: config.rate_general_sale,
            },
        }
    }

    /// `pre.start < pre.end <= general.start < general.end`, every rate positive.
    pub fn is_valid(&self) -> bool {
        let general = &self.general_sale;
        if general.start >= general.end || general.rate <= 0 {
            return false;
        }
        match &self.pre_sale {
            Some(pre) => pre.start < pre.end && pre.end <= general.start && pre.rate > 0,
            None => true,
        }
    }

    pub fn phase_at(&self, now: u64) -> Phase {
        if let Some(pre) = &self.pre_sale {
            // pre.end == general.start resolves to the pre-sale rate
            if pre.contains(now) {
                return Phase::PreSale(pre.rate);
            }
        }
        if self.general_sale.contains(now) {
            return Phase::GeneralSale(self.general_sale.rate);
        }
        Phase::Closed
    }

    pub fn opens_at(&self) -> u64 {
        match &self.pre_sale {
            Some(pre) => pre.start,
            None => self.general_sale.start,
        }
    }

    pub fn has_started(&self, now: u64) -> bool {
        now >= self.opens_at()
    }

    pub fn has_ended(&self, now: u64) -> bool {
        now > self.general_sale.end
    }
}
