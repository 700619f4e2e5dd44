//! Token-weighted tally of a voting round and the rule that resolves it.

use crate::types::{EscrowRound, Resolution, VoteChoice};

impl EscrowRound {
    pub fn is_open(&self) -> bool {
        self.opened_at.is_some()
    }

    /// Adds `weight` to the bucket of `choice`. `None` on overflow.
    pub fn add_vote(&mut self, choice: VoteChoice, weight: i128) -> Option<()> {
        let bucket = match choice {
            VoteChoice::Allow => &mut self.to_allow,
            VoteChoice::Cancel => &mut self.to_cancel,
            VoteChoice::Refund => &mut self.to_refund,
        };
        *bucket = bucket.checked_add(weight)?;
        Some(())
    }

    pub fn total_weight(&self) -> Option<i128> {
        self.to_allow
            .checked_add(self.to_cancel)?
            .checked_add(self.to_refund)
    }

    /// Bucket holding strictly more weight than both others, if any.
    pub fn winner(&self) -> Option<VoteChoice> {
        let (allow, cancel, refund) = (self.to_allow, self.to_cancel, self.to_refund);
        if allow > cancel && allow > refund {
            Some(VoteChoice::Allow)
        } else if refund > allow && refund > cancel {
            Some(VoteChoice::Refund)
        } else if cancel > allow && cancel > refund {
            Some(VoteChoice::Cancel)
        } else {
            None
        }
    }

    /// Cancel and ties both grant nothing.
    pub fn resolve(&self) -> Resolution {
        match self.winner() {
            Some(VoteChoice::Allow) => Resolution::Withdraw(self.proposed_amount),
            Some(VoteChoice::Refund) => Resolution::Refund(self.proposed_amount),
            _ => Resolution::Rejected,
        }
    }

    pub fn clear_tally(&mut self) {
        self.to_allow = 0;
        self.to_cancel = 0;
        self.to_refund = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(to_allow: i128, to_cancel: i128, to_refund: i128) -> EscrowRound {
        EscrowRound {
            id: 1,
            opened_at: Some(0),
            proposed_amount: 100,
            to_allow,
            to_cancel,
            to_refund,
        }
    }

    #[test]
    fn strict_largest_bucket_wins() {
        assert_eq!(round(5, 1, 1).resolve(), Resolution::Withdraw(100));
        assert_eq!(round(1, 1, 5).resolve(), Resolution::Refund(100));
        assert_eq!(round(1, 5, 1).winner(), Some(VoteChoice::Cancel));
        assert_eq!(round(1, 5, 1).resolve(), Resolution::Rejected);
    }

    #[test]
    fn ties_resolve_to_nothing() {
        assert_eq!(round(0, 0, 0).resolve(), Resolution::Rejected);
        assert_eq!(round(3, 3, 3).resolve(), Resolution::Rejected);
        assert_eq!(round(4, 1, 4).resolve(), Resolution::Rejected);
        assert_eq!(round(4, 4, 1).winner(), None);
    }

    #[test]
    fn add_vote_checks_overflow() {
        let mut r = round(0, 0, 0);
        r.add_vote(VoteChoice::Refund, 7).unwrap();
        r.add_vote(VoteChoice::Allow, 3).unwrap();
        assert_eq!(r.total_weight(), Some(10));
        assert_eq!(r.add_vote(VoteChoice::Refund, i128::MAX), None);
        assert_eq!(r.to_refund, 7);

        r.clear_tally();
        assert_eq!(r.total_weight(), Some(0));
        assert!(r.is_open());
    }
}
