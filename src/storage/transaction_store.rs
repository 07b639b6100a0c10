use crate::models::{Term, Transaction};

/// In-memory home of every accepted transaction for one run.
///
/// Alongside the full list in input order, each transaction is copied into exactly one of the
/// short-term and long-term partitions.
#[derive(Debug, Default)]
pub struct TransactionStore {
    all: Vec<Transaction>,
    short_term: Vec<Transaction>,
    long_term: Vec<Transaction>
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, transaction: Transaction) {
        match transaction.term() {
            Term::ShortTerm => self.short_term.push(transaction.clone()),
            Term::LongTerm => self.long_term.push(transaction.clone())
        }

        self.all.push(transaction);
    }

    /// Orders every list by ascending sale date.
    ///
    /// The sort is stable, transactions sold on the same day keep their input order.
    pub fn sort_by_sale_date(&mut self) {
        for transactions in [&mut self.all, &mut self.short_term, &mut self.long_term] {
            transactions.sort_by_key(|transaction| transaction.date_sold);
        }
    }

    pub fn all(&self) -> &[Transaction] {
        &self.all
    }

    pub fn short_term(&self) -> &[Transaction] {
        &self.short_term
    }

    pub fn long_term(&self) -> &[Transaction] {
        &self.long_term
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
