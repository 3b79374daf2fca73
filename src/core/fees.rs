use crate::core::Transaction;

/// Miner fee accounting over validated transactions
///
/// The fee of a transaction is whatever its inputs claim beyond what its
/// outputs spend. Totals are signed: defective upstream values can drive
/// the sum negative, and the coinbase simply absorbs whatever comes out.
pub struct FeeCalculator;

impl FeeCalculator {
    /// Net fee of a single transaction: Σ input.prevout.value − Σ output.value.
    pub fn transaction_fee(tx: &Transaction) -> i64 {
        let input_value: i64 = tx
            .get_vin()
            .iter()
            .map(|input| input.get_prevout().get_value())
            .sum();
        let output_value: i64 = tx.get_vout().iter().map(|output| output.get_value()).sum();
        input_value - output_value
    }

    /// Total miner fee over all validated (non-coinbase) transactions.
    pub fn total_fee(transactions: &[Transaction]) -> i64 {
        transactions.iter().map(Self::transaction_fee).sum()
    }
}
