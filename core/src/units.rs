/// Smallest units per whole coin (satoshi per BTC).
pub const SATOSHI_PER_BTC: i64 = 100_000_000;

/// Convert an amount in satoshi to BTC.
pub fn satoshi_to_btc(satoshi: i64) -> f64 {
    satoshi as f64 / SATOSHI_PER_BTC as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_satoshi_to_btc() {
        assert_eq!(satoshi_to_btc(SATOSHI_PER_BTC), 1.0);
        assert_eq!(satoshi_to_btc(50_000_000), 0.5);
        assert_eq!(satoshi_to_btc(-250_000_000), -2.5);
        assert_eq!(satoshi_to_btc(0), 0.0);
    }
}
