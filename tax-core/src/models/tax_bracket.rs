use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal band: income up to `upper_bound` (exclusive of the band
/// below) is taxed at `rate`. `None` marks the open-ended top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl Bracket {
    pub const fn up_to(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub const fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}
