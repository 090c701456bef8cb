use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Chapter VI-A deduction claims (Old regime only)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DeductionInputs {
    /// Section 80C investments (PF, ELSS, LIC, ...)
    #[serde(default)]
    #[schemars(with = "f64")]
    pub ded_80c: Decimal,
    /// Section 80D medical insurance premiums
    #[serde(default)]
    #[schemars(with = "f64")]
    pub ded_80d: Decimal,
    /// Section 80TTA savings-account interest
    #[serde(default)]
    #[schemars(with = "f64")]
    pub ded_80tta: Decimal,
}

/// Statutory ceilings on the deduction sections. 80D defaults to uncapped;
/// the real ₹25k/₹50k ceiling depends on insured ages the inputs don't
/// carry, so callers that know the applicable limit can set one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeductionCaps {
    #[serde(default = "default_cap_80c")]
    #[schemars(with = "f64")]
    pub cap_80c: Decimal,
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub cap_80d: Option<Decimal>,
    #[serde(default = "default_cap_80tta")]
    #[schemars(with = "f64")]
    pub cap_80tta: Decimal,
}

fn default_cap_80c() -> Decimal {
    dec!(150000)
}

fn default_cap_80tta() -> Decimal {
    dec!(10000)
}

impl Default for DeductionCaps {
    fn default() -> Self {
        DeductionCaps {
            cap_80c: default_cap_80c(),
            cap_80d: None,
            cap_80tta: default_cap_80tta(),
        }
    }
}

impl DeductionInputs {
    /// Total deduction after applying each section's ceiling
    pub fn total(&self, caps: &DeductionCaps) -> Decimal {
        let capped_80d = match caps.cap_80d {
            Some(cap) => self.ded_80d.min(cap),
            None => self.ded_80d,
        };
        self.ded_80c.min(caps.cap_80c) + capped_80d + self.ded_80tta.min(caps.cap_80tta)
    }
}
