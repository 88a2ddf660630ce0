/*
[INPUT]:  GET /info payload
[OUTPUT]: Read-only market configuration and statistics snapshot
[POS]:    Data layer - market info models
[UPDATE]: When the info payload gains or renames sections
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Resource volume available at one price level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableByPrice {
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub price: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInfo {
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub available_energy: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub available_fast_energy: Decimal,
    #[serde(default)]
    pub available_energy_by_price: Vec<AvailableByPrice>,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub total_energy: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub next_release_energy: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub available_bandwidth: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub available_fast_bandwidth: Decimal,
    #[serde(default)]
    pub available_bandwidth_by_price: Vec<AvailableByPrice>,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub total_bandwidth: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub next_release_bandwidth: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub energy_per_trx_frozen: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub bandwidth_per_trx_frozen: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub trx_per_energy_fee: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub trx_per_bandwidth_fee: Decimal,
}

/// Price tier for orders of at least `min_duration` seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub min_duration: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub base_price: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub min_pool_price: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub suggested_price: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricesInfo {
    #[serde(default)]
    pub open_energy: Vec<PriceInfo>,
    #[serde(default)]
    pub fast_energy: Vec<PriceInfo>,
    #[serde(default)]
    pub open_bandwidth: Vec<PriceInfo>,
    #[serde(default)]
    pub fast_bandwidth: Vec<PriceInfo>,
}

/// Order sizing limits and timing rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInfo {
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub min_energy: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub suggested_energy: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub min_bandwidth: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub suggested_bandwidth: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub min_fill_energy: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub min_fill_bandwidth: u64,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_u64_vec")]
    pub open_durations: Vec<u64>,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub open_suggested_duration: u64,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_u64_vec")]
    pub fast_durations: Vec<u64>,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub fast_suggested_duration: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub public_time: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub fill_order_award: Decimal,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub cancellation_fee: u64,
}

/// Pool section; the server currently sends no documented fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoolInfo {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditInfo {
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub min_amount: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub min_time_to_withdraw: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferralInfo {
    #[serde(deserialize_with = "serde_helpers::deserialize_decimal")]
    pub reward: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardInfo {
    pub token_id: String,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub exchange_id: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub exchange_token_amount: u64,
    #[serde(deserialize_with = "serde_helpers::deserialize_u64")]
    pub exchange_trx_amount: u64,
}

/// Network endpoints the market points clients at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TronInfo {
    pub node: String,
    pub tronscan: String,
    pub tronscan_api: String,
}

/// Full market snapshot returned by GET /info
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// Market deposit address
    pub address: String,
    pub market: MarketInfo,
    pub price: PricesInfo,
    pub order: OrderInfo,
    pub pool: PoolInfo,
    pub credit: CreditInfo,
    pub referral: ReferralInfo,
    pub reward: RewardInfo,
    pub tron: TronInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::casing::decode;
    use std::str::FromStr;

    const PASCAL_INFO: &str = r#"{
        "Address": "TMarketDepositAddress",
        "Market": {
            "AvailableEnergy": 1500000.5,
            "AvailableFastEnergy": 200000,
            "AvailableEnergyByPrice": [{ "Price": 60, "Value": 1000000 }],
            "TotalEnergy": 90000000,
            "NextReleaseEnergy": 300000,
            "AvailableBandwidth": 5000,
            "AvailableFastBandwidth": 0,
            "TotalBandwidth": 120000,
            "NextReleaseBandwidth": 0,
            "EnergyPerTrxFrozen": "11.42",
            "BandwidthPerTrxFrozen": 1.05,
            "TrxPerEnergyFee": 0.00021,
            "TrxPerBandwidthFee": 0.001
        },
        "Price": {
            "OpenEnergy": [
                { "MinDuration": 3600, "BasePrice": 80, "MinPoolPrice": 60, "SuggestedPrice": 90 },
                { "MinDuration": 86400, "BasePrice": 60, "MinPoolPrice": 45, "SuggestedPrice": 65 }
            ],
            "FastEnergy": []
        },
        "Order": {
            "MinEnergy": 32000,
            "SuggestedEnergy": 65000,
            "MinBandwidth": 1000,
            "SuggestedBandwidth": 5000,
            "MinFillEnergy": 32000,
            "MinFillBandwidth": 1000,
            "OpenDurations": [3600, 86400, 259200],
            "OpenSuggestedDuration": 259200,
            "FastDurations": [3600],
            "FastSuggestedDuration": 3600,
            "PublicTime": 60,
            "FillOrderAward": 0.25,
            "CancellationFee": 100000
        },
        "Pool": {},
        "Credit": { "MinAmount": 10000000, "MinTimeToWithdraw": 86400 },
        "Referral": { "Reward": 0.1 },
        "Reward": {
            "TokenId": "1002000",
            "ExchangeId": 12,
            "ExchangeTokenAmount": 500,
            "ExchangeTrxAmount": 1000000
        },
        "Tron": {
            "Node": "https://api.trongrid.io",
            "Tronscan": "https://tronscan.org",
            "TronscanApi": "https://apilist.tronscanapi.com"
        }
    }"#;

    #[test]
    fn info_parses_pascal_case_payload() {
        let info: Info = decode(PASCAL_INFO.as_bytes()).expect("info should parse");

        assert_eq!(info.address, "TMarketDepositAddress");
        assert_eq!(
            info.market.available_energy,
            Decimal::from_str("1500000.5").unwrap()
        );
        assert_eq!(
            info.market.energy_per_trx_frozen,
            Decimal::from_str("11.42").unwrap()
        );
        assert_eq!(info.market.available_energy_by_price[0].price, 60);
        assert!(info.market.available_bandwidth_by_price.is_empty());
        assert_eq!(info.price.open_energy.len(), 2);
        assert!(info.price.open_bandwidth.is_empty());
        assert_eq!(info.order.open_durations, vec![3_600, 86_400, 259_200]);
        assert_eq!(info.order.fill_order_award, Decimal::from_str("0.25").unwrap());
        assert_eq!(info.credit.min_time_to_withdraw, 86_400);
        assert_eq!(info.reward.token_id, "1002000");
        assert_eq!(info.tron.tronscan_api, "https://apilist.tronscanapi.com");
    }

    #[test]
    fn info_rejects_fractional_integral_fields() {
        let payload = PASCAL_INFO.replace("\"TotalEnergy\": 90000000", "\"TotalEnergy\": 90000000.5");
        let err = decode::<Info>(payload.as_bytes()).unwrap_err();
        assert!(err.is_schema());
    }
}
