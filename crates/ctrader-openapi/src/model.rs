//! Model types nested inside Open API messages.
//!
//! Enumerations (trade side, order type, execution type and so on) are kept
//! as their raw `int32` wire values so values added server-side still decode.
//! Prices on [`ProtoOaTrendbar`] and [`ProtoOaDepthQuote`] are in 1/100000
//! units; monetary amounts are scaled by `10^money_digits`.

/// A trading account reachable with an access token.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaCtidTraderAccount {
    #[prost(uint64, required, tag = "1")]
    pub ctid_trader_account_id: u64,
    #[prost(bool, optional, tag = "2")]
    pub is_live: Option<bool>,
    #[prost(int64, optional, tag = "3")]
    pub trader_login: Option<i64>,
    #[prost(int64, optional, tag = "4")]
    pub last_closing_deal_timestamp: Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub last_balance_update_timestamp: Option<i64>,
    #[prost(string, optional, tag = "6")]
    pub broker_title_short: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaLightSymbol {
    #[prost(int64, required, tag = "1")]
    pub symbol_id: i64,
    #[prost(string, optional, tag = "2")]
    pub symbol_name: Option<String>,
    #[prost(bool, optional, tag = "3")]
    pub enabled: Option<bool>,
    #[prost(int64, optional, tag = "4")]
    pub base_asset_id: Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub quote_asset_id: Option<i64>,
    #[prost(int64, optional, tag = "6")]
    pub symbol_category_id: Option<i64>,
    #[prost(string, optional, tag = "7")]
    pub description: Option<String>,
}

/// Full symbol definition as returned by a symbol-by-id lookup.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbol {
    #[prost(int64, required, tag = "1")]
    pub symbol_id: i64,
    #[prost(int32, required, tag = "2")]
    pub digits: i32,
    #[prost(int32, required, tag = "3")]
    pub pip_position: i32,
    #[prost(bool, optional, tag = "4")]
    pub enable_short_selling: Option<bool>,
    #[prost(bool, optional, tag = "5")]
    pub guaranteed_stop_loss: Option<bool>,
    #[prost(double, optional, tag = "7")]
    pub swap_long: Option<f64>,
    #[prost(double, optional, tag = "8")]
    pub swap_short: Option<f64>,
    #[prost(int64, optional, tag = "9")]
    pub max_volume: Option<i64>,
    #[prost(int64, optional, tag = "10")]
    pub min_volume: Option<i64>,
    #[prost(int64, optional, tag = "11")]
    pub step_volume: Option<i64>,
    #[prost(uint64, optional, tag = "12")]
    pub max_exposure: Option<u64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAsset {
    #[prost(int64, required, tag = "1")]
    pub asset_id: i64,
    #[prost(string, required, tag = "2")]
    pub name: String,
    #[prost(string, optional, tag = "3")]
    pub display_name: Option<String>,
    #[prost(int32, optional, tag = "4")]
    pub digits: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAssetClass {
    #[prost(int64, optional, tag = "1")]
    pub id: Option<i64>,
    #[prost(string, optional, tag = "2")]
    pub name: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbolCategory {
    #[prost(int64, required, tag = "1")]
    pub id: i64,
    #[prost(int64, required, tag = "2")]
    pub asset_class_id: i64,
    #[prost(string, required, tag = "3")]
    pub name: String,
}

/// Trading account state. Monetary values are scaled by `10^money_digits`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaTrader {
    #[prost(int64, required, tag = "1")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "2")]
    pub balance: i64,
    #[prost(int64, optional, tag = "3")]
    pub balance_version: Option<i64>,
    #[prost(int64, required, tag = "8")]
    pub deposit_asset_id: i64,
    #[prost(uint32, optional, tag = "10")]
    pub leverage_in_cents: Option<u32>,
    #[prost(int64, optional, tag = "14")]
    pub trader_login: Option<i64>,
    #[prost(string, optional, tag = "16")]
    pub broker_name: Option<String>,
    #[prost(uint32, optional, tag = "20")]
    pub money_digits: Option<u32>,
}

/// Instrument, volume and side shared by positions and orders.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaTradeData {
    #[prost(int64, required, tag = "1")]
    pub symbol_id: i64,
    #[prost(int64, required, tag = "2")]
    pub volume: i64,
    #[prost(int32, required, tag = "3")]
    pub trade_side: i32,
    #[prost(int64, optional, tag = "4")]
    pub open_timestamp: Option<i64>,
    #[prost(string, optional, tag = "5")]
    pub label: Option<String>,
    #[prost(bool, optional, tag = "6")]
    pub guaranteed_stop_loss: Option<bool>,
    #[prost(string, optional, tag = "7")]
    pub comment: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaPosition {
    #[prost(int64, required, tag = "1")]
    pub position_id: i64,
    #[prost(message, required, tag = "2")]
    pub trade_data: ProtoOaTradeData,
    #[prost(int32, required, tag = "3")]
    pub position_status: i32,
    #[prost(int64, required, tag = "4")]
    pub swap: i64,
    #[prost(double, optional, tag = "5")]
    pub price: Option<f64>,
    #[prost(double, optional, tag = "6")]
    pub stop_loss: Option<f64>,
    #[prost(double, optional, tag = "7")]
    pub take_profit: Option<f64>,
    #[prost(int64, optional, tag = "8")]
    pub utc_last_update_timestamp: Option<i64>,
    #[prost(int64, optional, tag = "9")]
    pub commission: Option<i64>,
    #[prost(double, optional, tag = "10")]
    pub margin_rate: Option<f64>,
    #[prost(bool, optional, tag = "12")]
    pub guaranteed_stop_loss: Option<bool>,
    #[prost(uint64, optional, tag = "13")]
    pub used_margin: Option<u64>,
    #[prost(uint32, optional, tag = "15")]
    pub money_digits: Option<u32>,
    #[prost(bool, optional, tag = "16")]
    pub trailing_stop_loss: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaOrder {
    #[prost(int64, required, tag = "1")]
    pub order_id: i64,
    #[prost(message, required, tag = "2")]
    pub trade_data: ProtoOaTradeData,
    #[prost(int32, required, tag = "3")]
    pub order_type: i32,
    #[prost(int32, required, tag = "4")]
    pub order_status: i32,
    #[prost(int64, optional, tag = "6")]
    pub expiration_timestamp: Option<i64>,
    #[prost(double, optional, tag = "7")]
    pub execution_price: Option<f64>,
    #[prost(int64, optional, tag = "8")]
    pub executed_volume: Option<i64>,
    #[prost(int64, optional, tag = "9")]
    pub utc_last_update_timestamp: Option<i64>,
    #[prost(bool, optional, tag = "12")]
    pub closing_order: Option<bool>,
    #[prost(double, optional, tag = "13")]
    pub limit_price: Option<f64>,
    #[prost(double, optional, tag = "14")]
    pub stop_price: Option<f64>,
    #[prost(double, optional, tag = "15")]
    pub stop_loss: Option<f64>,
    #[prost(double, optional, tag = "16")]
    pub take_profit: Option<f64>,
    #[prost(string, optional, tag = "17")]
    pub client_order_id: Option<String>,
    #[prost(int32, optional, tag = "18")]
    pub time_in_force: Option<i32>,
    #[prost(int64, optional, tag = "19")]
    pub position_id: Option<i64>,
}

/// A fill, or the attempt at one, produced by an order.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaDeal {
    #[prost(int64, required, tag = "1")]
    pub deal_id: i64,
    #[prost(int64, required, tag = "2")]
    pub order_id: i64,
    #[prost(int64, required, tag = "3")]
    pub position_id: i64,
    #[prost(int64, required, tag = "4")]
    pub volume: i64,
    #[prost(int64, required, tag = "5")]
    pub filled_volume: i64,
    #[prost(int64, required, tag = "6")]
    pub symbol_id: i64,
    #[prost(int64, required, tag = "7")]
    pub create_timestamp: i64,
    #[prost(int64, required, tag = "8")]
    pub execution_timestamp: i64,
    #[prost(int64, optional, tag = "9")]
    pub utc_last_update_timestamp: Option<i64>,
    #[prost(double, optional, tag = "10")]
    pub execution_price: Option<f64>,
    #[prost(int32, required, tag = "11")]
    pub trade_side: i32,
    #[prost(int32, required, tag = "12")]
    pub deal_status: i32,
    #[prost(double, optional, tag = "13")]
    pub margin_rate: Option<f64>,
    #[prost(int64, optional, tag = "14")]
    pub commission: Option<i64>,
    #[prost(uint32, optional, tag = "17")]
    pub money_digits: Option<u32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaDepositWithdraw {
    #[prost(int32, required, tag = "1")]
    pub operation_type: i32,
    #[prost(int64, required, tag = "2")]
    pub balance_history_id: i64,
    #[prost(int64, required, tag = "3")]
    pub balance: i64,
    #[prost(int64, required, tag = "4")]
    pub delta: i64,
    #[prost(int64, required, tag = "5")]
    pub change_balance_timestamp: i64,
    #[prost(string, optional, tag = "6")]
    pub external_note: Option<String>,
    #[prost(int64, optional, tag = "7")]
    pub balance_version: Option<i64>,
    #[prost(int64, optional, tag = "8")]
    pub equity: Option<i64>,
    #[prost(uint32, optional, tag = "9")]
    pub money_digits: Option<u32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaBonusDepositWithdraw {
    #[prost(int32, required, tag = "1")]
    pub operation_type: i32,
    #[prost(int64, required, tag = "2")]
    pub bonus_history_id: i64,
    #[prost(int64, required, tag = "3")]
    pub manager_bonus: i64,
    #[prost(int64, required, tag = "4")]
    pub manager_delta: i64,
    #[prost(int64, required, tag = "5")]
    pub ib_bonus: i64,
    #[prost(int64, required, tag = "6")]
    pub ib_delta: i64,
    #[prost(int64, required, tag = "7")]
    pub change_bonus_timestamp: i64,
    #[prost(string, optional, tag = "8")]
    pub external_note: Option<String>,
    #[prost(int64, optional, tag = "9")]
    pub introducing_broker_id: Option<i64>,
    #[prost(uint32, optional, tag = "10")]
    pub money_digits: Option<u32>,
}

/// OHLC bar. `low` is absolute; the other prices are deltas above it.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaTrendbar {
    #[prost(int64, required, tag = "3")]
    pub volume: i64,
    #[prost(int32, optional, tag = "4")]
    pub period: Option<i32>,
    #[prost(int64, optional, tag = "5")]
    pub low: Option<i64>,
    #[prost(uint64, optional, tag = "6")]
    pub delta_open: Option<u64>,
    #[prost(uint64, optional, tag = "7")]
    pub delta_close: Option<u64>,
    #[prost(uint64, optional, tag = "8")]
    pub delta_high: Option<u64>,
    #[prost(uint32, optional, tag = "9")]
    pub utc_timestamp_in_minutes: Option<u32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaExpectedMargin {
    #[prost(int64, required, tag = "1")]
    pub volume: i64,
    #[prost(int64, required, tag = "2")]
    pub buy_margin: i64,
    #[prost(int64, required, tag = "3")]
    pub sell_margin: i64,
}

/// Tick history entry. Both fields are deltas from the previous entry.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaTickData {
    #[prost(int64, required, tag = "1")]
    pub timestamp: i64,
    #[prost(int64, required, tag = "2")]
    pub tick: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaCtidProfile {
    #[prost(int64, required, tag = "1")]
    pub user_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaDepthQuote {
    #[prost(uint64, required, tag = "1")]
    pub id: u64,
    #[prost(uint64, required, tag = "3")]
    pub size: u64,
    #[prost(uint64, optional, tag = "4")]
    pub bid: Option<u64>,
    #[prost(uint64, optional, tag = "5")]
    pub ask: Option<u64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaMarginCall {
    #[prost(int32, required, tag = "1")]
    pub margin_call_type: i32,
    #[prost(double, required, tag = "2")]
    pub margin_level_threshold: f64,
    #[prost(int64, optional, tag = "3")]
    pub utc_last_update_timestamp: Option<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaDynamicLeverage {
    #[prost(int64, required, tag = "1")]
    pub leverage_id: i64,
    #[prost(message, repeated, tag = "2")]
    pub tiers: Vec<ProtoOaDynamicLeverageTier>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaDynamicLeverageTier {
    #[prost(int64, required, tag = "1")]
    pub volume: i64,
    #[prost(int32, required, tag = "2")]
    pub leverage: i32,
}
