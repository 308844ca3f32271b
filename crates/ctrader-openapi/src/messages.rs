//! Request, response and event structs of the Open API.
//!
//! Field numbers follow the published `OpenApiCommonMessages.proto`,
//! `OpenApiMessages.proto` and `OpenApiModelMessages.proto` definitions.
//! Field 1 of every inner message repeats the payload type and is optional
//! on the wire. Fields not listed here are skipped by the decoder.

use std::fmt;

use bytes::Bytes;

pub use crate::model::*;

/// Outer envelope of every frame.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoMessage {
    #[prost(uint32, required, tag = "1")]
    pub payload_type: u32,
    #[prost(bytes = "bytes", optional, tag = "2")]
    pub payload: Option<Bytes>,
    #[prost(string, optional, tag = "3")]
    pub client_msg_id: Option<String>,
}

/// Error response for common (non account-scoped) failures.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoErrorRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(string, required, tag = "2")]
    pub error_code: String,
    #[prost(string, optional, tag = "3")]
    pub description: Option<String>,
    #[prost(uint64, optional, tag = "4")]
    pub maintenance_end_timestamp: Option<u64>,
}

/// Liveness frame. Sent by both sides without a client message id.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoHeartbeatEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
}

/// Application authorization, the first request on every connection.
#[derive(Clone, PartialEq, prost::Message)]
#[prost(skip_debug)]
pub struct ProtoOaApplicationAuthReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(string, required, tag = "2")]
    pub client_id: String,
    #[prost(string, required, tag = "3")]
    pub client_secret: String,
}

impl fmt::Debug for ProtoOaApplicationAuthReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtoOaApplicationAuthReq")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaApplicationAuthRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
}

/// Authorizes one trading account on an application-authorized connection.
#[derive(Clone, PartialEq, prost::Message)]
#[prost(skip_debug)]
pub struct ProtoOaAccountAuthReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(string, required, tag = "3")]
    pub access_token: String,
}

impl fmt::Debug for ProtoOaAccountAuthReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtoOaAccountAuthReq")
            .field("ctid_trader_account_id", &self.ctid_trader_account_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAccountAuthRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaVersionReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaVersionRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(string, required, tag = "2")]
    pub version: String,
}

/// Error response for Open API requests.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaErrorRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, optional, tag = "2")]
    pub ctid_trader_account_id: Option<i64>,
    #[prost(string, required, tag = "3")]
    pub error_code: String,
    #[prost(string, optional, tag = "4")]
    pub description: Option<String>,
    #[prost(int64, optional, tag = "5")]
    pub maintenance_end_timestamp: Option<i64>,
}

/// Server is about to close the connection.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaClientDisconnectEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(string, optional, tag = "2")]
    pub reason: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAccountsTokenInvalidatedEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, repeated, packed = "false", tag = "2")]
    pub ctid_trader_account_ids: Vec<i64>,
    #[prost(string, optional, tag = "3")]
    pub reason: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAccountDisconnectEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
#[prost(skip_debug)]
pub struct ProtoOaGetAccountListByAccessTokenReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(string, required, tag = "2")]
    pub access_token: String,
}

impl fmt::Debug for ProtoOaGetAccountListByAccessTokenReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtoOaGetAccountListByAccessTokenReq")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, prost::Message)]
#[prost(skip_debug)]
pub struct ProtoOaGetAccountListByAccessTokenRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(string, required, tag = "2")]
    pub access_token: String,
    #[prost(int32, optional, tag = "3")]
    pub permission_scope: Option<i32>,
    #[prost(message, repeated, tag = "4")]
    pub ctid_trader_account: Vec<ProtoOaCtidTraderAccount>,
}

impl fmt::Debug for ProtoOaGetAccountListByAccessTokenRes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtoOaGetAccountListByAccessTokenRes")
            .field("access_token", &"<redacted>")
            .field("permission_scope", &self.permission_scope)
            .field("ctid_trader_account", &self.ctid_trader_account)
            .finish()
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSubscribeSpotsReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, repeated, packed = "false", tag = "3")]
    pub symbol_id: Vec<i64>,
    #[prost(bool, optional, tag = "4")]
    pub subscribe_to_spot_timestamp: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSubscribeSpotsRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaUnsubscribeSpotsReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, repeated, packed = "false", tag = "3")]
    pub symbol_id: Vec<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaUnsubscribeSpotsRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

/// Price update for a subscribed symbol. Prices are in 1/100000 units.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSpotEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub symbol_id: i64,
    #[prost(uint64, optional, tag = "4")]
    pub bid: Option<u64>,
    #[prost(uint64, optional, tag = "5")]
    pub ask: Option<u64>,
    #[prost(uint64, optional, tag = "7")]
    pub session_close: Option<u64>,
    #[prost(int64, optional, tag = "8")]
    pub timestamp: Option<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbolsListReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(bool, optional, tag = "3")]
    pub include_archived_symbols: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbolsListRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub symbol: Vec<ProtoOaLightSymbol>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaTraderReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaTraderRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, required, tag = "3")]
    pub trader: ProtoOaTrader,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaTraderUpdatedEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, required, tag = "3")]
    pub trader: ProtoOaTrader,
}


#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAccountLogoutReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

/// Logout accepted. The server follows up with an account disconnect event.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAccountLogoutRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
#[prost(skip_debug)]
pub struct ProtoOaGetCtidProfileByTokenReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(string, required, tag = "2")]
    pub access_token: String,
}

impl fmt::Debug for ProtoOaGetCtidProfileByTokenReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtoOaGetCtidProfileByTokenReq")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaGetCtidProfileByTokenRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(message, required, tag = "2")]
    pub profile: ProtoOaCtidProfile,
}

#[derive(Clone, PartialEq, prost::Message)]
#[prost(skip_debug)]
pub struct ProtoOaRefreshTokenReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(string, required, tag = "2")]
    pub refresh_token: String,
}

impl fmt::Debug for ProtoOaRefreshTokenReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtoOaRefreshTokenReq")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, prost::Message)]
#[prost(skip_debug)]
pub struct ProtoOaRefreshTokenRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(string, required, tag = "2")]
    pub access_token: String,
    #[prost(string, required, tag = "3")]
    pub token_type: String,
    #[prost(int64, required, tag = "4")]
    pub expires_in: i64,
    #[prost(string, required, tag = "5")]
    pub refresh_token: String,
}

impl fmt::Debug for ProtoOaRefreshTokenRes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtoOaRefreshTokenRes")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAssetListReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAssetListRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub asset: Vec<ProtoOaAsset>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAssetClassListReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAssetClassListRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub asset_class: Vec<ProtoOaAssetClass>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbolCategoryListReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbolCategoryListRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub symbol_category: Vec<ProtoOaSymbolCategory>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbolByIdReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, repeated, packed = "false", tag = "3")]
    pub symbol_id: Vec<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbolByIdRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub symbol: Vec<ProtoOaSymbol>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbolsForConversionReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub first_asset_id: i64,
    #[prost(int64, required, tag = "4")]
    pub last_asset_id: i64,
}

/// Chain of symbols linking two assets, in conversion order.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbolsForConversionRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub symbol: Vec<ProtoOaLightSymbol>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSymbolChangedEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, repeated, packed = "false", tag = "3")]
    pub symbol_id: Vec<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaNewOrderReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub symbol_id: i64,
    #[prost(int32, required, tag = "4")]
    pub order_type: i32,
    #[prost(int32, required, tag = "5")]
    pub trade_side: i32,
    #[prost(int64, required, tag = "6")]
    pub volume: i64,
    #[prost(double, optional, tag = "7")]
    pub limit_price: Option<f64>,
    #[prost(double, optional, tag = "8")]
    pub stop_price: Option<f64>,
    #[prost(int32, optional, tag = "9")]
    pub time_in_force: Option<i32>,
    #[prost(int64, optional, tag = "10")]
    pub expiration_timestamp: Option<i64>,
    #[prost(double, optional, tag = "11")]
    pub stop_loss: Option<f64>,
    #[prost(double, optional, tag = "12")]
    pub take_profit: Option<f64>,
    #[prost(string, optional, tag = "13")]
    pub comment: Option<String>,
    #[prost(double, optional, tag = "14")]
    pub base_slippage_price: Option<f64>,
    #[prost(int32, optional, tag = "15")]
    pub slippage_in_points: Option<i32>,
    #[prost(string, optional, tag = "16")]
    pub label: Option<String>,
    #[prost(int64, optional, tag = "17")]
    pub position_id: Option<i64>,
    #[prost(string, optional, tag = "18")]
    pub client_order_id: Option<String>,
    #[prost(int64, optional, tag = "19")]
    pub relative_stop_loss: Option<i64>,
    #[prost(int64, optional, tag = "20")]
    pub relative_take_profit: Option<i64>,
    #[prost(bool, optional, tag = "21")]
    pub guaranteed_stop_loss: Option<bool>,
    #[prost(bool, optional, tag = "22")]
    pub trailing_stop_loss: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaCancelOrderReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub order_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAmendOrderReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub order_id: i64,
    #[prost(int64, optional, tag = "4")]
    pub volume: Option<i64>,
    #[prost(double, optional, tag = "5")]
    pub limit_price: Option<f64>,
    #[prost(double, optional, tag = "6")]
    pub stop_price: Option<f64>,
    #[prost(int64, optional, tag = "7")]
    pub expiration_timestamp: Option<i64>,
    #[prost(double, optional, tag = "8")]
    pub stop_loss: Option<f64>,
    #[prost(double, optional, tag = "9")]
    pub take_profit: Option<f64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaAmendPositionSltpReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub position_id: i64,
    #[prost(double, optional, tag = "4")]
    pub stop_loss: Option<f64>,
    #[prost(double, optional, tag = "5")]
    pub take_profit: Option<f64>,
    #[prost(bool, optional, tag = "7")]
    pub guaranteed_stop_loss: Option<bool>,
    #[prost(bool, optional, tag = "8")]
    pub trailing_stop_loss: Option<bool>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaClosePositionReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub position_id: i64,
    #[prost(int64, required, tag = "4")]
    pub volume: i64,
}

/// Outcome of a trading request, or a server-side change to an order or
/// position. Trading requests are answered with this event.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaExecutionEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int32, required, tag = "3")]
    pub execution_type: i32,
    #[prost(message, optional, tag = "4")]
    pub position: Option<ProtoOaPosition>,
    #[prost(message, optional, tag = "5")]
    pub order: Option<ProtoOaOrder>,
    #[prost(message, optional, tag = "6")]
    pub deal: Option<ProtoOaDeal>,
    #[prost(message, optional, tag = "7")]
    pub bonus_deposit_withdraw: Option<ProtoOaBonusDepositWithdraw>,
    #[prost(message, optional, tag = "8")]
    pub deposit_withdraw: Option<ProtoOaDepositWithdraw>,
    #[prost(string, optional, tag = "9")]
    pub error_code: Option<String>,
    #[prost(bool, optional, tag = "10")]
    pub is_server_event: Option<bool>,
}

/// A trading request was rejected by the server.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaOrderErrorEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(string, required, tag = "2")]
    pub error_code: String,
    #[prost(int64, optional, tag = "3")]
    pub order_id: Option<i64>,
    #[prost(int64, required, tag = "5")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, optional, tag = "6")]
    pub position_id: Option<i64>,
    #[prost(string, optional, tag = "7")]
    pub description: Option<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaTrailingSlChangedEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub position_id: i64,
    #[prost(int64, required, tag = "4")]
    pub order_id: i64,
    #[prost(double, required, tag = "5")]
    pub stop_price: f64,
    #[prost(int64, required, tag = "6")]
    pub utc_last_update_timestamp: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaMarginChangedEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(uint64, required, tag = "3")]
    pub position_id: u64,
    #[prost(uint64, required, tag = "4")]
    pub used_margin: u64,
    #[prost(uint32, optional, tag = "5")]
    pub money_digits: Option<u32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaReconcileReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(bool, optional, tag = "3")]
    pub return_protection_orders: Option<bool>,
}

/// Open positions and pending orders of an account.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaReconcileRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub position: Vec<ProtoOaPosition>,
    #[prost(message, repeated, tag = "4")]
    pub order: Vec<ProtoOaOrder>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaDealListReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub from_timestamp: i64,
    #[prost(int64, required, tag = "4")]
    pub to_timestamp: i64,
    #[prost(int32, optional, tag = "5")]
    pub max_rows: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaDealListRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub deal: Vec<ProtoOaDeal>,
    #[prost(bool, required, tag = "4")]
    pub has_more: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaDealListByPositionIdReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub position_id: i64,
    #[prost(int64, required, tag = "4")]
    pub from_timestamp: i64,
    #[prost(int64, required, tag = "5")]
    pub to_timestamp: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaDealListByPositionIdRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub deal: Vec<ProtoOaDeal>,
    #[prost(bool, required, tag = "4")]
    pub has_more: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaOrderListReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub from_timestamp: i64,
    #[prost(int64, required, tag = "4")]
    pub to_timestamp: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaOrderListRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub order: Vec<ProtoOaOrder>,
    #[prost(bool, required, tag = "4")]
    pub has_more: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaCashFlowHistoryListReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub from_timestamp: i64,
    #[prost(int64, required, tag = "4")]
    pub to_timestamp: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaCashFlowHistoryListRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub deposit_withdraw: Vec<ProtoOaDepositWithdraw>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaExpectedMarginReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub symbol_id: i64,
    #[prost(int64, repeated, packed = "false", tag = "4")]
    pub volume: Vec<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaExpectedMarginRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub margin: Vec<ProtoOaExpectedMargin>,
    #[prost(uint32, optional, tag = "4")]
    pub money_digits: Option<u32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaGetTrendbarsReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, optional, tag = "3")]
    pub from_timestamp: Option<i64>,
    #[prost(int64, optional, tag = "4")]
    pub to_timestamp: Option<i64>,
    #[prost(int32, required, tag = "5")]
    pub period: i32,
    #[prost(int64, required, tag = "6")]
    pub symbol_id: i64,
    #[prost(uint32, optional, tag = "7")]
    pub count: Option<u32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaGetTrendbarsRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int32, required, tag = "3")]
    pub period: i32,
    #[prost(int64, optional, tag = "4")]
    pub timestamp: Option<i64>,
    #[prost(message, repeated, tag = "5")]
    pub trendbar: Vec<ProtoOaTrendbar>,
    #[prost(int64, optional, tag = "6")]
    pub symbol_id: Option<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaGetTickDataReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub symbol_id: i64,
    #[prost(int32, required, tag = "4")]
    pub quote_type: i32,
    #[prost(int64, optional, tag = "5")]
    pub from_timestamp: Option<i64>,
    #[prost(int64, optional, tag = "6")]
    pub to_timestamp: Option<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaGetTickDataRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, repeated, tag = "3")]
    pub tick_data: Vec<ProtoOaTickData>,
    #[prost(bool, required, tag = "4")]
    pub has_more: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSubscribeLiveTrendbarReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int32, required, tag = "3")]
    pub period: i32,
    #[prost(int64, required, tag = "4")]
    pub symbol_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSubscribeLiveTrendbarRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaUnsubscribeLiveTrendbarReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int32, required, tag = "3")]
    pub period: i32,
    #[prost(int64, required, tag = "4")]
    pub symbol_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaUnsubscribeLiveTrendbarRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSubscribeDepthQuotesReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, repeated, packed = "false", tag = "3")]
    pub symbol_id: Vec<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaSubscribeDepthQuotesRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaUnsubscribeDepthQuotesReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, repeated, packed = "false", tag = "3")]
    pub symbol_id: Vec<i64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaUnsubscribeDepthQuotesRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

/// Order book delta for a symbol with a depth subscription.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaDepthEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(uint64, required, tag = "3")]
    pub symbol_id: u64,
    #[prost(message, repeated, tag = "4")]
    pub new_quotes: Vec<ProtoOaDepthQuote>,
    #[prost(uint64, repeated, tag = "5")]
    pub deleted_quotes: Vec<u64>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaMarginCallListReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaMarginCallListRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(message, repeated, tag = "2")]
    pub margin_call: Vec<ProtoOaMarginCall>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaMarginCallUpdateReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, required, tag = "3")]
    pub margin_call: ProtoOaMarginCall,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaMarginCallUpdateRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaMarginCallUpdateEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, required, tag = "3")]
    pub margin_call: ProtoOaMarginCall,
}

/// Margin level crossed a configured margin call threshold.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaMarginCallTriggerEvent {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, required, tag = "3")]
    pub margin_call: ProtoOaMarginCall,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaGetDynamicLeverageByIdReq {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(int64, required, tag = "3")]
    pub leverage_id: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ProtoOaGetDynamicLeverageByIdRes {
    #[prost(int32, optional, tag = "1")]
    pub payload_type: Option<i32>,
    #[prost(int64, required, tag = "2")]
    pub ctid_trader_account_id: i64,
    #[prost(message, required, tag = "3")]
    pub leverage: ProtoOaDynamicLeverage,
}
