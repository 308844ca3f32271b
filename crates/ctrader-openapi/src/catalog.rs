//! Static type catalog.
//!
//! Maps a payload type tag to the message shape used to decode the inner
//! payload. The table is built once on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::trace;

use crate::error::{OpenApiError, Result};
use crate::messages::*;
use crate::payload_type;

/// A message struct with a fixed payload type.
pub trait OpenApiMessage: prost::Message + Default + Into<Payload> {
    const PAYLOAD_TYPE: u32;
    const NAME: &'static str;
}

/// Error details carried by a remote error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub code: String,
    pub description: Option<String>,
}

/// Catalog entry for one payload type.
#[derive(Clone, Copy)]
pub struct MessageShape {
    pub payload_type: u32,
    pub name: &'static str,
    empty: fn() -> Payload,
    decode: fn(&[u8]) -> Result<Payload>,
}

impl MessageShape {
    /// A default-valued instance of this shape.
    pub fn empty(&self) -> Payload {
        (self.empty)()
    }

    /// Decode `bytes` as this shape.
    pub fn decode(&self, bytes: &[u8]) -> Result<Payload> {
        (self.decode)(bytes)
    }
}

impl std::fmt::Debug for MessageShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageShape")
            .field("payload_type", &self.payload_type)
            .field("name", &self.name)
            .finish()
    }
}

fn empty_as<M: OpenApiMessage>() -> Payload {
    M::default().into()
}

fn decode_as<M: OpenApiMessage>(bytes: &[u8]) -> Result<Payload> {
    M::decode(bytes)
        .map(Into::into)
        .map_err(|source| OpenApiError::Decode {
            what: M::NAME,
            source,
        })
}

macro_rules! catalog {
    ($($variant:ident($message:ident) = $tag:ident,)*) => {
        /// A decoded inner message.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Payload {
            $($variant($message),)*
        }

        $(
            impl OpenApiMessage for $message {
                const PAYLOAD_TYPE: u32 = payload_type::$tag;
                const NAME: &'static str = stringify!($message);
            }

            impl From<$message> for Payload {
                fn from(message: $message) -> Self {
                    Payload::$variant(message)
                }
            }
        )*

        impl Payload {
            /// Payload type tag of the contained message.
            pub fn payload_type(&self) -> u32 {
                match self {
                    $(Payload::$variant(_) => payload_type::$tag,)*
                }
            }

            /// Message name of the contained message.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Payload::$variant(_) => stringify!($message),)*
                }
            }
        }

        fn shapes() -> Vec<MessageShape> {
            vec![
                $(MessageShape {
                    payload_type: payload_type::$tag,
                    name: stringify!($message),
                    empty: empty_as::<$message>,
                    decode: decode_as::<$message>,
                },)*
            ]
        }
    };
}

catalog! {
    Message(ProtoMessage) = PROTO_MESSAGE,
    ErrorRes(ProtoErrorRes) = ERROR_RES,
    Heartbeat(ProtoHeartbeatEvent) = HEARTBEAT_EVENT,

    ApplicationAuthReq(ProtoOaApplicationAuthReq) = PROTO_OA_APPLICATION_AUTH_REQ,
    ApplicationAuthRes(ProtoOaApplicationAuthRes) = PROTO_OA_APPLICATION_AUTH_RES,
    AccountAuthReq(ProtoOaAccountAuthReq) = PROTO_OA_ACCOUNT_AUTH_REQ,
    AccountAuthRes(ProtoOaAccountAuthRes) = PROTO_OA_ACCOUNT_AUTH_RES,
    AccountLogoutReq(ProtoOaAccountLogoutReq) = PROTO_OA_ACCOUNT_LOGOUT_REQ,
    AccountLogoutRes(ProtoOaAccountLogoutRes) = PROTO_OA_ACCOUNT_LOGOUT_RES,
    AccountListReq(ProtoOaGetAccountListByAccessTokenReq) = PROTO_OA_GET_ACCOUNTS_BY_ACCESS_TOKEN_REQ,
    AccountListRes(ProtoOaGetAccountListByAccessTokenRes) = PROTO_OA_GET_ACCOUNTS_BY_ACCESS_TOKEN_RES,
    CtidProfileReq(ProtoOaGetCtidProfileByTokenReq) = PROTO_OA_GET_CTID_PROFILE_BY_TOKEN_REQ,
    CtidProfileRes(ProtoOaGetCtidProfileByTokenRes) = PROTO_OA_GET_CTID_PROFILE_BY_TOKEN_RES,
    RefreshTokenReq(ProtoOaRefreshTokenReq) = PROTO_OA_REFRESH_TOKEN_REQ,
    RefreshTokenRes(ProtoOaRefreshTokenRes) = PROTO_OA_REFRESH_TOKEN_RES,
    VersionReq(ProtoOaVersionReq) = PROTO_OA_VERSION_REQ,
    VersionRes(ProtoOaVersionRes) = PROTO_OA_VERSION_RES,
    OaErrorRes(ProtoOaErrorRes) = PROTO_OA_ERROR_RES,

    AssetListReq(ProtoOaAssetListReq) = PROTO_OA_ASSET_LIST_REQ,
    AssetListRes(ProtoOaAssetListRes) = PROTO_OA_ASSET_LIST_RES,
    AssetClassListReq(ProtoOaAssetClassListReq) = PROTO_OA_ASSET_CLASS_LIST_REQ,
    AssetClassListRes(ProtoOaAssetClassListRes) = PROTO_OA_ASSET_CLASS_LIST_RES,
    SymbolCategoryListReq(ProtoOaSymbolCategoryListReq) = PROTO_OA_SYMBOL_CATEGORY_REQ,
    SymbolCategoryListRes(ProtoOaSymbolCategoryListRes) = PROTO_OA_SYMBOL_CATEGORY_RES,
    SymbolsListReq(ProtoOaSymbolsListReq) = PROTO_OA_SYMBOLS_LIST_REQ,
    SymbolsListRes(ProtoOaSymbolsListRes) = PROTO_OA_SYMBOLS_LIST_RES,
    SymbolByIdReq(ProtoOaSymbolByIdReq) = PROTO_OA_SYMBOL_BY_ID_REQ,
    SymbolByIdRes(ProtoOaSymbolByIdRes) = PROTO_OA_SYMBOL_BY_ID_RES,
    SymbolsForConversionReq(ProtoOaSymbolsForConversionReq) = PROTO_OA_SYMBOLS_FOR_CONVERSION_REQ,
    SymbolsForConversionRes(ProtoOaSymbolsForConversionRes) = PROTO_OA_SYMBOLS_FOR_CONVERSION_RES,
    SymbolChanged(ProtoOaSymbolChangedEvent) = PROTO_OA_SYMBOL_CHANGED_EVENT,

    TraderReq(ProtoOaTraderReq) = PROTO_OA_TRADER_REQ,
    TraderRes(ProtoOaTraderRes) = PROTO_OA_TRADER_RES,
    TraderUpdated(ProtoOaTraderUpdatedEvent) = PROTO_OA_TRADER_UPDATE_EVENT,
    ReconcileReq(ProtoOaReconcileReq) = PROTO_OA_RECONCILE_REQ,
    ReconcileRes(ProtoOaReconcileRes) = PROTO_OA_RECONCILE_RES,

    NewOrderReq(ProtoOaNewOrderReq) = PROTO_OA_NEW_ORDER_REQ,
    CancelOrderReq(ProtoOaCancelOrderReq) = PROTO_OA_CANCEL_ORDER_REQ,
    AmendOrderReq(ProtoOaAmendOrderReq) = PROTO_OA_AMEND_ORDER_REQ,
    AmendPositionSltpReq(ProtoOaAmendPositionSltpReq) = PROTO_OA_AMEND_POSITION_SLTP_REQ,
    ClosePositionReq(ProtoOaClosePositionReq) = PROTO_OA_CLOSE_POSITION_REQ,
    Execution(ProtoOaExecutionEvent) = PROTO_OA_EXECUTION_EVENT,
    OrderError(ProtoOaOrderErrorEvent) = PROTO_OA_ORDER_ERROR_EVENT,
    TrailingSlChanged(ProtoOaTrailingSlChangedEvent) = PROTO_OA_TRAILING_SL_CHANGED_EVENT,
    MarginChanged(ProtoOaMarginChangedEvent) = PROTO_OA_MARGIN_CHANGED_EVENT,

    DealListReq(ProtoOaDealListReq) = PROTO_OA_DEAL_LIST_REQ,
    DealListRes(ProtoOaDealListRes) = PROTO_OA_DEAL_LIST_RES,
    DealListByPositionIdReq(ProtoOaDealListByPositionIdReq) = PROTO_OA_DEAL_LIST_BY_POSITION_ID_REQ,
    DealListByPositionIdRes(ProtoOaDealListByPositionIdRes) = PROTO_OA_DEAL_LIST_BY_POSITION_ID_RES,
    OrderListReq(ProtoOaOrderListReq) = PROTO_OA_ORDER_LIST_REQ,
    OrderListRes(ProtoOaOrderListRes) = PROTO_OA_ORDER_LIST_RES,
    CashFlowHistoryListReq(ProtoOaCashFlowHistoryListReq) = PROTO_OA_CASH_FLOW_HISTORY_LIST_REQ,
    CashFlowHistoryListRes(ProtoOaCashFlowHistoryListRes) = PROTO_OA_CASH_FLOW_HISTORY_LIST_RES,
    ExpectedMarginReq(ProtoOaExpectedMarginReq) = PROTO_OA_EXPECTED_MARGIN_REQ,
    ExpectedMarginRes(ProtoOaExpectedMarginRes) = PROTO_OA_EXPECTED_MARGIN_RES,
    DynamicLeverageReq(ProtoOaGetDynamicLeverageByIdReq) = PROTO_OA_GET_DYNAMIC_LEVERAGE_REQ,
    DynamicLeverageRes(ProtoOaGetDynamicLeverageByIdRes) = PROTO_OA_GET_DYNAMIC_LEVERAGE_RES,

    GetTrendbarsReq(ProtoOaGetTrendbarsReq) = PROTO_OA_GET_TRENDBARS_REQ,
    GetTrendbarsRes(ProtoOaGetTrendbarsRes) = PROTO_OA_GET_TRENDBARS_RES,
    GetTickDataReq(ProtoOaGetTickDataReq) = PROTO_OA_GET_TICKDATA_REQ,
    GetTickDataRes(ProtoOaGetTickDataRes) = PROTO_OA_GET_TICKDATA_RES,

    SubscribeSpotsReq(ProtoOaSubscribeSpotsReq) = PROTO_OA_SUBSCRIBE_SPOTS_REQ,
    SubscribeSpotsRes(ProtoOaSubscribeSpotsRes) = PROTO_OA_SUBSCRIBE_SPOTS_RES,
    UnsubscribeSpotsReq(ProtoOaUnsubscribeSpotsReq) = PROTO_OA_UNSUBSCRIBE_SPOTS_REQ,
    UnsubscribeSpotsRes(ProtoOaUnsubscribeSpotsRes) = PROTO_OA_UNSUBSCRIBE_SPOTS_RES,
    Spot(ProtoOaSpotEvent) = PROTO_OA_SPOT_EVENT,
    SubscribeLiveTrendbarReq(ProtoOaSubscribeLiveTrendbarReq) = PROTO_OA_SUBSCRIBE_LIVE_TRENDBAR_REQ,
    SubscribeLiveTrendbarRes(ProtoOaSubscribeLiveTrendbarRes) = PROTO_OA_SUBSCRIBE_LIVE_TRENDBAR_RES,
    UnsubscribeLiveTrendbarReq(ProtoOaUnsubscribeLiveTrendbarReq) = PROTO_OA_UNSUBSCRIBE_LIVE_TRENDBAR_REQ,
    UnsubscribeLiveTrendbarRes(ProtoOaUnsubscribeLiveTrendbarRes) = PROTO_OA_UNSUBSCRIBE_LIVE_TRENDBAR_RES,
    SubscribeDepthQuotesReq(ProtoOaSubscribeDepthQuotesReq) = PROTO_OA_SUBSCRIBE_DEPTH_QUOTES_REQ,
    SubscribeDepthQuotesRes(ProtoOaSubscribeDepthQuotesRes) = PROTO_OA_SUBSCRIBE_DEPTH_QUOTES_RES,
    UnsubscribeDepthQuotesReq(ProtoOaUnsubscribeDepthQuotesReq) = PROTO_OA_UNSUBSCRIBE_DEPTH_QUOTES_REQ,
    UnsubscribeDepthQuotesRes(ProtoOaUnsubscribeDepthQuotesRes) = PROTO_OA_UNSUBSCRIBE_DEPTH_QUOTES_RES,
    Depth(ProtoOaDepthEvent) = PROTO_OA_DEPTH_EVENT,

    MarginCallListReq(ProtoOaMarginCallListReq) = PROTO_OA_MARGIN_CALL_LIST_REQ,
    MarginCallListRes(ProtoOaMarginCallListRes) = PROTO_OA_MARGIN_CALL_LIST_RES,
    MarginCallUpdateReq(ProtoOaMarginCallUpdateReq) = PROTO_OA_MARGIN_CALL_UPDATE_REQ,
    MarginCallUpdateRes(ProtoOaMarginCallUpdateRes) = PROTO_OA_MARGIN_CALL_UPDATE_RES,
    MarginCallUpdate(ProtoOaMarginCallUpdateEvent) = PROTO_OA_MARGIN_CALL_UPDATE_EVENT,
    MarginCallTrigger(ProtoOaMarginCallTriggerEvent) = PROTO_OA_MARGIN_CALL_TRIGGER_EVENT,

    AccountsTokenInvalidated(ProtoOaAccountsTokenInvalidatedEvent) = PROTO_OA_ACCOUNTS_TOKEN_INVALIDATED_EVENT,
    ClientDisconnect(ProtoOaClientDisconnectEvent) = PROTO_OA_CLIENT_DISCONNECT_EVENT,
    AccountDisconnect(ProtoOaAccountDisconnectEvent) = PROTO_OA_ACCOUNT_DISCONNECT_EVENT,
}

impl Payload {
    /// Error details when this payload is a remote error response.
    pub fn error(&self) -> Option<RemoteError> {
        match self {
            Payload::ErrorRes(res) => Some(RemoteError {
                code: res.error_code.clone(),
                description: res.description.clone(),
            }),
            Payload::OaErrorRes(res) => Some(RemoteError {
                code: res.error_code.clone(),
                description: res.description.clone(),
            }),
            Payload::OrderError(event) => Some(RemoteError {
                code: event.error_code.clone(),
                description: event.description.clone(),
            }),
            _ => None,
        }
    }
}

/// Lookup table from payload type to message shape.
pub struct Catalog {
    shapes: HashMap<u32, MessageShape>,
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::build);

impl Catalog {
    fn build() -> Self {
        let shapes = shapes()
            .into_iter()
            .map(|shape| (shape.payload_type, shape))
            .collect();
        Self { shapes }
    }

    /// The process-wide catalog.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    /// Shape registered for `payload_type`.
    pub fn resolve(&self, payload_type: u32) -> Result<&MessageShape> {
        self.shapes
            .get(&payload_type)
            .ok_or(OpenApiError::UnknownType(payload_type))
    }

    /// Decode `bytes` using the shape registered for `payload_type`.
    pub fn decode(&self, payload_type: u32, bytes: &[u8]) -> Result<Payload> {
        let shape = self.resolve(payload_type)?;
        trace!(payload_type, name = shape.name, len = bytes.len(), "decoding payload");
        shape.decode(bytes)
    }

    /// Number of decodable payload types.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Resolve `payload_type` in the global catalog.
pub fn resolve(payload_type: u32) -> Result<&'static MessageShape> {
    Catalog::global().resolve(payload_type)
}

/// Decode a payload using the global catalog.
pub fn decode(payload_type: u32, bytes: &[u8]) -> Result<Payload> {
    Catalog::global().decode(payload_type, bytes)
}

#[cfg(test)]
mod tests {
    use prost::Message;

    use super::*;

    #[test]
    fn every_shape_has_a_unique_known_tag() {
        let shapes = shapes();
        assert_eq!(Catalog::global().len(), shapes.len());
        for shape in &shapes {
            assert!(
                payload_type::name(shape.payload_type).is_some(),
                "{} has an unnamed tag",
                shape.name
            );
        }
    }

    #[test]
    fn empty_shape_matches_tag() {
        for shape in shapes() {
            assert_eq!(shape.empty().payload_type(), shape.payload_type);
            assert_eq!(shape.empty().name(), shape.name);
        }
    }

    #[test]
    fn resolves_and_decodes_version_response() {
        let res = ProtoOaVersionRes {
            payload_type: Some(payload_type::PROTO_OA_VERSION_RES as i32),
            version: "102".to_string(),
        };
        let bytes = res.encode_to_vec();

        let shape = resolve(payload_type::PROTO_OA_VERSION_RES).unwrap();
        assert_eq!(shape.name, "ProtoOaVersionRes");

        match decode(payload_type::PROTO_OA_VERSION_RES, &bytes).unwrap() {
            Payload::VersionRes(decoded) => assert_eq!(decoded.version, "102"),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = resolve(9999).unwrap_err();
        assert!(matches!(err, OpenApiError::UnknownType(9999)));

        let err = decode(2099, &[]).unwrap_err();
        assert!(matches!(err, OpenApiError::UnknownType(2099)));
    }

    #[test]
    fn every_open_api_tag_is_decodable() {
        for tag in (2100..=2180).chain([5, 50, 51]) {
            let shape = resolve(tag).unwrap_or_else(|_| panic!("no shape for {tag}"));
            assert_eq!(shape.payload_type, tag);
            assert!(shape.decode(&[]).is_ok(), "{} rejects an empty payload", shape.name);
        }
    }

    #[test]
    fn trader_update_event_decodes_as_trader_update() {
        let shape = resolve(payload_type::PROTO_OA_TRADER_UPDATE_EVENT).unwrap();
        assert_eq!(shape.name, "ProtoOaTraderUpdatedEvent");
    }

    #[test]
    fn execution_event_carries_nested_order_and_position() {
        let trade = ProtoOaTradeData {
            symbol_id: 1,
            volume: 100_000,
            trade_side: 1,
            ..Default::default()
        };
        let event = ProtoOaExecutionEvent {
            payload_type: Some(payload_type::PROTO_OA_EXECUTION_EVENT as i32),
            ctid_trader_account_id: 42,
            execution_type: 3,
            position: Some(ProtoOaPosition {
                position_id: 7,
                trade_data: trade.clone(),
                price: Some(1.0825),
                ..Default::default()
            }),
            order: Some(ProtoOaOrder {
                order_id: 9,
                trade_data: trade,
                position_id: Some(7),
                ..Default::default()
            }),
            ..Default::default()
        };

        match decode(payload_type::PROTO_OA_EXECUTION_EVENT, &event.encode_to_vec()).unwrap() {
            Payload::Execution(decoded) => {
                assert_eq!(decoded.ctid_trader_account_id, 42);
                let position = decoded.position.unwrap();
                assert_eq!(position.position_id, 7);
                assert_eq!(position.trade_data.volume, 100_000);
                assert_eq!(decoded.order.unwrap().position_id, Some(7));
                assert!(decoded.deal.is_none());
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn depth_event_decodes_quotes_and_deletions() {
        let event = ProtoOaDepthEvent {
            payload_type: None,
            ctid_trader_account_id: 42,
            symbol_id: 1,
            new_quotes: vec![ProtoOaDepthQuote {
                id: 11,
                size: 500,
                bid: Some(108_250),
                ask: None,
            }],
            deleted_quotes: vec![3, 4],
        };

        match decode(payload_type::PROTO_OA_DEPTH_EVENT, &event.encode_to_vec()).unwrap() {
            Payload::Depth(decoded) => assert_eq!(decoded, event),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = decode(payload_type::PROTO_OA_SPOT_EVENT, &[0x1a, 0x05, 0x01]).unwrap_err();
        assert!(matches!(
            err,
            OpenApiError::Decode {
                what: "ProtoOaSpotEvent",
                ..
            }
        ));
    }

    #[test]
    fn error_payloads_expose_details() {
        let oa = Payload::from(ProtoOaErrorRes {
            error_code: "CH_CLIENT_AUTH_FAILURE".to_string(),
            description: Some("bad secret".to_string()),
            ..Default::default()
        });
        assert_eq!(
            oa.error(),
            Some(RemoteError {
                code: "CH_CLIENT_AUTH_FAILURE".to_string(),
                description: Some("bad secret".to_string()),
            })
        );

        let common = Payload::from(ProtoErrorRes {
            error_code: "UNKNOWN_PAYLOAD".to_string(),
            ..Default::default()
        });
        assert_eq!(common.error().unwrap().code, "UNKNOWN_PAYLOAD");

        let rejected = Payload::from(ProtoOaOrderErrorEvent {
            error_code: "NOT_ENOUGH_MONEY".to_string(),
            ctid_trader_account_id: 42,
            ..Default::default()
        });
        assert_eq!(rejected.error().unwrap().code, "NOT_ENOUGH_MONEY");

        assert!(Payload::from(ProtoHeartbeatEvent::default()).error().is_none());
    }

    #[test]
    fn credentials_are_redacted_in_debug() {
        let req = ProtoOaApplicationAuthReq {
            payload_type: None,
            client_id: "app".to_string(),
            client_secret: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", Payload::from(req));
        assert!(rendered.contains("app"));
        assert!(!rendered.contains("hunter2"));

        let refreshed = ProtoOaRefreshTokenRes {
            access_token: "access-secret".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 2_628_000,
            refresh_token: "refresh-secret".to_string(),
            ..Default::default()
        };
        let rendered = format!("{refreshed:?}");
        assert!(rendered.contains("bearer"));
        assert!(!rendered.contains("secret"));
    }
}
