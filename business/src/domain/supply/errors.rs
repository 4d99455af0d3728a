#[derive(Debug, thiserror::Error)]
pub enum SupplyError {
    #[error("supply.name_empty")]
    NameEmpty,
    #[error("supply.negative_quantity")]
    NegativeQuantity,
    #[error("supply.negative_price")]
    NegativePrice,
    #[error("supply.not_found")]
    NotFound,
    #[error("supply.no_active_selection")]
    NoActiveSelection,
    #[error("supply.operation_in_flight")]
    OperationInFlight,
    #[error("remote.request_failed")]
    Remote(#[from] crate::domain::errors::RemoteError),
}
