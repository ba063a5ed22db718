use crate::OperationType;

/// Transient input to WalletStore::process_operation; not persisted.  The amount is the
/// magnitude of the operation; the sign is determined by the operation type.
#[derive(Clone, Copy, Debug, serde::Deserialize, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    pub wallet_id: uuid::Uuid,
    pub operation_type: OperationType,
    pub amount: i64,
}
