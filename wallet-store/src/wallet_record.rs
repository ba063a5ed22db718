/// One account row: a unique wallet id and its current balance in minor currency units.
/// The balance is non-negative after every committed mutation.
#[derive(Clone, Copy, Debug, serde::Deserialize, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    pub wallet_id: uuid::Uuid,
    pub balance: i64,
}
