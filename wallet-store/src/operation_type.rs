use serde::Deserialize;

/// The kind of balance mutation requested against a wallet.  Deserialization is total:
/// wire values outside the known set map to Unknown, which the processor rejects with a
/// typed error, so the HTTP layer maps it like the other client errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum OperationType {
    #[serde(rename = "DEPOSIT")]
    Deposit,
    #[serde(rename = "WITHDRAW")]
    Withdraw,
    Unknown,
}

impl OperationType {
    pub fn from_wire_str(s: &str) -> Self {
        match s {
            "DEPOSIT" => Self::Deposit,
            "WITHDRAW" => Self::Withdraw,
            _ => Self::Unknown,
        }
    }
}

impl<'de> serde::Deserialize<'de> for OperationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let operation_type_string = String::deserialize(deserializer)?;
        Ok(Self::from_wire_str(operation_type_string.as_str()))
    }
}
