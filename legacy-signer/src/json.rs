//! JSON records of legacy user commands and their translation to typed
//! commands.
//!
//! Numeric fields are decimal strings and keys are Mina addresses, so every
//! record can be produced by JavaScript callers without precision loss.

use crate::{
    command::{Body, Common, UserCommand},
    currency::{Amount, Fee, Nonce, Slot},
    error::Result,
    keys::compressed_from_address,
    memo::Memo,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Common fields of a command
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonJson {
    /// Fee in nanomina
    pub fee: String,
    /// Fee payer address (B62...)
    pub fee_payer: String,
    /// Account nonce
    pub nonce: String,
    /// Valid until slot
    pub valid_until: String,
    /// Memo string
    pub memo: String,
}

/// Payment body
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBodyJson {
    /// Source address (B62...)
    pub source: String,
    /// Receiver address (B62...)
    pub receiver: String,
    /// Amount in nanomina
    pub amount: String,
}

/// Payment command
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentJson {
    /// Common fields
    pub common: CommonJson,
    /// Payment body
    pub body: PaymentBodyJson,
}

/// Stake delegation body
///
/// Any `amount` member of the incoming JSON is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationBodyJson {
    /// Delegator address (B62...)
    pub delegator: String,
    /// New delegate address (B62...)
    pub new_delegate: String,
}

/// Stake delegation command
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationJson {
    /// Common fields
    pub common: CommonJson,
    /// Delegation body
    pub body: DelegationBodyJson,
}

/// Parse JSON text into one of the records of this module
///
/// # Errors
///
/// Returns [`crate::Error::Json`] on malformed JSON or missing members.
pub fn from_json_str<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

/// Translate common fields
///
/// # Errors
///
/// Returns [`crate::Error::MalformedNumeric`], [`crate::Error::MalformedKey`]
/// or [`crate::Error::InvalidMemo`] for the first member that does not
/// translate.
pub fn common_from_json(common: &CommonJson) -> Result<Common> {
    Ok(Common {
        fee: Fee::from_decimal("fee", &common.fee)?,
        fee_payer: compressed_from_address(&common.fee_payer)?,
        nonce: Nonce::from_decimal("nonce", &common.nonce)?,
        valid_until: Slot::from_decimal("validUntil", &common.valid_until)?,
        memo: Memo::from_text(&common.memo)?,
    })
}

/// Translate a payment
///
/// # Errors
///
/// See [`common_from_json`].
pub fn payment_from_json(payment: &PaymentJson) -> Result<UserCommand> {
    let common = common_from_json(&payment.common)?;
    let body = Body::Payment {
        source: compressed_from_address(&payment.body.source)?,
        receiver: compressed_from_address(&payment.body.receiver)?,
        amount: Amount::from_decimal("amount", &payment.body.amount)?,
    };
    Ok(UserCommand::new(common, body))
}

/// Translate a stake delegation
///
/// # Errors
///
/// See [`common_from_json`].
pub fn delegation_from_json(delegation: &DelegationJson) -> Result<UserCommand> {
    let common = common_from_json(&delegation.common)?;
    let body = Body::StakeDelegation {
        delegator: compressed_from_address(&delegation.body.delegator)?,
        new_delegate: compressed_from_address(&delegation.body.new_delegate)?,
    };
    Ok(UserCommand::new(common, body))
}
