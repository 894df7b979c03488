//! Legacy user command (payment and stake delegation) types.

use crate::{
    currency::{Amount, Fee, Nonce, Slot},
    memo::Memo,
};
use mina_signer::CompressedPubKey;

/// Token id of the default token, the only token legacy commands can refer to
pub const LEGACY_TOKEN_ID: u64 = 1;

/// Legacy commands never lock tokens
pub const LEGACY_TOKEN_LOCKED: bool = false;

/// Number of bits in the command tag
pub const TAG_BITS: usize = 3;

/// Discriminator of the command body
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Payment, encoded as `000`
    Payment = 0,
    /// Stake delegation, encoded as `001`
    StakeDelegation = 1,
}

impl Tag {
    /// Numeric code of the tag
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Tag bits, most significant first
    pub const fn to_bits(self) -> [bool; TAG_BITS] {
        let code = self.code();
        [code & 0b100 != 0, code & 0b010 != 0, code & 0b001 != 0]
    }
}

impl TryFrom<u8> for Tag {
    type Error = u8;

    /// Accepts only the codes of the two command variants and hands any other
    /// code back as the error.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Payment),
            1 => Ok(Self::StakeDelegation),
            other => Err(other),
        }
    }
}

/// Common fields shared by all user command payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Common {
    /// Fee paid to the block producer.
    pub fee: Fee,
    /// Public key of the fee payer.
    pub fee_payer: CompressedPubKey,
    /// Account nonce for replay protection.
    pub nonce: Nonce,
    /// Slot after which the command expires.
    pub valid_until: Slot,
    /// Memo (34 bytes).
    pub memo: Memo,
}

/// The body of a user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// A transfer of the default token.
    Payment {
        /// Sending account.
        source: CompressedPubKey,
        /// Receiving account.
        receiver: CompressedPubKey,
        /// Amount to transfer.
        amount: Amount,
    },
    /// A change of block production delegate.
    StakeDelegation {
        /// Delegating account.
        delegator: CompressedPubKey,
        /// New delegate.
        new_delegate: CompressedPubKey,
    },
}

impl Body {
    /// Tag of this body
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Payment { .. } => Tag::Payment,
            Self::StakeDelegation { .. } => Tag::StakeDelegation,
        }
    }

    /// Source account; the delegator of a delegation
    pub const fn source(&self) -> &CompressedPubKey {
        match self {
            Self::Payment { source, .. } => source,
            Self::StakeDelegation { delegator, .. } => delegator,
        }
    }

    /// Receiver account; the new delegate of a delegation
    pub const fn receiver(&self) -> &CompressedPubKey {
        match self {
            Self::Payment { receiver, .. } => receiver,
            Self::StakeDelegation { new_delegate, .. } => new_delegate,
        }
    }

    /// Amount moved by the command, always zero for delegations
    pub const fn amount(&self) -> Amount {
        match self {
            Self::Payment { amount, .. } => *amount,
            Self::StakeDelegation { .. } => Amount::ZERO,
        }
    }
}

/// A user command payload: the signed message of a legacy transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCommand {
    common: Common,
    body: Body,
}

impl UserCommand {
    /// Create a user command
    pub const fn new(common: Common, body: Body) -> Self {
        Self { common, body }
    }

    /// Common fields
    pub const fn common(&self) -> &Common {
        &self.common
    }

    /// Command body
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Tag of the command body
    pub const fn tag(&self) -> Tag {
        self.body.tag()
    }
}
