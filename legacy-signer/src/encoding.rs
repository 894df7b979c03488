//! Canonical legacy encoding of user commands and strings
//!
//! The random oracle input built here is the signed message: any change to
//! the order or width of its members yields signatures that canonical
//! verifiers reject.

use crate::{
    command::{Body, Common, UserCommand, LEGACY_TOKEN_ID, LEGACY_TOKEN_LOCKED},
    network::Network,
};
use mina_curves::pasta::Fp;
use mina_hasher::{Hashable, ROInput};
use mina_signer::{CompressedPubKey, NetworkId};

/// Append a public key as its x-coordinate and y-coordinate parity
fn append_public_key(roi: ROInput, pk: &CompressedPubKey) -> ROInput {
    roi.append_field(pk.x).append_bool(pk.is_odd)
}

fn body_to_roinput(body: &Body) -> ROInput {
    let roi = body
        .tag()
        .to_bits()
        .into_iter()
        .fold(ROInput::new(), ROInput::append_bool);
    let roi = append_public_key(roi, body.source());

    append_public_key(roi, body.receiver())
        .append_u64(LEGACY_TOKEN_ID)
        .append_u64(body.amount().inner())
        .append_bool(LEGACY_TOKEN_LOCKED)
}

fn common_to_roinput(common: &Common) -> ROInput {
    let roi = ROInput::new()
        .append_u64(common.fee.inner())
        .append_u64(LEGACY_TOKEN_ID);

    append_public_key(roi, &common.fee_payer)
        .append_u32(common.nonce.inner())
        .append_u32(common.valid_until.inner())
        .append_bytes(common.memo.as_bytes())
}

/// Legacy hash input of a user command: the body followed by the common fields
pub fn encode_command(command: &UserCommand) -> ROInput {
    body_to_roinput(command.body()).append_roinput(common_to_roinput(command.common()))
}

/// Legacy hash input of a string
///
/// Each UTF-8 byte contributes its bits most significant first; the input has
/// no field elements.
pub fn encode_string(text: &str) -> ROInput {
    let bytes: Vec<u8> = text.bytes().map(u8::reverse_bits).collect();
    ROInput::new().append_bytes(&bytes)
}

/// Hash input of a user command packed into base field elements
pub fn hash_input_fields(command: &UserCommand) -> Vec<Fp> {
    encode_command(command).to_fields()
}

impl Hashable for UserCommand {
    type D = NetworkId;

    fn to_roinput(&self) -> ROInput {
        encode_command(self)
    }

    fn domain_string(network_id: NetworkId) -> Option<String> {
        Network::from(network_id).domain_string().to_string().into()
    }
}

/// Free-text message signed with the legacy string encoding
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringMessage(pub String);

impl Hashable for StringMessage {
    type D = NetworkId;

    fn to_roinput(&self) -> ROInput {
        encode_string(&self.0)
    }

    fn domain_string(network_id: NetworkId) -> Option<String> {
        Network::from(network_id).domain_string().to_string().into()
    }
}
