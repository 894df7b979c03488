//! Network identifiers used for domain separation

use core::{fmt, str::FromStr};
use mina_signer::NetworkId;
use serde::{Deserialize, Serialize};

/// Legacy signature domain string on mainnet
pub const MAINNET_DOMAIN: &str = "MinaSignatureMainnet";

/// Legacy signature domain string on all testnets
pub const TESTNET_DOMAIN: &str = "CodaSignature";

/// Mina network a signature is bound to
///
/// There is deliberately no default: every sign and verify call names its
/// network.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Mainnet
    Mainnet,
    /// Any testnet
    Testnet,
}

impl Network {
    /// Legacy signature domain string of this network
    pub const fn domain_string(self) -> &'static str {
        match self {
            Self::Mainnet => MAINNET_DOMAIN,
            Self::Testnet => TESTNET_DOMAIN,
        }
    }
}

impl From<Network> for NetworkId {
    fn from(network: Network) -> Self {
        match network {
            Network::Mainnet => NetworkId::MAINNET,
            Network::Testnet => NetworkId::TESTNET,
        }
    }
}

impl From<NetworkId> for Network {
    fn from(id: NetworkId) -> Self {
        match id {
            NetworkId::MAINNET => Self::Mainnet,
            NetworkId::TESTNET => Self::Testnet,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "mainnet"),
            Self::Testnet => write!(f, "testnet"),
        }
    }
}

/// Unknown network name
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown network {0:?}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}
