use ethers::types::Address;
use ethers::utils::get_contract_address;

use dao_setup_types::PredictedAddress;

/// Forecast the address a CREATE deployment from `deployer` will land on
/// once its nonce reaches `nonce`.
///
/// This is the standard derivation (keccak-256 over the RLP encoding of
/// deployer and nonce, last 20 bytes). It is a verification aid only: the
/// forecast is stale the moment the deployer sends any other transaction,
/// and the authoritative address is whatever the deployment mechanism
/// returns.
pub fn predict_create_address(deployer: Address, nonce: u64) -> PredictedAddress {
    PredictedAddress::new(get_contract_address(deployer, nonce))
}
