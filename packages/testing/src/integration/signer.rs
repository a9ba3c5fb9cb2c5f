use cosmwasm_std::Binary;
use k256::ecdsa::{signature::hazmat::PrehashSigner, Signature, SigningKey};
use maneki_types::claim::slot_claim_digest;

/// Seed of the claim signer every `MockEnv` is instantiated with.
pub const DEFAULT_SIGNER_SEED: [u8; 32] = [7u8; 32];

pub fn signing_key(seed: [u8; 32]) -> SigningKey {
    SigningKey::from_bytes(&seed.into()).unwrap()
}

/// Compressed public key for the default signer seed
pub fn claim_pubkey() -> Binary {
    pubkey_for_seed(DEFAULT_SIGNER_SEED)
}

pub fn pubkey_for_seed(seed: [u8; 32]) -> Binary {
    let key = signing_key(seed);
    Binary::from(key.verifying_key().to_encoded_point(true).as_bytes())
}

pub fn sign_slot_claim(chain_id: &str, contract: &str, player: &str, slot: u16) -> Binary {
    sign_slot_claim_with(DEFAULT_SIGNER_SEED, chain_id, contract, player, slot)
}

pub fn sign_slot_claim_with(
    seed: [u8; 32],
    chain_id: &str,
    contract: &str,
    player: &str,
    slot: u16,
) -> Binary {
    let digest = slot_claim_digest(chain_id, contract, player, slot);
    let signature: Signature = signing_key(seed).sign_prehash(&digest).unwrap();
    // canonical low-s form
    let signature = signature.normalize_s().unwrap_or(signature);
    Binary::from(signature.to_bytes().as_slice())
}

/// Flip one bit so the signature no longer verifies
pub fn corrupt_signature(signature: &Binary) -> Binary {
    let mut bytes = signature.to_vec();
    bytes[0] ^= 0x01;
    Binary::from(bytes)
}
