use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

/// Commitment identifier for `secret` released to `counterparty`.
///
/// The preimage is `len(secret) || secret || counterparty || this contract`,
/// so the same secret yields a different identifier on every deployment.
pub fn derive_id(env: &Env, secret: &Bytes, counterparty: &Address) -> BytesN<32> {
    let mut preimage = Bytes::new(env);
    preimage.extend_from_array(&secret.len().to_be_bytes());
    preimage.append(secret);
    preimage.append(&counterparty.clone().to_xdr(env));
    preimage.append(&env.current_contract_address().to_xdr(env));

    env.crypto().sha256(&preimage).into()
}
