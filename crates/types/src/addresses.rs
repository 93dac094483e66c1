use ethers::{
    types::{Address, H256, U256},
    utils::keccak256,
};
use lazy_static::lazy_static;

lazy_static! {
    /// Domain-separation prefix for deterministic L2 deployments.
    pub static ref CREATE2_PREFIX: H256 = H256(keccak256("zksyncCreate2".as_bytes()));
}

/// Pre-calculates the address of a contract deployed on L2 via CREATE2.
pub fn compute_create2_address(
    sender: Address,
    bytecode_hash: H256,
    constructor_input: &[u8],
    salt: H256,
) -> Address {
    let constructor_input_hash = keccak256(constructor_input);

    let mut bytes = [0u8; 160];
    bytes[..32].copy_from_slice(CREATE2_PREFIX.as_bytes());
    bytes[44..64].copy_from_slice(sender.as_bytes());
    bytes[64..96].copy_from_slice(salt.as_bytes());
    bytes[96..128].copy_from_slice(bytecode_hash.as_bytes());
    bytes[128..].copy_from_slice(&constructor_input_hash);

    Address::from_slice(&keccak256(bytes)[12..])
}

/// Offset applied to an L1 sender when its transaction arrives on L2.
pub fn apply_l1_to_l2_alias(addr: Address) -> Address {
    let offset: Address = "1111000000000000000000000000000000001111".parse().unwrap();
    let addr_with_offset =
        U256::from_big_endian(addr.as_bytes()) + U256::from_big_endian(offset.as_bytes());

    let mut buf = [0u8; 32];
    addr_with_offset.to_big_endian(&mut buf);
    // The sum can overflow 160 bits; aliasing is defined modulo 2^160.
    Address::from_slice(&buf[12..])
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::hash_bytecode;

    #[test]
    fn create2_prefix_matches_domain_tag() {
        assert_eq!(
            *CREATE2_PREFIX,
            H256::from_str("0x2020dba91b30cc0006188af794c2fb30dd8520db7e2c088b7fc7c103c00ca494")
                .unwrap()
        );
    }

    #[test]
    fn create2_address_is_deterministic() {
        let sender = Address::repeat_byte(0x11);
        let bytecode_hash = hash_bytecode(&[0; 32]).unwrap();

        let address = compute_create2_address(sender, bytecode_hash, &[], H256::zero());
        assert_eq!(
            address,
            Address::from_str("0xef0f59e9eb212817e519d8a396d13ede3ac27c87").unwrap()
        );
        assert_eq!(
            compute_create2_address(sender, bytecode_hash, &[], H256::zero()),
            address
        );
    }

    #[test]
    fn create2_address_depends_on_salt_and_constructor_input() {
        let sender = Address::repeat_byte(0x11);
        let bytecode_hash = hash_bytecode(&[0; 32]).unwrap();

        let with_other_salt = compute_create2_address(
            sender,
            bytecode_hash,
            &[],
            H256::from_low_u64_be(1),
        );
        assert_eq!(
            with_other_salt,
            Address::from_str("0x38fd0fdde44b462aec48e497719003fad1df353c").unwrap()
        );

        let mut constructor_input = [0u8; 32];
        constructor_input[12..].copy_from_slice(Address::repeat_byte(0x22).as_bytes());
        let with_constructor_input =
            compute_create2_address(sender, bytecode_hash, &constructor_input, H256::zero());
        assert_eq!(
            with_constructor_input,
            Address::from_str("0xc43b9eed5bb62409632e6ea3ba1a48d407b078f8").unwrap()
        );
    }

    #[test]
    fn aliasing_adds_offset_modulo_address_space() {
        assert_eq!(
            apply_l1_to_l2_alias(Address::zero()),
            Address::from_str("0x1111000000000000000000000000000000001111").unwrap()
        );
        // 0xff..ff + offset wraps around 2^160.
        assert_eq!(
            apply_l1_to_l2_alias(Address::repeat_byte(0xff)),
            Address::from_str("0x1111000000000000000000000000000000001110").unwrap()
        );
    }
}
