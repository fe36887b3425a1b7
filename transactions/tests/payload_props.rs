use proptest::prelude::*;

use haze_transactions::payload::{ASSET_BASE_LEN, TRANSFER_BASE_LEN};
use haze_transactions::{asset_payload, transfer_payload, AssetExtra, AssetTx, TransferTx};
use haze_types::{Address, AssetAction, ChainScope, DensityLevel};

fn scope_strategy() -> impl Strategy<Value = ChainScope> {
    (proptest::option::of(any::<u64>()), proptest::option::of(any::<u64>()))
        .prop_map(|(chain_id, height)| ChainScope::new(chain_id, height))
}

fn transfer_strategy() -> impl Strategy<Value = TransferTx> {
    (
        prop::array::uniform32(0u8..),
        prop::array::uniform32(0u8..),
        any::<u64>(),
        any::<u64>(),
        any::<u64>(),
        scope_strategy(),
    )
        .prop_map(|(from, to, amount, fee, nonce, scope)| TransferTx {
            from: Address::new(from),
            to: Address::new(to),
            amount,
            fee,
            nonce,
            scope,
        })
}

proptest! {
    /// Encoding the same logical transfer twice yields identical bytes.
    #[test]
    fn transfer_is_deterministic(tx in transfer_strategy()) {
        prop_assert_eq!(transfer_payload(&tx), transfer_payload(&tx.clone()));
    }

    /// Length is 96 plus 8 per present chain field.
    #[test]
    fn transfer_length_law(tx in transfer_strategy()) {
        let bytes = transfer_payload(&tx);
        prop_assert_eq!(bytes.len(), TRANSFER_BASE_LEN + tx.scope.encoded_len());
        prop_assert_eq!(TRANSFER_BASE_LEN, 96);
    }

    /// Integer fields sit at fixed offsets, little-endian.
    #[test]
    fn transfer_fields_at_fixed_offsets(tx in transfer_strategy()) {
        let bytes = transfer_payload(&tx);
        prop_assert_eq!(&bytes[8..40], tx.from.as_bytes().as_slice());
        prop_assert_eq!(&bytes[40..72], tx.to.as_bytes().as_slice());
        prop_assert_eq!(u64::from_le_bytes(bytes[72..80].try_into().unwrap()), tx.amount);
        prop_assert_eq!(u64::from_le_bytes(bytes[80..88].try_into().unwrap()), tx.fee);
        prop_assert_eq!(u64::from_le_bytes(bytes[88..96].try_into().unwrap()), tx.nonce);
    }

    /// Any change to a signed field changes the payload.
    #[test]
    fn transfer_amount_is_bound(tx in transfer_strategy(), delta in 1u64..) {
        let mut other = tx.clone();
        other.amount = tx.amount.wrapping_add(delta);
        prop_assert_ne!(transfer_payload(&tx), transfer_payload(&other));
    }

    /// Asset payload length accounts for action-specific bytes only when they match the action.
    #[test]
    fn asset_length_law(
        action_code in 0u8..6,
        density_code in 0u8..4,
        components in ".{0,40}",
        scope in scope_strategy(),
    ) {
        let action = AssetAction::from_code(action_code).unwrap();
        let density = DensityLevel::from_code(density_code).unwrap();
        let mut tx = AssetTx::create(Address::new([1; 32]), [2; 32], density, 0, 0, scope);
        tx.action = action;
        tx.extra = AssetExtra::Split { components: components.clone() };

        let bytes = asset_payload(&tx);
        let extra = if action == AssetAction::Split { components.len() } else { 0 };
        prop_assert_eq!(bytes.len(), ASSET_BASE_LEN + extra + scope.encoded_len());
        prop_assert_eq!(bytes[45], action_code);
        prop_assert_eq!(bytes[110], density_code);
    }
}
