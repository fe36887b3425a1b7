#![no_main]

use arbitrary::Arbitrary;
use haze_transactions::{asset_payload, transfer_payload, AssetExtra, AssetTx, TransferTx};
use haze_types::{Address, AssetAction, ChainScope, DensityLevel};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    from: [u8; 32],
    to: [u8; 32],
    amount: u64,
    fee: u64,
    nonce: u64,
    chain_id: Option<u64>,
    valid_until_height: Option<u64>,
    action: u8,
    density: u8,
    asset_id: [u8; 32],
    other_asset_id: [u8; 32],
    components: String,
}

fuzz_target!(|input: Input| {
    let scope = ChainScope::new(input.chain_id, input.valid_until_height);

    let transfer = TransferTx {
        from: Address::new(input.from),
        to: Address::new(input.to),
        amount: input.amount,
        fee: input.fee,
        nonce: input.nonce,
        scope,
    };
    let payload = transfer_payload(&transfer);
    assert_eq!(payload.len(), 96 + scope.encoded_len());
    assert_eq!(&payload[..8], b"Transfer");

    let (Ok(action), Ok(density)) = (
        AssetAction::from_code(input.action),
        DensityLevel::from_code(input.density),
    ) else {
        return;
    };
    let extra = match action {
        AssetAction::Merge => AssetExtra::Merge {
            other_asset_id: input.other_asset_id,
        },
        AssetAction::Split => AssetExtra::Split {
            components: input.components.clone(),
        },
        _ => AssetExtra::None,
    };
    let mut asset = AssetTx::create(
        Address::new(input.from),
        input.asset_id,
        density,
        input.fee,
        input.nonce,
        scope,
    );
    asset.action = action;
    asset.owner = Address::new(input.to);
    asset.extra = extra;

    let payload = asset_payload(&asset);
    assert_eq!(
        payload.len(),
        127 + asset.extra_bytes().len() + scope.encoded_len()
    );
    assert_eq!(payload[45], action.code());
    assert_eq!(payload[110], density.code());
});
