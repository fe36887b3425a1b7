use criterion::{black_box, criterion_group, criterion_main, Criterion};
use haze_transactions::{asset_payload, transfer_payload, AssetExtra, AssetTx, TransferTx};
use haze_types::{Address, AssetAction, ChainScope, DensityLevel};

fn transfer_payload_bench(c: &mut Criterion) {
    let tx = TransferTx {
        from: Address::new([1u8; 32]),
        to: Address::new([2u8; 32]),
        amount: 1_000_000,
        fee: 10,
        nonce: 42,
        scope: ChainScope::NONE.with_chain_id(1).with_valid_until_height(10_000),
    };

    c.bench_function("transfer_payload", |b| {
        b.iter(|| transfer_payload(black_box(&tx)))
    });
}

fn split_payload_bench(c: &mut Criterion) {
    let mut tx = AssetTx::create(
        Address::new([1u8; 32]),
        [3u8; 32],
        DensityLevel::Dense,
        5,
        7,
        ChainScope::NONE,
    );
    tx.action = AssetAction::Split;
    tx.extra = AssetExtra::Split {
        components: "x".repeat(1024),
    };

    c.bench_function("split_payload_1KB", |b| {
        b.iter(|| asset_payload(black_box(&tx)))
    });
}

criterion_group!(benches, transfer_payload_bench, split_payload_bench);
criterion_main!(benches);
