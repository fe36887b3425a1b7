#![no_main]

use std::collections::BTreeMap;

use haze_transactions::{AssetExtra, COMPONENTS_KEY, OTHER_ASSET_ID_KEY};
use haze_types::AssetAction;
use libfuzzer_sys::fuzz_target;

// Reserved metadata keys come straight from callers; extracting them must
// never panic whatever the action.
fuzz_target!(|input: (u8, String, String)| {
    let (code, other, components) = input;
    let Ok(action) = AssetAction::from_code(code % 6) else {
        return;
    };
    let mut metadata = BTreeMap::new();
    metadata.insert(OTHER_ASSET_ID_KEY.to_string(), other);
    metadata.insert(COMPONENTS_KEY.to_string(), components);

    if let Ok(extra) = AssetExtra::from_metadata(action, &metadata) {
        match action {
            AssetAction::Merge => assert!(matches!(extra, AssetExtra::Merge { .. })),
            AssetAction::Split => assert!(matches!(extra, AssetExtra::Split { .. })),
            _ => assert_eq!(extra, AssetExtra::None),
        }
    }
});
