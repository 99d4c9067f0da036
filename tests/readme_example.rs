//! Verifies the workflow shown in the crate documentation works end to end

use std::fs;

use roundabout::cache::AnalysisCache;
use roundabout::core::AnalysisOptions;
use roundabout::{find_circular_dependencies, has_only_type_imports};
use tempfile::TempDir;

#[test]
fn test_documented_workflow() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    // A small app with two entry points sharing a cyclic feature pair.
    fs::create_dir_all(root.join("src/features")).unwrap();
    fs::write(
        root.join("src/main.ts"),
        "import { cart } from './features/cart';\n",
    )
    .unwrap();
    fs::write(
        root.join("src/admin.ts"),
        "import { orders } from './features/orders';\n",
    )
    .unwrap();
    fs::write(
        root.join("src/features/cart.ts"),
        "import { orders } from './orders';\nexport const cart = 1;\n",
    )
    .unwrap();
    fs::write(
        root.join("src/features/orders.ts"),
        "import { cart } from './cart';\nexport const orders = 2;\n",
    )
    .unwrap();

    // One options value and one cache per analysis session.
    let options = AnalysisOptions::new(root).with_max_depth(30);
    let mut cache = AnalysisCache::new();

    let mut reported = Vec::new();
    for entry in ["src/main.ts", "src/admin.ts"] {
        let cycles = find_circular_dependencies(entry.as_ref(), &options, &mut cache);
        for cycle in cycles {
            let type_only = has_only_type_imports(cycle.files(), &options, &mut cache);
            reported.push((cycle, type_only));
        }
    }

    // Both entries reach the same structural cycle; it is reported once.
    assert_eq!(reported.len(), 1);
    let (cycle, type_only) = &reported[0];
    assert!(!type_only);
    assert_eq!(cycle.len(), 2);

    // The rendered chain is directly printable.
    let chain = cycle.to_string();
    assert!(chain.contains(" -> "));
    assert!(chain.starts_with(chain.rsplit(" -> ").next().unwrap()));
}
