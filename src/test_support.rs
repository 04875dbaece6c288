//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::catalog::{Catalog, Introspect, MemberInfo, ModuleInfo, TypeInfo};
use crate::core::navigator::Navigator;

/// Two modules, with Beta carrying the Beta.X / Beta.Y pair used by the
/// drill-down scenarios.
pub fn sample_catalog() -> Catalog {
    serde_json::from_str(
        r#"{
            "modules": [
                {
                    "name": "Beta",
                    "types": [
                        {
                            "full_name": "Beta.Y",
                            "members": [
                                {"name": "render", "kind": "method"},
                                {"name": "cache", "kind": "field", "access": "private"}
                            ]
                        },
                        {
                            "full_name": "Beta.X",
                            "members": [
                                {"name": "X", "kind": "constructor"},
                                {"name": "run", "kind": "method"},
                                {"name": "Size", "kind": "property",
                                 "get_access": "public", "set_access": "private"},
                                {"name": "instances", "kind": "field",
                                 "access": "internal", "is_static": true}
                            ]
                        }
                    ]
                },
                {
                    "name": "Alpha",
                    "types": [
                        {
                            "full_name": "Alpha.One",
                            "members": [
                                {"name": "poke", "kind": "method"},
                                {"name": "Poked", "kind": "event", "access": "protected"}
                            ]
                        },
                        {"full_name": "Alpha.One+Hidden"}
                    ]
                }
            ]
        }"#,
    )
    .expect("fixture catalog is valid JSON")
}

/// A navigator over the fixture catalog.
pub fn test_navigator() -> Navigator {
    Navigator::new(Arc::new(sample_catalog()))
}

/// Shared counter readable after the provider moved into the navigator.
#[derive(Clone, Default)]
pub struct CallCount(Arc<AtomicUsize>);

impl CallCount {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

/// Wraps the fixture catalog and counts `modules()` calls, for testing the
/// fetch-once caching rule.
pub struct CountingCatalog {
    inner: Catalog,
    module_calls: CallCount,
}

impl Introspect for CountingCatalog {
    fn modules(&self) -> Vec<ModuleInfo> {
        self.module_calls.bump();
        self.inner.modules()
    }

    fn types(&self, module: &str) -> Vec<TypeInfo> {
        self.inner.types(module)
    }

    fn members(&self, module: &str, full_name: &str) -> Vec<MemberInfo> {
        self.inner.members(module, full_name)
    }
}

/// A navigator whose provider counts module fetches.
pub fn counting_navigator() -> (Navigator, CallCount) {
    let calls = CallCount::default();
    let provider = CountingCatalog {
        inner: sample_catalog(),
        module_calls: calls.clone(),
    };
    (Navigator::new(Arc::new(provider)), calls)
}
