//! # Catalog & Introspection
//!
//! The data model for the three-level hierarchy (modules → types → members)
//! and the [`Introspect`] capability the navigator consumes.
//!
//! Rust has no ambient runtime reflection, so module metadata is described by
//! a [`Catalog`]: a JSON document listing modules, their declared types, and
//! each type's members. A small compiled-in sample catalog ships as a
//! fallback so the binary runs without any setup.
//!
//! The provider is responsible for hygiene: module and type listings come
//! back sorted, de-duplicated, and with synthetic compiler-internal types
//! (names carrying nesting or closure markers) filtered out.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Data Model
// ============================================================================

/// A loaded code unit exposing a namespace of types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    pub name: String,
}

/// A declared type within exactly one owning module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Fully-qualified name, unique within the owning module.
    pub full_name: String,
    /// Name of the owning module.
    pub module: String,
}

/// What kind of member a [`MemberInfo`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Property,
    Method,
    Constructor,
    Event,
}

impl MemberKind {
    pub fn label(&self) -> &'static str {
        match self {
            MemberKind::Field => "field",
            MemberKind::Property => "property",
            MemberKind::Method => "method",
            MemberKind::Constructor => "ctor",
            MemberKind::Event => "event",
        }
    }
}

/// Access level of a member (or of a property accessor).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    #[default]
    Public,
    Private,
    Protected,
    Internal,
    ProtectedInternal,
    PrivateProtected,
}

impl Access {
    pub fn label(&self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Private => "private",
            Access::Protected => "protected",
            Access::Internal => "internal",
            Access::ProtectedInternal => "protected internal",
            Access::PrivateProtected => "private protected",
        }
    }
}

/// A field, property, method, constructor, or event declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub name: String,
    pub kind: MemberKind,
    #[serde(default)]
    pub access: Access,
    #[serde(default)]
    pub is_static: bool,
    /// Property getter access, when it differs per accessor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get_access: Option<Access>,
    /// Property setter access, when it differs per accessor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_access: Option<Access>,
}

// ============================================================================
// Introspection Capability
// ============================================================================

/// Read-only access to module/type/member metadata.
///
/// The navigator calls this lazily and caches the module listing for the
/// lifetime of the process; implementations never see a second `modules()`
/// call from the same navigator.
pub trait Introspect {
    /// All known modules, ordered by name, unique by name.
    fn modules(&self) -> Vec<ModuleInfo>;

    /// Declared types of a module, ordered by fully-qualified name, unique,
    /// with synthetic types excluded. Empty for an unknown module.
    fn types(&self, module: &str) -> Vec<TypeInfo>;

    /// Declared members of a type, in declaration order.
    /// Empty for an unknown module or type.
    fn members(&self, module: &str, full_name: &str) -> Vec<MemberInfo>;
}

/// Compiler-internal names carry nesting or closure markers.
fn is_synthetic(full_name: &str) -> bool {
    full_name.contains('+') || full_name.contains('<') || full_name.contains('`')
}

// ============================================================================
// JSON-Backed Catalog
// ============================================================================

/// A static catalog of modules, deserialized from JSON.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default)]
    pub modules: Vec<CatalogModule>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogModule {
    pub name: String,
    #[serde(default)]
    pub types: Vec<CatalogType>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CatalogType {
    pub full_name: String,
    #[serde(default)]
    pub members: Vec<MemberInfo>,
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog: Catalog = serde_json::from_str(&contents).map_err(CatalogError::Parse)?;
        info!(
            "Loaded catalog from {} ({} modules)",
            path.display(),
            catalog.modules.len()
        );
        Ok(catalog)
    }

    /// The compiled-in sample catalog.
    pub fn sample() -> Self {
        serde_json::from_str(include_str!("sample_catalog.json"))
            .expect("built-in sample catalog is valid JSON")
    }

    fn module(&self, name: &str) -> Option<&CatalogModule> {
        self.modules.iter().find(|m| m.name == name)
    }
}

impl Introspect for Catalog {
    fn modules(&self) -> Vec<ModuleInfo> {
        let mut modules: Vec<ModuleInfo> = self
            .modules
            .iter()
            .map(|m| ModuleInfo {
                name: m.name.clone(),
            })
            .collect();
        modules.sort_by(|a, b| a.name.cmp(&b.name));
        modules.dedup_by(|a, b| a.name == b.name);
        modules
    }

    fn types(&self, module: &str) -> Vec<TypeInfo> {
        let Some(entry) = self.module(module) else {
            debug!("types() for unknown module '{}'", module);
            return Vec::new();
        };
        let mut types: Vec<TypeInfo> = entry
            .types
            .iter()
            .filter(|t| !is_synthetic(&t.full_name))
            .map(|t| TypeInfo {
                full_name: t.full_name.clone(),
                module: entry.name.clone(),
            })
            .collect();
        types.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        types.dedup_by(|a, b| a.full_name == b.full_name);
        types
    }

    fn members(&self, module: &str, full_name: &str) -> Vec<MemberInfo> {
        self.module(module)
            .and_then(|m| m.types.iter().find(|t| t.full_name == full_name))
            .map(|t| t.members.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(json: &str) -> Catalog {
        serde_json::from_str(json).expect("test catalog should parse")
    }

    #[test]
    fn test_modules_sorted_and_unique() {
        let cat = catalog(
            r#"{"modules": [
                {"name": "Zeta"},
                {"name": "Alpha"},
                {"name": "Zeta"}
            ]}"#,
        );
        let names: Vec<String> = cat.modules().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[test]
    fn test_types_sorted_and_owned() {
        let cat = catalog(
            r#"{"modules": [{"name": "Core", "types": [
                {"full_name": "Core.Zoo"},
                {"full_name": "Core.Axis"}
            ]}]}"#,
        );
        let types = cat.types("Core");
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].full_name, "Core.Axis");
        assert_eq!(types[1].full_name, "Core.Zoo");
        assert!(types.iter().all(|t| t.module == "Core"));
    }

    #[test]
    fn test_synthetic_types_excluded() {
        let cat = catalog(
            r#"{"modules": [{"name": "Core", "types": [
                {"full_name": "Core.Engine"},
                {"full_name": "Core.Engine+Nested"},
                {"full_name": "Core.<lambda>0"},
                {"full_name": "Core.List`1"}
            ]}]}"#,
        );
        let types = cat.types("Core");
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].full_name, "Core.Engine");
    }

    #[test]
    fn test_unknown_module_or_type_yields_empty() {
        let cat = catalog(r#"{"modules": [{"name": "Core"}]}"#);
        assert!(cat.types("Missing").is_empty());
        assert!(cat.members("Core", "Core.Missing").is_empty());
        assert!(cat.members("Missing", "X").is_empty());
    }

    #[test]
    fn test_members_keep_declaration_order() {
        let cat = catalog(
            r#"{"modules": [{"name": "Core", "types": [
                {"full_name": "Core.Engine", "members": [
                    {"name": "start", "kind": "method"},
                    {"name": "Capacity", "kind": "property",
                     "get_access": "public", "set_access": "private"},
                    {"name": "count", "kind": "field", "access": "private", "is_static": true}
                ]}
            ]}]}"#,
        );
        let members = cat.members("Core", "Core.Engine");
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].name, "start");
        assert_eq!(members[0].kind, MemberKind::Method);
        assert_eq!(members[0].access, Access::Public); // default
        assert_eq!(members[1].get_access, Some(Access::Public));
        assert_eq!(members[1].set_access, Some(Access::Private));
        assert!(members[2].is_static);
        assert_eq!(members[2].access, Access::Private);
    }

    #[test]
    fn test_sample_catalog_parses() {
        let cat = Catalog::sample();
        assert!(!cat.modules().is_empty());
        // Every module's type listing must be clean of synthetic names
        for module in cat.modules() {
            for ty in cat.types(&module.name) {
                assert!(!is_synthetic(&ty.full_name));
            }
        }
    }
}
