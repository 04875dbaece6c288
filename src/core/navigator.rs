//! # Navigator
//!
//! The drill-down state machine over the three-level hierarchy
//! modules → types → members.
//!
//! ```text
//! raw line ──► Command::parse ──► Navigator::execute ──► Result<(), NavError>
//!                                       │
//!                                       ▼
//!                          active collection + selections
//! ```
//!
//! State changes only happen through the operations on [`Navigator`]; the
//! renderer reads the state between instructions, never during one.
//!
//! ## Invariants
//!
//! - Exactly one collection is "active" at a time: members if non-empty,
//!   else types, else modules, else nothing. The [`ActiveCollection`] field
//!   is recomputed explicitly after every mutation rather than inferred from
//!   sizes at read time.
//! - Selecting or refreshing a level clears all levels below it.
//! - The selected type always belongs to the selected module's type set, and
//!   members are only populated while a type is selected.
//! - The module set is fetched from the provider once per process; refreshes
//!   only re-fetch when the cache is empty.
//!
//! ## Failure semantics
//!
//! [`Navigator::execute`] is atomic: it works on a draft copy of the state
//! and commits only on success, so a failed `types -a X` leaves every
//! selection exactly as it was before the instruction. Only a module cache
//! fetched by the failing instruction is kept. The direct selection
//! operations (the renderer's click-to-drill-down path) instead follow the
//! documented early-exit rules: a missed lookup clears the missed selection
//! and everything below it.

use log::{debug, info, warn};
use std::fmt;
use std::sync::Arc;

use crate::core::catalog::{Introspect, MemberInfo, ModuleInfo, TypeInfo};
use crate::core::command::Command;

/// Which collection the renderer should display and index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveCollection {
    #[default]
    Empty,
    Modules,
    Types,
    Members,
}

/// A hierarchy level, used to name where a drill-up starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Modules,
    Types,
    Members,
}

impl ActiveCollection {
    /// The level this collection sits at, if any.
    pub fn level(&self) -> Option<Level> {
        match self {
            ActiveCollection::Empty => None,
            ActiveCollection::Modules => Some(Level::Modules),
            ActiveCollection::Types => Some(Level::Types),
            ActiveCollection::Members => Some(Level::Members),
        }
    }
}

/// One entry of the active collection, borrowed from the navigator.
#[derive(Debug, PartialEq)]
pub enum Item<'a> {
    Module(&'a ModuleInfo),
    Type(&'a TypeInfo),
    Member(&'a MemberInfo),
}

/// Why an instruction was rejected. `Display` produces the diagnostic
/// string shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    ModuleNotFound(String),
    TypeNotFound { name: String, module: String },
    NoModuleSelected,
    NoTypeSelected,
    UnknownCommand(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::ModuleNotFound(name) => {
                write!(f, "module with the given name '{name}' not found")
            }
            NavError::TypeNotFound { name, module } => {
                write!(f, "type with the given name '{name}' not found in '{module}'")
            }
            NavError::NoModuleSelected => {
                write!(f, "no module is currently selected; select a module to explore its types")
            }
            NavError::NoTypeSelected => {
                write!(f, "no type is currently selected; select a type to explore its members")
            }
            NavError::UnknownCommand(primary) => write!(f, "unknown command '{primary}'"),
        }
    }
}

impl std::error::Error for NavError {}

/// The four collection/selection slots. Cloneable so `execute` can work on
/// a draft and commit atomically.
#[derive(Clone, Default)]
struct State {
    modules: Vec<ModuleInfo>,
    types: Vec<TypeInfo>,
    members: Vec<MemberInfo>,
    selected_module: Option<ModuleInfo>,
    selected_type: Option<TypeInfo>,
    active: ActiveCollection,
}

impl State {
    fn recompute_active(&mut self) {
        self.active = if !self.members.is_empty() {
            ActiveCollection::Members
        } else if !self.types.is_empty() {
            ActiveCollection::Types
        } else if !self.modules.is_empty() {
            ActiveCollection::Modules
        } else {
            ActiveCollection::Empty
        };
    }
}

pub struct Navigator {
    provider: Arc<dyn Introspect>,
    state: State,
}

impl Navigator {
    pub fn new(provider: Arc<dyn Introspect>) -> Self {
        Self {
            provider,
            state: State::default(),
        }
    }

    // ------------------------------------------------------------------
    // Renderer contract (read side)
    // ------------------------------------------------------------------

    pub fn active_collection(&self) -> ActiveCollection {
        self.state.active
    }

    /// Length of the active collection.
    pub fn count(&self) -> usize {
        match self.state.active {
            ActiveCollection::Empty => 0,
            ActiveCollection::Modules => self.state.modules.len(),
            ActiveCollection::Types => self.state.types.len(),
            ActiveCollection::Members => self.state.members.len(),
        }
    }

    /// Entry of the active collection at `index`.
    pub fn item_at(&self, index: usize) -> Option<Item<'_>> {
        match self.state.active {
            ActiveCollection::Empty => None,
            ActiveCollection::Modules => self.state.modules.get(index).map(Item::Module),
            ActiveCollection::Types => self.state.types.get(index).map(Item::Type),
            ActiveCollection::Members => self.state.members.get(index).map(Item::Member),
        }
    }

    pub fn selected_module(&self) -> Option<&ModuleInfo> {
        self.state.selected_module.as_ref()
    }

    pub fn selected_type(&self) -> Option<&TypeInfo> {
        self.state.selected_type.as_ref()
    }

    pub fn modules(&self) -> &[ModuleInfo] {
        &self.state.modules
    }

    pub fn types(&self) -> &[TypeInfo] {
        &self.state.types
    }

    pub fn members(&self) -> &[MemberInfo] {
        &self.state.members
    }

    // ------------------------------------------------------------------
    // Instruction execution
    // ------------------------------------------------------------------

    /// Parse and execute one raw line.
    pub fn execute_line(&mut self, line: &str) -> Result<(), NavError> {
        self.execute(&Command::parse(line))
    }

    /// Execute a parsed command atomically: on failure the selection state
    /// is exactly what it was before the instruction.
    ///
    /// The module cache is the one exception: if the instruction was the
    /// first to fetch it, the fetched set survives the rollback so the
    /// provider is still only asked once per process.
    pub fn execute(&mut self, command: &Command) -> Result<(), NavError> {
        let snapshot = self.state.clone();
        match self.dispatch(command) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Command failed ({}), rolling back", e);
                let fetched_modules = std::mem::take(&mut self.state.modules);
                self.state = snapshot;
                if self.state.modules.is_empty() {
                    self.state.modules = fetched_modules;
                    self.state.recompute_active();
                }
                Err(e)
            }
        }
    }

    fn dispatch(&mut self, command: &Command) -> Result<(), NavError> {
        let Some(primary) = command.primary() else {
            // An empty line is a valid no-op instruction
            return Ok(());
        };

        match primary {
            "modules" | "assemblies" => {
                self.refresh_modules();
                Ok(())
            }
            "types" => {
                if let Some(name) = command.parameter("-a") {
                    self.select_module(name)?;
                }
                self.refresh_types()
            }
            "members" => {
                if let Some(name) = command.parameter("-a") {
                    self.select_module(name)?;
                }
                if let Some(name) = command.parameter("-t") {
                    self.select_type(name)?;
                }
                self.refresh_members()
            }
            other => Err(NavError::UnknownCommand(other.to_string())),
        }
    }

    // ------------------------------------------------------------------
    // Refresh / selection operations
    // ------------------------------------------------------------------

    /// Reset to the top level. The module set is fetched from the provider
    /// only the first time; afterwards the cached set is reused for the
    /// lifetime of the process.
    pub fn refresh_modules(&mut self) {
        let state = &mut self.state;
        state.types.clear();
        state.members.clear();
        state.selected_module = None;
        state.selected_type = None;

        if state.modules.is_empty() {
            state.modules = self.provider.modules();
            state.modules.sort_by(|a, b| a.name.cmp(&b.name));
            state.modules.dedup_by(|a, b| a.name == b.name);
            info!("Fetched {} modules from provider", state.modules.len());
        }
        state.recompute_active();
    }

    /// Select a module by exact name and populate its types.
    ///
    /// Selecting the already-selected module is a no-op success. A miss
    /// clears the module selection and everything below it.
    pub fn select_module(&mut self, name: &str) -> Result<(), NavError> {
        if self
            .state
            .selected_module
            .as_ref()
            .is_some_and(|m| m.name == name)
        {
            debug!("Module '{}' already selected", name);
            return Ok(());
        }

        if self.state.modules.is_empty() {
            self.refresh_modules();
        }

        match self.state.modules.iter().find(|m| m.name == name).cloned() {
            Some(module) => {
                info!("Selected module '{}'", module.name);
                self.state.selected_module = Some(module);
                self.state.selected_type = None;
                self.state.members.clear();
                self.populate_types();
                self.state.recompute_active();
                Ok(())
            }
            None => {
                self.state.selected_module = None;
                self.state.selected_type = None;
                self.state.types.clear();
                self.state.members.clear();
                self.state.recompute_active();
                Err(NavError::ModuleNotFound(name.to_string()))
            }
        }
    }

    /// Re-populate the type list of the selected module.
    /// Fails (clearing the type level) when no module is selected.
    pub fn refresh_types(&mut self) -> Result<(), NavError> {
        self.state.members.clear();

        if self.state.selected_module.is_none() {
            self.state.types.clear();
            self.state.selected_type = None;
            self.state.recompute_active();
            return Err(NavError::NoModuleSelected);
        }

        self.populate_types();
        self.state.recompute_active();
        Ok(())
    }

    /// Select a type by exact fully-qualified name within the selected
    /// module and populate its members.
    ///
    /// Selecting the already-selected type is a no-op success. A miss
    /// clears the type selection and the member level.
    pub fn select_type(&mut self, name: &str) -> Result<(), NavError> {
        if self
            .state
            .selected_type
            .as_ref()
            .is_some_and(|t| t.full_name == name)
        {
            debug!("Type '{}' already selected", name);
            return Ok(());
        }

        // Clears members and makes sure the candidate set is current
        self.refresh_types()?;

        match self
            .state
            .types
            .iter()
            .find(|t| t.full_name == name)
            .cloned()
        {
            Some(ty) => {
                info!("Selected type '{}'", ty.full_name);
                self.state.selected_type = Some(ty);
                self.populate_members();
                self.state.recompute_active();
                Ok(())
            }
            None => {
                self.state.selected_type = None;
                self.state.recompute_active();
                let module = self
                    .state
                    .selected_module
                    .as_ref()
                    .map(|m| m.name.clone())
                    .unwrap_or_default();
                Err(NavError::TypeNotFound {
                    name: name.to_string(),
                    module,
                })
            }
        }
    }

    /// Re-populate the member list of the selected type.
    /// Fails (clearing the member level) when no type is selected.
    pub fn refresh_members(&mut self) -> Result<(), NavError> {
        let Some(ty) = self.state.selected_type.clone() else {
            self.state.members.clear();
            self.state.recompute_active();
            return Err(NavError::NoTypeSelected);
        };

        self.state.members = self.provider.members(&ty.module, &ty.full_name);
        self.state.recompute_active();
        Ok(())
    }

    /// Re-expand the collection one level above `from`, returning the index
    /// of the previously selected item within the re-expanded collection so
    /// the renderer can restore the scroll position.
    pub fn drill_up(&mut self, from: Level) -> Option<usize> {
        match from {
            Level::Members => {
                let previous = self.state.selected_type.take();
                self.state.members.clear();
                self.state.recompute_active();
                previous.and_then(|prev| {
                    self.state
                        .types
                        .iter()
                        .position(|t| t.full_name == prev.full_name)
                })
            }
            Level::Types => {
                let previous = self.state.selected_module.take();
                self.state.selected_type = None;
                self.state.types.clear();
                self.state.members.clear();
                self.state.recompute_active();
                previous.and_then(|prev| {
                    self.state.modules.iter().position(|m| m.name == prev.name)
                })
            }
            Level::Modules => None,
        }
    }

    // ------------------------------------------------------------------
    // Internal population helpers
    // ------------------------------------------------------------------

    fn populate_types(&mut self) {
        let Some(module) = &self.state.selected_module else {
            return;
        };
        let mut types = self.provider.types(&module.name);
        types.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        types.dedup_by(|a, b| a.full_name == b.full_name);
        debug!("Populated {} types for '{}'", types.len(), module.name);
        self.state.types = types;
    }

    fn populate_members(&mut self) {
        let Some(ty) = &self.state.selected_type else {
            return;
        };
        self.state.members = self.provider.members(&ty.module, &ty.full_name);
        debug!(
            "Populated {} members for '{}'",
            self.state.members.len(),
            ty.full_name
        );
    }
}
