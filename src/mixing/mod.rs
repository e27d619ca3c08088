//! Capability mixing
//!
//! Emulates multiple-interface composition: named operations are grouped
//! into [`CapabilityBundle`]s and merged onto a target's shared
//! [`BehaviorTable`]. Every instance holding the same [`SharedBehaviors`]
//! handle observes the merge, so extending one handle extends them all.
//!
//! Merge order matters: later bundles silently overwrite earlier ones (and
//! the target's pre-existing operations) on name collision.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

/// Well-known name of the iteration capability
///
/// A value whose behavior table carries this operation knows how to produce
/// its lazy element sequence. [`crate::structural::deep_copy_capable`]
/// treats it specially.
pub const ITERATOR: &str = "iterator";

/// A single named operation over a value
pub type Capability = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// A named set of operations to be merged onto a target
///
/// # Example
///
/// ```rust
/// use trade_toolkit::mixing::CapabilityBundle;
/// use serde_json::json;
///
/// let bundle = CapabilityBundle::new("measurable")
///     .with("size", |value| json!(value.as_array().map_or(0, Vec::len)))
///     .with("first", |value| value.get(0).cloned().unwrap_or(json!(null)));
/// assert_eq!(bundle.name(), "measurable");
/// assert_eq!(bundle.len(), 2);
/// ```
pub struct CapabilityBundle {
    name: String,
    // Insertion order is merge order, so collisions within one bundle also
    // resolve to the last definition.
    operations: Vec<(String, Capability)>,
}

impl CapabilityBundle {
    /// Create an empty bundle with a descriptive name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    /// Add a named operation to the bundle, consuming and returning it
    pub fn with<F>(mut self, operation: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.operations.push((operation.into(), Arc::new(body)));
        self
    }

    /// The bundle's descriptive name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of operations in the bundle
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the bundle carries no operations
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Iterate over the bundle's operations in insertion order
    pub fn operations(&self) -> impl Iterator<Item = (&str, &Capability)> {
        self.operations
            .iter()
            .map(|(name, op)| (name.as_str(), op))
    }
}

/// The operation table shared by all instances of a target
#[derive(Default)]
pub struct BehaviorTable {
    operations: HashMap<String, Capability>,
}

impl BehaviorTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an operation under a name, replacing any previous one
    pub fn insert(&mut self, name: impl Into<String>, operation: Capability) {
        self.operations.insert(name.into(), operation);
    }

    /// Look up an operation by name
    pub fn get(&self, name: &str) -> Option<&Capability> {
        self.operations.get(name)
    }

    /// Whether an operation of this name is present
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Names of all operations currently in the table, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.operations.keys().cloned().collect();
        names.sort();
        names
    }
}

/// A behavior table handle shared by every instance of a target type
///
/// Cloning the handle does not clone the table; all clones point at the
/// same table, which is what makes [`extend`] observable from every
/// instance.
#[derive(Clone, Default)]
pub struct SharedBehaviors {
    table: Arc<RwLock<BehaviorTable>>,
}

impl SharedBehaviors {
    /// Create a handle to a fresh, empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a closure against the table for reading
    pub fn read_table<R>(&self, body: impl FnOnce(&BehaviorTable) -> R) -> R {
        body(&read_lock(&self.table))
    }

    /// Run a closure against the table for writing
    pub fn write_table<R>(&self, body: impl FnOnce(&mut BehaviorTable) -> R) -> R {
        body(&mut write_lock(&self.table))
    }

    /// Look up an operation by name, cloning its handle out of the table
    pub fn capability(&self, name: &str) -> Option<Capability> {
        read_lock(&self.table).get(name).cloned()
    }

    /// Invoke a named operation against a value, if present
    pub fn invoke(&self, name: &str, value: &Value) -> Option<Value> {
        self.capability(name).map(|op| op(value))
    }
}

/// Merge capability bundles onto a target's shared behavior table
///
/// For each bundle in order, every named operation is assigned into the
/// table; later bundles overwrite earlier ones and the target's own
/// pre-existing operations of the same name. Returns the target for
/// chaining. This is the toolkit's only operation with a side effect
/// outside its return value; the mutation is confined to the caller-owned
/// target.
///
/// # Example
///
/// ```rust
/// use trade_toolkit::mixing::{extend, CapabilityBundle, SharedBehaviors};
/// use serde_json::json;
///
/// let target = SharedBehaviors::new();
/// extend(
///     &target,
///     &[
///         CapabilityBundle::new("a").with("describe", |_| json!("from a")),
///         CapabilityBundle::new("b").with("describe", |_| json!("from b")),
///     ],
/// );
/// assert_eq!(target.invoke("describe", &json!(null)), Some(json!("from b")));
/// ```
pub fn extend<'a>(target: &'a SharedBehaviors, bundles: &[CapabilityBundle]) -> &'a SharedBehaviors {
    target.write_table(|table| {
        for bundle in bundles {
            for (name, operation) in bundle.operations() {
                table.insert(name, operation.clone());
            }
        }
    });
    target
}

/// A value paired with the shared behavior table of its type
///
/// The composition-at-construction model: instead of mutating a prototype
/// chain, a value is built together with the capabilities its type carries.
pub struct Capable {
    /// The structural payload
    pub value: Value,
    behaviors: SharedBehaviors,
}

impl Capable {
    /// Wrap a value with a fresh, empty behavior table
    pub fn new(value: Value) -> Self {
        Self {
            value,
            behaviors: SharedBehaviors::new(),
        }
    }

    /// Wrap a value as an instance of an existing type's behavior table
    pub fn with_behaviors(value: Value, behaviors: &SharedBehaviors) -> Self {
        Self {
            value,
            behaviors: behaviors.clone(),
        }
    }

    /// The shared behavior table handle
    pub fn behaviors(&self) -> &SharedBehaviors {
        &self.behaviors
    }

    /// Look up one of this value's capabilities by name
    pub fn capability(&self, name: &str) -> Option<Capability> {
        self.behaviors.capability(name)
    }

    /// Invoke a named capability against this value, if present
    pub fn invoke(&self, name: &str) -> Option<Value> {
        self.behaviors.invoke(name, &self.value)
    }
}

// A poisoned lock only occurs after a panic in a closure passed to
// read_table/write_table; the table itself is still structurally sound, so
// recover the guard instead of propagating the poison.
fn read_lock(table: &RwLock<BehaviorTable>) -> RwLockReadGuard<'_, BehaviorTable> {
    match table.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write_lock(table: &RwLock<BehaviorTable>) -> RwLockWriteGuard<'_, BehaviorTable> {
    match table.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
