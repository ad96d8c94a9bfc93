// src/utils/naming.rs

use std::collections::HashMap;
use std::sync::Mutex;

/// Hands out display names of the form `<Tag>_<n>`, counting separately per tag.
///
/// Names are unique for the lifetime of the registry. Counters are never
/// reset; create a new registry for a new session.
#[derive(Debug, Default)]
pub struct NameRegistry {
    counters: Mutex<HashMap<String, usize>>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next name for `type_tag`, starting at `<type_tag>_0`.
    pub fn next_name(&self, type_tag: &str) -> String {
        // The map is only touched by this method and cannot be left half-updated.
        let mut counters = self
            .counters
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let counter = counters.entry(type_tag.to_string()).or_insert(0);
        let name = format!("{}_{}", type_tag, counter);
        *counter += 1;
        name
    }

    /// Next name for the type of `instance`, e.g. `KernelExplainer_0`.
    ///
    /// Named types use their bare name. Types without one, such as tuples,
    /// arrays or slices, use their full `type_name` instead.
    pub fn name_for<T: ?Sized>(&self, _instance: &T) -> String {
        self.next_name(&type_tag::<T>())
    }
}

/// Last path segment of a type's name with generic arguments removed:
/// `my_crate::models::Ebm<f64>` becomes `Ebm`. Falls back to the full name
/// when that segment is not an identifier (`(u8, u8)`, `[u8; 3]`).
fn type_tag<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let segment = base.rsplit("::").next().unwrap_or(base);
    if is_identifier(segment) {
        segment.to_string()
    } else {
        full.to_string()
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}
