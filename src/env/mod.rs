//! Register environment
//!
//! The environment is the ordered set of `reg` declarations a session has
//! accumulated. Every evaluation re-declares all of them, in the order they
//! were first defined, ahead of the expression being evaluated.
//!
//! # Ordering
//!
//! Redefining a name replaces its binding in place: the register keeps the
//! declaration slot it got when it was first defined. There is no way to
//! remove a register.
//!
//! # Shadowing
//!
//! [`Environment::shadowed`] yields the environment with one extra binding
//! laid over it, without mutating anything. Context evaluation uses it to
//! inject the synthetic `__eval` register for a single generation.

use rustc_hash::FxHashMap;

/// A register's width specifier and initializer, both kept as source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Text between the brackets of the declaration, e.g. `7:0`
    pub width: String,
    /// Initializer expression, e.g. `8'hff`
    pub init: String,
}

impl Binding {
    pub fn new(width: impl Into<String>, init: impl Into<String>) -> Self {
        Binding {
            width: width.into(),
            init: init.into(),
        }
    }
}

/// Ordered mapping from register name to [`Binding`]
#[derive(Debug, Clone, Default)]
pub struct Environment {
    entries: Vec<(String, Binding)>,
    index: FxHashMap<String, usize>, // name -> position in `entries`
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a binding, returning the one it replaced
    pub fn define(&mut self, name: &str, binding: Binding) -> Option<Binding> {
        match self.index.get(name) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, binding)),
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), binding));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All bindings in declaration order
    pub fn iter(&self) -> Bindings<'_> {
        Bindings {
            entries: self.entries.iter(),
            overlay: None,
        }
    }

    /// All bindings with `binding` laid over `name`.
    ///
    /// If `name` is already defined the overlay takes its slot, otherwise it
    /// comes after every other declaration.
    pub fn shadowed<'a>(&'a self, name: &'a str, binding: &'a Binding) -> Bindings<'a> {
        Bindings {
            entries: self.entries.iter(),
            overlay: Some((name, binding)),
        }
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = (&'a str, &'a Binding);
    type IntoIter = Bindings<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over `(name, binding)` pairs, see [`Environment::iter`]
#[derive(Debug, Clone)]
pub struct Bindings<'a> {
    entries: std::slice::Iter<'a, (String, Binding)>,
    overlay: Option<(&'a str, &'a Binding)>,
}

impl<'a> Iterator for Bindings<'a> {
    type Item = (&'a str, &'a Binding);

    fn next(&mut self) -> Option<Self::Item> {
        match self.entries.next() {
            Some((name, binding)) => match self.overlay {
                Some((shadow, over)) if shadow == name.as_str() => {
                    self.overlay = None;
                    Some((shadow, over))
                }
                _ => Some((name.as_str(), binding)),
            },
            None => self.overlay.take(),
        }
    }
}
