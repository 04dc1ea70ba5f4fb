//! Variable environments: a chain of scopes searched innermost-first.
//!
//! `Env` is a cheap `Rc<RefCell<..>>` handle rather than an owned struct, so
//! that closures can capture "the environment live at definition time" by
//! cloning the handle instead of deep-copying every binding in it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::string_interner::InternedSymbol;
use crate::value::Value;

struct EnvData {
    parent: Option<Env>,
    bindings: HashMap<InternedSymbol, Value>,
}

#[derive(Clone)]
pub struct Env(Rc<RefCell<EnvData>>);

impl Env {
    /// A fresh environment with no parent (used for the global scope).
    pub fn root() -> Self {
        Env(Rc::new(RefCell::new(EnvData {
            parent: None,
            bindings: HashMap::new(),
        })))
    }

    /// A fresh environment scoped inside `self`, as created for each
    /// function call.
    pub fn child(&self) -> Self {
        Env(Rc::new(RefCell::new(EnvData {
            parent: Some(self.clone()),
            bindings: HashMap::new(),
        })))
    }

    /// Look up `name`, searching this scope and then each parent in turn.
    pub fn get(&self, name: InternedSymbol) -> Option<Value> {
        let data = self.0.borrow();
        if let Some(v) = data.bindings.get(&name) {
            return Some(v.clone());
        }
        match &data.parent {
            Some(parent) => parent.get(name),
            None => None,
        }
    }

    /// Bind `name` in this scope only (`=`/local `def` semantics).
    pub fn put(&self, name: InternedSymbol, value: Value) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Bind `name` in the outermost (global) scope, walking up the parent
    /// chain (`def` semantics).
    pub fn def(&self, name: InternedSymbol, value: Value) {
        let mut current = self.clone();
        loop {
            let next = current.0.borrow().parent.clone();
            match next {
                Some(parent) => current = parent,
                None => break,
            }
        }
        current.put(name, value);
    }

    /// True if `self` and `other` are handles to the same underlying scope.
    pub fn is_same_scope(&self, other: &Env) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
