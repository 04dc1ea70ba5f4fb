//! String interning for symbol names and reserved words.
//!
//! Interning keeps `Env` lookups and `Value::Symbol` comparisons cheap for
//! the small set of names a program rebinds constantly (`true`, `false`,
//! arithmetic operator names, user-defined function names that recurse).

use once_cell::sync::Lazy;
use std::sync::RwLock;
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

pub type InternedSymbol = DefaultSymbol;
pub type DefaultStringInterner = StringInterner<DefaultBackend>;

/// Global interner for symbol names.
///
/// Pre-populated with the builtin operator and keyword names so the most
/// common lookups never need a write lock.
const BUILTIN_NAMES: &[&str] = &[
    "+", "-", "*", "/", "%", "==", "!=", ">", "<", ">=", "<=", "&&", "||", "!", "list", "head",
    "tail", "join", "eval", "cons", "len", "init", "def", "=", "lambda", "fun", "if", "print",
    "error", "load", "exit", "true", "false", "&",
];

static SYMBOL_INTERNER: Lazy<RwLock<DefaultStringInterner>> = Lazy::new(|| {
    let mut interner = DefaultStringInterner::new();

    for name in BUILTIN_NAMES {
        interner.get_or_intern(name);
    }

    RwLock::new(interner)
});

/// The preloaded builtin and keyword names, used to suggest a correction
/// when a program references an unbound symbol.
pub fn builtin_names() -> &'static [&'static str] {
    BUILTIN_NAMES
}

/// Intern a symbol name using the global interner.
///
/// Tries a read lock first (the common case: the name is already interned),
/// falling back to a write lock only for names seen for the first time.
pub fn intern(name: &str) -> InternedSymbol {
    if let Ok(interner) = SYMBOL_INTERNER.read() {
        if let Some(sym) = interner.get(name) {
            return sym;
        }
    }
    SYMBOL_INTERNER.write().unwrap().get_or_intern(name)
}

/// Resolve an interned symbol back to its text.
///
/// # Panics
///
/// Panics if `sym` was never produced by [`intern`], which would indicate a
/// bug rather than a recoverable condition.
pub fn resolve(sym: InternedSymbol) -> String {
    SYMBOL_INTERNER
        .read()
        .unwrap()
        .resolve(sym)
        .expect("interned symbol resolves to its original text")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let a = intern("foobar-custom");
        let b = intern("foobar-custom");
        assert_eq!(a, b);
        assert_eq!(resolve(a), "foobar-custom");
    }

    #[test]
    fn builtin_names_are_prepopulated() {
        let plus_first = intern("+");
        let plus_again = intern("+");
        assert_eq!(plus_first, plus_again);
    }
}
