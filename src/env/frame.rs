//! A single scope's variable table.
//!
//! The frame is a fixed-width hash table with per-bucket chains that
//! preserve insertion order. The hash is a 32-bit rolling product,
//! `h = h * 65 + byte`, wrapping on overflow, reduced modulo the
//! bucket count.

use crate::env::variable::Variable;
use crate::utils::errors::EnvError;

/// Number of hash buckets per frame.
pub const FRAME_BUCKETS: usize = 1024;

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    variable: Variable,
}

/// One scope's variables.
#[derive(Debug, Clone)]
pub struct Frame {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); FRAME_BUCKETS],
            len: 0,
        }
    }

    /// Hash a name to its bucket index.
    fn bucket_index(name: &str) -> usize {
        let mut h: u32 = 0;
        for byte in name.bytes() {
            h = h.wrapping_mul(65).wrapping_add(u32::from(byte));
        }
        h as usize % FRAME_BUCKETS
    }

    /// Insert a new variable.
    ///
    /// The whole bucket chain is scanned first, so a name can be bound
    /// at most once per frame.
    pub fn insert(&mut self, name: &str, variable: Variable) -> Result<(), EnvError> {
        let bucket = &mut self.buckets[Self::bucket_index(name)];
        if bucket.iter().any(|entry| entry.name == name) {
            return Err(EnvError::DuplicateDeclaration {
                name: name.to_string(),
            });
        }
        bucket.push(Entry {
            name: name.to_string(),
            variable,
        });
        self.len += 1;
        Ok(())
    }

    /// Look a name up in this frame only.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.buckets[Self::bucket_index(name)]
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.variable)
    }

    /// Mutable lookup in this frame only.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.buckets[Self::bucket_index(name)]
            .iter_mut()
            .find(|entry| entry.name == name)
            .map(|entry| &mut entry.variable)
    }

    /// Number of variables bound in this frame.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::VarType;

    #[test]
    fn test_insert_and_get() {
        let mut frame = Frame::new();
        frame
            .insert("counter", Variable::new(VarType::Integer))
            .unwrap();
        assert_eq!(frame.get("counter"), Some(&Variable::Integer(0)));
        assert_eq!(frame.get("missing"), None);
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut frame = Frame::new();
        frame.insert("x", Variable::new(VarType::Integer)).unwrap();
        let err = frame
            .insert("x", Variable::new(VarType::Real))
            .unwrap_err();
        assert_eq!(
            err,
            EnvError::DuplicateDeclaration {
                name: "x".to_string()
            }
        );
        assert_eq!(frame.len(), 1);
    }

    #[test]
    fn test_get_mut() {
        let mut frame = Frame::new();
        frame.insert("x", Variable::new(VarType::Integer)).unwrap();
        if let Some(var) = frame.get_mut("x") {
            *var = Variable::Integer(7);
        }
        assert_eq!(frame.get("x"), Some(&Variable::Integer(7)));
    }

    #[test]
    fn test_colliding_names_coexist() {
        // "aa" and "qQ" hash to the same bucket:
        // 65 * 97 + 97 = 6402 and 65 * 113 + 81 = 7426, both 258
        // modulo 1024.
        assert_eq!(Frame::bucket_index("aa"), Frame::bucket_index("qQ"));
        let mut frame = Frame::new();
        frame.insert("aa", Variable::new(VarType::Integer)).unwrap();
        frame.insert("qQ", Variable::new(VarType::Real)).unwrap();
        assert_eq!(frame.get("aa"), Some(&Variable::Integer(0)));
        assert_eq!(frame.get("qQ"), Some(&Variable::Real(0.0)));
    }

    #[test]
    fn test_hash_wraps_on_long_names() {
        let long = "a".repeat(64);
        let idx = Frame::bucket_index(&long);
        assert!(idx < FRAME_BUCKETS);
    }
}
