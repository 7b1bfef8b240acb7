//! Feature-unification check: `oplog` is depended on without `simd`, while
//! `oplog-isa` gets `simd` from this crate. See `tests/`.
