//! Unit test suite with access to crate internals
