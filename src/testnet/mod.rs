//! Test infrastructure for assembler testing

pub mod test_utils;
