//! Edge case tests for sablec-lex
