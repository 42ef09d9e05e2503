//! Pipeline model tests.
