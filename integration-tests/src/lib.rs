//! Behavioral tests for the Maneki contracts live under `tests/`.
