//! Simulation support tests.
