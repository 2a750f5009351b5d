//! Workspace tooling package. The library and CLI live under `crates/`.
