//! Per-vendor catalog modules.
//!
//! Each module carries one product line's UID block, group tables, RCC
//! codes, measured geometry and equivalence rules, transcribed verbatim
//! from the legacy device schemes. The modules share a common surface
//! (`from_raw`, `group_of`, `offset_of`, `iter_stems`, `adjacent`,
//! geometry resolvers) so callers can treat them uniformly; FIT is the
//! exception, exposing anatomical sides instead of geometric families.

pub mod actis;
pub mod amistem;
pub mod corail;
pub mod ecofit;
pub mod fit;
pub mod optimys;
