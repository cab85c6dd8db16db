//! Endpoint tables for every omniapi service.
//!
//! Each service module follows the same layout: `request` holds params types,
//! `response` holds response models, `types` holds shared models, open enums
//! and variants. Everything is declared through the `omniapi-model` macros.

pub mod agents;
pub mod documents;
pub mod formatting;
pub mod llm;
pub mod ocr;
pub mod payments;
pub mod vault;
pub mod voice;
