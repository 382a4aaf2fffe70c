//! Tolerant parsers for the semi-structured text the generation service
//! embeds in its JSON string fields. Both degrade on malformed input
//! (absent fields, dropped rows) and never fail.

mod planification;
mod programme;

pub use planification::parse_planification_table;
pub use programme::parse_programme_block;
