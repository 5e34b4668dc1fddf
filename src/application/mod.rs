// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the other layers to get one job done.
//
// Rules for this layer:
//   - No tokenization or tagging logic here (Layers 4 and 5)
//   - No printing for the user (that's Layer 1)
//   - Only workflow coordination and config handling
//
// Two jobs exist, each with its own config struct so the CLI
// layer can hand over plain values and never leak clap types.

// Corpus -> anonymized sentence pairs
pub mod prepare_use_case;

// <unk> repair of generated output
pub mod deunk_use_case;
