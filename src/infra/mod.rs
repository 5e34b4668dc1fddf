// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one
// pipeline step:
//
//   report.rs - optional JSON run reports. After a prepare or
//               deunk run the config and the resulting counts
//               can be written next to the output, so a run
//               can be traced back to how it was produced.

/// JSON run report persistence
pub mod report;
