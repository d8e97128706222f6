//! # vellum
//!
//! The lowering stage of the vellum template compiler.
//!
//! A vellum document mixes literal markup with embedded code fragments. The
//! parser (a separate component) turns source text into a depth-first stream
//! of semantic-role-tagged events; this crate consumes that stream and builds
//! the intermediate representation (IR) tree handed to code generation. The
//! IR shape is fixed by the code generation contract:
//!
//!   Document
//!     └─ Namespace
//!          ├─ UsingStatement*
//!          └─ Class
//!               ├─ CSharpStatement*   (type members written inline)
//!               └─ Method
//!                    └─ content / statement / expression nodes
//!
//! The contract between the stages is to have the parser own all grammar
//! validation; lowering trusts the event stream to be well nested and never
//! re-validates it. A malformed stream is a defect in the producer, not a
//! user-facing error, and surfaces as a panic rather than a `Result`.
//!
//! Module layout:
//! src/vellum
//!   ├── syntax       Event stream and source location contract (parser-facing)
//!   ├── ir           IR node model, snapshots, treeviz rendering
//!   ├── lowering     Scope builder stack and the lowering visitor
//!   ├── transforms   Composable stage pipeline and the lowering phase driver
//!   └── testing      Event sequence fixtures and IR assertions

pub mod vellum;
