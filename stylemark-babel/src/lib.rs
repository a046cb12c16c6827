//! Styled text to Markdown interoperability
//!
//!     This crate converts between an editor's styled text (characters plus bold, italic and
//!     strikethrough spans) and a Markdown string using `**`, `*` and `~~` delimiters.
//!
//!     TLDR: For format authors:
//!         - Every format converts to and from StyledText, never between each other directly.
//!         - The per-character style array (./common/extract.rs) is the only input the
//!           Markdown encoder sees. Anything the array cannot express is lost on export.
//!         - The codec is total: malformed Markdown decodes to something, never to an error.
//!           Errors exist only at the integer-code boundary and in the registry.
//!
//! Architecture
//!
//!     The style model (./model) is plain data. The common layer (./common) holds the
//!     format agnostic pieces: extracting a style array from spans, splitting it into runs,
//!     and the three-slot delimiter stack the encoder uses. Formats (./formats) are thin.
//!
//!     This is a pure lib, that is, it powers the stylemark cli but is shell agnostic: no code
//!     here prints, reads env vars or touches the filesystem.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── options.rs              # Codec behaviour switches
//!     ├── session.rs              # Headless editing session
//!     ├── transforms.rs           # Functional entry points
//!     ├── model
//!     │   ├── attributes.rs       # Attribute, StyleSet, StyleMark, legacy codes
//!     │   ├── state.rs            # StyleState
//!     │   └── styled_text.rs      # StyledText, StyleSpan
//!     ├── common
//!     │   ├── extract.rs          # Spans -> style array
//!     │   ├── runs.rs             # Style array -> runs
//!     │   └── delimiters.rs       # DelimiterStack
//!     └── formats
//!         ├── markdown            # parser.rs / serializer.rs
//!         ├── json
//!         └── plain
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── common                  # shared helpers
//!     ├── markdown                # export, import and property tests
//!     └── session.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     Export walks the style array once and only writes delimiters at run boundaries, carrying
//!     `**` and `*` over into the next run when it shares the attribute
//!     (./formats/markdown/serializer.rs). Import strips delimiter pairs in three fixed passes,
//!     `**` then `*` then `~~`, each a single forward scan; spans recorded by earlier
//!     passes are remapped once per pass (./formats/markdown/parser.rs).
//!
//!     The two directions are not inverses of each other in general: whitespace loses its
//!     styling on export, and overlapping bold/italic runs produce delimiter sequences the
//!     decoder pairs differently. Single attribute runs do round-trip.
//!
//! Compatibility
//!
//!     The defaults reproduce the Markdown that existing editor clients produce and expect,
//!     quirks included. See ./options.rs for the switches that turn each quirk off.
//!
pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod model;
pub mod options;
pub mod registry;
pub mod session;
pub mod transforms;

pub use error::FormatError;
pub use format::Format;
pub use model::{Attribute, StyleMark, StyleSet, StyleSpan, StyleState, StyledText};
pub use options::CodecOptions;
pub use registry::FormatRegistry;
pub use session::{EditorSession, StyleStateListener};
