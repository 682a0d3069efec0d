pub mod config;
mod error;
mod formatter;
mod sink;
pub mod traits;

pub use config::FormatterOptions;
pub use error::{Error, StructuralError};
pub use formatter::{Formatter, FormatterState};
pub use sink::{RawPrinter, Sink, SpacedPrinter};
pub use traits::{Printer, ToTokens};
