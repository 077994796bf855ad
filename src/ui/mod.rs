//! Console presentation primitives
//!
//! Colors and icons degrade to plain ASCII when the terminal cannot show them
//! (`NO_COLOR`, `TERM=dumb`, piped output).

pub mod primitives;
pub mod terminal;
pub mod theme;
