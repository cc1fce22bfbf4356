//! addrx - pull quoted `"addr"` values out of text records
//!
//! addrx is a CLI tool and library that scans an ISO-8859-1 text file for lines
//! carrying the `"addr"` marker, takes the quoted value next to it, and writes
//! the values one per line to an output file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, exit status, reporting)
//! - `extract`: Marker search and positional token extraction
//! - `latin1`: ISO-8859-1 decoding

pub mod cli;
pub mod extract;
pub mod latin1;
