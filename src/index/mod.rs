//! # Package Index Module
//!
//! Parsing of Debian/Ubuntu `Packages` documents into an in-memory index.
//!
//! ## Components
//!
//! - **extract_dependency_names**: turns a `Depends` value into package names
//! - **StanzaParser** / **PackageRecordReader**: stanza-at-a-time parsing of a
//!   document into [`PackageRecord`](crate::core::PackageRecord)s
//! - **PackageIndex**: name to records lookup, preserving document order
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use deb_depgraph::index::{PackageIndex, parse_packages};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document = "Package: curl\nVersion: 7.81.0\nDepends: libc6 (>= 2.34), zlib1g\n";
//! let index = PackageIndex::from_records(parse_packages(Cursor::new(document))?);
//!
//! let curl = index.first("curl").expect("curl is indexed");
//! assert_eq!(curl.dependencies(), ["libc6", "zlib1g"]);
//! # Ok(())
//! # }
//! ```

mod depends;
mod package_index;
mod parser;

pub use depends::extract_dependency_names;
pub use package_index::PackageIndex;
pub use parser::{PackageRecordReader, StanzaParser, parse_packages};
