//! Host classification.
//!
//! Every supported site family is a [`SiteProfile`] variant. A URL is
//! classified once; the profile then selects the document-extraction and
//! title strategies.

mod profile;

pub use profile::{classify, SiteProfile};
