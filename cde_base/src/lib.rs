//! Contains the building blocks shared by every stage of the CODE interpreter: the growable
//! [`array_list::ArrayList`], source files, diagnostics and console messages.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod array_list;
pub mod diagnostic;
pub mod log;
pub mod source_file;
