//! Controllers behind the administrative surface.

pub mod posts;
