//! Demo call-typed components.
//!
//! Each module declares parameter metadata through `annot_core` and receives
//! a populated signature in return:
//!
//! - [`Simple`]: two scalar parameters and a file write
//! - [`Long`]: array parameters and a defaulted boolean
//! - [`EnumTaker`]: a runtime-declared enumeration parameter
//! - [`Compound`]: composition over an inner `Simple`
//! - [`write_all`]: a call-typed factory fanning a prefix into many writers

mod compound;
mod enumtaker;
mod long;
mod simple;
mod writers;

pub use compound::Compound;
pub use enumtaker::{status, EnumTaker};
pub use long::Long;
pub use simple::Simple;
pub use writers::{write_all, write_all_call_types};
