//! Struct layout introspection shim for capstone bindings.
//!
//! A binding generator running in a foreign runtime cannot read C struct
//! layouts directly; this crate reports them at run time instead. It carries
//! `#[repr(C)]` mirrors of `cs_insn`, `cs_detail` and the per-architecture
//! detail structs, and exposes their compiled size and alignment (plus a few
//! enum sentinel values) through two surfaces:
//!
//! * a C ABI in [`ffi`]: one `cs_layout__sizeof_*`/`cs_layout__alignof_*`
//!   accessor pair per struct, and `cs_layout__get_value` for lookup by
//!   string key;
//! * a safe Rust API: [`query`], [`get_value`], [`entries`] and
//!   [`layout_of`].
//!
//! All values are fixed at compile time for the current target. The lookup
//! table is built once on first use and read-only afterwards, so every
//! operation is safe to call from any thread.

#[macro_use]
mod macros;

pub mod arch;
pub mod ffi;
mod insn;
mod table;

pub use insn::{ArchDetails, Detail, Insn};
pub use table::{entries, get_value, query, Entry};

/// Size and alignment of a type, as compiled for the current target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Size in bytes.
    pub size: usize,
    /// Required address alignment in bytes, always a power of two.
    pub align: usize,
}

/// Returns the layout of any type known at compile time. The per-name table
/// lookups exist for callers on the other side of the ABI; Rust callers can
/// ask the compiler directly.
pub fn layout_of<T>() -> Layout {
    Layout {
        size: core::mem::size_of::<T>(),
        align: core::mem::align_of::<T>(),
    }
}
