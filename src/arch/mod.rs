//! `#[repr(C)]` mirrors of capstone's per-architecture detail structs.
//!
//! These carry the compiled-in knowledge of the engine's ABI: the layout
//! table reports whatever the compiler makes of them for the current target.
//! Enum-typed C fields are mirrored as `libc::c_int` aliases since only their
//! width matters here, not their variants.

pub mod arm;
pub mod arm64;
pub mod evm;
pub mod m680x;
pub mod m68k;
pub mod mips;
pub mod mos65xx;
pub mod ppc;
pub mod sparc;
pub mod sysz;
pub mod tms320c64x;
pub mod x86;
pub mod xcore;

bitflags::bitflags! {
    /// Common instruction operand access types (`cs_ac_type`).
    #[repr(transparent)]
    pub struct Access: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
    }
}
