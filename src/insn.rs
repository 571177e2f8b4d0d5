use crate::arch::{
    arm, arm64, evm, m680x, m68k, mips, mos65xx, ppc, sparc, sysz, tms320c64x, x86, xcore,
};

const MNEMONIC_SIZE: usize = 32;
const OP_STR_SIZE: usize = 160;

/// Mirror of `cs_insn`, the engine's instruction descriptor.
///
/// Only the layout matters here; the shim never looks at a live instruction.
/// Field order and types follow capstone's `capstone.h`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Insn {
    /// Instruction ID, an index into the `[ARCH]_insn` enum of the
    /// corresponding architecture.
    pub id: libc::c_uint,

    /// Address (EIP) of this instruction.
    pub address: u64,

    /// Size of this instruction in bytes.
    pub size: u16,

    /// Machine bytes of this instruction, `size` of them are meaningful.
    pub bytes: [u8; 24],

    /// Ascii text of the instruction mnemonic.
    pub mnemonic: [libc::c_char; MNEMONIC_SIZE],

    /// Ascii text of the instruction operands.
    pub op_str: [libc::c_char; OP_STR_SIZE],

    /// Pointer to `cs_detail`; only valid when the engine runs with details
    /// on and outside of SKIPDATA mode.
    pub detail: *mut Detail,
}

/// Mirror of `cs_detail`. The trailing union holds the architecture
/// specific operand information and dominates the struct's size.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Detail {
    /// Registers implicitly read by this instruction.
    pub regs_read: [u16; 16],
    pub regs_read_count: u8,

    /// Registers implicitly modified by this instruction.
    pub regs_write: [u16; 20],
    pub regs_write_count: u8,

    /// Groups this instruction belongs to.
    pub groups: [u8; 8],
    pub groups_count: u8,

    /// Architecture specific details.
    pub arch: ArchDetails,
}

/// Mirror of the anonymous union at the end of `cs_detail`.
#[repr(C)]
#[derive(Clone, Copy)]
pub union ArchDetails {
    pub x86: x86::Details,
    pub arm64: arm64::Details,
    pub arm: arm::Details,
    pub m68k: m68k::Details,
    pub mips: mips::Details,
    pub ppc: ppc::Details,
    pub sparc: sparc::Details,
    pub sysz: sysz::Details,
    pub xcore: xcore::Details,
    pub tms320c64x: tms320c64x::Details,
    pub m680x: m680x::Details,
    pub evm: evm::Details,
    pub mos65xx: mos65xx::Details,
}
