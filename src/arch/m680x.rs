use super::Access;

/// Mirror of `cs_m680x`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// See M680X_FIRST_OP_IN_MNEM / M680X_SECOND_OP_IN_MNEM.
    pub flags: u8,
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
    pub operands: [Op; 9],
}

/// Mirror of `cs_m680x_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    pub type_: M680xOpType,
    pub value: OpValue,
    /// Size of this operand in bytes.
    pub size: u8,
    /// How this operand is accessed. Irrelevant in DIET mode.
    pub access: Access,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    /// Immediate value for IMM operands.
    pub imm: i32,
    /// Register value for REG operands.
    pub reg: M680xReg,
    /// Indexed addressing operand.
    pub idx: OpIdx,
    /// Relative address operand (Bcc/LBcc).
    pub rel: OpRel,
    /// Extended address operand.
    pub ext: OpExt,
    /// Direct address operand.
    pub direct_addr: u8,
    /// Constant value operand (bit index, page nr.).
    pub const_val: u8,
}

/// Mirror of `m680x_op_idx`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpIdx {
    /// Base register, or M680X_REG_INVALID if irrelevant.
    pub base_reg: M680xReg,
    /// Offset register, or M680X_REG_INVALID if irrelevant.
    pub offset_reg: M680xReg,
    /// 5-, 8- or 16-bit offset.
    pub offset: i16,
    /// Offset address, if base_reg == M680X_REG_PC.
    pub offset_addr: u16,
    /// Offset width in bits: 0, 5, 8 or 16.
    pub offset_bits: u8,
    /// Inc. or dec. value: 0 = no inc-/decrement, 1 .. 8 = increment,
    /// -1 .. -8 = decrement.
    pub inc_dec: i8,
    /// 8-bit flags (see M680X_IDX_*).
    pub flags: u8,
}

/// Mirror of `m680x_op_rel`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpRel {
    /// The absolute address, calculated out of cs_insn.address + offset.
    pub address: u16,
    /// The offset/displacement value.
    pub offset: i16,
}

/// Mirror of `m680x_op_ext`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpExt {
    /// The absolute address.
    pub address: u16,
    /// True if extended indirect addressing.
    pub indirect: bool,
}

/// m680x_reg
pub type M680xReg = libc::c_int;
/// m680x_op_type
pub type M680xOpType = libc::c_int;
