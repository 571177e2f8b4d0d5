/// Mirror of `cs_mips`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
    pub operands: [Op; 10],
}

/// Mirror of `cs_mips_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    pub type_: MipsOpType,
    pub value: OpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    pub reg: MipsReg,
    pub imm: i64,
    pub mem: OpMem,
}

/// Mirror of `mips_op_mem`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpMem {
    /// Base register.
    pub base: MipsReg,
    /// Displacement of this memory operand.
    pub disp: i64,
}

/// mips_reg
pub type MipsReg = libc::c_int;
/// mips_op_type
pub type MipsOpType = libc::c_int;
