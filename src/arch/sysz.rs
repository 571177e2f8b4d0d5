/// Mirror of `cs_sysz`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// Code condition for this instruction.
    pub cc: SyszCC,
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
    pub operands: [Op; 6],
}

/// Mirror of `cs_sysz_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    pub type_: SyszOpType,
    pub value: OpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    pub reg: SyszReg,
    pub imm: i64,
    pub mem: OpMem,
}

/// Mirror of `sysz_op_mem`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpMem {
    /// Base register.
    pub base: u8,
    /// Index register.
    pub index: u8,
    /// BDLAddr operand length.
    pub length: u64,
    /// Displacement of this memory operand.
    pub disp: i64,
}

/// sysz_reg
pub type SyszReg = libc::c_int;
/// sysz_cc
pub type SyszCC = libc::c_int;
/// sysz_op_type
pub type SyszOpType = libc::c_int;
