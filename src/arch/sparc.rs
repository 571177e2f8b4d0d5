/// Mirror of `cs_sparc`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// Code condition for this instruction.
    pub cc: SparcCC,
    /// Branch hint: encoding as bitwise OR of sparc_hint.
    pub hint: SparcHint,
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
    pub operands: [Op; 4],
}

/// Mirror of `cs_sparc_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    pub type_: SparcOpType,
    pub value: OpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    pub reg: SparcReg,
    pub imm: i64,
    pub mem: OpMem,
}

/// Mirror of `sparc_op_mem`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpMem {
    /// Base register.
    pub base: u8,
    /// Index register.
    pub index: u8,
    /// Displacement of this memory operand.
    pub disp: i32,
}

/// sparc_reg
pub type SparcReg = libc::c_int;
/// sparc_cc
pub type SparcCC = libc::c_int;
/// sparc_hint
pub type SparcHint = libc::c_int;
/// sparc_op_type
pub type SparcOpType = libc::c_int;
