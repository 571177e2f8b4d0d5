/// Mirror of `cs_mos65xx`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// Addressing mode for this instruction.
    pub am: Mos65xxAddressMode,
    /// Does this instruction modify flags?
    pub modifies_flags: bool,
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
    pub operands: [Op; 3],
}

/// Mirror of `cs_mos65xx_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    pub type_: Mos65xxOpType,
    pub value: OpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    pub reg: Mos65xxReg,
    pub imm: u16,
    pub mem: u32,
}

/// mos65xx_reg
pub type Mos65xxReg = libc::c_int;
/// mos65xx_address_mode
pub type Mos65xxAddressMode = libc::c_int;
/// mos65xx_op_type
pub type Mos65xxOpType = libc::c_int;
