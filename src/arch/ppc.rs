/// Mirror of `cs_ppc`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// Branch code for branch instructions.
    pub bc: PpcBC,
    /// Branch hint for branch instructions.
    pub bh: PpcBH,
    /// Does this instruction update CR0?
    pub update_cr0: bool,
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
    pub operands: [Op; 8],
}

/// Mirror of `cs_ppc_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    pub type_: PpcOpType,
    pub value: OpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    pub reg: PpcReg,
    pub imm: i64,
    pub mem: OpMem,
    pub crx: OpCrx,
}

/// Mirror of `ppc_op_mem`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpMem {
    /// Base register.
    pub base: PpcReg,
    /// Displacement of this memory operand.
    pub disp: i32,
}

/// Mirror of `ppc_op_crx`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpCrx {
    pub scale: libc::c_uint,
    pub reg: PpcReg,
    pub cond: PpcBC,
}

/// ppc_reg
pub type PpcReg = libc::c_int;
/// ppc_bc
pub type PpcBC = libc::c_int;
/// ppc_bh
pub type PpcBH = libc::c_int;
/// ppc_op_type
pub type PpcOpType = libc::c_int;

#[cfg(test)]
mod test {
    use super::*;
    use crate::table;

    #[test]
    fn ppc_size_and_alignment() {
        assert_eq!(
            core::mem::size_of::<Details>(),
            table::get_value(b"sizeof(cs_ppc)")
        );

        assert_eq!(
            core::mem::align_of::<Details>(),
            table::get_value(b"alignof(cs_ppc)")
        );
    }
}
