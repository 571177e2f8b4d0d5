use super::Access;

/// Mirror of `cs_arm`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// User-mode registers to be loaded (for LDM/STM instructions).
    pub usermode: bool,
    /// Scalar size for vector instructions.
    pub vector_size: libc::c_int,
    /// Data type for elements of vector instructions.
    pub vector_data: ArmVectorData,
    /// Mode operand for CPS instructions.
    pub cps_mode: ArmCpsMode,
    /// Interrupt flags for CPS instructions.
    pub cps_flag: ArmCpsFlag,
    /// Condition code.
    pub cc: ArmCC,
    /// Does this instruction update flags?
    pub update_flags: bool,
    /// Does this instruction write back?
    pub writeback: bool,
    /// Option for some memory barrier instructions.
    pub mem_barrier: ArmMemBarrier,
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
    pub operands: [Op; 36],
}

/// Mirror of `cs_arm_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    /// Vector index for some vector operands, or -1 if irrelevant.
    pub vector_index: libc::c_int,
    pub shift: OpShift,
    pub type_: ArmOpType,
    pub value: OpValue,
    /// In some instructions the operand can be subtracted or added to the
    /// base register.
    pub subtracted: bool,
    /// How this operand is accessed. Irrelevant in DIET mode.
    pub access: Access,
    /// Neon lane index for NEON instructions, or -1 if irrelevant.
    pub neon_lane: i8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpShift {
    pub type_: ArmShifter,
    pub value: libc::c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    pub reg: ArmReg,
    pub imm: i32,
    pub fp: f64,
    pub mem: OpMem,
    pub setend: ArmSetend,
}

/// Mirror of `arm_op_mem`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpMem {
    /// Base register.
    pub base: ArmReg,
    /// Index register.
    pub index: ArmReg,
    /// Scale for the index register (can be 1 or -1).
    pub scale: libc::c_int,
    /// Displacement of this memory operand.
    pub disp: libc::c_int,
    /// Left-shift on the index register, or 0 if irrelevant.
    pub lshift: libc::c_int,
}

/// arm_reg
pub type ArmReg = libc::c_int;
/// arm_vectordata_type
pub type ArmVectorData = libc::c_int;
/// arm_cpsmode_type
pub type ArmCpsMode = libc::c_int;
/// arm_cpsflag_type
pub type ArmCpsFlag = libc::c_int;
/// arm_cc
pub type ArmCC = libc::c_int;
/// arm_mem_barrier
pub type ArmMemBarrier = libc::c_int;
/// arm_shifter
pub type ArmShifter = libc::c_int;
/// arm_op_type
pub type ArmOpType = libc::c_int;
/// arm_setend_type
pub type ArmSetend = libc::c_int;

#[cfg(test)]
mod test {
    use super::*;
    use crate::table;

    #[test]
    fn arm_size_and_alignment() {
        assert_eq!(
            core::mem::size_of::<Details>(),
            table::get_value(b"sizeof(cs_arm)")
        );

        assert_eq!(
            core::mem::align_of::<Details>(),
            table::get_value(b"alignof(cs_arm)")
        );
    }
}
