use super::Access;

/// Mirror of `cs_arm64`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// Condition code.
    pub cc: Arm64CC,
    /// Does this instruction update flags?
    pub update_flags: bool,
    /// Does this instruction write back?
    pub writeback: bool,
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
    pub operands: [Op; 8],
}

/// Mirror of `cs_arm64_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    /// Vector index for some vector operands, or -1 if irrelevant.
    pub vector_index: libc::c_int,
    /// Vector arrangement specifier.
    pub vas: Arm64Vas,
    /// Vector element size specifier.
    pub vess: Arm64Vess,
    pub shift: OpShift,
    /// Extender type of this operand.
    pub ext: Arm64Extender,
    pub type_: Arm64OpType,
    pub value: OpValue,
    /// How this operand is accessed. Irrelevant in DIET mode.
    pub access: Access,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpShift {
    pub type_: Arm64Shifter,
    pub value: libc::c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    pub reg: Arm64Reg,
    pub imm: i64,
    pub fp: f64,
    pub mem: OpMem,
    pub pstate: Arm64Pstate,
    pub sys: libc::c_uint,
    pub prefetch: Arm64Prefetch,
    pub barrier: Arm64Barrier,
}

/// Mirror of `arm64_op_mem`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpMem {
    /// Base register.
    pub base: Arm64Reg,
    /// Index register.
    pub index: Arm64Reg,
    /// Displacement of this memory operand.
    pub disp: i32,
}

/// arm64_reg
pub type Arm64Reg = libc::c_int;
/// arm64_cc
pub type Arm64CC = libc::c_int;
/// arm64_vas
pub type Arm64Vas = libc::c_int;
/// arm64_vess
pub type Arm64Vess = libc::c_int;
/// arm64_shifter
pub type Arm64Shifter = libc::c_int;
/// arm64_extender
pub type Arm64Extender = libc::c_int;
/// arm64_op_type
pub type Arm64OpType = libc::c_int;
/// arm64_pstate
pub type Arm64Pstate = libc::c_int;
/// arm64_prefetch_op
pub type Arm64Prefetch = libc::c_int;
/// arm64_barrier_op
pub type Arm64Barrier = libc::c_int;

#[cfg(test)]
mod test {
    use super::*;
    use crate::table;

    #[test]
    fn arm64_size_and_alignment() {
        assert_eq!(
            core::mem::size_of::<Details>(),
            table::get_value(b"sizeof(cs_arm64)")
        );

        assert_eq!(
            core::mem::align_of::<Details>(),
            table::get_value(b"alignof(cs_arm64)")
        );
    }
}
