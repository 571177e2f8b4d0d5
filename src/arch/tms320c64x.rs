/// Mirror of `cs_tms320c64x`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
    pub operands: [Op; 8],
    pub condition: Condition,
    pub funit: FunctionalUnit,
    pub parallel: libc::c_uint,
}

/// Mirror of `cs_tms320c64x_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    pub type_: Tms320C64xOpType,
    pub value: OpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    /// Register value, or the first register of a register pair.
    pub reg: libc::c_uint,
    pub imm: i32,
    pub mem: OpMem,
}

/// Mirror of `tms320c64x_op_mem`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpMem {
    /// Base register.
    pub base: libc::c_uint,
    /// Displacement or register.
    pub disp: libc::c_uint,
    /// Unit of the base and offset register.
    pub unit: libc::c_uint,
    /// Offset scaled.
    pub scaled: libc::c_uint,
    /// Displacement type.
    pub disptype: libc::c_uint,
    /// Direction.
    pub direction: libc::c_uint,
    /// Modification.
    pub modify: libc::c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct Condition {
    pub reg: libc::c_uint,
    pub zero: libc::c_uint,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct FunctionalUnit {
    pub unit: libc::c_uint,
    pub side: libc::c_uint,
    pub crosspath: libc::c_uint,
}

/// tms320c64x_op_type
pub type Tms320C64xOpType = libc::c_int;

#[cfg(test)]
mod test {
    use super::*;
    use crate::table;

    #[test]
    fn tms320c64x_size_and_alignment() {
        assert_eq!(
            core::mem::size_of::<Details>(),
            table::get_value(b"sizeof(cs_tms320c64x)")
        );

        assert_eq!(
            core::mem::align_of::<Details>(),
            table::get_value(b"alignof(cs_tms320c64x)")
        );
    }
}
