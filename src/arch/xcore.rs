/// Mirror of `cs_xcore`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
    pub operands: [Op; 8],
}

/// Mirror of `cs_xcore_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    pub type_: XcoreOpType,
    pub value: OpValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    pub reg: XcoreReg,
    pub imm: i32,
    pub mem: OpMem,
}

/// Mirror of `xcore_op_mem`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpMem {
    /// Base register.
    pub base: u8,
    /// Index register.
    pub index: u8,
    /// Displacement of this memory operand.
    pub disp: i32,
    /// +1: forward, -1: backward.
    pub direct: libc::c_int,
}

/// xcore_reg
pub type XcoreReg = libc::c_int;
/// xcore_op_type
pub type XcoreOpType = libc::c_int;

#[cfg(test)]
mod test {
    use super::*;
    use crate::table;

    #[test]
    fn xcore_size_and_alignment() {
        assert_eq!(
            core::mem::size_of::<Details>(),
            table::get_value(b"sizeof(cs_xcore)")
        );

        assert_eq!(
            core::mem::align_of::<Details>(),
            table::get_value(b"alignof(cs_xcore)")
        );
    }
}
