/// Mirror of `cs_m68k`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    pub operands: [Op; 4],
    /// Size of data operand works on in bytes (.b, .w, .l, etc).
    pub op_size: OpSize,
    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,
}

/// Mirror of `cs_m68k_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    pub value: OpValue,
    /// Data when operand is a memory address.
    pub mem: OpMem,
    /// Data when operand is a branch displacement.
    pub br_disp: BrDisp,
    /// Register bits for movem etc.
    pub register_bits: u32,
    pub type_: M68kOpType,
    pub address_mode: M68kAddressMode,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    /// Immediate value for SI or direct operands.
    pub imm: u64,
    /// Double imm.
    pub dimm: f64,
    /// Float imm.
    pub simm: f32,
    /// Register value for REG operands.
    pub reg: M68kReg,
    /// Register pair in one operand.
    pub reg_pair: RegPair,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RegPair {
    pub reg_0: M68kReg,
    pub reg_1: M68kReg,
}

/// Mirror of `m68k_op_mem`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpMem {
    /// Base register.
    pub base_reg: M68kReg,
    /// Index register.
    pub index_reg: M68kReg,
    /// Indirect base register.
    pub in_base_reg: M68kReg,
    /// Indirect displacement.
    pub in_disp: u32,
    /// Other displacement.
    pub out_disp: u32,
    /// Displacement value.
    pub disp: i16,
    /// Scale for the index register.
    pub scale: u8,
    /// Set to true if the bitfield is set in the extension word.
    pub bitfield: u8,
    /// Used for bf* instructions.
    pub width: u8,
    /// Used for bf* instructions.
    pub offset: u8,
    /// 0 = w, 1 = l.
    pub index_size: u8,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct BrDisp {
    /// Displacement value.
    pub disp: i32,
    /// Size from m68k_op_br_disp_size.
    pub disp_size: u8,
}

/// Mirror of `m68k_op_size`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpSize {
    pub type_: M68kSizeType,
    pub value: OpSizeValue,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpSizeValue {
    pub cpu_size: M68kCpuSize,
    pub fpu_size: M68kFpuSize,
}

/// m68k_reg
pub type M68kReg = libc::c_int;
/// m68k_op_type
pub type M68kOpType = libc::c_int;
/// m68k_address_mode
pub type M68kAddressMode = libc::c_int;
/// m68k_size_type
pub type M68kSizeType = libc::c_int;
/// m68k_cpu_size
pub type M68kCpuSize = libc::c_int;
/// m68k_fpu_size
pub type M68kFpuSize = libc::c_int;

#[cfg(test)]
mod test {
    use super::*;
    use crate::table;

    #[test]
    fn m68k_size_and_alignment() {
        assert_eq!(
            core::mem::size_of::<Details>(),
            table::get_value(b"sizeof(cs_m68k)")
        );

        assert_eq!(
            core::mem::align_of::<Details>(),
            table::get_value(b"alignof(cs_m68k)")
        );
    }
}
