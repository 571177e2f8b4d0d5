use super::Access;

/// End-of-enum marker for `x86_reg`, from x86.h. Callers size fixed-capacity
/// register id arrays with it.
pub const X86_REG_ENDING: usize = 242;

/// End-of-enum marker for `x86_insn`, from x86.h.
pub const X86_INS_ENDING: usize = 1523;

/// End-of-enum marker for `x86_insn_group`, from x86.h.
pub const X86_GRP_ENDING: usize = 170;

/// Mirror of `cs_x86`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// Instruction prefix, up to 4 bytes. A prefix byte gets value 0 when
    /// irrelevant: \[0\] REP/REPNE/LOCK, \[1\] segment override,
    /// \[2\] operand-size override, \[3\] address-size override.
    pub prefix: [u8; 4],

    /// Instruction opcode, 1 to 4 bytes, VEX opcode included. Trailing
    /// opcode bytes get value 0 when irrelevant.
    pub opcode: [u8; 4],

    /// REX prefix, only a non-zero value is relevant for x86_64.
    pub rex: u8,

    /// Address size, can be overridden with prefix\[3\].
    pub addr_size: u8,

    /// ModR/M byte.
    pub modrm: u8,

    /// SIB value, or 0 when irrelevant.
    pub sib: u8,

    /// Displacement value, valid if `encoding.disp_offset != 0`.
    pub disp: u64,

    /// SIB index register, or X86_REG_INVALID when irrelevant.
    pub sib_index: X86Reg,
    /// SIB scale, only applicable if `sib_index` is valid.
    pub sib_scale: libc::c_int,
    /// SIB base register, or X86_REG_INVALID when irrelevant.
    pub sib_base: X86Reg,

    /// XOP code condition.
    pub xop_cc: X86XopCC,
    /// SSE code condition.
    pub sse_cc: X86SseCC,
    /// AVX code condition.
    pub avx_cc: X86AvxCC,

    /// AVX suppress all exceptions.
    pub avx_sae: bool,
    /// AVX static rounding mode.
    pub avx_rm: X86AvxRm,

    pub eflags_or_fpu_flags: EFlagsOrFpuFlags,

    /// Number of operands, or 0 when the instruction has none.
    pub op_count: u8,

    pub operands: [Op; 8],

    /// Encoding information.
    pub encoding: Encoding,
}

/// Mirror of `cs_x86_op`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Op {
    pub type_: X86OpType,
    pub value: OpValue,

    /// Size of this operand in bytes.
    pub size: u8,

    /// How this operand is accessed. Irrelevant when the engine is compiled
    /// in DIET mode.
    pub access: Access,

    /// AVX broadcast type, or 0 if irrelevant.
    pub avx_bcast: X86AvxBCast,

    /// AVX zero opmask {Z}.
    pub avx_zero_opmask: bool,
}

/// Mirror of `cs_x86_encoding`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Encoding {
    /// ModR/M offset, or 0 when irrelevant.
    pub modrm_offset: u8,

    /// Displacement offset, or 0 when irrelevant.
    pub disp_offset: u8,
    pub disp_size: u8,

    /// Immediate offset, or 0 when irrelevant.
    pub imm_offset: u8,
    pub imm_size: u8,
}

/// Mirror of `x86_op_mem`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OpMem {
    /// Segment register.
    pub segment: X86Reg,
    /// Base register.
    pub base: X86Reg,
    /// Index register.
    pub index: X86Reg,
    /// Scale for the index register.
    pub scale: libc::c_int,
    /// Displacement value.
    pub disp: u64,
}

/// x86_reg
pub type X86Reg = libc::c_int;
/// x86_xop_cc
pub type X86XopCC = libc::c_int;
/// x86_sse_cc
pub type X86SseCC = libc::c_int;
/// x86_avx_cc
pub type X86AvxCC = libc::c_int;
/// x86_avx_rm
pub type X86AvxRm = libc::c_int;
/// x86_op_type
pub type X86OpType = libc::c_int;
/// x86_avx_bcast
pub type X86AvxBCast = libc::c_int;

#[repr(C)]
#[derive(Clone, Copy)]
pub union EFlagsOrFpuFlags {
    /// EFLAGS updated by an instruction, an OR combination of X86_EFLAGS_*
    /// symbols.
    pub eflags: u64,
    /// FPU_FLAGS updated by an instruction, an OR combination of
    /// X86_FPU_FLAGS_* symbols.
    pub fpu_flags: u64,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union OpValue {
    pub reg: X86Reg,
    pub imm: u64,
    pub mem: OpMem,
}
