/// Mirror of `cs_evm`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Details {
    /// Number of items popped from the stack.
    pub pop: u8,
    /// Number of items pushed onto the stack.
    pub push: u8,
    /// Gas fee for the instruction.
    pub fee: libc::c_uint,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::table;

    #[test]
    fn evm_size_and_alignment() {
        assert_eq!(
            core::mem::size_of::<Details>(),
            table::get_value(b"sizeof(cs_evm)")
        );

        assert_eq!(
            core::mem::align_of::<Details>(),
            table::get_value(b"alignof(cs_evm)")
        );
    }
}
