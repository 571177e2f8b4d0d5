//! Exported C surface of the shim. A foreign binding generator links (or
//! `dlopen`s) the cdylib and calls these to discover the ABI of the current
//! build. The surface is a per-version compatibility contract: it has to be
//! reviewed whenever the mirrored capstone headers change.

use crate::arch::{
    arm, arm64, evm, m680x, m68k, mips, mos65xx, ppc, sparc, sysz, tms320c64x, x86, xcore,
};
use crate::insn::{Detail, Insn};
use crate::table;

layout_exports! {
    (cs_layout__sizeof_cs_insn, cs_layout__alignof_cs_insn, Insn),
    (cs_layout__sizeof_cs_detail, cs_layout__alignof_cs_detail, Detail),

    (cs_layout__sizeof_cs_x86, cs_layout__alignof_cs_x86, x86::Details),
    (cs_layout__sizeof_cs_arm64, cs_layout__alignof_cs_arm64, arm64::Details),
    (cs_layout__sizeof_cs_arm, cs_layout__alignof_cs_arm, arm::Details),
    (cs_layout__sizeof_cs_m68k, cs_layout__alignof_cs_m68k, m68k::Details),
    (cs_layout__sizeof_cs_mips, cs_layout__alignof_cs_mips, mips::Details),
    (cs_layout__sizeof_cs_ppc, cs_layout__alignof_cs_ppc, ppc::Details),
    (cs_layout__sizeof_cs_sparc, cs_layout__alignof_cs_sparc, sparc::Details),
    (cs_layout__sizeof_cs_sysz, cs_layout__alignof_cs_sysz, sysz::Details),
    (cs_layout__sizeof_cs_xcore, cs_layout__alignof_cs_xcore, xcore::Details),
    (cs_layout__sizeof_cs_tms320c64x, cs_layout__alignof_cs_tms320c64x, tms320c64x::Details),
    (cs_layout__sizeof_cs_m680x, cs_layout__alignof_cs_m680x, m680x::Details),
    (cs_layout__sizeof_cs_evm, cs_layout__alignof_cs_evm, evm::Details),
    (cs_layout__sizeof_cs_mos65xx, cs_layout__alignof_cs_mos65xx, mos65xx::Details),
}

/// Looks up a named layout value by key, e.g. `"sizeof(cs_insn)"` or
/// `"X86_REG_ENDING"`. Returns `0` for unknown names.
///
/// `name` does not have to be NUL-terminated; exactly `len` bytes of it are
/// compared, which lets callers pass string slices straight out of a managed
/// runtime. A `len` shorter than the full key prefix-matches the first table
/// entry that starts with those bytes, so callers should always pass the true
/// key length.
///
/// # Safety
///
/// `name` must either be null or point to at least `len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn cs_layout__get_value(
    name: *const libc::c_char,
    len: libc::size_t,
) -> libc::size_t {
    if name.is_null() {
        return 0;
    }

    let needle = core::slice::from_raw_parts(name as *const u8, len as usize);
    table::get_value(needle) as libc::size_t
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exports_agree_with_table() {
        assert_eq!(
            cs_layout__sizeof_cs_insn() as usize,
            table::get_value(b"sizeof(cs_insn)")
        );
        assert_eq!(
            cs_layout__alignof_cs_insn() as usize,
            table::get_value(b"alignof(cs_insn)")
        );
        assert_eq!(
            cs_layout__sizeof_cs_detail() as usize,
            table::get_value(b"sizeof(cs_detail)")
        );
        assert_eq!(
            cs_layout__sizeof_cs_x86() as usize,
            table::get_value(b"sizeof(cs_x86)")
        );
    }

    #[test]
    fn get_value_accepts_unterminated_names() {
        // Deliberately longer buffer than the length passed in.
        let buffer = b"sizeof(cs_insn)garbage after the key";
        let value = unsafe {
            cs_layout__get_value(buffer.as_ptr() as *const libc::c_char, 15)
        };
        assert_eq!(value as usize, core::mem::size_of::<Insn>());
    }

    #[test]
    fn get_value_handles_null_and_unknown() {
        let value = unsafe { cs_layout__get_value(core::ptr::null(), 4) };
        assert_eq!(value, 0);

        let key = b"nonexistent_key_xyz";
        let value = unsafe {
            cs_layout__get_value(key.as_ptr() as *const libc::c_char, key.len() as libc::size_t)
        };
        assert_eq!(value, 0);
    }
}
