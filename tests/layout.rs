//! Cross-checks the reported layout values against independent reflective
//! computations, and pins down the exported ABI surface's semantics.

use core::mem::MaybeUninit;
use cs_layout::arch::{arm, x86};
use cs_layout::{entries, ffi, get_value, layout_of, query, Detail, Insn};

/// Byte distance between consecutive elements of a two-element array, an
/// independent way of computing a type's size.
fn stride_of<T>() -> usize {
    let array = MaybeUninit::<[T; 2]>::uninit();
    let base = array.as_ptr() as *const T;
    unsafe { base.add(1) as usize - base as usize }
}

/// Offset of a `T` placed after a single byte in a two-field struct: the
/// compiler inserts exactly the padding the type's alignment demands, which
/// is the technique the original C helper used to compute alignment.
fn spacer_offset_of<T>() -> usize {
    #[repr(C)]
    struct Spacer<T> {
        pad: u8,
        value: T,
    }

    let wrapper = MaybeUninit::<Spacer<T>>::uninit();
    let base = wrapper.as_ptr() as usize;
    let field = unsafe { core::ptr::addr_of!((*wrapper.as_ptr()).value) } as usize;
    field - base
}

#[test]
fn sizes_match_array_stride() {
    assert_eq!(get_value(b"sizeof(cs_insn)"), stride_of::<Insn>());
    assert_eq!(get_value(b"sizeof(cs_detail)"), stride_of::<Detail>());
    assert_eq!(get_value(b"sizeof(cs_x86)"), stride_of::<x86::Details>());
    assert_eq!(get_value(b"sizeof(cs_arm)"), stride_of::<arm::Details>());
}

#[test]
fn alignments_match_spacer_offset() {
    assert_eq!(get_value(b"alignof(cs_insn)"), spacer_offset_of::<Insn>());
    assert_eq!(get_value(b"alignof(cs_detail)"), spacer_offset_of::<Detail>());
    assert_eq!(get_value(b"alignof(cs_x86)"), spacer_offset_of::<x86::Details>());
    assert_eq!(get_value(b"alignof(cs_arm)"), spacer_offset_of::<arm::Details>());
}

#[test]
fn alignment_divides_heap_addresses() {
    let align = get_value(b"alignof(cs_detail)");
    assert!(align.is_power_of_two());

    for _ in 0..4 {
        let boxed = Box::new(MaybeUninit::<Detail>::uninit());
        assert_eq!(boxed.as_ptr() as usize % align, 0);
    }
}

#[test]
fn exported_accessors_agree_with_lookup() {
    assert_eq!(
        ffi::cs_layout__sizeof_cs_insn() as usize,
        get_value(b"sizeof(cs_insn)")
    );
    assert_eq!(
        ffi::cs_layout__alignof_cs_insn() as usize,
        get_value(b"alignof(cs_insn)")
    );
    assert_eq!(
        ffi::cs_layout__sizeof_cs_mos65xx() as usize,
        get_value(b"sizeof(cs_mos65xx)")
    );
}

#[test]
fn lookup_by_full_key() {
    let key = b"sizeof(cs_insn)";
    let value = unsafe {
        ffi::cs_layout__get_value(key.as_ptr() as *const libc::c_char, key.len() as libc::size_t)
    };
    assert_eq!(value as usize, core::mem::size_of::<Insn>());
}

#[test]
fn lookup_with_truncated_length_prefix_matches() {
    // Five bytes of "sizeof(cs_insn)" prefix-match the first "sizeof(...)"
    // entry in the table, which is sizeof(cs_insn). Defined behavior, but
    // callers should pass the true key length.
    let key = b"sizeof(cs_insn)";
    let value = unsafe { ffi::cs_layout__get_value(key.as_ptr() as *const libc::c_char, 5) };
    assert_eq!(value as usize, core::mem::size_of::<Insn>());
}

#[test]
fn unknown_key_returns_zero_sentinel() {
    let key = b"nonexistent_key_xyz";
    let value = unsafe {
        ffi::cs_layout__get_value(key.as_ptr() as *const libc::c_char, key.len() as libc::size_t)
    };
    assert_eq!(value, 0);

    // The hardened lookup distinguishes the same miss.
    assert_eq!(query(key), None);
}

#[test]
fn repeated_lookups_are_idempotent() {
    let keys: Vec<String> = entries().map(|e| e.name.to_string()).collect();
    let first: Vec<usize> = keys.iter().map(|k| get_value(k.as_bytes())).collect();

    for _ in 0..3 {
        let again: Vec<usize> = keys.iter().map(|k| get_value(k.as_bytes())).collect();
        assert_eq!(first, again);
    }
}

#[test]
fn generic_layout_matches_named_entries() {
    assert_eq!(layout_of::<Insn>().size, get_value(b"sizeof(cs_insn)"));
    assert_eq!(layout_of::<Insn>().align, get_value(b"alignof(cs_insn)"));
}
