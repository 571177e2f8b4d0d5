/// Generates one exported `sizeof`/`alignof` accessor pair per mirrored
/// struct. The struct names have to be known at compile time to take their
/// size, so the export list is stamped out here instead of dispatched at
/// runtime.
macro_rules! layout_exports {
    ($( ($size_fn:ident, $align_fn:ident, $Type:ty) ),* $(,)?) => {
        $(
            #[no_mangle]
            pub extern "C" fn $size_fn() -> libc::size_t {
                core::mem::size_of::<$Type>() as libc::size_t
            }

            #[no_mangle]
            pub extern "C" fn $align_fn() -> libc::size_t {
                core::mem::align_of::<$Type>() as libc::size_t
            }
        )*
    };
}

/// Pushes `"sizeof(<name>)"` and `"alignof(<name>)"` entries for each
/// mirrored struct onto a table being built. `$name` is the C-side name of
/// the struct as it appears in capstone's headers.
macro_rules! layout_entries {
    ($table:ident; $( $name:literal => $Type:ty ),* $(,)?) => {
        $(
            $table.push($crate::table::Entry {
                name: concat!("sizeof(", $name, ")"),
                value: core::mem::size_of::<$Type>(),
            });
            $table.push($crate::table::Entry {
                name: concat!("alignof(", $name, ")"),
                value: core::mem::align_of::<$Type>(),
            });
        )*
    };
}
