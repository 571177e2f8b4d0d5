use crate::arch::{
    arm, arm64, evm, m680x, m68k, mips, mos65xx, ppc, sparc, sysz, tms320c64x, x86, xcore,
};
use crate::insn::{Detail, Insn};
use once_cell::sync::Lazy;

/// A single (name, value) pair in the layout table. The value is either a
/// struct size, a struct alignment, or an enum sentinel constant.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    /// Key the entry is looked up by, e.g. `"sizeof(cs_insn)"`.
    pub name: &'static str,
    /// Value compiled in for the current target's ABI.
    pub value: usize,
}

/// The table is built on first access and never mutated afterwards, so every
/// lookup is a plain read and safe to run from any thread.
static TABLE: Lazy<Vec<Entry>> = Lazy::new(build);

fn build() -> Vec<Entry> {
    let mut table = Vec::with_capacity(36);

    layout_entries! { table;
        "cs_insn" => Insn,
        "cs_detail" => Detail,

        "cs_x86" => x86::Details,
        "cs_arm64" => arm64::Details,
        "cs_arm" => arm::Details,
        "cs_m68k" => m68k::Details,
        "cs_mips" => mips::Details,
        "cs_ppc" => ppc::Details,
        "cs_sparc" => sparc::Details,
        "cs_sysz" => sysz::Details,
        "cs_xcore" => xcore::Details,
        "cs_tms320c64x" => tms320c64x::Details,
        "cs_m680x" => m680x::Details,
        "cs_evm" => evm::Details,
        "cs_mos65xx" => mos65xx::Details,
    }

    // End-of-enum markers that callers use to size fixed-capacity arrays.
    table.push(Entry {
        name: "X86_REG_ENDING",
        value: x86::X86_REG_ENDING,
    });
    table.push(Entry {
        name: "X86_INS_ENDING",
        value: x86::X86_INS_ENDING,
    });
    table.push(Entry {
        name: "X86_GRP_ENDING",
        value: x86::X86_GRP_ENDING,
    });

    log::debug!("layout table built with {} entries", table.len());
    table
}

/// Scans the table for the first entry whose name begins with `needle` and
/// returns its value.
///
/// The needle is compared byte-for-byte and case-sensitively, the way the
/// original C helper ran `strncmp` with a caller-supplied length: a needle
/// that is a strict prefix of an entry name ("sizeo") matches that entry.
/// Callers that want an exact match should pass the full name.
pub fn query(needle: &[u8]) -> Option<usize> {
    TABLE
        .iter()
        .find(|entry| entry.name.as_bytes().get(..needle.len()) == Some(needle))
        .map(|entry| entry.value)
}

/// Like [`query`] but collapses "not found" to `0` for compatibility with
/// the C helper's ABI. A missing name is indistinguishable from a constant
/// whose value really is zero; prefer [`query`] in new code.
pub fn get_value(needle: &[u8]) -> usize {
    query(needle).unwrap_or(0)
}

/// Iterates over every entry in the table in declaration order. Lets a
/// binding generator dump the whole surface in one pass instead of probing
/// key by key.
pub fn entries() -> impl Iterator<Item = Entry> {
    TABLE.iter().copied()
}
