//! MIPS register name tables.
//!
//! Canonical names for the general-purpose, floating-point, coprocessor-2 and
//! coprocessor-0 register files, plus the link register index.

/// Register r31 (return address, ra). Written implicitly by link forms.
pub const REG_RA: usize = 31;

/// O32 names for r0–r31.
pub const GPR_NAMES: [&str; 32] = [
    "r0", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7",
    "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp", "s8", "ra",
];

/// Names for f0–f31.
pub const FPR_NAMES: [&str; 32] = [
    "f0", "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10", "f11", "f12", "f13", "f14",
    "f15", "f16", "f17", "f18", "f19", "f20", "f21", "f22", "f23", "f24", "f25", "f26", "f27",
    "f28", "f29", "f30", "f31",
];

/// Names for the coprocessor-2 registers.
pub const COP2_NAMES: [&str; 32] = [
    "c2r0", "c2r1", "c2r2", "c2r3", "c2r4", "c2r5", "c2r6", "c2r7", "c2r8", "c2r9", "c2r10",
    "c2r11", "c2r12", "c2r13", "c2r14", "c2r15", "c2r16", "c2r17", "c2r18", "c2r19", "c2r20",
    "c2r21", "c2r22", "c2r23", "c2r24", "c2r25", "c2r26", "c2r27", "c2r28", "c2r29", "c2r30",
    "c2r31",
];

/// VR4300 coprocessor-0 control register names.
pub const COP0_NAMES: [&str; 32] = [
    "Index",
    "Random",
    "EntryLo0",
    "EntryLo1",
    "Context",
    "PageMask",
    "Wired",
    "Reserved7",
    "BadVAddr",
    "Count",
    "EntryHi",
    "Compare",
    "Status",
    "Cause",
    "EPC",
    "PRId",
    "Config",
    "LLAddr",
    "WatchLo",
    "WatchHi",
    "XContext",
    "Reserved21",
    "Reserved22",
    "Reserved23",
    "Reserved24",
    "Reserved25",
    "PErr",
    "CacheErr",
    "TagLo",
    "TagHi",
    "ErrorEPC",
    "Reserved31",
];
