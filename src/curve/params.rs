//! Static curve parameter tables.
//!
//! Every numeric constant below is carried over limb-for-limb from
//! `original_source/ecc/ecc.c`'s `p256_*` / `wei25519_*` / `wei25519_2_*`
//! arrays — these are curve domain parameters, not reference *code*, so
//! porting them verbatim is the correct move rather than a from-scratch
//! derivation.

/// Which of the two fast-reduction strategies a curve's prime uses.
///
/// A closed sum type rather than the reference's function pointer
/// (`void (*fieldModP)(...)`) — the curve fixes its reduction strategy at
/// compile time, so there is nothing to dispatch dynamically.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReduceStrategy {
    /// NIST P-256's partial-reduction identities (`reduction::p256_fast`).
    P256Fast,
    /// Generic Barrett reduction (`reduction::barrett`).
    BarrettGeneric,
}

/// Domain parameters for one short Weierstrass curve.
///
/// All fields are little-endian limb arrays, matching the rest of the
/// crate. `mu_p` and `mu_n` are 9 words wide because the Barrett quotient
/// approximation can exceed 256 bits even though the modulus itself does
/// not.
#[derive(Copy, Clone, Debug)]
pub struct CurveParams {
    /// The short Weierstrass coefficient `a` in `y² = x³ + a·x + b`
    /// (`b` unused), stored negated — `a = −a_true mod p`, matching the
    /// reference's `ecc_param_a`. The group law subtracts it rather than
    /// adding (`3x² − a`) for exactly this reason.
    pub a: [u32; 8],
    /// The field prime `p`.
    pub p: [u32; 8],
    /// `p_r = 2^256 − p`, the fast add-back reducer for `field::add`.
    pub p_r: [u32; 8],
    /// The group order `n`.
    pub n: [u32; 8],
    /// `n_r = 2^256 − n`.
    pub n_r: [u32; 8],
    /// Barrett multiplier for `p`, `⌊2^{32·2k} / p⌋`.
    pub mu_p: [u32; 9],
    /// Barrett multiplier for `n`, `⌊2^{32·2k} / n⌋`.
    pub mu_n: [u32; 9],
    /// Base point `G`.
    pub g: ([u32; 8], [u32; 8]),
    /// Barrett cofactor `k` (always 8 for a 256-bit modulus at 32-bit limbs).
    pub k: u32,
    /// Right-shift applied to the message digest before use in ECDSA.
    pub prime_shift: u32,
    /// Which reduction strategy `field::mod_p` should use for this curve.
    pub reduce: ReduceStrategy,
}

/// NIST P-256 (secp256r1).
pub static SECP256R1: CurveParams = CurveParams {
    a: [0x0000_0003, 0, 0, 0, 0, 0, 0, 0],
    p: [
        0xffff_ffff,
        0xffff_ffff,
        0xffff_ffff,
        0x0000_0000,
        0x0000_0000,
        0x0000_0000,
        0x0000_0001,
        0xffff_ffff,
    ],
    p_r: [
        0x0000_0001,
        0x0000_0000,
        0x0000_0000,
        0xffff_ffff,
        0xffff_ffff,
        0xffff_ffff,
        0xffff_fffe,
        0x0000_0000,
    ],
    n: [
        0xFC63_2551,
        0xF3B9_CAC2,
        0xA717_9E84,
        0xBCE6_FAAD,
        0xFFFF_FFFF,
        0xFFFF_FFFF,
        0x0000_0000,
        0xFFFF_FFFF,
    ],
    n_r: [
        0x039C_DAAF,
        0x0C46_353D,
        0x58E8_617B,
        0x4319_0552,
        0x0000_0000,
        0x0000_0000,
        0xFFFF_FFFF,
        0x0000_0000,
    ],
    mu_p: [
        0x0000_0003,
        0x0000_0000,
        0xffff_ffff,
        0xffff_fffe,
        0xffff_fffe,
        0xffff_fffe,
        0xffff_ffff,
        0x0000_0000,
        0x0000_0001,
    ],
    mu_n: [
        0xEEDF_9BFE,
        0x012F_FD85,
        0xDF1A_6C21,
        0x4319_0552,
        0xFFFF_FFFF,
        0xFFFF_FFFE,
        0xFFFF_FFFF,
        0x0000_0000,
        0x0000_0001,
    ],
    g: (
        [
            0xD898_C296,
            0xF4A1_3945,
            0x2DEB_33A0,
            0x7703_7D81,
            0x63A4_40F2,
            0xF8BC_E6E5,
            0xE12C_4247,
            0x6B17_D1F2,
        ],
        [
            0x37BF_51F5,
            0xCBB6_4068,
            0x6B31_5ECE,
            0x2BCE_3357,
            0x7C0F_9E16,
            0x8EE7_EB4A,
            0xFE1A_7F9B,
            0x4FE3_42E2,
        ],
    ),
    k: 8,
    prime_shift: 0,
    reduce: ReduceStrategy::P256Fast,
};

/// The prime `p = 2²⁵⁵ − 19`, shared by `WEI25519` and `WEI25519_2`.
const WEI25519_P: [u32; 8] = [
    0xffff_ffed,
    0xffff_ffff,
    0xffff_ffff,
    0xffff_ffff,
    0xffff_ffff,
    0xffff_ffff,
    0xffff_ffff,
    0x7fff_ffff,
];
const WEI25519_PR: [u32; 8] = [0x0000_0013, 0, 0, 0, 0, 0, 0, 0x8000_0000];
const WEI25519_N: [u32; 8] = [
    0x5cf5_d3ed,
    0x5812_631a,
    0xa2f7_9cd6,
    0x14de_f9de,
    0x0000_0000,
    0x0000_0000,
    0x0000_0000,
    0x1000_0000,
];
const WEI25519_NR: [u32; 8] = [
    0xa30a_2c13,
    0xa7ed_9ce5,
    0x5d08_6329,
    0xeb21_0621,
    0xffff_ffff,
    0xffff_ffff,
    0xffff_ffff,
    0xefff_ffff,
];
const WEI25519_MU_N: [u32; 9] = [
    0x0a2c_131b,
    0xed9c_e5a3,
    0x0863_29a7,
    0x2106_215d,
    0xffff_ffeb,
    0xffff_ffff,
    0xffff_ffff,
    0xffff_ffff,
    0x0000_000f,
];
const WEI25519_MU_P: [u32; 9] = [0x0000_004c, 0, 0, 0, 0, 0, 0, 0, 0x0000_0002];

/// `WEI25519`: the short Weierstrass form birationally equivalent to
/// Curve25519 / Ed25519.
pub static WEI25519: CurveParams = CurveParams {
    a: [
        0xb6eb_5ea9,
        0x5555_5567,
        0x5555_5555,
        0x5555_5555,
        0x5555_5555,
        0x5555_5555,
        0x5555_5555,
        0x5555_5555,
    ],
    p: WEI25519_P,
    p_r: WEI25519_PR,
    n: WEI25519_N,
    n_r: WEI25519_NR,
    mu_p: WEI25519_MU_P,
    mu_n: WEI25519_MU_N,
    g: (
        [
            0xaaad_245a,
            0xaaaa_aaaa,
            0xaaaa_aaaa,
            0xaaaa_aaaa,
            0xaaaa_aaaa,
            0xaaaa_aaaa,
            0xaaaa_aaaa,
            0x2aaa_aaaa,
        ],
        [
            0x7ece_d3d9,
            0x29e9_c5a2,
            0x6d7c_61b2,
            0x923d_4d7e,
            0x7748_d14c,
            0xe01e_dd2c,
            0xb8a0_86b4,
            0x20ae_19a1,
        ],
    ),
    k: 8,
    prime_shift: 3,
    reduce: ReduceStrategy::BarrettGeneric,
};

/// `WEI25519_2`: an alternate Weierstrass curve over the same prime and
/// order, with the smaller coefficient `a = 2`.
pub static WEI25519_2: CurveParams = CurveParams {
    a: [2, 0, 0, 0, 0, 0, 0, 0],
    p: WEI25519_P,
    p_r: WEI25519_PR,
    n: WEI25519_N,
    n_r: WEI25519_NR,
    mu_p: WEI25519_MU_P,
    mu_n: WEI25519_MU_N,
    g: (
        [
            0x7a94_0ffa,
            0x5ee3_c4e8,
            0x072e_a193,
            0xd9ad_4def,
            0x5822_75b6,
            0x318e_8634,
            0x78ae_d661,
            0x17cf_eac3,
        ],
        [
            0x51e1_6b4d,
            0xf0d7_fdcc,
            0x297a_37b6,
            0xdc5c_331d,
            0xa8f6_8dca,
            0x2c4f_13f1,
            0xc55d_fad6,
            0x0c08_a952,
        ],
    ),
    k: 8,
    prime_shift: 3,
    reduce: ReduceStrategy::BarrettGeneric,
};

/// Identifies one of the three curves this crate supports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurveId {
    Secp256r1,
    Wei25519,
    Wei25519_2,
}

impl CurveId {
    /// Returns the static parameter table for this curve.
    pub fn params(self) -> &'static CurveParams {
        match self {
            CurveId::Secp256r1 => &SECP256R1,
            CurveId::Wei25519 => &WEI25519,
            CurveId::Wei25519_2 => &WEI25519_2,
        }
    }

    /// Maps the reference's raw curve discriminants onto [`CurveId`].
    ///
    /// `CurveId` itself is a closed enum and so can never hold an
    /// unrecognized value; this is the one entry point that can, since it
    /// takes the discriminant as a plain integer the way the reference's
    /// `init(curve_id)` does.
    pub fn from_raw(id: u32) -> Option<CurveId> {
        match id {
            0 => Some(CurveId::Secp256r1),
            1 => Some(CurveId::Wei25519),
            2 => Some(CurveId::Wei25519_2),
            _ => None,
        }
    }
}
