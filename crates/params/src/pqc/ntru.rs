//! Constants for the NTRU encryption scheme (IEEE 1363.1 / ANSI X9.98)
//!
//! The EES parameter sets below are the ones negotiated by IKE NTRU key
//! exchange. Sets 0..=11 use a single sparse private polynomial; sets 12..=15
//! use the product form F = F1*F2 + F3, whose three per-factor weights are
//! packed into `df` one byte per factor (F1 in the low byte).

/// Modulus q shared by every EES parameter set
pub const NTRU_Q: u16 = 2048;

/// Number of bits of q
pub const NTRU_Q_BITS: u8 = 11;

/// Length of an encoded parameter-set object identifier
pub const NTRU_OID_LEN: usize = 3;

/// Number of standardized parameter sets
pub const NTRU_PARAM_SET_COUNT: usize = 16;

/// Personalization string of the DRBG used by IKE NTRU key exchange
pub const NTRU_KE_PERSONALIZATION: &[u8] = b"IKE NTRU-KE";

/// Security strengths, in bits, offered by every profile
pub const NTRU_STRENGTHS: [u32; 4] = [112, 128, 192, 256];

/// Packs three per-factor weights into one product-form count
pub const fn pack_df(df1: u32, df2: u32, df3: u32) -> u32 {
    df1 | (df2 << 8) | (df3 << 16)
}

/// One EES parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NtruEesParams {
    /// Table identifier
    pub id: u8,
    /// Standard name
    pub name: &'static str,
    /// Object identifier carried in key encodings
    pub oid: [u8; NTRU_OID_LEN],
    /// DER identifier
    pub der_id: u8,
    /// Number of bits of N
    pub n_bits: u8,
    /// Ring degree
    pub n: u16,
    /// Security strength in bytes
    pub sec_strength_len: u16,
    /// Modulus
    pub q: u16,
    /// Number of bits of q
    pub q_bits: u8,
    /// Whether the private polynomial is in product form
    pub is_product_form: bool,
    /// Number of +1 (and of -1) coefficients of F, packed for product form
    pub df: u32,
    /// Number of -1 coefficients of g (g has dg + 1 coefficients set to +1)
    pub dg: u32,
    /// Maximum message length in bytes
    pub m_len_max: u16,
    /// Minimum weight of a message representative
    pub min_msg_rep_wt: u16,
    /// Bits drawn per index candidate
    pub c_bits: u8,
    /// Bytes used to encode the message length
    pub m_len_len: u8,
}

/// All EES parameter sets, indexed by identifier
pub const NTRU_EES_PARAMS: [NtruEesParams; NTRU_PARAM_SET_COUNT] = [
    NtruEesParams {
        id: 0,
        name: "EES401EP1",
        oid: [0x00, 0x02, 0x04],
        der_id: 0x22,
        n_bits: 9,
        n: 401,
        sec_strength_len: 14,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 113,
        dg: 133,
        m_len_max: 60,
        min_msg_rep_wt: 113,
        c_bits: 11,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 1,
        name: "EES449EP1",
        oid: [0x00, 0x03, 0x03],
        der_id: 0x23,
        n_bits: 9,
        n: 449,
        sec_strength_len: 16,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 134,
        dg: 149,
        m_len_max: 67,
        min_msg_rep_wt: 134,
        c_bits: 9,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 2,
        name: "EES677EP1",
        oid: [0x00, 0x05, 0x03],
        der_id: 0x24,
        n_bits: 10,
        n: 677,
        sec_strength_len: 24,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 157,
        dg: 225,
        m_len_max: 101,
        min_msg_rep_wt: 157,
        c_bits: 11,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 3,
        name: "EES1087EP2",
        oid: [0x00, 0x06, 0x03],
        der_id: 0x25,
        n_bits: 11,
        n: 1087,
        sec_strength_len: 32,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 120,
        dg: 362,
        m_len_max: 170,
        min_msg_rep_wt: 120,
        c_bits: 13,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 4,
        name: "EES541EP1",
        oid: [0x00, 0x02, 0x05],
        der_id: 0x26,
        n_bits: 10,
        n: 541,
        sec_strength_len: 14,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 49,
        dg: 180,
        m_len_max: 86,
        min_msg_rep_wt: 49,
        c_bits: 12,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 5,
        name: "EES613EP1",
        oid: [0x00, 0x03, 0x04],
        der_id: 0x27,
        n_bits: 10,
        n: 613,
        sec_strength_len: 16,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 55,
        dg: 204,
        m_len_max: 97,
        min_msg_rep_wt: 55,
        c_bits: 11,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 6,
        name: "EES887EP1",
        oid: [0x00, 0x05, 0x04],
        der_id: 0x28,
        n_bits: 10,
        n: 887,
        sec_strength_len: 24,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 81,
        dg: 295,
        m_len_max: 141,
        min_msg_rep_wt: 81,
        c_bits: 10,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 7,
        name: "EES1171EP1",
        oid: [0x00, 0x06, 0x04],
        der_id: 0x29,
        n_bits: 11,
        n: 1171,
        sec_strength_len: 32,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 106,
        dg: 390,
        m_len_max: 186,
        min_msg_rep_wt: 106,
        c_bits: 12,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 8,
        name: "EES659EP1",
        oid: [0x00, 0x02, 0x06],
        der_id: 0x2a,
        n_bits: 10,
        n: 659,
        sec_strength_len: 14,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 38,
        dg: 219,
        m_len_max: 108,
        min_msg_rep_wt: 38,
        c_bits: 11,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 9,
        name: "EES761EP1",
        oid: [0x00, 0x03, 0x05],
        der_id: 0x2b,
        n_bits: 10,
        n: 761,
        sec_strength_len: 16,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 42,
        dg: 253,
        m_len_max: 125,
        min_msg_rep_wt: 42,
        c_bits: 12,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 10,
        name: "EES1087EP1",
        oid: [0x00, 0x05, 0x05],
        der_id: 0x2c,
        n_bits: 11,
        n: 1087,
        sec_strength_len: 24,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 63,
        dg: 362,
        m_len_max: 178,
        min_msg_rep_wt: 63,
        c_bits: 13,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 11,
        name: "EES1499EP1",
        oid: [0x00, 0x06, 0x05],
        der_id: 0x2d,
        n_bits: 11,
        n: 1499,
        sec_strength_len: 32,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: false,
        df: 79,
        dg: 499,
        m_len_max: 247,
        min_msg_rep_wt: 79,
        c_bits: 13,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 12,
        name: "EES401EP2",
        oid: [0x00, 0x02, 0x10],
        der_id: 0x2e,
        n_bits: 9,
        n: 401,
        sec_strength_len: 14,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: true,
        df: pack_df(8, 8, 6),
        dg: 133,
        m_len_max: 60,
        min_msg_rep_wt: 101,
        c_bits: 11,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 13,
        name: "EES439EP1",
        oid: [0x00, 0x03, 0x10],
        der_id: 0x2f,
        n_bits: 9,
        n: 439,
        sec_strength_len: 16,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: true,
        df: pack_df(9, 8, 5),
        dg: 146,
        m_len_max: 65,
        min_msg_rep_wt: 112,
        c_bits: 9,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 14,
        name: "EES593EP1",
        oid: [0x00, 0x05, 0x10],
        der_id: 0x30,
        n_bits: 10,
        n: 593,
        sec_strength_len: 24,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: true,
        df: pack_df(10, 10, 8),
        dg: 197,
        m_len_max: 86,
        min_msg_rep_wt: 158,
        c_bits: 11,
        m_len_len: 1,
    },
    NtruEesParams {
        id: 15,
        name: "EES743EP1",
        oid: [0x00, 0x06, 0x10],
        der_id: 0x31,
        n_bits: 10,
        n: 743,
        sec_strength_len: 32,
        q: NTRU_Q,
        q_bits: NTRU_Q_BITS,
        is_product_form: true,
        df: pack_df(11, 11, 15),
        dg: 247,
        m_len_max: 106,
        min_msg_rep_wt: 204,
        c_bits: 13,
        m_len_len: 1,
    },
];

/// Identifier of EES401EP1
pub const EES401EP1: u8 = 0;
/// Identifier of EES449EP1
pub const EES449EP1: u8 = 1;
/// Identifier of EES677EP1
pub const EES677EP1: u8 = 2;
/// Identifier of EES1087EP2
pub const EES1087EP2: u8 = 3;
/// Identifier of EES541EP1
pub const EES541EP1: u8 = 4;
/// Identifier of EES613EP1
pub const EES613EP1: u8 = 5;
/// Identifier of EES887EP1
pub const EES887EP1: u8 = 6;
/// Identifier of EES1171EP1
pub const EES1171EP1: u8 = 7;
/// Identifier of EES659EP1
pub const EES659EP1: u8 = 8;
/// Identifier of EES761EP1
pub const EES761EP1: u8 = 9;
/// Identifier of EES1087EP1
pub const EES1087EP1: u8 = 10;
/// Identifier of EES1499EP1
pub const EES1499EP1: u8 = 11;
/// Identifier of EES401EP2
pub const EES401EP2: u8 = 12;
/// Identifier of EES439EP1
pub const EES439EP1: u8 = 13;
/// Identifier of EES593EP1
pub const EES593EP1: u8 = 14;
/// Identifier of EES743EP1
pub const EES743EP1: u8 = 15;

// Parameter sets per profile, ordered like `NTRU_STRENGTHS`.

/// Product-form sets with the best overall trade-off (default profile)
pub const NTRU_PROFILE_OPTIMUM: [u8; 4] = [EES401EP2, EES439EP1, EES593EP1, EES743EP1];

/// X9.98 sets optimized for speed
pub const NTRU_PROFILE_X9_98_SPEED: [u8; 4] = [EES659EP1, EES761EP1, EES1087EP1, EES1499EP1];

/// X9.98 sets optimized for bandwidth
pub const NTRU_PROFILE_X9_98_BANDWIDTH: [u8; 4] = [EES401EP1, EES449EP1, EES677EP1, EES1087EP2];

/// X9.98 sets balancing speed and bandwidth
pub const NTRU_PROFILE_X9_98_BALANCE: [u8; 4] = [EES541EP1, EES613EP1, EES887EP1, EES1171EP1];
