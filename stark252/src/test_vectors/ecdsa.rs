//! STARK ECDSA test vectors.

use hex_literal::hex;

/// ECDSA test vector.
///
/// `k` is all zeros when the nonce is derived with RFC 6979 rather than
/// given explicitly.
pub struct TestVector {
    /// Private key.
    pub d: [u8; 32],

    /// Stark key (x-coordinate of the public point).
    pub q_x: [u8; 32],

    /// Explicit nonce, or zero for a derived one.
    pub k: [u8; 32],

    /// Message hash.
    pub m: [u8; 32],

    /// Signature `r` component.
    pub r: [u8; 32],

    /// Signature `s` component.
    pub s: [u8; 32],

    /// Parity of the nonce point's y-coordinate.
    pub v: u8,
}

/// STARK ECDSA test vectors.
pub const ECDSA_TEST_VECTORS: &[TestVector] = &[
    // nonce derived with RFC 6979
    TestVector {
        d: hex!("0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79"),
        q_x: hex!("02c5dbad71c92a45cc4b40573ae661f8147869a91d57b8d9b8f48c8af7f83159"),
        k: [0; 32],
        m: hex!("06fea80189363a786037ed3e7ba546dad0ef7de49fccae0e31eb658b7dd4ea76"),
        r: hex!("061ec782f76a66f6984efc3a1b6d152a124c701c00abdd2bf76641b4135c770f"),
        s: hex!("04e44e759cea02c23568bb4d8a09929bbca8768ab68270d50c18d214166ccd9a"),
        v: 1,
    },
    // largest valid message hash
    TestVector {
        d: hex!("0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79"),
        q_x: hex!("02c5dbad71c92a45cc4b40573ae661f8147869a91d57b8d9b8f48c8af7f83159"),
        k: [0; 32],
        m: hex!("07ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        r: hex!("0577b8cecc8cf6178c32d3dbd54bc2a1c132842be2585eeffc90ddec3ad859e2"),
        s: hex!("028da92bc730282606c03677af43ec773c7cada0d0d9329429975a77c45b4e83"),
        v: 0,
    },
    TestVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        q_x: hex!("01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"),
        k: [0; 32],
        m: hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        r: hex!("0543b191c671bc1f9b2f4e643a5711535cf34cb8330ab22e2416e8cdda8db054"),
        s: hex!("02f139920a75d2209e972b1bf82dc72e4c1edb8355fdbae7b4910ea7c32e70e2"),
        v: 1,
    },
    // explicit nonce
    TestVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        q_x: hex!("01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"),
        k: hex!("0000000000000000000000000000000000000000000000000000000000000003"),
        m: hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        r: hex!("0411494b501a98abd8262b0da1351e17899a0c4ef23dd2f96fec5ba847310b20"),
        s: hex!("0405c3191ab3883ef2b763af35bc5f5d15b3b4e99461d70e84c654a351a7c81b"),
        v: 0,
    },
];

/// Stark keys, private keys pairs: `(d, q_x)`.
pub const PUBLIC_KEY_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("03c1e9550e66958296d11b60f8e8e7a7ad990d07fa65d5f7652c4a6c87d4e3cc"),
        hex!("077a3b314db07c45076d11f62b6f9e748a39790441823307743cf00d6597ea43"),
    ),
    (
        hex!("0000000000000000000000000000000000000000000000000000000000000012"),
        hex!("019661066e96a8b9f06a1d136881ee924dfb6a885239caa5fd3f87a54c6b25c4"),
    ),
];
