//! Test vectors for the STARK curve group.

use hex_literal::hex;

/// Repeated addition of the generator.
///
/// These are the first 10 multiples of the generator.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("01ef15c18599971b7beced415a40f0c7deacfd9b0d1819e03d723d8bc943cfca"),
        hex!("005668060aa49730b7be4801df46ec62de53ecd11abe43a32873000c36e8dc1f"),
    ),
    (
        hex!("0759ca09377679ecd535a81e83039658bf40959283187c654c5416f439403cf5"),
        hex!("06f524a3400e7708d5c01a28598ad272e7455aa88778b19f93b562d7a9646c41"),
    ),
    (
        hex!("0411494b501a98abd8262b0da1351e17899a0c4ef23dd2f96fec5ba847310b20"),
        hex!("07e1b3ebac08924d2c26f409549191fcf94f3bf6f301ed3553e22dfb802f0686"),
    ),
    (
        hex!("00a7da05a4d664859ccd6e567b935cdfbfe3018c7771cb980892ef38878ae9bc"),
        hex!("0584b0c2bc833a4c88d62b387e0ef868cae2eaaa288f4ca7b34c84b46ca031b6"),
    ),
    (
        hex!("0788435d61046d3eec54d77d25bd194525f4fa26ebe6575536bc6f656656b74c"),
        hex!("013926386b9e5e908c359519eaa68c44a2430f4b4ca5d0dbdcb4231f031eb18b"),
    ),
    (
        hex!("01efc3d7c9649900fcbd03f578a8248d095bc4b6a13b3c25f9886ef971ff96fa"),
        hex!("0694e4dce951394737cf62c7ab0946d5a64940f7b9e573f4324c1d6ce9c4d991"),
    ),
    (
        hex!("0743829e0a179f8afe223fc8112dfc8d024ab6b235fd42283c4f5970259ce7b7"),
        hex!("00e67a0a63cc493225e45b9178a3375596ea2a1d7012628a328dbc14c78cd1b7"),
    ),
    (
        hex!("06eeee2b0c71d681692559735e08a2c3ba04e7347c0c18d4d49b83bb89771591"),
        hex!("072498c69f16e02231e26a6a6acaabb8714e0af1306066231dd38c233ee15216"),
    ),
    (
        hex!("0216b4f076ff47e03a05032d1c6ee17933d8de8b2b4c43eb5ad5a7e1b25d3849"),
        hex!("054b14e088019c05fd3c7ea1dadef2999de50590264fbf9ffe77692ceb241a8c"),
    ),
    (
        hex!("0320ceae3120e56f6006f7d626760f12fc276a3c7683e9b0b87c097d7be8dbde"),
        hex!("0760d1688317be9e2cf74eaa8b2d39e886a6c18a223a9ccc9b19429f2a174377"),
    ),
];

/// Scalar multiplication with the generator.
///
/// Each entry is `(k, x, y)` with `(x, y) = kG`.
pub const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("036f675c81e74ef5e8e25d940ed904759531985d5d9dc9f81818e811892f902c"),
        hex!("03bff93fbda6d68fd7e86f61ab73e2267155393c1d578555d2d677c8b10db213"),
        hex!("002c3314c4217cb7a4a9bb4bdebcd6761f7589d3789dba65eb98192dad849f02"),
    ),
    (
        hex!("00cb1e29658cda1495e60af593bd04cf0fd630f1f29d0da9953f48f1a09f76b6"),
        hex!("042e500e354364e43041a67da9f21f826a63229391e701f037a6696aeefe2cca"),
        hex!("033daf65a4d8980d1097a1ba1b3d6be8ec82b2e945ffc33381bab3c313fd4382"),
    ),
    (
        hex!("06b4cb244a23d5962217beaddbc496cb8e81973e0becd7b03898d190f9ebdacd"),
        hex!("01b39841342f557c985e3655b374f89513c8c881905c4fcf7fb6f46e4ea5a018"),
        hex!("06aaf33c41bbc54608baf1297517d2bf6e8b17bd2b4edcc9bf3b8bb3900c0e8d"),
    ),
    (
        hex!("018f135d5f557203301850c5a38fd547923a736994e3bf911a61dbe22e44158c"),
        hex!("050b732fb703bcd13bccfc5d05403b839cdb335451fb3e1cfc168abf07186972"),
        hex!("0527c1ab13967cf6be83018d6adfa1eb0c01893f41ae38dee83b1f490eac8443"),
    ),
];
