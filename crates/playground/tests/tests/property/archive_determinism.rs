//! Property tests: packaging is a pure function of (binary, source).

use playground_packager::{unpack, ArtifactPackager};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn identical_inputs_identical_archives(
        binary in prop::collection::vec(any::<u8>(), 0..512),
        source in "\\PC{0,256}",
    ) {
        let packager = ArtifactPackager::default();
        let a = packager.package(&binary, &source).unwrap();
        let b = packager.package(&binary, &source).unwrap();
        prop_assert_eq!(a.bytes(), b.bytes());
        prop_assert_eq!(a.hash(), b.hash());
    }

    #[test]
    fn unpack_returns_inputs(
        binary in prop::collection::vec(any::<u8>(), 0..512),
        source in "\\PC{0,256}",
    ) {
        let archive = ArtifactPackager::default().package(&binary, &source).unwrap();
        let entries = unpack(archive.bytes()).unwrap();
        prop_assert_eq!(entries.len(), 4);
        prop_assert_eq!(&entries[0].bytes, &binary);
        prop_assert_eq!(&entries[1].bytes, &source.as_bytes().to_vec());
    }
}
