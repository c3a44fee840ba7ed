#[path = "../common/mod.rs"]
mod common;

use galaxy_at::sim::{self, Derived, EF_TABLE};
use galaxy_at::{Error, FileId};
use proptest::prelude::*;

#[test]
fn imsi_vector_decodes_to_fifteen_semi_octets() {
    let ef = sim::decode_file(FileId::IMSI, &common::fixtures::imsi_payload()).unwrap();
    match &ef.field("IMSI").unwrap().derived {
        Some(Derived::Imsi(imsi)) => {
            assert_eq!(imsi.indicator(), '9');
            assert_eq!(imsi.semi_octets(), "21360140043215F");
            assert_eq!(imsi.digits(), "21360140043215");
        }
        other => panic!("expected IMSI, got {:?}", other),
    }
}

#[test]
fn lai_vector() {
    let ef = sim::decode_file(FileId::LOCI, &common::fixtures::loci_payload()).unwrap();
    let lai = ef.field("LAI").unwrap();
    assert_eq!(lai.raw(), "1300620001");
    match &lai.derived {
        Some(Derived::Lai(l)) => {
            assert_eq!((l.mcc.as_str(), l.mnc.as_str(), l.lac.as_str()), ("310", "260", "0001"));
        }
        other => panic!("expected LAI, got {:?}", other),
    }
}

#[test]
fn unknown_file_rejected() {
    assert!(matches!(
        sim::decode_file(FileId::new(0x6f3a), &common::fixtures::imsi_payload()),
        Err(Error::MalformedResponse(_))
    ));
}

#[test]
fn every_table_entry_accepts_exact_length() {
    for ef in EF_TABLE {
        let payload = common::fixtures::blank_payload(ef.max_offset());
        let decoded = sim::decode(&payload, ef).unwrap();
        assert_eq!(decoded.fields.len(), ef.fields.len());

        let short = common::fixtures::blank_payload(ef.max_offset() - 1);
        assert!(sim::decode(&short, ef).is_err(), "{}", ef.name);
    }
}

proptest! {
    #[test]
    fn length_and_identity_slices_round_trip(body in prop::collection::vec(any::<u8>(), 9..=9)) {
        let payload = hex::encode_upper(&body);
        let ef = sim::decode_file(FileId::IMSI, &payload).unwrap();
        prop_assert_eq!(ef.fields[0].raw(), hex::encode_upper(&body[..1]));
        prop_assert_eq!(ef.fields[1].raw(), hex::encode_upper(&body[1..]));
    }

    #[test]
    fn decode_twice_is_identical(body in prop::collection::vec(any::<u8>(), 11..20)) {
        let payload = hex::encode_upper(&body);
        let a = sim::decode_file(FileId::LOCI, &payload).unwrap();
        let b = sim::decode_file(FileId::LOCI, &payload).unwrap();
        prop_assert_eq!(a, b);
    }
}
