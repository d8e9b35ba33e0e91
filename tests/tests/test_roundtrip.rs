// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Serialize/deserialize round trips across the typed object set, plus the
//! documented flags-gating and vector wire forms.

use num_bigint::BigInt;
use tlwire::{
    deserialize_object, DcOption, GeoPoint, MissingInvitee, PqInnerDataDc, Reader, Registry,
    ResPq, TlObject,
};

fn big(decimal: &str) -> BigInt {
    BigInt::parse_bytes(decimal.as_bytes(), 10).unwrap()
}

fn round_trip(object: TlObject) {
    let bytes = object.serialize().unwrap();
    let mut reader = Reader::new(&bytes);
    let back = deserialize_object(&mut reader, Registry::global()).unwrap();
    assert_eq!(back, object);
    assert_eq!(reader.remaining(), 0, "decoder must consume every byte");
    assert_eq!(back.serialize().unwrap(), bytes);
}

#[test]
fn boxed_bools() {
    assert_eq!(
        TlObject::BoolTrue.serialize().unwrap(),
        [0xB5, 0x75, 0x72, 0x99]
    );
    assert_eq!(
        TlObject::BoolFalse.serialize().unwrap(),
        [0x37, 0x97, 0x79, 0xBC]
    );
    round_trip(TlObject::BoolTrue);
    round_trip(TlObject::BoolFalse);
}

#[test]
fn dc_option_with_and_without_secret() {
    round_trip(TlObject::DcOption(DcOption {
        ipv6: false,
        media_only: false,
        tcpo_only: true,
        cdn: false,
        is_static: false,
        this_port_only: false,
        id: 2,
        ip_address: "149.154.167.40".to_string(),
        port: 443,
        secret: Some(vec![0xDD, 0x11, 0x25]),
    }));
    round_trip(TlObject::DcOption(DcOption {
        ipv6: true,
        media_only: true,
        tcpo_only: false,
        cdn: true,
        is_static: true,
        this_port_only: true,
        id: 3,
        ip_address: "2001:0b28:f23d:f003:0000:0000:0000:000e".to_string(),
        port: 443,
        secret: None,
    }));
}

#[test]
fn missing_invitee_flag_combinations() {
    for (invite, pm) in [(false, false), (true, false), (false, true), (true, true)] {
        let object = TlObject::MissingInvitee(MissingInvitee {
            premium_would_allow_invite: invite,
            premium_required_for_pm: pm,
            user_id: 777_000,
        });
        let bytes = object.serialize().unwrap();
        // id + flags + user_id
        assert_eq!(bytes.len(), 16);
        let expected_flags = (invite as u8) | ((pm as u8) << 1);
        assert_eq!(bytes[4..8], [expected_flags, 0, 0, 0]);
        round_trip(object);
    }
}

#[test]
fn flags_gating_controls_payload_bytes() {
    let without = TlObject::GeoPoint(GeoPoint {
        longitude: 13.41,
        latitude: 52.52,
        access_hash: -1,
        accuracy_radius: None,
    });
    let bytes = without.serialize().unwrap();
    // id + flags + 2 doubles + long, zero bytes for the absent field
    assert_eq!(bytes.len(), 32);
    assert_eq!(bytes[4..8], [0, 0, 0, 0]);
    round_trip(without);

    let with = TlObject::GeoPoint(GeoPoint {
        longitude: 13.41,
        latitude: 52.52,
        access_hash: -1,
        accuracy_radius: Some(500),
    });
    let bytes = with.serialize().unwrap();
    assert_eq!(bytes.len(), 36);
    assert_eq!(bytes[4..8], [1, 0, 0, 0]);
    assert_eq!(bytes[32..36], [0xF4, 0x01, 0x00, 0x00]);
    round_trip(with);
}

#[test]
fn geo_point_empty_is_bare_identifier() {
    let bytes = TlObject::GeoPointEmpty.serialize().unwrap();
    assert_eq!(bytes, [0x5F, 0xDD, 0x17, 0x11]);
    round_trip(TlObject::GeoPointEmpty);
}

#[test]
fn res_pq_with_int128_and_long_vector() {
    round_trip(TlObject::ResPq(ResPq {
        nonce: big("276480700075363207293378760200953856909"),
        server_nonce: big("9879767416712888958949374238624101143"),
        pq: vec![0x17, 0xED, 0x48, 0x94, 0x1A, 0x08, 0xF9, 0x81],
        server_public_key_fingerprints: vec![-6_205_835_210_776_354_611, 0x216B_E86C_022B_B4C3],
    }));
}

#[test]
fn empty_vector_wire_form() {
    let object = TlObject::ResPq(ResPq {
        nonce: BigInt::from(1),
        server_nonce: BigInt::from(2),
        pq: Vec::new(),
        server_public_key_fingerprints: Vec::new(),
    });
    let bytes = object.serialize().unwrap();
    // trailing vector: constructor + zero count, no elements
    assert_eq!(
        bytes[bytes.len() - 8..],
        [0x15, 0xC4, 0xB5, 0x1C, 0x00, 0x00, 0x00, 0x00]
    );
    round_trip(object);
}

#[test]
fn p_q_inner_data_dc_with_int256() {
    round_trip(TlObject::PqInnerDataDc(PqInnerDataDc {
        pq: vec![0x17, 0xED, 0x48, 0x94, 0x1A, 0x08, 0xF9, 0x81],
        p: vec![0x49, 0x4C, 0x55, 0x3B],
        q: vec![0x53, 0x91, 0x10, 0x73],
        nonce: big("276480700075363207293378760200953856909"),
        server_nonce: big("9879767416712888958949374238624101143"),
        new_nonce: big(
            "106798601566956061778213567770381794524206942780088236271152238178577682442589",
        ),
        dc: 2,
    }));
}

#[test]
fn high_bit_big_integers_round_trip() {
    // 128- and 256-bit fields are unsigned; values with the top bit set
    // must come back as the same non-negative integer
    round_trip(TlObject::ResPq(ResPq {
        nonce: (BigInt::from(1) << 127) + BigInt::from(5),
        server_nonce: (BigInt::from(1) << 128) - BigInt::from(1),
        pq: vec![],
        server_public_key_fingerprints: vec![i64::MIN, i64::MAX],
    }));
    round_trip(TlObject::PqInnerDataDc(PqInnerDataDc {
        pq: vec![0x01],
        p: vec![0x02],
        q: vec![0x03],
        nonce: BigInt::from(0),
        server_nonce: (BigInt::from(1) << 127),
        new_nonce: (BigInt::from(1) << 256) - BigInt::from(1),
        dc: 4,
    }));
}
