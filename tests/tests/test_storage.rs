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

use tlwire::{
    deserialize_object, GeoPoint, KeyPart, MemoryStorage, Reader, Registry, Storage, TlObject,
};

fn key(parts: &[KeyPart]) -> Vec<KeyPart> {
    parts.to_vec()
}

#[test]
fn set_then_get() {
    let mut storage = MemoryStorage::default();
    let k = [KeyPart::from("auth"), KeyPart::from(2_i64)];
    assert_eq!(storage.get(&k), None);
    storage.set(&k, Some(&[1, 2, 3]));
    assert_eq!(storage.get(&k), Some(vec![1, 2, 3]));
}

#[test]
fn overwrite_replaces_value() {
    let mut storage = MemoryStorage::default();
    let k = [KeyPart::from("salt")];
    storage.set(&k, Some(&[0xAA]));
    storage.set(&k, Some(&[0xBB, 0xCC]));
    assert_eq!(storage.get(&k), Some(vec![0xBB, 0xCC]));
}

#[test]
fn set_none_removes_entry() {
    let mut storage = MemoryStorage::default();
    let k = [KeyPart::from("session")];
    storage.set(&k, Some(&[7]));
    storage.set(&k, None);
    assert_eq!(storage.get(&k), None);
    // removing a missing key is a no-op
    storage.set(&k, None);
    assert_eq!(storage.get(&k), None);
}

#[test]
fn keys_distinguish_part_types() {
    let mut storage = MemoryStorage::default();
    storage.set(&[KeyPart::from("2")], Some(&[1]));
    storage.set(&[KeyPart::from(2_i64)], Some(&[2]));
    assert_eq!(storage.get(&[KeyPart::from("2")]), Some(vec![1]));
    assert_eq!(storage.get(&[KeyPart::from(2_i64)]), Some(vec![2]));
}

#[test]
fn prefix_enumeration_is_sorted_and_scoped() {
    let mut storage = MemoryStorage::default();
    storage.set(&[KeyPart::from("dc"), KeyPart::from(2_i64)], Some(&[2]));
    storage.set(&[KeyPart::from("dc"), KeyPart::from(1_i64)], Some(&[1]));
    storage.set(&[KeyPart::from("dc"), KeyPart::from(4_i64)], Some(&[4]));
    storage.set(&[KeyPart::from("auth"), KeyPart::from(1_i64)], Some(&[9]));
    storage.set(&[KeyPart::from("dcx")], Some(&[8]));

    let listed: Vec<_> = storage
        .entries(&[KeyPart::from("dc")])
        .map(|(k, v)| (k.to_vec(), v.to_vec()))
        .collect();
    assert_eq!(
        listed,
        vec![
            (key(&[KeyPart::from("dc"), KeyPart::from(1_i64)]), vec![1]),
            (key(&[KeyPart::from("dc"), KeyPart::from(2_i64)]), vec![2]),
            (key(&[KeyPart::from("dc"), KeyPart::from(4_i64)]), vec![4]),
        ]
    );

    let all: Vec<_> = storage.entries(&[]).collect();
    assert_eq!(all.len(), 5);
}

#[test]
fn stores_and_restores_serialized_objects() -> anyhow::Result<()> {
    let object = TlObject::GeoPoint(GeoPoint {
        longitude: -0.1276,
        latitude: 51.5072,
        access_hash: 8_675_309,
        accuracy_radius: Some(25),
    });
    let bytes = object.serialize()?;

    let mut storage = MemoryStorage::default();
    let k = [KeyPart::from("cache"), KeyPart::from("geo")];
    storage.set(&k, Some(&bytes));

    let stored = storage.get(&k).expect("value was just stored");
    let mut reader = Reader::new(&stored);
    let back = deserialize_object(&mut reader, Registry::global())?;
    assert_eq!(back, object);
    Ok(())
}
