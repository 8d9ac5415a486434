use crate::{DirectoryUser, UserRecord};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_wire_document_when_deserialized_then_portuguese_names_map() {
    let doc = json!({
        "id": "1755000000000",
        "nome": "Maria",
        "email": "maria@example.com",
        "idade": "30",
        "telefone": "(11) 99999-9999",
        "cpf": "12345678909",
        "data": "2026-08-25T12:00:00Z"
    });

    let record: UserRecord = serde_json::from_value(doc).unwrap();

    assert_that!(record.name, eq("Maria"));
    assert_that!(record.age, some(eq("30")));
    assert_that!(record.phone, eq("(11) 99999-9999"));
    assert_that!(record.tax_id, some(eq("12345678909")));
    assert_that!(record.created_at, some(eq("2026-08-25T12:00:00Z")));
    assert_that!(record.password_hash, none());
}

#[test]
fn given_legacy_data_criacao_field_when_deserialized_then_accepted_as_created_at() {
    let doc = json!({
        "id": "1",
        "nome": "Ana",
        "email": "ana@example.com",
        "telefone": "(11) 98888-7777",
        "dataCriacao": "2025-01-01T00:00:00Z"
    });

    let record: UserRecord = serde_json::from_value(doc).unwrap();

    assert_that!(record.created_at, some(eq("2025-01-01T00:00:00Z")));
}

#[test]
fn given_record_without_optionals_when_serialized_then_absent_fields_omitted() {
    let record = UserRecord {
        id: "1".to_string(),
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        age: None,
        phone: "(11) 98888-7777".to_string(),
        tax_id: None,
        created_at: None,
        password_hash: None,
        auth_uid: None,
    };

    let value = serde_json::to_value(&record).unwrap();
    let keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();

    assert_that!(
        keys,
        unordered_elements_are![eq("id"), eq("nome"), eq("email"), eq("telefone")]
    );
}

#[test]
fn given_new_local_record_when_built_then_id_is_millisecond_timestamp_string() {
    let record = UserRecord::new_local(
        "Maria".to_string(),
        "maria@example.com".to_string(),
        "30".to_string(),
        "(11) 99999-9999".to_string(),
        "12345678909".to_string(),
        "$argon2id$stub".to_string(),
    );

    assert_that!(record.id.parse::<i64>().is_ok(), eq(true));
    assert_that!(record.created_at, some(anything()));
    assert_that!(record.password_hash, some(eq("$argon2id$stub")));
    assert_that!(record.auth_uid, none());
}

#[test]
fn given_directory_wire_document_when_deserialized_then_mixed_names_map() {
    // The directory collection kept English names except `idade`.
    let doc = json!({
        "id": "abc123",
        "name": "John",
        "email": "john@example.com",
        "idade": "25",
        "phone": "11999999999",
        "createdAt": "2026-01-01T00:00:00Z"
    });

    let user: DirectoryUser = serde_json::from_value(doc).unwrap();

    assert_that!(user.name, eq("John"));
    assert_that!(user.age, some(eq("25")));
    assert_that!(user.created_at, some(eq("2026-01-01T00:00:00Z")));
}
