use crate::domain::{
    AddressDraft, AddressField, AddressId, AddressRecord, PostalCode, PostalCodeError,
};

fn se_record() -> AddressRecord {
    AddressRecord {
        id: AddressId(1),
        postal_code: "01001000".into(),
        street: "Praça da Sé".into(),
        neighborhood: "Sé".into(),
        city: "São Paulo".into(),
        region: "SP".into(),
    }
}

#[test]
fn postal_code_strips_separators_before_counting() {
    let code = PostalCode::parse("01001-000").expect("valid");
    assert_eq!(code.as_str(), "01001000");

    let code = PostalCode::parse(" 01.001 000 ").expect("valid");
    assert_eq!(code.as_str(), "01001000");
}

#[test]
fn postal_code_rejects_empty_and_wrong_lengths() {
    assert_eq!(PostalCode::parse(""), Err(PostalCodeError::Empty));
    assert_eq!(PostalCode::parse("abc-"), Err(PostalCodeError::Empty));
    assert_eq!(
        PostalCode::parse("123"),
        Err(PostalCodeError::WrongLength { digits: 3 })
    );
    assert_eq!(
        PostalCode::parse("01001-0000"),
        Err(PostalCodeError::WrongLength { digits: 9 })
    );
}

#[test]
fn display_form_does_not_leak_into_canonical_value() {
    let code: PostalCode = "01001000".parse().expect("valid");
    assert_eq!(code.to_string(), "01001-000");
    assert_eq!(code.as_str(), "01001000");
    assert_eq!(PostalCode::parse(&code.to_string()).expect("valid"), code);
}

#[test]
fn record_deserializes_store_field_names_and_defaults_missing_fields() {
    let record: AddressRecord = serde_json::from_str(
        r#"{"id":0,"cep":"01001-000","logradouro":"Praça da Sé","localidade":"São Paulo"}"#,
    )
    .expect("json");
    assert_eq!(record.id, AddressId(0));
    assert_eq!(record.postal_code, "01001-000");
    assert_eq!(record.neighborhood, "");
    assert_eq!(record.region, "");
    assert_eq!(record.display_postal_code(), "01001-000");
}

#[test]
fn summary_renders_display_postal_code() {
    assert_eq!(
        se_record().summary(),
        "01001-000 - Praça da Sé, Sé, São Paulo/SP"
    );
}

#[test]
fn field_names_parse_in_both_languages() {
    assert_eq!("city".parse::<AddressField>(), Ok(AddressField::City));
    assert_eq!("localidade".parse::<AddressField>(), Ok(AddressField::City));
    assert_eq!("postalCode".parse::<AddressField>(), Ok(AddressField::PostalCode));
    assert_eq!("CEP".parse::<AddressField>(), Ok(AddressField::PostalCode));
    assert_eq!("uf".parse::<AddressField>(), Ok(AddressField::Region));
    assert!("country".parse::<AddressField>().is_err());
}

#[test]
fn draft_is_seeded_from_record_and_edits_one_field() {
    let record = se_record();
    let mut draft = AddressDraft::from_record(&record);
    for field in AddressField::ALL {
        assert!(!draft.get(field).is_empty(), "{field} should be seeded");
    }

    draft.set(AddressField::City, "New City");
    assert_eq!(draft.city, "New City");
    assert_eq!(draft.street, record.street);
}

#[test]
fn record_id_accepts_numbers_and_numeric_strings() {
    let record: AddressRecord =
        serde_json::from_str(r#"{"id":"7","cep":"01001000"}"#).expect("json");
    assert_eq!(record.id, AddressId(7));

    let record: AddressRecord =
        serde_json::from_str(r#"{"id":0,"cep":"01001000"}"#).expect("json");
    assert_eq!(record.id, AddressId(0));

    assert_eq!(serde_json::to_string(&AddressId(7)).expect("json"), "7");
}

#[test]
fn record_id_rejects_non_numeric_strings() {
    let err = serde_json::from_str::<AddressRecord>(r#"{"id":"a3f2","cep":"01001000"}"#)
        .expect_err("must fail");
    assert!(err.to_string().contains("a3f2"), "{err}");
}
