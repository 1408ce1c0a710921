use client_core::{Notice, NoticeLevel, RowMode, RowView, ViewState};
use shared::domain::{AddressDraft, AddressField, AddressId, AddressRecord};

use super::{parse_command, render, Command, CommandError};
use crate::confirm::is_affirmative;

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
fn parses_every_command() {
    assert_eq!(parse_command("list"), Ok(Some(Command::List)));
    assert_eq!(
        parse_command("  add 01001-000 "),
        Ok(Some(Command::Add("01001-000".into())))
    );
    assert_eq!(parse_command("add"), Ok(Some(Command::Add(String::new()))));
    assert_eq!(parse_command("edit 0"), Ok(Some(Command::Edit(AddressId(0)))));
    assert_eq!(
        parse_command("set city New City"),
        Ok(Some(Command::Set(AddressField::City, "New City".into())))
    );
    assert_eq!(
        parse_command("set bairro"),
        Ok(Some(Command::Set(AddressField::Neighborhood, String::new())))
    );
    assert_eq!(parse_command("SAVE"), Ok(Some(Command::Save)));
    assert_eq!(parse_command("cancel"), Ok(Some(Command::Cancel)));
    assert_eq!(parse_command("rm 3"), Ok(Some(Command::Delete(AddressId(3)))));
    assert_eq!(parse_command("?"), Ok(Some(Command::Help)));
    assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
    assert_eq!(parse_command("   "), Ok(None));
}

#[test]
fn reports_usage_and_unknown_commands() {
    assert_eq!(
        parse_command("edit one"),
        Err(CommandError::Usage("edit <id>"))
    );
    assert_eq!(parse_command("delete"), Err(CommandError::Usage("delete <id>")));
    assert_eq!(
        parse_command("set country Brasil"),
        Err(CommandError::Usage("set <field> <value>"))
    );
    assert_eq!(parse_command("set"), Err(CommandError::Usage("set <field> <value>")));
    assert_eq!(
        parse_command("frobnicate"),
        Err(CommandError::Unknown("frobnicate".into()))
    );
}

#[test]
fn renders_viewing_and_editing_rows() {
    let viewing = se_record();
    let mut editing = se_record();
    editing.id = AddressId(2);
    let mut draft = AddressDraft::from_record(&editing);
    draft.set(AddressField::City, "New City");
    let notice = Notice {
        level: NoticeLevel::Error,
        message: "Postal code must have exactly 8 digits (got 3)".into(),
    };

    let view = ViewState {
        rows: vec![
            RowView {
                record: &viewing,
                mode: RowMode::Viewing,
            },
            RowView {
                record: &editing,
                mode: RowMode::Editing(&draft),
            },
        ],
        postal_code_input: "123",
        notice: Some(&notice),
    };

    let out = render(&view);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "! Postal code must have exactly 8 digits (got 3)");
    assert_eq!(lines[1], "[1] 01001-000 - Praça da Sé, Sé, São Paulo/SP");
    assert_eq!(lines[2], "[2] editing (save | cancel)");
    assert!(lines.contains(&"    city: New City"));
    assert!(lines.contains(&"    postalCode: 01001000"));
    assert_eq!(lines.last(), Some(&"pending postal code: 123"));
}

#[test]
fn renders_empty_list() {
    let view = ViewState {
        rows: Vec::new(),
        postal_code_input: "",
        notice: None,
    };
    assert_eq!(render(&view), "No addresses.\n");
}

#[test]
fn confirmation_answers() {
    for yes in ["y", "YES", " sim\n", "s"] {
        assert!(is_affirmative(yes), "{yes:?}");
    }
    for no in ["", "n", "no", "nao", "maybe"] {
        assert!(!is_affirmative(no), "{no:?}");
    }
}
