use super::*;

#[test]
fn parses_sort_with_either_field_spelling() {
    assert_eq!(
        parse_command("sort status"),
        Ok(ViewCommand::Sort(RowField::Status))
    );
    assert_eq!(
        parse_command("  SORT shipped_date "),
        Ok(ViewCommand::Sort(RowField::ShippedDate))
    );
}

#[test]
fn page_numbers_are_one_based() {
    assert_eq!(parse_command("page 1"), Ok(ViewCommand::Page(0)));
    assert_eq!(parse_command("page 3"), Ok(ViewCommand::Page(2)));
    assert_eq!(
        parse_command("page 0"),
        Err(CommandError::InvalidArgument {
            command: "page",
            value: "0".into(),
        })
    );
}

#[test]
fn size_is_restricted_to_known_page_sizes() {
    assert_eq!(
        parse_command("size 25"),
        Ok(ViewCommand::PageSize(PageSize::TwentyFive))
    );
    assert_eq!(
        parse_command("size 7"),
        Err(CommandError::Parse(ParseError::InvalidPageSize("7".into())))
    );
}

#[test]
fn selection_commands() {
    assert_eq!(
        parse_command("select 1042"),
        Ok(ViewCommand::ToggleRow(OrderNumber(1042)))
    );
    assert_eq!(parse_command("all on"), Ok(ViewCommand::SelectAll(true)));
    assert_eq!(parse_command("all off"), Ok(ViewCommand::SelectAll(false)));
    assert_eq!(parse_command("all ON"), Ok(ViewCommand::SelectAll(true)));
    assert_eq!(parse_command("ALL Off"), Ok(ViewCommand::SelectAll(false)));
    assert!(parse_command("all maybe").is_err());
    assert!(parse_command("select abc").is_err());
}

#[test]
fn navigation_and_control_commands() {
    assert_eq!(parse_command("next"), Ok(ViewCommand::NextPage));
    assert_eq!(parse_command("prev"), Ok(ViewCommand::PreviousPage));
    assert_eq!(parse_command("tab Shipped"), Ok(ViewCommand::Tab(Tab::Shipped)));
    assert_eq!(parse_command("refresh"), Ok(ViewCommand::Refresh));
    assert_eq!(parse_command("help"), Ok(ViewCommand::Help));
    assert_eq!(parse_command("q"), Ok(ViewCommand::Quit));
}

#[test]
fn reports_missing_and_unknown_input() {
    assert_eq!(parse_command("   "), Err(CommandError::Empty));
    assert_eq!(
        parse_command("sort"),
        Err(CommandError::MissingArgument {
            command: "sort",
            expected: "a field name",
        })
    );
    assert_eq!(
        parse_command("dance"),
        Err(CommandError::Unknown("dance".into()))
    );
}
