use crate::row::RowField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadCell {
    pub field: RowField,
    pub label: &'static str,
    pub numeric: bool,
}

/// Table header, left to right. Each column sorts by the field it displays
/// first.
pub const HEAD_CELLS: [HeadCell; 4] = [
    HeadCell {
        field: RowField::OrderNumber,
        label: "ORDER NUMBER & DATE",
        numeric: false,
    },
    HeadCell {
        field: RowField::Status,
        label: "SHIPPING STATUS",
        numeric: false,
    },
    HeadCell {
        field: RowField::CustomerAddress,
        label: "CUSTOMER ADDRESS",
        numeric: false,
    },
    HeadCell {
        field: RowField::OrderedValue,
        label: "ORDER VALUE",
        numeric: true,
    },
];

