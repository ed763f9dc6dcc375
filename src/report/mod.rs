//! Report workbook writer
//!
//! Serializes the six row collections into one `.xlsx` file, one sheet
//! per collection, in a fixed order. Plain values only: no styling,
//! widths, or formulas.

use comfy_table::{presets::NOTHING, Table};
use log::debug;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

use crate::error::Result;
use crate::inventory::rows::{
    AppRow, ConnectorRow, EnvironmentRow, FlowRow, PolicyRow, RoleRow, SheetRow,
};
use crate::inventory::Inventory;

/// Write the inventory workbook, overwriting `path` if it exists
pub fn write_report(inventory: &Inventory, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    add_sheet(&mut workbook, &inventory.apps)?;
    add_sheet(&mut workbook, &inventory.flows)?;
    add_sheet(&mut workbook, &inventory.connectors)?;
    add_sheet(&mut workbook, &inventory.policies)?;
    add_sheet(&mut workbook, &inventory.environments)?;
    add_sheet(&mut workbook, &inventory.roles)?;

    workbook.save(path)?;
    debug!("Workbook saved to {}", path.display());
    Ok(())
}

/// Add one worksheet: header row, then one row per item
fn add_sheet<R: SheetRow>(workbook: &mut Workbook, rows: &[R]) -> std::result::Result<(), XlsxError> {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(R::SHEET_NAME)?;

    for (col, header) in R::HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (row_num, row) in rows.iter().enumerate() {
        for (col, cell) in row.cells().iter().enumerate() {
            worksheet.write_string(row_num as u32 + 1, col as u16, cell)?;
        }
    }
    Ok(())
}

/// Print a sheet-by-sheet row count summary to stdout
pub fn print_summary(inventory: &Inventory) {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec!["Sheet", "Rows"]);

    let counts = [
        (AppRow::SHEET_NAME, inventory.apps.len()),
        (FlowRow::SHEET_NAME, inventory.flows.len()),
        (ConnectorRow::SHEET_NAME, inventory.connectors.len()),
        (PolicyRow::SHEET_NAME, inventory.policies.len()),
        (EnvironmentRow::SHEET_NAME, inventory.environments.len()),
        (RoleRow::SHEET_NAME, inventory.roles.len()),
    ];
    for (sheet, count) in counts {
        table.add_row(vec![sheet.to_string(), count.to_string()]);
    }

    println!("{}", table);
}
