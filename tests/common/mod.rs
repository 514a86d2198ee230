#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

pub enum Cell {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub fn t(s: &'static str) -> Cell {
    Cell::Text(s)
}

pub fn n(x: f64) -> Cell {
    Cell::Number(x)
}

pub const HEADER: [&str; 12] = [
    "name",
    "summary",
    "category",
    "states",
    "applyLink",
    "tags",
    "benefits",
    "documents",
    "minAge",
    "incomeMax",
    "gender",
    "notes",
];

/// Write `rows` under `header` into the first sheet of a new workbook
pub fn write_workbook(path: &Path, header: &[&str], rows: &[Vec<Cell>]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, label) in header.iter().enumerate() {
        worksheet.write_string(0, col as u16, *label)?;
    }
    for (r, cells) in rows.iter().enumerate() {
        let row = (r + 1) as u32;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Text(s) => {
                    worksheet.write_string(row, col, *s)?;
                }
                Cell::Number(x) => {
                    worksheet.write_number(row, col, *x)?;
                }
                Cell::Blank => {}
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

/// Three valid schemes with a blank spreadsheet row between the first two
pub fn sample_rows() -> Vec<Vec<Cell>> {
    vec![
        vec![
            t("PM Kisan Samman Nidhi"),
            t("Income support of Rs 6000 per year for farmer families"),
            t("Farmer"),
            t("All"),
            t("https://pmkisan.gov.in"),
            t("income, farmer"),
            t("Rs 2000 every four months|Direct bank transfer"),
            t("Aadhaar card\nLand records"),
            n(18.0),
            Cell::Blank,
            t("any"),
            t("internal note"),
        ],
        vec![Cell::Blank, t("   ")],
        vec![
            t("लाडली बहना योजना"),
            t("Monthly assistance for women"),
            t("women"),
            t("Madhya Pradesh"),
            t(" https://cmladlibahna.mp.gov.in "),
            Cell::Blank,
            t("Rs 1250 per month"),
            Cell::Blank,
            n(21.0),
            n(250000.0),
            t("Female"),
        ],
        vec![
            t("Post Matric Scholarship"),
            t("Scholarship for students after class 10"),
            t("Student"),
            t("Maharashtra, Goa"),
            t("https://scholarships.gov.in"),
            t("education"),
            Cell::Blank,
            t("Marksheet | Caste certificate"),
            Cell::Blank,
            t("250000.0"),
            t("nonbinary"),
        ],
    ]
}
